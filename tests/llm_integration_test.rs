//! Integration tests for LLM client connectivity.
//!
//! All tests are gated behind the `api` feature so a plain `cargo test`
//! never spends tokens or requires a running backend.

use tictactoe_arena::{LlmClient, LlmConfig, LlmProvider};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_ollama_connectivity() {
    dotenvy::dotenv().ok();

    let config = LlmConfig::new(
        LlmProvider::Ollama,
        None,
        std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "phi4".to_string()),
        50,
        0.3,
        std::env::var("OLLAMA_URL").ok(),
    );

    let client = LlmClient::new(config);

    let response = client
        .generate(
            "You are a helpful assistant.",
            "Say 'Hello, world!' and nothing else.",
        )
        .await
        .expect("Failed to generate");

    assert!(!response.is_empty(), "Response should not be empty");
    eprintln!("Response: {}", response);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_anthropic_connectivity() {
    dotenvy::dotenv().ok();

    let api_key = std::env::var("ANTHROPIC_API_KEY").expect("ANTHROPIC_API_KEY not set");

    let config = LlmConfig::new(
        LlmProvider::Anthropic,
        Some(api_key),
        "claude-3-5-haiku-20241022".to_string(),
        50,
        0.3,
        None,
    );

    let client = LlmClient::new(config);

    let response = client
        .generate(
            "You are a helpful assistant.",
            "Say 'Hello, world!' and nothing else.",
        )
        .await
        .expect("Failed to generate");

    assert!(!response.is_empty(), "Response should not be empty");
    eprintln!("Response: {}", response);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_connectivity() {
    dotenvy::dotenv().ok();

    let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY not set");

    let config = LlmConfig::new(
        LlmProvider::OpenAI,
        Some(api_key),
        "gpt-4o-mini".to_string(),
        50,
        0.3,
        None,
    );

    let client = LlmClient::new(config);

    let response = client
        .generate(
            "You are a helpful assistant.",
            "Say 'Hello, world!' and nothing else.",
        )
        .await
        .expect("Failed to generate");

    assert!(!response.is_empty(), "Response should not be empty");
    eprintln!("Response: {}", response);
}
