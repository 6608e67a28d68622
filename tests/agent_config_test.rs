//! Tests for agent configuration loading.

use std::fs;
use tempfile::TempDir;

use tictactoe_arena::{AgentConfig, LlmProvider};

fn write_toml(dir: &TempDir, filename: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(filename);
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_full_config_round_trip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_toml(
        &dir,
        "agent.toml",
        r#"name = "Strategist"
llm_provider = "anthropic"
llm_model = "claude-3-5-haiku-20241022"
llm_max_tokens = 50
llm_temperature = 0.7
"#,
    );

    let config = AgentConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.name(), "Strategist");
    assert_eq!(*config.llm_provider(), LlmProvider::Anthropic);
    assert_eq!(config.llm_model(), "claude-3-5-haiku-20241022");
    assert_eq!(*config.llm_max_tokens(), 50);
    assert_eq!(*config.llm_temperature(), 0.7);
}

#[test]
fn test_minimal_config_applies_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_toml(&dir, "agent.toml", "name = \"Minimal\"\n");

    let config = AgentConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.name(), "Minimal");
    assert_eq!(*config.llm_provider(), LlmProvider::Ollama);
    assert_eq!(config.llm_model(), "phi4");
    assert_eq!(*config.llm_max_tokens(), 150);
    assert_eq!(*config.llm_temperature(), 0.3);
    assert!(config.ollama_url().is_none());
}

#[test]
fn test_ollama_url_is_optional_but_honored() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_toml(
        &dir,
        "agent.toml",
        r#"name = "Local"
llm_provider = "ollama"
ollama_url = "http://192.168.1.5:11434"
"#,
    );

    let config = AgentConfig::from_file(&path).expect("Load failed");
    assert_eq!(
        config.ollama_url().as_deref(),
        Some("http://192.168.1.5:11434")
    );
}

#[test]
fn test_missing_file_fails() {
    let result = AgentConfig::from_file("/this/path/does/not/exist.toml");
    assert!(result.is_err());
}

#[test]
fn test_invalid_toml_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_toml(&dir, "bad.toml", "this is not valid toml !!!@@@");

    let result = AgentConfig::from_file(&path);
    assert!(result.is_err());
}

#[test]
fn test_missing_name_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_toml(&dir, "agent.toml", "llm_model = \"phi4\"\n");

    let result = AgentConfig::from_file(&path);
    assert!(result.is_err(), "name is required");
}

#[test]
fn test_ollama_config_needs_no_api_key() {
    let config = AgentConfig::new("Offline".to_string());
    let llm = config.create_llm_config().expect("Ollama needs no key");
    assert_eq!(llm.provider(), LlmProvider::Ollama);
    assert_eq!(llm.model(), "phi4");
    assert_eq!(llm.max_tokens(), 150);
}

#[test]
fn test_model_override() {
    let config = AgentConfig::new("Override".to_string()).with_model("llama3.2".to_string());
    assert_eq!(config.llm_model(), "llama3.2");
}
