//! Move type and free-text move recovery.
//!
//! Agent replies are unreliable text, not structured data. The parser
//! favors permissive recovery over strict format rejection, but never
//! guesses beyond the first two integer-like tokens in reading order.

use serde::{Deserialize, Serialize};

/// A (row, col) move on the board.
///
/// Parsed values are syntactically well-formed but not yet checked
/// against the board; bounds and occupancy are validated on application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target row, 0-based.
    pub row: usize,
    /// Target column, 0-based.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Recovers a move from a free-text agent reply.
    ///
    /// Two tiers, first success wins:
    ///
    /// 1. The first `digit , digit` substring, interior whitespace
    ///    ignored, taken as (row, col).
    /// 2. Otherwise the first two runs of digits anywhere in the text,
    ///    parsed as full integers, taken as (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when neither tier recovers a move.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if let Some(mv) = Self::digit_pair(text) {
            return Ok(mv);
        }

        let numbers = Self::number_tokens(text);
        if numbers.len() >= 2 {
            return Ok(Move::new(numbers[0], numbers[1]));
        }

        Err(ParseError)
    }

    /// Scans for the first single digit, optional whitespace, a comma,
    /// optional whitespace, and a single digit.
    fn digit_pair(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_digit() {
                continue;
            }
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j >= bytes.len() || bytes[j] != b',' {
                continue;
            }
            j += 1;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j < bytes.len() && bytes[j].is_ascii_digit() {
                return Some(Move::new((b - b'0') as usize, (bytes[j] - b'0') as usize));
            }
        }
        None
    }

    /// Collects every maximal run of digits, left to right, as integers.
    fn number_tokens(text: &str) -> Vec<usize> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        for ch in text.chars() {
            if ch.is_ascii_digit() {
                current.push(ch);
            } else if !current.is_empty() {
                if let Ok(n) = current.parse() {
                    tokens.push(n);
                }
                current.clear();
            }
        }
        if !current.is_empty() {
            if let Ok(n) = current.parse() {
                tokens.push(n);
            }
        }
        tokens
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// No move could be recovered from the agent's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("No move found in agent response")]
pub struct ParseError;

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_pair() {
        assert_eq!(Move::parse("1, 2"), Ok(Move::new(1, 2)));
        assert_eq!(Move::parse("0,0"), Ok(Move::new(0, 0)));
    }

    #[test]
    fn test_parse_pair_inside_prose() {
        assert_eq!(Move::parse("I will play 1, 2"), Ok(Move::new(1, 2)));
        assert_eq!(Move::parse("(0,0) is my move"), Ok(Move::new(0, 0)));
    }

    #[test]
    fn test_parse_pair_with_newline_between() {
        assert_eq!(Move::parse("2 ,\n 1"), Ok(Move::new(2, 1)));
    }

    #[test]
    fn test_parse_numeric_fallback() {
        // No digit-comma-digit pattern, so the first two integer runs win.
        assert_eq!(Move::parse("row 2 column 0"), Ok(Move::new(2, 0)));
    }

    #[test]
    fn test_parse_fallback_keeps_full_integers() {
        assert_eq!(Move::parse("row 12 col 3"), Ok(Move::new(12, 3)));
    }

    #[test]
    fn test_parse_prefers_comma_pair_over_earlier_numbers() {
        // "Move 3" precedes the pair, but the comma pattern matches first.
        assert_eq!(Move::parse("Move 3: I choose 1, 1"), Ok(Move::new(1, 1)));
    }

    #[test]
    fn test_parse_no_numbers_fails() {
        assert_eq!(Move::parse("no numbers here"), Err(ParseError));
        assert_eq!(Move::parse(""), Err(ParseError));
    }

    #[test]
    fn test_parse_single_number_fails() {
        assert_eq!(Move::parse("I pick square 4"), Err(ParseError));
    }
}
