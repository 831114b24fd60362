//! Name normalization - raw input lines to first/last pairs

use crate::error::{Result, UserforgeError};
use crate::types::NamePair;

/// Normalizes raw `First Last` input lines into [`NamePair`]s
///
/// Tokens are lower-cased and stripped of ASCII punctuation; non-ASCII
/// characters pass through untranslated. A line must split into exactly
/// two tokens that survive stripping, anything else is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameNormalizer;

impl NameNormalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self
    }

    /// Normalize one input line into a name pair
    pub fn normalize(&self, line: &str) -> Result<NamePair> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(UserforgeError::malformed_line(
                line.trim(),
                format!("expected exactly two name tokens, got {}", tokens.len()),
            ));
        }

        let first = sanitize_token(tokens[0]);
        let last = sanitize_token(tokens[1]);

        if first.is_empty() || last.is_empty() {
            return Err(UserforgeError::malformed_line(
                line.trim(),
                "name token is empty after stripping punctuation",
            ));
        }

        Ok(NamePair::new(first, last))
    }
}

/// Lowercase a token and drop ASCII punctuation, keeping non-ASCII as-is
fn sanitize_token(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || !c.is_ascii())
        .collect()
}
