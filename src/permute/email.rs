//! Email variant expansion - local-parts joined with a fixed domain

use crate::error::{Result, UserforgeError};

/// Combines email-worthy local-parts with a target domain
///
/// The domain is lower-cased and otherwise used verbatim; no DNS syntax
/// checking beyond non-emptiness.
#[derive(Debug, Clone)]
pub struct EmailExpander {
    domain: String,
}

impl EmailExpander {
    /// Create an expander for `domain`
    pub fn new(domain: &str) -> Result<Self> {
        let domain = domain.trim().to_lowercase();
        if domain.is_empty() {
            return Err(UserforgeError::validation("domain must not be empty"));
        }
        Ok(Self { domain })
    }

    /// The normalized target domain
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Emit `local@domain` for each local-part, preserving order
    pub fn expand(&self, locals: &[String]) -> Vec<String> {
        locals
            .iter()
            .map(|local| format!("{}@{}", local, self.domain))
            .collect()
    }
}
