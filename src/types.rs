//! Core types and structures for userforge

/// A normalized name ready for username expansion
///
/// Both parts are lowercase with ASCII punctuation stripped; the
/// normalizer guarantees they are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamePair {
    pub first: String,
    pub last: String,
}

impl NamePair {
    /// Create a name pair from already-normalized parts
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    /// First character of the first name
    pub fn first_initial(&self) -> char {
        self.first.chars().next().unwrap_or_default()
    }

    /// First character of the last name
    pub fn last_initial(&self) -> char {
        self.last.chars().next().unwrap_or_default()
    }
}

impl std::fmt::Display for NamePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/// Configuration for a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationConfig {
    /// Emit leet-speak variants alongside each base username
    pub leet: bool,
    /// Append `local@domain` email variants for the email-worthy formats
    pub domain: Option<String>,
}

/// End-of-run accounting
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Raw input lines read, including blank and malformed ones
    pub total_lines: u64,
    /// Lines that yielded a valid name pair
    pub processed: u64,
    /// Malformed lines skipped
    pub skipped: u64,
    /// Unique candidates collected across the run
    pub unique: usize,
    /// Wall-clock run duration
    pub elapsed: chrono::Duration,
}
