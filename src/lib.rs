//! Userforge - corporate username and email candidate generation
//!
//! Expands `First Last` name lists into deduplicated username candidates
//! (optionally with leet-speak and email variants) for authorized
//! credential-audit tooling.

pub mod error;
pub mod permute;
pub mod types;

// Re-export commonly used types
pub use error::{Result, UserforgeError};
pub use types::{GenerationConfig, NamePair, RunSummary};

// Re-export main functionality
pub use permute::{
    to_leet, DedupCollector, EmailExpander, FormatExpander, NameNormalizer, RunPhase, RunState,
    UsernameGenerator, FORMATS, LEET_MAP,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
