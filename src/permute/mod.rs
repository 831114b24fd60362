//! Username permutation module - expand name lists into candidate sets
//!
//! Pipeline: normalize -> format expansion -> leet variants -> email
//! variants, deduplicated across the whole run in insertion order.

mod collector;
mod email;
mod formats;
mod generator;
mod leet;
mod normalizer;
mod state;

pub use collector::DedupCollector;
pub use email::EmailExpander;
pub use formats::{FormatExpander, UsernameFormat, FORMATS};
pub use generator::UsernameGenerator;
pub use leet::{to_leet, LEET_MAP};
pub use normalizer::NameNormalizer;
pub use state::{RunPhase, RunState};
