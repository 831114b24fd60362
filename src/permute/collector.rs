//! Insertion-ordered deduplication across a whole run

use std::collections::HashSet;

/// An insertion-ordered set of candidate strings
///
/// `add` keeps the first occurrence and ignores repeats, so the final
/// output order is first-seen order across the entire run.
#[derive(Debug, Clone, Default)]
pub struct DedupCollector {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl DedupCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate, returning true if it was not seen before
    pub fn add(&mut self, candidate: impl Into<String>) -> bool {
        let candidate = candidate.into();
        if self.seen.insert(candidate.clone()) {
            self.ordered.push(candidate);
            true
        } else {
            false
        }
    }

    /// Insert many candidates, returning how many were new
    pub fn add_all<I, S>(&mut self, candidates: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        candidates
            .into_iter()
            .map(|candidate| self.add(candidate))
            .filter(|&added| added)
            .count()
    }

    /// Number of unique candidates collected so far
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether nothing has been collected yet
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Whether a candidate has already been collected
    pub fn contains(&self, candidate: &str) -> bool {
        self.seen.contains(candidate)
    }

    /// Iterate the unique candidates in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Consume the collector, yielding the ordered unique candidates
    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let mut collector = DedupCollector::new();
        assert!(collector.add("jdoe"));
        assert!(collector.add("j.doe"));
        assert!(!collector.add("jdoe"));
        assert_eq!(collector.into_vec(), vec!["jdoe", "j.doe"]);
    }

    #[test]
    fn test_add_all_counts_new_only() {
        let mut collector = DedupCollector::new();
        collector.add("jdoe");
        let added = collector.add_all(vec!["jdoe", "janedoe", "jane.doe"]);
        assert_eq!(added, 2);
        assert_eq!(collector.len(), 3);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut collector = DedupCollector::new();
        collector.add_all(vec!["c", "a", "b", "a", "c"]);
        assert_eq!(collector.iter().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_contains() {
        let mut collector = DedupCollector::new();
        assert!(collector.is_empty());
        collector.add("jdoe");
        assert!(collector.contains("jdoe"));
        assert!(!collector.contains("janedoe"));
    }
}
