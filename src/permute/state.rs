//! Run state - phase and counters for a single generation run

use chrono::{DateTime, Utc};

use super::collector::DedupCollector;
use crate::types::RunSummary;

/// Lifecycle phase of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    /// No input consumed yet
    #[default]
    Idle,
    /// Input lines are being consumed
    Processing,
    /// Input exhausted, results sealed
    Finalized,
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunPhase::Idle => write!(f, "idle"),
            RunPhase::Processing => write!(f, "processing"),
            RunPhase::Finalized => write!(f, "finalized"),
        }
    }
}

/// Accumulating state for one generation run
///
/// Counters and the candidate set only move through the methods here;
/// [`RunState::finalize`] consumes the state, so a finalized run cannot
/// accept further lines.
#[derive(Debug, Clone)]
pub struct RunState {
    phase: RunPhase,
    total_lines: u64,
    processed: u64,
    skipped: u64,
    collector: DedupCollector,
    started_at: DateTime<Utc>,
}

impl RunState {
    /// Create a fresh idle state
    pub fn new() -> Self {
        Self {
            phase: RunPhase::Idle,
            total_lines: 0,
            processed: 0,
            skipped: 0,
            collector: DedupCollector::new(),
            started_at: Utc::now(),
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Raw input lines seen so far
    pub fn total_lines(&self) -> u64 {
        self.total_lines
    }

    /// Lines that yielded a valid name pair
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Malformed lines skipped
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Unique candidates collected so far
    pub fn unique_count(&self) -> usize {
        self.collector.len()
    }

    /// Account for one raw input line; enters Processing on the first
    pub fn begin_line(&mut self) {
        self.phase = RunPhase::Processing;
        self.total_lines += 1;
    }

    /// Record a line that produced a valid name pair
    pub fn record_processed(&mut self) {
        self.processed += 1;
    }

    /// Record a malformed line that was skipped
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Add candidates for the current name, returning how many were new
    pub fn add_candidates<I, S>(&mut self, candidates: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collector.add_all(candidates)
    }

    /// Time since the run started
    pub fn elapsed(&self) -> chrono::Duration {
        Utc::now() - self.started_at
    }

    /// Seal the run, yielding the ordered candidates and the summary
    pub fn finalize(mut self) -> (Vec<String>, RunSummary) {
        self.phase = RunPhase::Finalized;
        let summary = RunSummary {
            total_lines: self.total_lines,
            processed: self.processed,
            skipped: self.skipped,
            unique: self.collector.len(),
            elapsed: self.elapsed(),
        };
        (self.collector.into_vec(), summary)
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle_and_empty() {
        let state = RunState::new();
        assert_eq!(state.phase(), RunPhase::Idle);
        assert_eq!(state.total_lines(), 0);
        assert_eq!(state.unique_count(), 0);
    }

    #[test]
    fn test_first_line_enters_processing() {
        let mut state = RunState::new();
        state.begin_line();
        assert_eq!(state.phase(), RunPhase::Processing);
        assert_eq!(state.total_lines(), 1);
    }

    #[test]
    fn test_counters_accumulate() {
        let mut state = RunState::new();
        state.begin_line();
        state.record_processed();
        state.begin_line();
        state.record_skipped();
        assert_eq!(state.total_lines(), 2);
        assert_eq!(state.processed(), 1);
        assert_eq!(state.skipped(), 1);
    }

    #[test]
    fn test_candidates_dedup_across_lines() {
        let mut state = RunState::new();
        assert_eq!(state.add_candidates(vec!["jdoe", "j.doe"]), 2);
        assert_eq!(state.add_candidates(vec!["jdoe", "janedoe"]), 1);
        assert_eq!(state.unique_count(), 3);
    }

    #[test]
    fn test_finalize_summarizes_run() {
        let mut state = RunState::new();
        state.begin_line();
        state.record_processed();
        state.add_candidates(vec!["jdoe"]);
        let (candidates, summary) = state.finalize();
        assert_eq!(candidates, vec!["jdoe"]);
        assert_eq!(summary.total_lines, 1);
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.unique, 1);
        assert!(summary.elapsed >= chrono::Duration::zero());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(RunPhase::Idle.to_string(), "idle");
        assert_eq!(RunPhase::Processing.to_string(), "processing");
        assert_eq!(RunPhase::Finalized.to_string(), "finalized");
    }
}
