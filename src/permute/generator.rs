//! Pipeline orchestrator - drive input lines through the permutation engine

use std::io::BufRead;

use super::email::EmailExpander;
use super::formats::FormatExpander;
use super::leet::to_leet;
use super::normalizer::NameNormalizer;
use super::state::RunState;
use crate::error::{Result, UserforgeError};
use crate::types::{GenerationConfig, NamePair, RunSummary};

/// Username generation pipeline for one run
///
/// Every input line goes through normalize -> expand -> leet -> email,
/// with the surviving candidates accumulated in insertion order. Blank
/// lines are skipped silently, malformed lines are counted and skipped,
/// read failures abort the run.
pub struct UsernameGenerator {
    config: GenerationConfig,
    normalizer: NameNormalizer,
    expander: FormatExpander,
    email: Option<EmailExpander>,
    state: RunState,
}

impl UsernameGenerator {
    /// Create a generator for this run's configuration
    pub fn new(config: GenerationConfig) -> Result<Self> {
        let email = match config.domain.as_deref() {
            Some(domain) => Some(EmailExpander::new(domain)?),
            None => None,
        };

        Ok(Self {
            config,
            normalizer: NameNormalizer::new(),
            expander: FormatExpander::new(),
            email,
            state: RunState::new(),
        })
    }

    /// Replace the default email-worthy subset by rule name
    pub fn with_email_formats(mut self, names: &[&str]) -> Self {
        self.expander = self.expander.with_email_formats(names);
        self
    }

    /// Read-only view of the run state
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Process a single raw input line
    pub fn process_line(&mut self, line: &str) {
        self.state.begin_line();

        if line.trim().is_empty() {
            return;
        }

        let pair = match self.normalizer.normalize(line) {
            Ok(pair) => pair,
            Err(e) => {
                self.state.record_skipped();
                tracing::warn!(line = %self.state.total_lines(), error = %e, "Skipping malformed line");
                return;
            }
        };

        let usernames = self.collect_usernames(&pair);
        let emails = self.collect_emails(&pair);
        self.state.record_processed();

        tracing::info!(
            name = %pair,
            usernames = %usernames,
            emails = %emails,
            "Generated candidates"
        );
    }

    /// Drive an entire input source through the pipeline
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            let line = line.map_err(|e| UserforgeError::input(e.to_string(), None))?;
            self.process_line(&line);
        }
        Ok(())
    }

    /// Finish the run, yielding the ordered candidates and the summary
    ///
    /// Fails when the input contained no valid names; callers should not
    /// write an output file in that case.
    pub fn finish(self) -> Result<(Vec<String>, RunSummary)> {
        if self.state.processed() == 0 {
            return Err(UserforgeError::validation(
                "no valid names found in the input",
            ));
        }

        let (candidates, summary) = self.state.finalize();
        tracing::debug!(
            unique = %summary.unique,
            processed = %summary.processed,
            skipped = %summary.skipped,
            "Run finalized"
        );
        Ok((candidates, summary))
    }

    /// Expand one name into usernames, returning how many were new
    fn collect_usernames(&mut self, pair: &NamePair) -> usize {
        let bases = self.expander.expand(pair);
        let mut added = self.state.add_candidates(bases.iter().cloned());
        if self.config.leet {
            added += self
                .state
                .add_candidates(bases.iter().map(|base| to_leet(base)));
        }
        added
    }

    /// Expand one name into email variants, returning how many were new
    fn collect_emails(&mut self, pair: &NamePair) -> usize {
        let email = match &self.email {
            Some(email) => email,
            None => return 0,
        };

        let locals = self.expander.expand_email_worthy(pair);
        let mut added = self.state.add_candidates(email.expand(&locals));
        if self.config.leet {
            let leet_locals: Vec<String> = locals.iter().map(|local| to_leet(local)).collect();
            added += self.state.add_candidates(email.expand(&leet_locals));
        }
        added
    }
}
