//! Counters for bulk imports.
//!
//! The parser never aggregates anything itself; a library scan records each
//! [`ParseOutcome`] into its own [`ParseStats`] and merges per-worker
//! snapshots at the end.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::NamingConvention;
use crate::parse::ParseOutcome;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Names handed to the parser.
    pub files_parsed: u64,

    /// Results that ended up without an artist.
    pub blank_artist: u64,

    /// How often each convention matched.
    pub by_convention: BTreeMap<NamingConvention, u64>,
}

impl ParseStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &ParseOutcome) {
        self.files_parsed += 1;
        if !outcome.song.has_artist() {
            self.blank_artist += 1;
        }
        *self.by_convention.entry(outcome.convention).or_default() += 1;
    }

    pub fn merge(&mut self, other: &Self) {
        self.files_parsed += other.files_parsed;
        self.blank_artist += other.blank_artist;
        for (&convention, &count) in &other.by_convention {
            *self.by_convention.entry(convention).or_default() += count;
        }
    }

    pub fn count(&self, convention: NamingConvention) -> u64 {
        self.by_convention.get(&convention).copied().unwrap_or(0)
    }

    /// Names for which no structured convention was recognized.
    pub fn unrecognized(&self) -> u64 {
        self.by_convention
            .iter()
            .filter(|(convention, _)| !convention.is_structured())
            .map(|(_, &count)| count)
            .sum()
    }

    /// Saturates at zero for snapshots whose counters disagree.
    pub fn recognized(&self) -> u64 {
        self.files_parsed.saturating_sub(self.unrecognized())
    }
}
