use std::collections::BTreeMap;
use std::fmt;

use super::severity::{Severity, ALL_LEVELS};

/// Per-severity finding counts.
///
/// Always holds exactly one entry per scale value, zero-initialized, so
/// downstream consumers never have to handle a missing bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityCounts {
    counts: BTreeMap<Severity, u64>,
}

impl SeverityCounts {
    /// Creates an all-zero count map with every scale value present.
    pub fn new() -> Self {
        let mut counts = BTreeMap::new();
        for level in ALL_LEVELS {
            counts.insert(level, 0);
        }
        Self { counts }
    }

    /// Increments the bucket for one resolved finding.
    pub fn increment(&mut self, severity: Severity) {
        *self.counts.entry(severity).or_insert(0) += 1;
    }

    /// Count for a single scale value.
    pub fn get(&self, severity: Severity) -> u64 {
        self.counts.get(&severity).copied().unwrap_or(0)
    }

    /// Total findings across all buckets.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

impl Default for SeverityCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SeverityCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = ALL_LEVELS
            .iter()
            .map(|level| format!("{}: {}", level, self.get(*level)))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Configured maxima for the four gated severity levels.
///
/// A count strictly greater than its maximum fails the gate; equality
/// still passes. There is deliberately no maximum for `Untriaged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub max_critical: u64,
    pub max_high: u64,
    pub max_medium: u64,
    pub max_low: u64,
}

impl Thresholds {
    pub fn new(max_critical: u64, max_high: u64, max_medium: u64, max_low: u64) -> Self {
        Self {
            max_critical,
            max_high,
            max_medium,
            max_low,
        }
    }

    /// Zero tolerance at every gated level.
    pub fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Maximum for one gated level; `None` for `Untriaged`, which is
    /// never gated.
    pub fn limit_for(&self, severity: Severity) -> Option<u64> {
        match severity {
            Severity::Critical => Some(self.max_critical),
            Severity::High => Some(self.max_high),
            Severity::Medium => Some(self.max_medium),
            Severity::Low => Some(self.max_low),
            Severity::Untriaged => None,
        }
    }
}
