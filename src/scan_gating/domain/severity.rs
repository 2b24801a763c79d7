use std::fmt;
use std::str::FromStr;

/// Severity scale used across the gate.
///
/// The derived ordering is total, ascending from `Untriaged` to
/// `Critical`, so `Ord::max` folds multiple ratings into the governing
/// one. `Untriaged` is the explicit "scanner could not score this"
/// bucket; it is never compared against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Untriaged,
    Low,
    Medium,
    High,
    Critical,
}

/// The four gated levels, highest first. `Untriaged` is deliberately
/// absent: counts in that bucket can never fail the gate on their own.
pub const GATED_LEVELS: [Severity; 4] = [
    Severity::Critical,
    Severity::High,
    Severity::Medium,
    Severity::Low,
];

/// All scale values, highest first. Iteration order for counts display.
pub const ALL_LEVELS: [Severity; 5] = [
    Severity::Critical,
    Severity::High,
    Severity::Medium,
    Severity::Low,
    Severity::Untriaged,
];

impl Severity {
    /// Returns the higher of two severities under the scale ordering.
    pub fn higher(self, other: Severity) -> Severity {
        self.max(other)
    }
}

impl FromStr for Severity {
    type Err = anyhow::Error;

    /// Case-insensitive parsing of rating text.
    ///
    /// Scanners report the untriaged bucket under several spellings
    /// (`none`, `unknown`, `untriaged`); all map to `Untriaged`. Any
    /// other text is a hard error rather than a silent `Untriaged` -
    /// a malformed rating must abort the evaluation, not skew it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            "none" | "unknown" | "untriaged" => Ok(Severity::Untriaged),
            _ => anyhow::bail!("Unrecognized severity rating: '{}'", s),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::High => write!(f, "HIGH"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::Low => write!(f, "LOW"),
            Severity::Untriaged => write!(f, "UNTRIAGED"),
        }
    }
}
