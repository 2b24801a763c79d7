pub mod document;
pub mod severity;
pub mod thresholds;

pub use document::{Affect, Component, Property, Rating, ScanDocument, Vulnerability};
pub use severity::{Severity, ALL_LEVELS, GATED_LEVELS};
pub use thresholds::{SeverityCounts, Thresholds};
