use std::path::PathBuf;

use crate::scan_gating::domain::Thresholds;

/// EvaluationRequest DTO - input to the scan evaluation use case
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    /// Location of the vulnerability-enriched scan result
    pub scan_path: PathBuf,
    /// Configured per-severity maxima for the gate
    pub thresholds: Thresholds,
}

impl EvaluationRequest {
    pub fn new(scan_path: PathBuf, thresholds: Thresholds) -> Self {
        Self {
            scan_path,
            thresholds,
        }
    }
}
