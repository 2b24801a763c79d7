use crate::scan_gating::domain::SeverityCounts;
use crate::scan_gating::services::CsvRow;

/// EvaluationResponse DTO - everything one evaluation pass produces
///
/// Carries the aggregated counts, the gate verdict, the export rows,
/// and the identity of the scanned artifact when the document names it.
#[derive(Debug)]
pub struct EvaluationResponse {
    pub counts: SeverityCounts,
    pub passed: bool,
    pub rows: Vec<CsvRow>,
    pub subject_name: Option<String>,
    pub subject_image_id: Option<String>,
}
