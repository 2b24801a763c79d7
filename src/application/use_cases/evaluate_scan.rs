use crate::application::dto::{EvaluationRequest, EvaluationResponse};
use crate::ports::outbound::ScanReader;
use crate::scan_gating::services::{aggregate, passes, RowBuilder};
use crate::shared::Result;

/// EvaluateScanUseCase - Use case for one full gate evaluation
///
/// Loads the scan document through the injected reader, aggregates
/// per-severity counts, applies the threshold gate, and expands the
/// export rows. The whole pass is synchronous and pure over the loaded
/// document; any data-integrity error aborts it with no partial output.
///
/// # Type Parameters
/// * `R` - ScanReader implementation
pub struct EvaluateScanUseCase<R: ScanReader> {
    scan_reader: R,
}

impl<R: ScanReader> EvaluateScanUseCase<R> {
    /// Creates a new EvaluateScanUseCase with injected reader
    pub fn new(scan_reader: R) -> Self {
        Self { scan_reader }
    }

    /// Runs one evaluation pass
    ///
    /// # Arguments
    /// * `request` - Scan location and configured thresholds
    ///
    /// # Returns
    /// The aggregated counts, gate verdict, and export rows
    pub fn execute(&self, request: EvaluationRequest) -> Result<EvaluationResponse> {
        let document = self.scan_reader.read_document(&request.scan_path)?;

        let counts = aggregate(&document.vulnerabilities)?;
        let passed = passes(&counts, &request.thresholds);
        let rows = RowBuilder::new(&document).build_rows()?;

        Ok(EvaluationResponse {
            counts,
            passed,
            rows,
            subject_name: document.subject_name().map(str::to_string),
            subject_image_id: document.subject_image_id().map(str::to_string),
        })
    }
}
