use std::path::Path;

use crate::scan_gating::domain::ScanDocument;
use crate::shared::Result;

/// ScanReader port for loading scan result documents
///
/// This port abstracts where the enriched scan result comes from. In
/// production it is a JSON file the scanning collaborator already
/// fetched; tests substitute in-memory documents.
pub trait ScanReader {
    /// Reads and parses one scan result document
    ///
    /// # Arguments
    /// * `scan_path` - Location of the scan result
    ///
    /// # Errors
    /// Returns an error if the document cannot be read or is not a
    /// parseable CycloneDX JSON scan result
    fn read_document(&self, scan_path: &Path) -> Result<ScanDocument>;
}
