use std::fs;
use std::path::Path;

use crate::ports::outbound::ScanReader;
use crate::scan_gating::domain::ScanDocument;
use crate::shared::error::GateError;
use crate::shared::Result;

/// FileSystemScanReader adapter for loading scan results from disk
///
/// This adapter implements the ScanReader port for JSON files produced
/// by the scanning collaborator.
pub struct FileSystemScanReader;

impl FileSystemScanReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemScanReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanReader for FileSystemScanReader {
    fn read_document(&self, scan_path: &Path) -> Result<ScanDocument> {
        let content = fs::read_to_string(scan_path).map_err(|e| GateError::ScanReadError {
            path: scan_path.to_path_buf(),
            details: e.to_string(),
        })?;

        let document =
            ScanDocument::from_json(&content).map_err(|e| GateError::ScanParseError {
                path: scan_path.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(document)
    }
}
