use std::path::Path;

use inspector_gate::prelude::*;

/// Mock ScanReader for testing
pub struct MockScanReader {
    pub json: String,
    pub should_fail: bool,
}

impl MockScanReader {
    pub fn new(json: impl Into<String>) -> Self {
        Self {
            json: json.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            json: String::new(),
            should_fail: true,
        }
    }
}

impl ScanReader for MockScanReader {
    fn read_document(&self, _scan_path: &Path) -> Result<ScanDocument> {
        if self.should_fail {
            anyhow::bail!("Mock scan read failure");
        }
        Ok(ScanDocument::from_json(&self.json)?)
    }
}
