/// Mock implementations for testing
mod mock_scan_reader;

pub use mock_scan_reader::MockScanReader;
