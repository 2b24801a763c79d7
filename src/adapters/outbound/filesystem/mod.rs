pub mod file_writer;
pub mod scan_file_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use scan_file_reader::FileSystemScanReader;
