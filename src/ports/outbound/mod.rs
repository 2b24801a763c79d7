/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod output_presenter;
pub mod scan_reader;

pub use output_presenter::OutputPresenter;
pub use scan_reader::ScanReader;
