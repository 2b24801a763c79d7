pub mod aggregator;
pub mod row_builder;
pub mod severity_resolver;
pub mod threshold_gate;

pub use aggregator::aggregate;
pub use row_builder::{CsvRow, RowBuilder};
pub use severity_resolver::resolve_severity;
pub use threshold_gate::passes;
