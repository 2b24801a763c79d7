pub mod csv_formatter;
pub mod summary_formatter;

pub use csv_formatter::CsvFormatter;
pub use summary_formatter::SummaryFormatter;
