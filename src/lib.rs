//! inspector-gate - severity gating for vulnerability-enriched SBOMs
//!
//! This library evaluates a vulnerability-enriched CycloneDX scan result
//! against a configurable severity policy: it resolves one governing
//! severity per finding, aggregates per-severity counts, applies the
//! threshold gate, and builds a flat CSV export with one row per
//! (vulnerability, affected-component) pair.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scan_gating`): Pure evaluation logic and domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use inspector_gate::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let reader = FileSystemScanReader::new();
//! let use_case = EvaluateScanUseCase::new(reader);
//!
//! let request = EvaluationRequest::new(
//!     PathBuf::from("scan.json"),
//!     Thresholds::new(0, 2, 10, 100),
//! );
//! let response = use_case.execute(request)?;
//!
//! let csv = CsvFormatter::new().format(&response.rows);
//! print!("{}", csv);
//! eprintln!("passed: {}", response.passed);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod scan_gating;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{
        FileSystemScanReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, SummaryFormatter};
    pub use crate::application::dto::{EvaluationRequest, EvaluationResponse};
    pub use crate::application::use_cases::EvaluateScanUseCase;
    pub use crate::ports::outbound::{OutputPresenter, ScanReader};
    pub use crate::scan_gating::domain::{
        ScanDocument, Severity, SeverityCounts, Thresholds, Vulnerability,
    };
    pub use crate::scan_gating::services::{
        aggregate, passes, resolve_severity, CsvRow, RowBuilder,
    };
    pub use crate::shared::error::{ExitCode, GateError};
    pub use crate::shared::Result;
}
