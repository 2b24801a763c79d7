use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a failed policy check
/// ("the gate ran and the build should fail") from an operational error
/// ("the gate could not run at all").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - all severity counts are within their configured maxima
    Pass = 0,
    /// The gate ran and at least one severity count exceeded its maximum
    ThresholdExceeded = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Operational error (unreadable scan file, malformed document,
    /// data-integrity abort, file I/O error, etc.)
    OperationalError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Pass => write!(f, "Pass (0)"),
            ExitCode::ThresholdExceeded => write!(f, "Threshold Exceeded (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::OperationalError => write!(f, "Operational Error (3)"),
        }
    }
}

/// Application-specific errors for scan evaluation.
///
/// Every data-integrity variant aborts the whole evaluation: a partially
/// computed severity count or a partially built export would misrepresent
/// the security posture of the scanned artifact.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("Vulnerability {vulnerability_id} carries no severity ratings")]
    MissingRatings { vulnerability_id: String },

    #[error("Affected component '{reference}' on {vulnerability_id} does not resolve to any component in the document")]
    UnresolvedComponentRef {
        reference: String,
        vulnerability_id: String,
    },

    #[error("No property named '{name}' on vulnerability {vulnerability_id}")]
    MissingProperty {
        name: String,
        vulnerability_id: String,
    },

    #[error("No version segment in package URL '{purl}' of component '{name}'")]
    MalformedPackageUrl { purl: String, name: String },

    #[error("Failed to read scan file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    ScanReadError { path: PathBuf, details: String },

    #[error("Failed to parse scan file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains a CycloneDX JSON scan result")]
    ScanParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
