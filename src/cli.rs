use std::path::PathBuf;

use clap::Parser;

/// Gate CI builds on the severity profile of a vulnerability scan
#[derive(Parser, Debug)]
#[command(name = "inspector-gate")]
#[command(version)]
#[command(
    about = "Gate CI builds on the severity profile of a vulnerability-enriched CycloneDX scan",
    long_about = None
)]
pub struct Args {
    /// Path to the vulnerability-enriched CycloneDX scan result (JSON)
    #[arg(value_name = "SCAN_FILE")]
    pub scan: PathBuf,

    /// CSV output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file path (defaults to discovering inspector-gate.config.yml
    /// in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum allowed CRITICAL findings (overrides config file)
    #[arg(long, value_name = "N")]
    pub max_critical: Option<u64>,

    /// Maximum allowed HIGH findings (overrides config file)
    #[arg(long, value_name = "N")]
    pub max_high: Option<u64>,

    /// Maximum allowed MEDIUM findings (overrides config file)
    #[arg(long, value_name = "N")]
    pub max_medium: Option<u64>,

    /// Maximum allowed LOW findings (overrides config file)
    #[arg(long, value_name = "N")]
    pub max_low: Option<u64>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
