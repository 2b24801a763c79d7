use std::path::PathBuf;
use std::process;

use inspector_gate::cli::Args;
use inspector_gate::config::{discover_config, load_config_from_path, ConfigFile};
use inspector_gate::prelude::*;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            // Operational error: the gate could not run at all. Distinct
            // from ThresholdExceeded, where the gate ran and failed.
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::OperationalError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on bad input)
    let args = Args::parse_args();

    // Explicit config path wins; otherwise discover in the working directory
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };

    let thresholds = resolve_thresholds(&args, config.as_ref());

    // Create use case with injected reader (Dependency Injection)
    let use_case = EvaluateScanUseCase::new(FileSystemScanReader::new());
    let request = EvaluationRequest::new(args.scan.clone(), thresholds);
    let response = use_case.execute(request)?;

    // Export the flat findings table
    let csv = CsvFormatter::new().format(&response.rows);
    let presenter: Box<dyn OutputPresenter> = match args.output {
        Some(output_path) => Box::new(FileSystemWriter::new(PathBuf::from(output_path))),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&csv)?;

    // Human-readable verdict goes to stderr, keeping stdout clean for CSV
    let summary = SummaryFormatter::new().format(
        response.subject_name.as_deref(),
        response.subject_image_id.as_deref(),
        &response.counts,
        response.passed,
    );
    eprintln!("{}", summary);

    Ok(if response.passed {
        ExitCode::Pass
    } else {
        ExitCode::ThresholdExceeded
    })
}

/// Threshold precedence: CLI flag > config file > zero tolerance.
fn resolve_thresholds(args: &Args, config: Option<&ConfigFile>) -> Thresholds {
    let base = config
        .map(|c| c.thresholds())
        .unwrap_or_else(Thresholds::zero);

    Thresholds::new(
        args.max_critical.unwrap_or(base.max_critical),
        args.max_high.unwrap_or(base.max_high),
        args.max_medium.unwrap_or(base.max_medium),
        args.max_low.unwrap_or(base.max_low),
    )
}
