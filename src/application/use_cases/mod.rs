pub mod evaluate_scan;

pub use evaluate_scan::EvaluateScanUseCase;
