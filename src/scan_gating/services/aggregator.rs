use crate::scan_gating::domain::{SeverityCounts, Vulnerability};
use crate::shared::Result;

use super::severity_resolver::resolve_severity;

/// Folds resolved severities over all findings into per-severity counts.
///
/// Counting is commutative, so iteration order never affects the
/// result. An empty document yields the all-zero map rather than an
/// error. Any single unresolvable finding aborts the whole aggregation:
/// a partial count would understate the security posture.
pub fn aggregate(vulnerabilities: &[Vulnerability]) -> Result<SeverityCounts> {
    let mut counts = SeverityCounts::new();

    for vulnerability in vulnerabilities {
        let severity = resolve_severity(vulnerability)?;
        counts.increment(severity);
    }

    Ok(counts)
}
