use owo_colors::OwoColorize;

use crate::scan_gating::domain::SeverityCounts;

/// SummaryFormatter adapter rendering the human-readable verdict
///
/// Produces the multi-line summary printed to stderr after an
/// evaluation: the scanned artifact (when known), the per-severity
/// totals, and the colorized pass/fail verdict.
pub struct SummaryFormatter;

impl SummaryFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(
        &self,
        subject: Option<&str>,
        image_id: Option<&str>,
        counts: &SeverityCounts,
        passed: bool,
    ) -> String {
        let mut lines = Vec::new();

        match (subject, image_id) {
            (Some(name), Some(sha)) => lines.push(format!("Scanned artifact: {} ({})", name, sha)),
            (Some(name), None) => lines.push(format!("Scanned artifact: {}", name)),
            _ => {}
        }

        lines.push(format!("Results: {}", counts));

        let verdict = if passed {
            format!("{} Gate passed", "✅".green())
        } else {
            format!("{} Gate failed: severity counts exceed configured maximums", "❌".red())
        };
        lines.push(verdict);

        lines.join("\n")
    }
}

impl Default for SummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}
