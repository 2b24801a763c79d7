use crate::scan_gating::services::CsvRow;

/// Fixed header row of the flat-file export.
const HEADERS: [&str; 7] = [
    "CVE",
    "Severity",
    "Description",
    "Package Name",
    "Package Installed Version",
    "Package Fixed Version",
    "Exploit Available",
];

/// CsvFormatter adapter rendering export rows as comma-joined lines
///
/// Quote handling is the row builder's responsibility; fields arrive
/// here already quoted where embedded commas are possible.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the header plus one line per row, in row order.
    pub fn format(&self, rows: &[CsvRow]) -> String {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(HEADERS.join(","));

        for row in rows {
            let fields = [
                row.cve.as_str(),
                row.severity.as_str(),
                row.description.as_str(),
                row.package_name.as_str(),
                row.installed_version.as_str(),
                row.fixed_version.as_str(),
                row.exploit_available.as_str(),
            ];
            lines.push(fields.join(","));
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}
