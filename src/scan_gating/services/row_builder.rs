use std::collections::HashMap;

use crate::scan_gating::domain::{Component, ScanDocument, Vulnerability};
use crate::shared::error::GateError;
use crate::shared::Result;

use super::severity_resolver::resolve_severity;

/// One flat export row for a (vulnerability, affected-component) pair.
///
/// `description` and `exploit_available` are stored already wrapped in
/// double quotes so the flat-file writer can join fields with commas
/// without corrupting embedded separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub cve: String,
    pub severity: String,
    pub description: String,
    pub package_name: String,
    pub installed_version: String,
    pub fixed_version: String,
    pub exploit_available: String,
}

/// Expands a scan document into export rows, one per
/// (vulnerability, affected-component) pair.
///
/// Holds the bom-ref -> component lookup built once per document.
pub struct RowBuilder<'a> {
    document: &'a ScanDocument,
    components_by_ref: HashMap<&'a str, &'a Component>,
}

impl<'a> RowBuilder<'a> {
    pub fn new(document: &'a ScanDocument) -> Self {
        let components_by_ref = document
            .components
            .iter()
            .map(|component| (component.bom_ref.as_str(), component))
            .collect();

        Self {
            document,
            components_by_ref,
        }
    }

    /// Builds all export rows in document order: vulnerabilities outer,
    /// affected components inner.
    ///
    /// Any unresolved reference, missing property, or malformed package
    /// URL aborts the whole export - a partial table would misrepresent
    /// the findings.
    pub fn build_rows(&self) -> Result<Vec<CsvRow>> {
        let mut rows = Vec::new();

        for vulnerability in &self.document.vulnerabilities {
            for affect in &vulnerability.affects {
                let component = self
                    .components_by_ref
                    .get(affect.reference.as_str())
                    .copied()
                    .ok_or_else(|| GateError::UnresolvedComponentRef {
                        reference: affect.reference.clone(),
                        vulnerability_id: vulnerability.id.clone(),
                    })?;

                rows.push(self.build_row(vulnerability, component)?);
            }
        }

        Ok(rows)
    }

    fn build_row(&self, vulnerability: &Vulnerability, component: &Component) -> Result<CsvRow> {
        let severity = resolve_severity(vulnerability)?;
        let installed_version = component.installed_version()?;
        let fixed_version = vulnerability.fixed_version_for(&component.bom_ref)?;
        let exploit_available = vulnerability.exploit_available()?;

        Ok(CsvRow {
            cve: vulnerability.id.clone(),
            severity: severity.to_string(),
            description: quoted(&vulnerability.description),
            package_name: component.name.clone(),
            installed_version: installed_version.to_string(),
            fixed_version: fixed_version.to_string(),
            exploit_available: quoted(exploit_available),
        })
    }
}

fn quoted(text: &str) -> String {
    format!("\"{}\"", text)
}
