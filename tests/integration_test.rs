/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use test_utilities::mocks::*;

use inspector_gate::prelude::*;

fn request(thresholds: Thresholds) -> EvaluationRequest {
    EvaluationRequest::new(PathBuf::from("scan.json"), thresholds)
}

const ENRICHED_SCAN: &str = r#"{
    "bomFormat": "CycloneDX",
    "specVersion": "1.5",
    "metadata": {
        "component": {
            "name": "registry.example.com/payments:1.4.2",
            "properties": [
                {"name": "amazon:inspector:sbom_collector:image_id",
                 "value": "sha256:9f3c1a"}
            ]
        }
    },
    "components": [
        {"bom-ref": "comp-openssl", "name": "openssl",
         "purl": "pkg:apk/alpine/openssl@3.0.8-r4?arch=x86_64"},
        {"bom-ref": "comp-requests", "name": "requests",
         "purl": "pkg:pypi/requests@2.30.0"}
    ],
    "vulnerabilities": [
        {"id": "CVE-2023-0464",
         "description": "Excessive resource use verifying X.509 policy constraints",
         "ratings": [
             {"source": {"name": "SNYK"}, "method": "other", "severity": "medium"},
             {"source": {"name": "NVD"}, "method": "CVSSv31", "severity": "high"}
         ],
         "properties": [
             {"name": "amazon:inspector:sbom_scanner:exploit_available",
              "value": "false"},
             {"name": "amazon:inspector:sbom_scanner:fixed_version:comp-openssl",
              "value": "3.0.8-r5"}
         ],
         "affects": [{"ref": "comp-openssl"}]},
        {"id": "CVE-2023-32681",
         "description": "Proxy-Authorization header leak, cross-origin redirects",
         "ratings": [
             {"source": {"name": "NVD"}, "method": "CVSSv31", "severity": "medium"}
         ],
         "properties": [
             {"name": "amazon:inspector:sbom_scanner:exploit_available",
              "value": "true"},
             {"name": "amazon:inspector:sbom_scanner:fixed_version:comp-requests",
              "value": "2.31.0"}
         ],
         "affects": [{"ref": "comp-requests"}]}
    ]
}"#;

#[test]
fn test_evaluate_enriched_scan_happy_path() {
    let use_case = EvaluateScanUseCase::new(MockScanReader::new(ENRICHED_SCAN));
    let response = use_case
        .execute(request(Thresholds::new(0, 1, 1, 0)))
        .unwrap();

    assert!(response.passed);
    assert_eq!(response.counts.get(Severity::High), 1);
    assert_eq!(response.counts.get(Severity::Medium), 1);
    assert_eq!(response.counts.total(), 2);
    assert_eq!(
        response.subject_name.as_deref(),
        Some("registry.example.com/payments:1.4.2")
    );
    assert_eq!(response.subject_image_id.as_deref(), Some("sha256:9f3c1a"));

    assert_eq!(response.rows.len(), 2);
    let first = &response.rows[0];
    assert_eq!(first.cve, "CVE-2023-0464");
    assert_eq!(first.severity, "HIGH");
    assert_eq!(first.package_name, "openssl");
    assert_eq!(first.installed_version, "3.0.8-r4");
    assert_eq!(first.fixed_version, "3.0.8-r5");
    assert_eq!(first.exploit_available, "\"false\"");
}

#[test]
fn test_evaluate_fails_gate_on_zero_tolerance() {
    let use_case = EvaluateScanUseCase::new(MockScanReader::new(ENRICHED_SCAN));
    let response = use_case.execute(request(Thresholds::zero())).unwrap();

    assert!(!response.passed);
    // Counts and rows are still fully produced; only the verdict flips.
    assert_eq!(response.counts.total(), 2);
    assert_eq!(response.rows.len(), 2);
}

#[test]
fn test_evaluate_empty_scan_passes_and_exports_header_only() {
    let use_case = EvaluateScanUseCase::new(MockScanReader::new("{}"));
    let response = use_case.execute(request(Thresholds::zero())).unwrap();

    assert!(response.passed);
    assert_eq!(response.counts.total(), 0);

    let csv = CsvFormatter::new().format(&response.rows);
    assert_eq!(
        csv,
        "CVE,Severity,Description,Package Name,Package Installed Version,Package Fixed Version,Exploit Available\n"
    );
}

#[test]
fn test_evaluate_reader_failure() {
    let use_case = EvaluateScanUseCase::new(MockScanReader::with_failure());
    let result = use_case.execute(request(Thresholds::zero()));
    assert!(result.is_err());
}

#[test]
fn test_evaluate_aborts_on_malformed_severity() {
    let scan = r#"{
        "vulnerabilities": [
            {"id": "CVE-2023-9999",
             "ratings": [{"severity": "catastrophic"}]}
        ]
    }"#;

    let use_case = EvaluateScanUseCase::new(MockScanReader::new(scan));
    let result = use_case.execute(request(Thresholds::zero()));

    assert!(result.is_err());
    let err = format!("{:#}", result.unwrap_err());
    assert!(err.contains("Unrecognized severity rating"));
    assert!(err.contains("CVE-2023-9999"));
}

#[test]
fn test_evaluate_aborts_on_missing_fixed_version() {
    let scan = r#"{
        "components": [
            {"bom-ref": "c-1", "name": "alpha", "purl": "pkg:pypi/alpha@1.0"}
        ],
        "vulnerabilities": [
            {"id": "CVE-2023-0100",
             "ratings": [{"severity": "low"}],
             "properties": [
                 {"name": "amazon:inspector:sbom_scanner:exploit_available",
                  "value": "false"}
             ],
             "affects": [{"ref": "c-1"}]}
        ]
    }"#;

    let use_case = EvaluateScanUseCase::new(MockScanReader::new(scan));
    let result = use_case.execute(request(Thresholds::new(9, 9, 9, 9)));

    // Policy would pass, but the export cannot be built: fail fast.
    assert!(result.is_err());
}

#[test]
fn test_csv_export_matches_expected_lines() {
    let use_case = EvaluateScanUseCase::new(MockScanReader::new(ENRICHED_SCAN));
    let response = use_case
        .execute(request(Thresholds::new(9, 9, 9, 9)))
        .unwrap();

    let csv = CsvFormatter::new().format(&response.rows);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[1],
        "CVE-2023-0464,HIGH,\"Excessive resource use verifying X.509 policy constraints\",openssl,3.0.8-r4,3.0.8-r5,\"false\""
    );
    assert_eq!(
        lines[2],
        "CVE-2023-32681,MEDIUM,\"Proxy-Authorization header leak, cross-origin redirects\",requests,2.30.0,2.31.0,\"true\""
    );
}
