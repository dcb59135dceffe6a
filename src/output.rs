use indexmap::IndexMap;
use serde::Serialize;

use crate::license::PackageLicense;
use crate::policy::ComplianceReport;

pub const FAILURE_MESSAGE: &str = "Some dependencies use not allowed licenses";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Whether the run passes as a build gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    Passed,
    Failed,
}

/// Count-only runs always pass. Otherwise any violation fails the run.
pub fn determine_outcome(report: &ComplianceReport, count_only: bool) -> AuditOutcome {
    if !count_only && report.has_violations() {
        AuditOutcome::Failed
    } else {
        AuditOutcome::Passed
    }
}

pub fn render(
    report: &ComplianceReport,
    format: ReportFormat,
    count_only: bool,
) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => format_text_output(report, count_only),
        ReportFormat::Json => format_json_output(report, count_only),
    }
}

/// Two labelled blocks: the license counts, then (unless counting only) the
/// violations, if there are any.
pub fn format_text_output(
    report: &ComplianceReport,
    count_only: bool,
) -> serde_json::Result<String> {
    let mut output = String::new();

    output.push_str("License count:\n");
    output.push_str(&serde_json::to_string_pretty(&report.license_counts)?);

    if !count_only && report.has_violations() {
        output.push_str("\nNot allowed licenses:\n");
        output.push_str(&serde_json::to_string_pretty(&report.violations)?);
    }

    Ok(output)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    license_counts: &'a IndexMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    violations: Option<&'a [PackageLicense]>,
}

pub fn format_json_output(
    report: &ComplianceReport,
    count_only: bool,
) -> serde_json::Result<String> {
    let document = JsonReport {
        license_counts: &report.license_counts,
        violations: (!count_only).then_some(report.violations.as_slice()),
    };
    serde_json::to_string_pretty(&document)
}
