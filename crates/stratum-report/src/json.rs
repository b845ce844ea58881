use stratum_compliance::ComplianceReport;

/// Format a compliance report as JSON.
pub fn format_report(report: &ComplianceReport, compact: bool) -> String {
    if compact {
        serde_json::to_string(report).expect("ComplianceReport should be serializable")
    } else {
        serde_json::to_string_pretty(report).expect("ComplianceReport should be serializable")
    }
}
