use colored::Colorize;

use stratum_compliance::{ComplianceReport, Severity};

/// Format a compliance report for terminal output.
pub fn format_report(report: &ComplianceReport) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{}\n", "Stratum - Compliance Report".bold()));
    out.push_str(&format!("{}\n\n", "=".repeat(40)));

    // Score summary
    let score_str = report.score.to_string();
    let score_colored = if report.score > 80 {
        score_str.green()
    } else if report.score >= 50 {
        score_str.yellow()
    } else {
        score_str.red()
    };
    out.push_str(&format!("{}: {score_colored}/100\n", "Score".bold()));

    let verdict = if report.compliant {
        "compliant".green().bold()
    } else {
        "non-compliant".red().bold()
    };
    out.push_str(&format!("{}: {verdict}\n", "Verdict".bold()));

    // Issues
    if report.issues.is_empty() {
        out.push_str(&format!("\n{}\n", "No issues found!".green().bold()));
    } else {
        out.push_str(&format!(
            "\n{} ({} found)\n{}\n",
            "Issues".red().bold(),
            report.issues.len(),
            "-".repeat(40),
        ));

        for issue in &report.issues {
            let severity_str = match issue.severity {
                Severity::High => "HIGH".red().bold().to_string(),
                Severity::Medium => "MEDIUM".yellow().bold().to_string(),
                Severity::Low => "LOW".blue().bold().to_string(),
            };
            out.push_str(&format!("\n  {severity_str} {}\n", issue.element));
            out.push_str(&format!("    {}\n", issue.message));
        }
    }

    out.push('\n');
    out
}
