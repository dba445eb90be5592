//! Human-readable rendering of test reports.

use crate::domain::TestReport;

/// Render a report as plain text: a header followed by one line per check
/// and one indented line per issue. Pure; check order follows the stable
/// category ordering of the report map.
pub fn render(report: &TestReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Quality report for {}\n", report.artifact_id));
    out.push_str(&format!(
        "  evaluated: {}\n",
        report.evaluated_at.to_rfc3339()
    ));
    out.push_str(&format!(
        "  score: {}/100  grade: {}  status: {}\n\n",
        report.score,
        report.grade,
        if report.passed { "PASS" } else { "FAIL" }
    ));

    for check in report.checks.values() {
        let glyph = if check.success { '✓' } else { '✗' };
        out.push_str(&format!(
            "{} {} ({}/{} subchecks, {}/{} points)\n",
            glyph,
            check.name,
            check.passed_subchecks,
            check.total_subchecks,
            check.score,
            check.weight,
        ));
        for issue in &check.issues {
            out.push_str(&format!("    - {}\n", issue));
        }
    }

    out
}
