//! Report generation for verification results.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::verify::VerificationSummary;

/// A verification report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub title: String,
    /// Fixture families included in the run.
    pub families: Vec<String>,
    /// Timestamp (UTC).
    pub timestamp: String,
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Families: {}\n", self.families.join(", ")));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Symbol | Header | Input | Status |\n");
        out.push_str("|------|--------|--------|-------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            let input = r.input.map(|i| format!("{i:#010x}")).unwrap_or_default();
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                r.case_name, r.symbol, r.header, input, status
            ));
        }

        let failures: Vec<_> = self.summary.failures().collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for r in failures {
                out.push_str(&format!("\n### {}\n\n```\n", r.case_name));
                out.push_str(r.diff.as_deref().unwrap_or(""));
                out.push_str("\n```\n");
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

/// Path of the JSON report written next to a markdown report.
///
/// `report.md` gives `report.json`. A report path that already ends in
/// `.json` gives `<stem>.report.json` so the two files never collide.
#[must_use]
pub fn json_sibling(report_path: &Path) -> PathBuf {
    if report_path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        report_path.with_extension("report.json")
    } else {
        report_path.with_extension("json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::VerificationResult;

    fn result(name: &str, passed: bool, input: Option<u32>) -> VerificationResult {
        VerificationResult {
            case_name: name.to_string(),
            symbol: "IN_CLASSB".to_string(),
            header: "netinet/in.h".to_string(),
            input,
            passed,
            expected: "1".to_string(),
            actual: if passed { "1" } else { "0" }.to_string(),
            diff: (!passed).then(|| "--- expected\n+++ actual\n".to_string()),
        }
    }

    fn report() -> ConformanceReport {
        ConformanceReport {
            title: "aixnet verification".to_string(),
            families: vec!["netinet/in.h".to_string()],
            timestamp: "2026-10-18T00:00:00.000Z".to_string(),
            summary: VerificationSummary::from_results(vec![
                result("ok", true, Some(0x8000_0000)),
                result("broken", false, None),
            ]),
        }
    }

    #[test]
    fn markdown_lists_cases_and_failures() {
        let md = report().to_markdown();
        assert!(md.starts_with("# aixnet verification\n"));
        assert!(md.contains("- Passed: 1\n"));
        assert!(md.contains("- Failed: 1\n"));
        assert!(md.contains("| ok | IN_CLASSB | netinet/in.h | 0x80000000 | PASS |"));
        assert!(md.contains("| broken | IN_CLASSB | netinet/in.h |  | FAIL |"));
        assert!(md.contains("### broken"));
    }

    #[test]
    fn json_round_trips_summary() {
        let json = report().to_json();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["summary"]["total"], 2);
        assert_eq!(parsed["summary"]["failed"], 1);
        assert!(parsed["summary"]["results"][1].get("input").is_none());
    }

    #[test]
    fn json_sibling_never_collides_with_report() {
        assert_eq!(json_sibling(Path::new("out/r.md")), Path::new("out/r.json"));
        assert_eq!(json_sibling(Path::new("out/r")), Path::new("out/r.json"));
        assert_eq!(json_sibling(Path::new("out/r.json")), Path::new("out/r.report.json"));
        assert_eq!(json_sibling(Path::new("out/r.JSON")), Path::new("out/r.report.json"));
    }
}
