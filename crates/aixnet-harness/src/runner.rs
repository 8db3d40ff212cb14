//! Test execution engine.

use std::time::Instant;

use aixnet_core::table::{self, Symbol};

use crate::diff;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;

/// Runs fixture sets against the constant table.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    #[must_use]
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set.cases.iter().map(verify_case).collect()
    }

    /// Run all fixtures in a set, logging one entry per case.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let started = Instant::now();
        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let result = verify_case(case);
            log.emit_entry(case_entry(&self.campaign, case, &result))?;
            results.push(result);
        }

        let failed = results.iter().filter(|r| !r.passed).count();
        let level = if failed == 0 {
            LogLevel::Info
        } else {
            LogLevel::Warn
        };
        log.emit_entry(
            LogEntry::new(String::new(), level, "fixture_set_complete")
                .with_campaign(&self.campaign)
                .with_duration_ms(started.elapsed().as_millis() as u64)
                .with_details(serde_json::json!({
                    "family": fixture_set.family,
                    "total": results.len(),
                    "failed": failed,
                })),
        )?;
        Ok(results)
    }
}

fn case_entry(campaign: &str, case: &FixtureCase, result: &VerificationResult) -> LogEntry {
    let (level, outcome) = if result.passed {
        (LogLevel::Debug, Outcome::Pass)
    } else {
        (LogLevel::Error, Outcome::Fail)
    };
    let mut entry = LogEntry::new(String::new(), level, "case_result")
        .with_campaign(campaign)
        .with_symbol(&case.symbol, &case.header)
        .with_outcome(outcome)
        .with_comparison(&result.expected, &result.actual);
    if let Some(input) = case.input {
        entry = entry.with_input(input);
    }
    if let Some(d) = &result.diff {
        entry = entry.with_details(serde_json::json!({ "diff": d }));
    }
    entry
}

/// Evaluate one case against the table.
///
/// A case passes only when the symbol resolves from the expected header, the
/// case's argument shape fits the symbol, and the output matches. A case the
/// table cannot execute fails whatever its `expected_output` says.
#[must_use]
pub fn verify_case(case: &FixtureCase) -> VerificationResult {
    let Execution { actual, problems } = execute_case(case);
    let value_matches = actual == case.expected_output;
    let passed = problems.is_empty() && value_matches;

    let mut notes = problems;
    if !value_matches {
        notes.push(diff::render_diff(&case.expected_output, &actual));
    }
    VerificationResult {
        case_name: case.name.clone(),
        symbol: case.symbol.clone(),
        header: case.header.clone(),
        input: case.input,
        passed,
        expected: case.expected_output.clone(),
        actual,
        diff: (!notes.is_empty()).then(|| notes.join("\n")),
    }
}

struct Execution {
    actual: String,
    /// Reasons the case fails independently of the output comparison.
    problems: Vec<String>,
}

fn unsupported(reason: String) -> Execution {
    Execution {
        actual: format!("unsupported:{reason}"),
        problems: vec![format!("unsupported: {reason}")],
    }
}

fn execute_case(case: &FixtureCase) -> Execution {
    let symbol = match table::resolve(&case.symbol) {
        Ok(symbol) => symbol,
        Err(err) => return unsupported(err.to_string()),
    };

    let actual = match (symbol, case.input) {
        (Symbol::Constant(c), None) => c.value.to_string(),
        (Symbol::Helper(h), Some(arg)) => h.call(arg).to_string(),
        (Symbol::Constant(_), Some(_)) => {
            return unsupported(format!("{} takes no argument", case.symbol));
        }
        (Symbol::Helper(_), None) => {
            return unsupported(format!("{} requires an input", case.symbol));
        }
    };

    let found = symbol.header().path();
    let mut problems = Vec::new();
    if found != case.header {
        problems.push(format!(
            "header mismatch: expected {}, found {found}",
            case.header
        ));
    }
    Execution { actual, problems }
}
