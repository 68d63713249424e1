//! Test execution engine.

use std::time::Instant;

use tstreaming_core::Print;

use crate::diff;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::render::Rendered;
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

struct Execution {
    result: VerificationResult,
    output: Vec<u8>,
    outcome: Outcome,
    latency_ns: u64,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| execute_case(case).result)
            .collect()
    }

    /// Like [`run`](Self::run), also emitting one log line per case.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let run = execute_case(case);
            let level = match run.outcome {
                Outcome::Pass => LogLevel::Info,
                Outcome::Fail | Outcome::Error => LogLevel::Error,
            };
            let mut entry = LogEntry::new(String::new(), level, "case_result")
                .with_campaign(&self.campaign)
                .with_case(&case.name, &run.result.formatter)
                .with_outcome(run.outcome)
                .with_output(&run.output, run.result.reported_count)
                .with_latency_ns(run.latency_ns);
            if let Some(diff) = &run.result.diff {
                entry = entry.with_details(serde_json::json!({
                    "family": fixture_set.family,
                    "expected": run.result.expected,
                    "diff": diff,
                }));
            }
            log.emit_entry(entry)?;
            results.push(run.result);
        }
        Ok(results)
    }
}

fn execute_case(case: &FixtureCase) -> Execution {
    let formatter = case.format.to_string();
    let start = Instant::now();
    let rendered = Rendered::new(&case.format, &case.input);

    let (output, count, outcome, diff) = match rendered {
        Ok(rendered) => {
            let mut out = Vec::new();
            let count = out.print(&rendered);
            let actual = String::from_utf8_lossy(&out);
            let mut notes = Vec::new();
            if out != case.expected_output.as_bytes() {
                notes.push(diff::render_diff(&case.expected_output, &actual));
            }
            if count != out.len() {
                notes.push(format!(
                    "reported count {count} differs from {} bytes written",
                    out.len()
                ));
            }
            let outcome = if notes.is_empty() {
                Outcome::Pass
            } else {
                Outcome::Fail
            };
            let diff = (!notes.is_empty()).then(|| notes.join("\n"));
            (out, count, outcome, diff)
        }
        Err(err) => {
            let actual = format!("error:{err}");
            let diff = diff::render_diff(&case.expected_output, &actual);
            (actual.into_bytes(), 0, Outcome::Error, Some(diff))
        }
    };
    let latency_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

    Execution {
        result: VerificationResult {
            case_name: case.name.clone(),
            formatter,
            passed: outcome == Outcome::Pass,
            expected: case.expected_output.clone(),
            actual: String::from_utf8_lossy(&output).into_owned(),
            reported_count: count,
            diff,
        },
        output,
        outcome,
        latency_ns,
    }
}
