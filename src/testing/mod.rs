//! # Assertions & Run Report
//!
//! Each probe carries a few assertions that are checked against the response
//! it got back. The outcome is a PASSED/FAILED verdict per case; the run report
//! tallies the verdicts for the completion banner and the exit status.

use serde_json::Value;

use crate::runner::ProbeOutcome;

/// A check that can be evaluated against a probe's response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assertion {
    StatusEquals(u16),
    /// Any status outside 2xx. The exact error code is up to the service.
    StatusNotSuccess,
    /// The body is a JSON object containing this top-level key.
    HasKey(String),
}

/// Result of evaluating an assertion.
#[derive(Debug, Clone)]
pub struct AssertionResult {
    pub assertion: Assertion,
    pub passed: bool,
    pub actual: String,
    pub message: String,
}

impl Assertion {
    pub fn evaluate(&self, status: u16, body: &Value) -> AssertionResult {
        let (passed, actual, message) = match self {
            Assertion::StatusEquals(expected) => (
                status == *expected,
                status.to_string(),
                format!("expected status {expected}, got {status}"),
            ),
            Assertion::StatusNotSuccess => (
                !(200..300).contains(&status),
                status.to_string(),
                format!("expected a non-2xx status, got {status}"),
            ),
            Assertion::HasKey(key) => {
                let present = body.get(key).is_some();
                (
                    present,
                    if present { "present" } else { "absent" }.to_string(),
                    format!("expected key `{key}` in response body"),
                )
            }
        };

        AssertionResult {
            assertion: self.clone(),
            passed,
            actual,
            message,
        }
    }
}

/// Everything recorded about one case after it ran.
#[derive(Debug)]
pub struct CaseReport {
    pub label: String,
    pub outcome: ProbeOutcome,
    pub results: Vec<AssertionResult>,
}

impl CaseReport {
    /// A case passes when it got a usable response and every assertion held.
    pub fn passed(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Received { .. }) && self.results.iter().all(|r| r.passed)
    }

    /// Why the case failed, if it did.
    pub fn failure_reason(&self) -> Option<String> {
        if let ProbeOutcome::Failed { error, .. } = &self.outcome {
            return Some(error.to_string());
        }
        self.results
            .iter()
            .find(|result| !result.passed)
            .map(|result| result.message.clone())
    }
}

/// Summary report for a whole run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u128,
    pub cases: Vec<CaseReport>,
}

impl RunReport {
    pub fn record(&mut self, case: CaseReport) {
        self.total += 1;
        if case.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.cases.push(case);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use crate::runner::Payload;
    use serde_json::json;

    fn received() -> ProbeOutcome {
        ProbeOutcome::Received {
            status: 200,
            duration_ms: 3,
            payload: Payload::Json(json!({})),
        }
    }

    #[test]
    fn status_equals() {
        let result = Assertion::StatusEquals(200).evaluate(500, &Value::Null);
        assert!(!result.passed);
        assert_eq!(result.actual, "500");
        assert_eq!(result.message, "expected status 200, got 500");
        assert!(Assertion::StatusEquals(200).evaluate(200, &Value::Null).passed);
    }

    #[test]
    fn status_not_success_accepts_client_and_server_errors() {
        assert!(Assertion::StatusNotSuccess.evaluate(400, &Value::Null).passed);
        assert!(Assertion::StatusNotSuccess.evaluate(500, &Value::Null).passed);
        assert!(!Assertion::StatusNotSuccess.evaluate(200, &Value::Null).passed);
    }

    #[test]
    fn has_key_checks_top_level_object() {
        let assertion = Assertion::HasKey("restaurants".into());
        assert!(assertion.evaluate(200, &json!({ "restaurants": [] })).passed);

        let missing = assertion.evaluate(200, &json!({ "error": "boom" }));
        assert!(!missing.passed);
        assert_eq!(missing.actual, "absent");
        assert!(!assertion.evaluate(200, &json!(["restaurants"])).passed);
    }

    #[test]
    fn failed_outcome_reports_the_error() {
        let case = CaseReport {
            label: "TEST 1".into(),
            outcome: ProbeOutcome::Failed {
                status: None,
                error: ProbeError::MissingField("restaurants"),
            },
            results: Vec::new(),
        };

        assert!(!case.passed());
        assert_eq!(
            case.failure_reason().as_deref(),
            Some("Missing field `restaurants` in response body")
        );
    }

    #[test]
    fn run_report_tallies_cases() {
        let mut report = RunReport::default();
        report.record(CaseReport {
            label: "ok".into(),
            outcome: received(),
            results: vec![Assertion::StatusEquals(200).evaluate(200, &Value::Null)],
        });
        report.record(CaseReport {
            label: "bad".into(),
            outcome: received(),
            results: vec![Assertion::StatusNotSuccess.evaluate(200, &Value::Null)],
        });

        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(
            report.cases[1].failure_reason().as_deref(),
            Some("expected a non-2xx status, got 200")
        );
    }
}
