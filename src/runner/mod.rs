//! # Probe Runner
//!
//! Runs the suite one case at a time against the target service. Every case
//! ends in a [`ProbeOutcome`], so a failure in one case never stops the next.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::ProbeError;
use crate::http::client::send_request;
use crate::report;
use crate::suite::{Summary, TestCase};
use crate::testing::{AssertionResult, CaseReport, RunReport};

/// One entry of the `restaurants` array returned by `/search/dishes`.
///
/// Fields stay raw JSON: prices and counts arrive as numbers or decimal
/// strings, and a missing field reads as `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Restaurant {
    pub restaurant_name: Value,
    pub city: Value,
    pub dish_name: Value,
    pub dish_price: Value,
    pub order_count: Value,
}

#[derive(Debug)]
pub enum Payload {
    Json(Value),
    /// `total` counts the whole array; only the `shown` prefix is decoded.
    Restaurants { total: usize, shown: Vec<Restaurant> },
}

/// What happened to a single probe.
#[derive(Debug)]
pub enum ProbeOutcome {
    Received {
        status: u16,
        duration_ms: u128,
        payload: Payload,
    },
    /// `status` is set when a response arrived but its body was unusable.
    Failed {
        status: Option<u16>,
        error: ProbeError,
    },
}

pub struct ProbeRunner {
    client: Client,
    base_url: Url,
    warmup: Duration,
}

impl ProbeRunner {
    pub fn new(client: Client, base_url: Url, warmup: Duration) -> Self {
        Self {
            client,
            base_url,
            warmup,
        }
    }

    /// Run every case in order, printing each block to `out` as it completes.
    ///
    /// Only a failure to write to `out` ends the run early.
    pub async fn run<W: Write>(&self, cases: &[TestCase], out: &mut W) -> io::Result<RunReport> {
        info!(base_url = %self.base_url, cases = cases.len(), "starting probe run");
        if !self.warmup.is_zero() {
            tokio::time::sleep(self.warmup).await;
        }

        let started = Instant::now();
        let mut run_report = RunReport::default();
        for case in cases {
            report::case_banner(out, &case.label)?;
            let case_report = self.probe(case).await;
            report::case_body(out, case, &case_report)?;
            run_report.record(case_report);
        }
        run_report.duration_ms = started.elapsed().as_millis();
        for case in run_report.cases.iter().filter(|case| !case.passed()) {
            warn!(
                case = %case.label,
                reason = %case.failure_reason().unwrap_or_default(),
                "case failed"
            );
        }

        report::completion_banner(out, &run_report)?;
        out.flush()?;
        info!(
            passed = run_report.passed,
            failed = run_report.failed,
            duration_ms = run_report.duration_ms as u64,
            "probe run finished"
        );
        Ok(run_report)
    }

    async fn probe(&self, case: &TestCase) -> CaseReport {
        let response = match send_request(&self.client, &self.base_url, &case.request).await {
            Ok(response) => response,
            Err(error) => {
                warn!(case = %case.label, %error, "probe failed");
                return CaseReport {
                    label: case.label.clone(),
                    outcome: ProbeOutcome::Failed {
                        status: None,
                        error,
                    },
                    results: Vec::new(),
                };
            }
        };

        let status = response.status;
        let body = match response.json() {
            Ok(body) => body,
            Err(error) => {
                warn!(case = %case.label, status, %error, "unreadable response body");
                return CaseReport {
                    label: case.label.clone(),
                    outcome: ProbeOutcome::Failed {
                        status: Some(status),
                        error,
                    },
                    results: Vec::new(),
                };
            }
        };

        let results: Vec<AssertionResult> = case
            .assertions
            .iter()
            .map(|assertion| assertion.evaluate(status, &body))
            .collect();
        for result in &results {
            debug!(
                case = %case.label,
                assertion = ?result.assertion,
                actual = %result.actual,
                passed = result.passed,
                "assertion evaluated"
            );
        }

        let payload = match case.summary {
            Summary::RawJson => Ok(Payload::Json(body)),
            Summary::Restaurants { limit, .. } => restaurants(body, limit)
                .map(|(total, shown)| Payload::Restaurants { total, shown }),
        };
        let outcome = match payload {
            Ok(payload) => ProbeOutcome::Received {
                status,
                duration_ms: response.duration_ms,
                payload,
            },
            Err(error) => {
                warn!(case = %case.label, status, %error, "unexpected response shape");
                ProbeOutcome::Failed {
                    status: Some(status),
                    error,
                }
            }
        };

        CaseReport {
            label: case.label.clone(),
            outcome,
            results,
        }
    }
}

/// Count the `restaurants` array and decode at most `limit` leading entries.
/// Entries past the limit are never inspected.
fn restaurants(body: Value, limit: Option<usize>) -> Result<(usize, Vec<Restaurant>), ProbeError> {
    let Value::Object(mut fields) = body else {
        return Err(ProbeError::MissingField("restaurants"));
    };
    let list = fields
        .remove("restaurants")
        .ok_or(ProbeError::MissingField("restaurants"))?;
    let decode = |source| ProbeError::Decode {
        what: "restaurants",
        source,
    };

    let entries: Vec<Value> = serde_json::from_value(list).map_err(decode)?;
    let total = entries.len();
    let shown = entries
        .into_iter()
        .take(limit.unwrap_or(total))
        .map(serde_json::from_value)
        .collect::<Result<Vec<Restaurant>, _>>()
        .map_err(decode)?;
    Ok((total, shown))
}
