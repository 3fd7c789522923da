use std::io::{self, Write};

use serde_json::Value;

use crate::runner::{Payload, ProbeOutcome, Restaurant};
use crate::suite::{Layout, Summary, TestCase};
use crate::testing::{CaseReport, RunReport};

const RULE_WIDTH: usize = 60;

pub fn case_banner<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    rule(out)?;
    writeln!(out, "{label}")?;
    rule(out)
}

/// Status line, body or error, then the verdict and the case's blank separator lines.
pub fn case_body<W: Write>(out: &mut W, case: &TestCase, report: &CaseReport) -> io::Result<()> {
    match &report.outcome {
        ProbeOutcome::Received {
            status, payload, ..
        } => {
            writeln!(out, "Status: {status}")?;
            match payload {
                Payload::Json(body) => writeln!(out, "{}", pretty_json(body))?,
                Payload::Restaurants { total, shown } => {
                    let layout = match case.summary {
                        Summary::Restaurants { layout, .. } => layout,
                        Summary::RawJson => Layout::Compact,
                    };
                    restaurants(out, *total, shown, layout)?;
                }
            }
        }
        ProbeOutcome::Failed { status, error } => {
            if let Some(status) = status {
                writeln!(out, "Status: {status}")?;
            }
            writeln!(out, "Error: {error}")?;
        }
    }

    verdict(out, report)?;
    for _ in 0..case.trailing_blank_lines {
        writeln!(out)?;
    }
    Ok(())
}

pub fn completion_banner<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(out)?;
    rule(out)?;
    writeln!(out, "All tests completed!")?;
    writeln!(out, "Passed {}/{}", report.passed, report.total)?;
    rule(out)
}

fn verdict<W: Write>(out: &mut W, report: &CaseReport) -> io::Result<()> {
    match (report.failure_reason(), &report.outcome) {
        (None, ProbeOutcome::Received { duration_ms, .. }) => {
            writeln!(out, "✅ PASSED ({duration_ms} ms)")
        }
        (Some(reason), _) => writeln!(out, "❌ FAILED: {reason}"),
        (None, ProbeOutcome::Failed { error, .. }) => writeln!(out, "❌ FAILED: {error}"),
    }
}

/// `total` is the length of the whole array; `shown` is the bounded prefix to print.
fn restaurants<W: Write>(
    out: &mut W,
    total: usize,
    shown: &[Restaurant],
    layout: Layout,
) -> io::Result<()> {
    writeln!(out, "Found {total} restaurants")?;
    writeln!(out)?;

    for (i, restaurant) in shown.iter().enumerate() {
        let rank = i + 1;
        let name = scalar(&restaurant.restaurant_name);
        let city = scalar(&restaurant.city);
        let dish = scalar(&restaurant.dish_name);
        let price = scalar(&restaurant.dish_price);
        let orders = scalar(&restaurant.order_count);
        match layout {
            Layout::Detailed => {
                writeln!(out, "{rank}. {name} ({city})")?;
                writeln!(out, "   Dish: {dish}")?;
                writeln!(out, "   Price: ₹{price}")?;
                writeln!(out, "   Orders: {orders}")?;
                writeln!(out)?;
            }
            Layout::Compact => {
                writeln!(out, "{rank}. {name} - {dish} - ₹{price} - {orders} orders")?
            }
        }
    }

    Ok(())
}

/// Two-space indented JSON. Falls back to compact output if pretty printing fails.
fn pretty_json(body: &Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}

/// Strings print bare, everything else as JSON.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}
