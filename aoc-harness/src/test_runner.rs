//! Self-test execution and reporting
//!
//! Each case runs on its own: a mismatch, an `Err` or a panic in one case is
//! recorded in that case's report and the next case runs regardless. Reports
//! are produced lazily in the order the module declares its cases, so a caller
//! printing them as they arrive sees each line as soon as its case finishes.

use crate::answer::Answer;
use crate::error::CaseError;
use crate::isolate::call_isolated;
use crate::module::TestCase;
use crate::style;
use std::time::{Duration, Instant};

/// How one case ended
#[derive(Debug)]
pub enum CaseOutcome {
    Passed { elapsed: Duration },
    Mismatch { expected: Answer, actual: Answer },
    Errored { error: CaseError },
}

/// Result of running one test case
#[derive(Debug)]
pub struct TestReport {
    /// Dedented display label
    pub name: String,
    pub outcome: CaseOutcome,
}

impl TestReport {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, CaseOutcome::Passed { .. })
    }

    /// The report line for stdout
    pub fn render(&self) -> String {
        match &self.outcome {
            CaseOutcome::Passed { elapsed } => format!(
                "{} {} {}",
                style::success_mark(),
                style::gray(&self.name),
                style::format_millis(*elapsed)
            ),
            CaseOutcome::Mismatch { expected, actual } => format!(
                "{} {} => expected: {} actual: {}",
                style::failure_mark(),
                style::gray(&self.name),
                expected.literal(),
                actual.literal()
            ),
            CaseOutcome::Errored { .. } => {
                format!("{} {} => Error", style::failure_mark(), self.name)
            }
        }
    }

    /// Full error detail for stderr, when the case errored
    pub fn error_detail(&self) -> Option<String> {
        match &self.outcome {
            CaseOutcome::Errored { error } => Some(error.to_string()),
            _ => None,
        }
    }
}

/// Run every case in order, yielding one report per case
pub fn run_tests(cases: Vec<TestCase>) -> impl Iterator<Item = TestReport> {
    cases.into_iter().map(|case| run_case(&case))
}

/// Run a single case with timing and strict comparison
pub fn run_case(case: &TestCase) -> TestReport {
    let name = display_name(case.name());

    let start = Instant::now();
    let result = call_isolated(|| case.call());
    let elapsed = start.elapsed();

    let outcome = match result {
        Ok(actual) if actual == *case.expected() => CaseOutcome::Passed { elapsed },
        Ok(actual) => CaseOutcome::Mismatch {
            expected: case.expected().clone(),
            actual,
        },
        Err(error) => CaseOutcome::Errored { error },
    };

    TestReport { name, outcome }
}

/// Label shown for a case: closure marker stripped, then dedented
pub fn display_name(label: &str) -> String {
    dedent(strip_thunk_marker(label))
}

fn strip_thunk_marker(label: &str) -> &str {
    let trimmed = label.trim_start();
    let rest = trimmed
        .strip_prefix("move ||")
        .or_else(|| trimmed.strip_prefix("||"));
    match rest {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => label,
    }
}

/// Remove the common leading whitespace of all non-blank lines.
///
/// Blank lines are dropped.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let indent = lines
        .iter()
        .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| match l.char_indices().nth(indent) {
            Some((i, _)) => &l[i..],
            None => "",
        })
        .collect::<Vec<_>>()
        .join("\n")
}
