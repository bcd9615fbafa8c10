//! Console output for command results

use aoc_harness::{FileAction, PuzzleId, RunOutcome, ScaffoldReport, TestReport, format_millis};

/// Print one test case line, with error detail on stderr
pub fn print_report(report: &TestReport) {
    println!("{}", report.render());
    if let Some(detail) = report.error_detail() {
        eprintln!("{}", detail);
    }
}

/// Print the outcome of `run`
pub fn print_run_outcome(id: PuzzleId, outcome: &RunOutcome) {
    match outcome {
        RunOutcome::NoModule => print_no_module(id),
        RunOutcome::NoInput => println!("No input for {}", id),
        RunOutcome::Solved { answer, elapsed } => {
            println!();
            println!("{}", answer);
            println!();
            println!("duration: {}", format_millis(*elapsed));
        }
        RunOutcome::Failed { error } => eprintln!("{}", error),
    }
}

pub fn print_no_module(id: PuzzleId) {
    println!("No module for {}", id);
}

/// Print the files `init` wrote or found
pub fn print_scaffold(report: &ScaffoldReport) {
    for action in [&report.module, &report.input] {
        match action {
            FileAction::Created(path) => println!("Created {}", path.display()),
            FileAction::AlreadyPresent(path) => {
                println!("Kept existing {}", path.display())
            }
            FileAction::Skipped => {}
        }
    }
}
