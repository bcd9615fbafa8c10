//! Running one part against the real puzzle input

use crate::answer::Answer;
use crate::error::{CaseError, RunError};
use crate::ident::{Part, PuzzleId};
use crate::input::load_input;
use crate::isolate::call_isolated;
use crate::paths::PuzzlePaths;
use crate::registry::PuzzleRegistry;
use std::time::{Duration, Instant};
use tracing::debug;

/// What happened when running a part
#[derive(Debug)]
pub enum RunOutcome {
    /// No module registered and no module file
    NoModule,
    /// Input file missing or empty
    NoInput,
    Solved { answer: Answer, elapsed: Duration },
    Failed { error: CaseError },
}

/// Run `part` of the puzzle once against its input file.
///
/// Failures inside the part function are returned as
/// [`RunOutcome::Failed`]; only load and read failures are errors.
pub fn run_part(
    registry: &PuzzleRegistry,
    paths: &PuzzlePaths,
    id: PuzzleId,
    part: Part,
) -> Result<RunOutcome, RunError> {
    let Some(module) = registry.load(id.year, id.day, &paths.module)? else {
        return Ok(RunOutcome::NoModule);
    };

    let input = match load_input(&paths.input)? {
        Some(input) if !input.is_empty() => input,
        _ => return Ok(RunOutcome::NoInput),
    };
    debug!(%id, %part, bytes = input.len(), "running part");

    let solve = module.part(part);
    let start = Instant::now();
    let result = call_isolated(|| solve(&input));
    let elapsed = start.elapsed();

    Ok(match result {
        Ok(answer) => RunOutcome::Solved { answer, elapsed },
        Err(error) => RunOutcome::Failed { error },
    })
}
