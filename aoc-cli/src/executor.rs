//! Command execution: `init`, `test` and `run`

use crate::cli::Command;
use crate::config::Config;
use crate::error::CliError;
use crate::output;
use aoc_harness::{
    LoadError, PuzzleId, PuzzlePaths, PuzzleRegistry, default_year, load_input, resolve_id,
    run_part, run_tests, scaffold, validate_day, validate_part, validate_year,
};
use tracing::debug;

/// Runs commands against one registry and filesystem root
pub struct Executor<'a> {
    registry: &'a PuzzleRegistry,
    config: &'a Config,
}

impl<'a> Executor<'a> {
    pub fn new(registry: &'a PuzzleRegistry, config: &'a Config) -> Self {
        Self { registry, config }
    }

    /// Dispatch the configured subcommand
    pub fn execute(&self) -> Result<(), CliError> {
        match &self.config.command {
            Command::Init { day, year } => self.init(day, year.as_deref()),
            Command::Test { day, year } => self.test(day, year.as_deref()),
            Command::Run { day, part, year } => self.run(day, part, year.as_deref()),
        }
    }

    fn paths(&self, id: PuzzleId) -> PuzzlePaths {
        let paths = PuzzlePaths::resolve(&self.config.root, id);
        debug!(%id, module = %paths.module.display(), input = %paths.input.display(), "resolved paths");
        paths
    }

    /// Scaffold whichever of module and input is missing
    fn init(&self, day: &str, year: Option<&str>) -> Result<(), CliError> {
        let id = resolve_id(day, year)?;
        let paths = self.paths(id);

        // A module file this binary has not compiled yet still counts as present
        let module_absent = match self.registry.load(id.year, id.day, &paths.module) {
            Ok(module) => module.is_none(),
            Err(LoadError::NotCompiled(_)) => false,
            Err(e) => return Err(e.into()),
        };
        let input_absent = load_input(&paths.input)?.is_none();

        let report = scaffold(&paths, module_absent, input_absent)?;
        output::print_scaffold(&report);
        Ok(())
    }

    /// Run every self-test case of the module
    fn test(&self, day: &str, year: Option<&str>) -> Result<(), CliError> {
        let id = resolve_id(day, year)?;
        let paths = self.paths(id);

        let Some(module) = self.registry.load(id.year, id.day, &paths.module)? else {
            output::print_no_module(id);
            return Ok(());
        };

        for report in run_tests((module.tests)()) {
            output::print_report(&report);
        }
        Ok(())
    }

    /// Run one part against the input file
    fn run(&self, day: &str, part: &str, year: Option<&str>) -> Result<(), CliError> {
        let day = validate_day(day)?;
        let part = validate_part(part)?;
        let year = match year {
            Some(raw) => validate_year(raw)?,
            None => default_year(),
        };
        let id = PuzzleId { year, day };
        let paths = self.paths(id);

        let outcome = run_part(self.registry, &paths, id, part)?;
        output::print_run_outcome(id, &outcome);
        Ok(())
    }
}
