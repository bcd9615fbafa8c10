//! The contract every puzzle module satisfies

use crate::answer::{Answer, IntoOutcome};
use crate::ident::Part;

/// Part function signature after outcome conversion
pub type PartFn = fn(&str) -> anyhow::Result<Answer>;

/// A registered puzzle module: two part functions and its self-checks
#[derive(Clone, Copy)]
pub struct PuzzleModule {
    pub part1: PartFn,
    pub part2: PartFn,
    pub tests: fn() -> Vec<TestCase>,
}

impl PuzzleModule {
    /// The function solving `part`
    pub fn part(&self, part: Part) -> PartFn {
        match part {
            Part::One => self.part1,
            Part::Two => self.part2,
        }
    }
}

/// One self-check: a labelled thunk and the answer it must produce
pub struct TestCase {
    name: String,
    thunk: Box<dyn Fn() -> anyhow::Result<Answer>>,
    expected: Answer,
}

impl TestCase {
    pub fn new<F, R>(name: impl Into<String>, thunk: F, expected: impl Into<Answer>) -> Self
    where
        F: Fn() -> R + 'static,
        R: IntoOutcome,
    {
        Self {
            name: name.into(),
            thunk: Box::new(move || thunk().into_outcome()),
            expected: expected.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expected(&self) -> &Answer {
        &self.expected
    }

    pub fn call(&self) -> anyhow::Result<Answer> {
        (self.thunk)()
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}

/// Build a [`TestCase`] labelled with the expression's own source text.
///
/// ```
/// use aoc_harness::{case, Answer};
///
/// let case = case!(1 + 1, 2);
/// assert_eq!(case.name(), "1 + 1");
/// assert_eq!(case.call().unwrap(), Answer::Int(2));
/// ```
#[macro_export]
macro_rules! case {
    ($expr:expr, $expected:expr $(,)?) => {
        $crate::TestCase::new(stringify!($expr), move || $expr, $expected)
    };
}

/// Register a puzzle module with the plugin system.
///
/// `$module` must expose `part1`, `part2` and `tests` per the module contract.
/// The solutions crate's build script emits one invocation per module file.
#[macro_export]
macro_rules! register_puzzle {
    ($year:expr, $day:expr, $module:ident) => {
        $crate::inventory::submit! {
            $crate::PuzzlePlugin {
                year: $year,
                day: $day,
                module: $crate::PuzzleModule {
                    part1: |input: &str| $crate::IntoOutcome::into_outcome($module::part1(input)),
                    part2: |input: &str| $crate::IntoOutcome::into_outcome($module::part2(input)),
                    tests: $module::tests,
                },
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_macro_uses_source_text() {
        let case = crate::case!("abc".len(), 3);
        assert_eq!(case.name(), "\"abc\".len()");
        assert_eq!(case.expected(), &Answer::Int(3));
        assert_eq!(case.call().unwrap(), Answer::Int(3));
    }

    #[test]
    fn test_case_keeps_thunk_errors() {
        let case = TestCase::new("parse", || "nope".parse::<u32>(), 1);
        assert!(case.call().is_err());
    }

    #[test]
    fn test_module_selects_part() {
        let module = PuzzleModule {
            part1: |_| Ok(Answer::Int(1)),
            part2: |_| Ok(Answer::Int(2)),
            tests: Vec::new,
        };
        assert_eq!((module.part(Part::One))("").unwrap(), Answer::Int(1));
        assert_eq!((module.part(Part::Two))("").unwrap(), Answer::Int(2));
    }
}
