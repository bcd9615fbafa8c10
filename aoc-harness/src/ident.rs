//! Year, day and part validation

use crate::error::{Field, ValidationError};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::num::IntErrorKind;

/// First year puzzles were published
pub const FIRST_YEAR: u16 = 2015;
/// Puzzles per year
pub const DAYS_PER_YEAR: u8 = 25;

/// A validated year-day pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleId {
    pub year: u16,
    pub day: u8,
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "year {} day {}", self.year, self.day)
    }
}

/// Which part of a puzzle to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Part {
    #[default]
    One,
    Two,
}

impl Part {
    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Parse a base-10 integer token. `None` means the token is a well-formed
/// integer too large for any bound, i.e. out of range rather than malformed.
fn parse_number(field: Field, raw: &str) -> Result<Option<i64>, ValidationError> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Ok(Some(value)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(_) => Err(ValidationError::NotANumber {
            field,
            raw: raw.to_string(),
        }),
    }
}

/// Validate a year token against the local calendar
pub fn validate_year(raw: &str) -> Result<u16, ValidationError> {
    validate_year_on(raw, Local::now().date_naive())
}

/// Validate a year token against the calendar as of `today`
pub fn validate_year_on(raw: &str, today: NaiveDate) -> Result<u16, ValidationError> {
    let current = today.year();
    match parse_number(Field::Year, raw)? {
        // Bounded by FIRST_YEAR..=current, fits in u16
        Some(year) if (i64::from(FIRST_YEAR)..=i64::from(current)).contains(&year) => {
            Ok(year as u16)
        }
        _ => Err(ValidationError::YearOutOfRange {
            year: raw.trim().to_string(),
            min: FIRST_YEAR,
            max: current,
        }),
    }
}

/// Validate a day token (1..=25)
pub fn validate_day(raw: &str) -> Result<u8, ValidationError> {
    match parse_number(Field::Day, raw)? {
        Some(day) if (1..=i64::from(DAYS_PER_YEAR)).contains(&day) => Ok(day as u8),
        _ => Err(ValidationError::DayOutOfRange(raw.trim().to_string())),
    }
}

/// Validate a part token (1 or 2)
pub fn validate_part(raw: &str) -> Result<Part, ValidationError> {
    match parse_number(Field::Part, raw)? {
        Some(1) => Ok(Part::One),
        Some(2) => Ok(Part::Two),
        _ => Err(ValidationError::PartOutOfRange(raw.trim().to_string())),
    }
}

/// Year to use when none is given: the current year during December,
/// otherwise the previous one.
pub fn default_year() -> u16 {
    default_year_on(Local::now().date_naive())
}

pub fn default_year_on(today: NaiveDate) -> u16 {
    let year = if today.month() == 12 {
        today.year()
    } else {
        today.year() - 1
    };
    year as u16
}

/// Validate day and optional year tokens into a [`PuzzleId`].
///
/// Day is checked first so a bad day is reported even when the year is also bad.
pub fn resolve_id(raw_day: &str, raw_year: Option<&str>) -> Result<PuzzleId, ValidationError> {
    let day = validate_day(raw_day)?;
    let year = match raw_year {
        Some(raw) => validate_year(raw)?,
        None => default_year(),
    };
    Ok(PuzzleId { year, day })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_year_bounds() {
        let today = date(2024, 6, 1);
        assert!(matches!(
            validate_year_on("2014", today),
            Err(ValidationError::YearOutOfRange { ref year, .. }) if year == "2014"
        ));
        assert_eq!(validate_year_on("2015", today), Ok(2015));
        assert_eq!(validate_year_on("2024", today), Ok(2024));
        assert!(matches!(
            validate_year_on("2025", today),
            Err(ValidationError::YearOutOfRange { ref year, max: 2024, .. }) if year == "2025"
        ));
    }

    #[test]
    fn test_year_uses_wall_clock() {
        let current = Local::now().year();
        assert!(validate_year(&current.to_string()).is_ok());
        assert!(validate_year(&(current + 1).to_string()).is_err());
    }

    #[test]
    fn test_day_bounds() {
        assert_eq!(validate_day("0"), Err(ValidationError::DayOutOfRange("0".to_string())));
        assert_eq!(validate_day("26"), Err(ValidationError::DayOutOfRange("26".to_string())));
        assert_eq!(validate_day("1"), Ok(1));
        assert_eq!(validate_day("25"), Ok(25));
    }

    #[test]
    fn test_part_bounds() {
        assert_eq!(validate_part("1"), Ok(Part::One));
        assert_eq!(validate_part("2"), Ok(Part::Two));
        assert_eq!(validate_part("3"), Err(ValidationError::PartOutOfRange("3".to_string())));
        assert_eq!(validate_part("0"), Err(ValidationError::PartOutOfRange("0".to_string())));
    }

    #[test]
    fn test_non_numbers_are_parse_errors() {
        assert_eq!(
            validate_day("one"),
            Err(ValidationError::NotANumber {
                field: Field::Day,
                raw: "one".to_string()
            })
        );
        assert!(matches!(
            validate_part("1.5"),
            Err(ValidationError::NotANumber { field: Field::Part, .. })
        ));
        assert!(matches!(
            validate_year(""),
            Err(ValidationError::NotANumber { field: Field::Year, .. })
        ));
    }

    #[test]
    fn test_overflowing_numbers_are_out_of_range() {
        let today = date(2024, 6, 1);
        let err = validate_year_on("99999999999999999999", today).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Year must be between 2015 and 2024. Got 99999999999999999999"
        );
        assert_eq!(
            validate_day("-99999999999999999999"),
            Err(ValidationError::DayOutOfRange("-99999999999999999999".to_string()))
        );
        assert!(matches!(
            validate_part(" 18446744073709551616 "),
            Err(ValidationError::PartOutOfRange(ref raw)) if raw == "18446744073709551616"
        ));
    }

    #[test]
    fn test_default_year_follows_december() {
        assert_eq!(default_year_on(date(2023, 12, 1)), 2023);
        assert_eq!(default_year_on(date(2023, 12, 31)), 2023);
        assert_eq!(default_year_on(date(2024, 1, 1)), 2023);
        assert_eq!(default_year_on(date(2024, 11, 30)), 2023);
    }

    #[test]
    fn test_error_messages_name_the_bounds() {
        let err = validate_year_on("2030", date(2024, 3, 3)).unwrap_err();
        assert_eq!(err.to_string(), "Year must be between 2015 and 2024. Got 2030");
        let err = validate_day("x").unwrap_err();
        assert_eq!(err.to_string(), "Expected day to be a number. Got \"x\"");
    }

    proptest! {
        #[test]
        fn prop_day_accepts_exactly_1_to_25(day in -100i64..=100) {
            let result = validate_day(&day.to_string());
            if (1..=25).contains(&day) {
                prop_assert_eq!(result, Ok(day as u8));
            } else {
                prop_assert_eq!(result, Err(ValidationError::DayOutOfRange(day.to_string())));
            }
        }

        #[test]
        fn prop_year_accepts_first_year_to_current(year in 2000i64..=2040, current in 2015i32..=2035) {
            let result = validate_year_on(&year.to_string(), date(current, 7, 4));
            prop_assert_eq!(result.is_ok(), year >= 2015 && year <= i64::from(current));
        }
    }
}
