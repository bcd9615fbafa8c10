//! Values produced by part functions and test thunks

use std::fmt;

/// An equatable puzzle result.
///
/// Equality is strict: an integer never equals text, even when the text
/// spells the same number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Answer {
    Int(i128),
    Text(String),
}

impl Answer {
    /// Render so that `Int(1)` and `Text("1")` stay distinguishable
    pub fn literal(&self) -> String {
        match self {
            Answer::Int(n) => n.to_string(),
            Answer::Text(s) => format!("{:?}", s),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Int(n) => write!(f, "{}", n),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! int_answer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Answer {
                fn from(value: $t) -> Self {
                    Answer::Int(value as i128)
                }
            }

            impl IntoOutcome for $t {
                fn into_outcome(self) -> anyhow::Result<Answer> {
                    Ok(self.into())
                }
            }
        )*
    };
}

int_answer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl From<char> for Answer {
    fn from(value: char) -> Self {
        Answer::Text(value.to_string())
    }
}

/// Conversion from whatever a part function or thunk returns into an outcome.
///
/// Plain values always succeed; a `Result` keeps its error.
pub trait IntoOutcome {
    fn into_outcome(self) -> anyhow::Result<Answer>;
}

impl IntoOutcome for Answer {
    fn into_outcome(self) -> anyhow::Result<Answer> {
        Ok(self)
    }
}

impl IntoOutcome for String {
    fn into_outcome(self) -> anyhow::Result<Answer> {
        Ok(self.into())
    }
}

impl IntoOutcome for &str {
    fn into_outcome(self) -> anyhow::Result<Answer> {
        Ok(self.into())
    }
}

impl IntoOutcome for char {
    fn into_outcome(self) -> anyhow::Result<Answer> {
        Ok(self.into())
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: Into<Answer>,
    E: Into<anyhow::Error>,
{
    fn into_outcome(self) -> anyhow::Result<Answer> {
        self.map(Into::into).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_and_text_never_equal() {
        assert_ne!(Answer::from(1), Answer::from("1"));
        assert_eq!(Answer::from(1u8), Answer::from(1i64));
        assert_eq!(Answer::from("abc"), Answer::from(String::from("abc")));
    }

    #[test]
    fn test_literal_quotes_text() {
        assert_eq!(Answer::from(-3).literal(), "-3");
        assert_eq!(Answer::from("1").literal(), "\"1\"");
        assert_eq!(Answer::from("1").to_string(), "1");
    }

    #[test]
    fn test_result_outcomes_keep_errors() {
        let ok: Result<usize, std::num::ParseIntError> = "42".parse();
        assert_eq!(ok.into_outcome().unwrap(), Answer::Int(42));

        let err: Result<usize, std::num::ParseIntError> = "x".parse();
        assert!(err.into_outcome().is_err());

        let anyhow_err: anyhow::Result<String> = Err(anyhow::anyhow!("boom"));
        assert_eq!(anyhow_err.into_outcome().unwrap_err().to_string(), "boom");
    }
}
