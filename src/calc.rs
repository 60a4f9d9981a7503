//! Caller-side day counting: takes the two raw strings a user typed, rejects
//! blanks, and reports the absolute number of days between them.

use crate::diff::difference;
use crate::prelude::*;
use crate::{ParseError, SimpleDate};

/// Which of the two inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Operand {
    #[display(fmt = "date A")]
    A,
    #[display(fmt = "date B")]
    B,
}

/// Error type for day counting between two user-supplied strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Input was empty or only whitespace.
    #[error("No value supplied for {0}")]
    MissingInput(Operand),

    /// Input was present but is not a valid date.
    #[error("Invalid {operand}: {source}")]
    InvalidDate {
        operand: Operand,
        #[source]
        source:  ParseError,
    },
}

impl CalcError {
    pub const fn operand(&self) -> Operand {
        match *self {
            Self::MissingInput(operand) | Self::InvalidDate { operand, .. } => operand,
        }
    }
}

/// Number of days between two `yyyy/mm/dd` strings, in either order.
///
/// # Errors
/// Returns `CalcError::MissingInput` for a blank input and
/// `CalcError::InvalidDate` when an input fails to parse. Date A is checked
/// before date B.
pub fn day_difference(date_a: &str, date_b: &str) -> Result<u64, CalcError> {
    let a = parse_operand(date_a, Operand::A)?;
    let b = parse_operand(date_b, Operand::B)?;
    Ok(days_between(&a, &b))
}

/// Absolute day count between two dates. The earlier date is always passed
/// as the first operand of [`difference`].
pub fn days_between(a: &SimpleDate, b: &SimpleDate) -> u64 {
    let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
    difference(earlier, later).unsigned_abs()
}

/// Renders a day count as a plain integer.
pub fn format_difference(days: u64) -> String {
    days.to_string()
}

fn parse_operand(input: &str, operand: Operand) -> Result<SimpleDate, CalcError> {
    if input.trim().is_empty() {
        return Err(CalcError::MissingInput(operand));
    }
    input
        .parse()
        .map_err(|source| CalcError::InvalidDate { operand, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;
    use std::error::Error;

    #[test]
    fn test_day_difference_same_month() {
        assert_eq!(day_difference("2020/01/01", "2020/01/10").unwrap(), 9);
        assert_eq!(day_difference("2020/01/10", "2020/01/01").unwrap(), 9);
    }

    #[test]
    fn test_day_difference_across_month() {
        assert_eq!(day_difference("2020/01/31", "2020/02/01").unwrap(), 1);
        assert_eq!(day_difference("2020/02/01", "2020/01/31").unwrap(), 1);
    }

    #[test]
    fn test_day_difference_across_year() {
        assert_eq!(day_difference("2021/01/05", "2020/03/10").unwrap(), 301);
        assert_eq!(day_difference("2019/12/31", "2020/01/01").unwrap(), 1);
    }

    #[test]
    fn test_day_difference_same_date() {
        assert_eq!(day_difference("2024/02/29", "2024/02/29").unwrap(), 0);
    }

    #[test]
    fn test_days_between_symmetric() {
        let dates = ["2020/01/31", "2020/03/01", "2021/07/04", "1999/12/31", "2024/02/29"];
        for a in dates {
            for b in dates {
                let da = SimpleDate::parse(a).unwrap();
                let db = SimpleDate::parse(b).unwrap();
                assert_eq!(days_between(&da, &db), days_between(&db, &da), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(
            day_difference("", "2020/01/01"),
            Err(CalcError::MissingInput(Operand::A))
        );
        assert_eq!(
            day_difference("2020/01/01", "   "),
            Err(CalcError::MissingInput(Operand::B))
        );
        assert_eq!(
            day_difference("", "").unwrap_err().operand(),
            Operand::A
        );
    }

    #[test]
    fn test_invalid_date_names_operand() {
        let err = day_difference("2020/01/01", "2020/13/01").unwrap_err();
        assert_eq!(err.operand(), Operand::B);
        assert!(matches!(
            err,
            CalcError::InvalidDate {
                source: ParseError::InvalidMonth(13),
                ..
            }
        ));
        assert!(err.source().is_some());

        let err = day_difference("abcd/01/01", "2020/01/01").unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidDate {
                operand: Operand::A,
                source: ParseError::UnparseableField {
                    field: Field::Year,
                    ..
                },
            }
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = day_difference("2023/02/29", "2020/01/01").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date A: Day must be a value between 1-28 (got 29)."
        );

        let err = day_difference("2020/01/01", "").unwrap_err();
        assert_eq!(err.to_string(), "No value supplied for date B");
    }

    #[test]
    fn test_format_difference() {
        assert_eq!(format_difference(0), "0");
        assert_eq!(format_difference(367), "367");
    }
}
