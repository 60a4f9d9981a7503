mod consts;
mod prelude;
mod types;

pub mod calc;
pub mod diff;

pub use calc::{CalcError, Operand, day_difference, days_between, format_difference};
pub use consts::*;
pub use diff::difference;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A calendar date with a year of at least 1, parsed from `yyyy/mm/dd`.
///
/// Every constructed value names a day that exists, where any year divisible
/// by 4 is a leap year. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", "year.get()", "month.get()", "day.get()")]
pub struct SimpleDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// The date component a parse failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0:?} (expected yyyy/mm/dd)")]
    MalformedInput(String),
    #[display(fmt = "Could not parse {field}: {value:?}")]
    UnparseableField { field: Field, value: String },
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(i32),
    #[display(fmt = "Day must be a value between {}-{} (got {}).", MIN_DAY, "max_day", "day")]
    InvalidDay { day: i32, max_day: u8 },
}

impl std::error::Error for ParseError {}

impl ParseError {
    /// The days that would have been accepted, for `InvalidDay` failures.
    pub fn valid_day_range(&self) -> Option<RangeInclusive<u8>> {
        match *self {
            Self::InvalidDay { max_day, .. } => Some(MIN_DAY..=max_day),
            _ => None,
        }
    }
}

impl SimpleDate {
    /// Assembles a date from typed components, checking the day against the
    /// month it lands in.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` does not exist in that month.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        let day = Day::new(i32::from(day.get()), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Validates raw components in year, month, day order.
    ///
    /// # Errors
    /// Returns the first of `InvalidYear`, `InvalidMonth` or `InvalidDay` that applies.
    pub fn from_parts(year: i32, month: i32, day: i32) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Parses a `yyyy/mm/dd` string. Fields after the third are ignored.
    ///
    /// # Errors
    /// Returns `MalformedInput` for fewer than three fields, `UnparseableField`
    /// for the first non-integer field, then any range failure from
    /// [`SimpleDate::from_parts`].
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        s.parse()
    }

    /// Returns the year component (as u32 for convenience)
    pub const fn year(&self) -> u32 {
        self.year.get()
    }

    /// Returns the month component (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Components as plain integers: (year, month, day)
    pub const fn to_parts(&self) -> (u32, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Whether this date's year is divisible by 4
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Signed day count from `self` to `later`. See [`diff::difference`].
    pub fn difference(&self, later: &Self) -> i64 {
        diff::difference(self, later)
    }

    fn parse_field(s: &str, field: Field) -> Result<i32, ParseError> {
        s.trim()
            .parse::<i32>()
            .map_err(|_| ParseError::UnparseableField {
                field,
                value: s.to_owned(),
            })
    }
}

impl FromStr for SimpleDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(DATE_SEPARATOR);
        let (Some(year), Some(month), Some(day)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(ParseError::MalformedInput(s.to_owned()));
        };

        let year = Self::parse_field(year, Field::Year)?;
        let month = Self::parse_field(month, Field::Month)?;
        let day = Self::parse_field(day, Field::Day)?;

        Self::from_parts(year, month, day)
    }
}

impl TryFrom<(i32, i32, i32)> for SimpleDate {
    type Error = ParseError;

    fn try_from(value: (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::from_parts(value.0, value.1, value.2)
    }
}

impl serde::Serialize for SimpleDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for SimpleDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
