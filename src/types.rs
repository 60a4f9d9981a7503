use crate::consts::{
    DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH,
    MIN_DAY, MIN_YEAR,
};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=`i32::MAX`).
/// Uses `NonZeroU32` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Year(NonZeroU32);

impl Year {
    /// Creates a new Year, validating that it's at least `MIN_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is below 1.
    pub fn new(value: i32) -> Result<Self, ParseError> {
        if value < MIN_YEAR {
            return Err(ParseError::InvalidYear(i64::from(value)));
        }
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(ParseError::InvalidYear(i64::from(value)))
    }

    /// Returns the year value as u32
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Whether February of this year has 29 days
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u32> for Year {
    type Error = ParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let value = i32::try_from(value).map_err(|_| ParseError::InvalidYear(i64::from(value)))?;
        Self::new(value)
    }
}

impl From<Year> for u32 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// January, the month after December
    pub const JANUARY: Self = Self(NonZeroU8::MIN);
    /// December, the month before January
    pub const DECEMBER: Self = Self(NonZeroU8::MIN.saturating_add(DECEMBER - JANUARY));

    /// Creates a new Month, validating that it's within `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is outside 1-12.
    pub fn new(value: i32) -> Result<Self, ParseError> {
        u8::try_from(value)
            .ok()
            .filter(|&m| m <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(ParseError::InvalidMonth(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// The following month, wrapping December to January
    pub const fn next(self) -> Self {
        if self.get() == DECEMBER {
            Self::JANUARY
        } else {
            Self(self.0.saturating_add(1))
        }
    }

    /// The preceding month, wrapping January to December
    pub const fn previous(self) -> Self {
        match NonZeroU8::new(self.get() - 1) {
            Some(month) => Self(month),
            None => Self::DECEMBER,
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it exists in the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` carrying the month's last day if the
    /// value falls outside `1..=days_in_month(year, month)`.
    pub fn new(value: i32, year: Year, month: Month) -> Result<Self, ParseError> {
        let max_day = days_in_month(year.get(), month);
        Self::bounded(value, max_day)
    }

    fn bounded(value: i32, max_day: u8) -> Result<Self, ParseError> {
        u8::try_from(value)
            .ok()
            .filter(|&d| (MIN_DAY..=max_day).contains(&d))
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(ParseError::InvalidDay {
                day: value,
                max_day,
            })
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so only the longest month applies
        Self::bounded(i32::from(value), DAYS_IN_MONTH[DECEMBER as usize])
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Every year divisible by 4 is a leap year. Century years are not excluded.
pub const fn is_leap_year(year: u32) -> bool {
    year % LEAP_YEAR_CYCLE == 0
}

/// Length of `month` in `year`. `Month` is always 1-12, so the table lookup
/// cannot go out of bounds.
pub const fn days_in_month(year: u32, month: Month) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}
