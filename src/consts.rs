/// Minimum valid year (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum valid year (inclusive), the largest year a date string can carry
pub const MAX_YEAR: i32 = i32::MAX;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub(crate) const JANUARY: u8 = 1;
/// Month number for February
pub(crate) const FEBRUARY: u8 = 2;
/// Month number for December
pub(crate) const DECEMBER: u8 = 12;

/// Days in February for leap years
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (29 in years divisible by 4)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years, with no century correction
pub(crate) const LEAP_YEAR_CYCLE: u32 = 4;

/// Flat length of a year when scaling whole-year spans
pub const DAYS_PER_YEAR: i64 = 365;

/// Months in a year, added to a month counter when borrowing a year
pub(crate) const MONTHS_PER_YEAR: i32 = 12;

/// Date component separator (`yyyy/mm/dd`)
pub const DATE_SEPARATOR: char = '/';

