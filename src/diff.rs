//! Day-count difference between two [`SimpleDate`]s.
//!
//! The count is built by borrowing: a short day is topped up from the
//! previous month, a short month from the previous year, and whole years are
//! scaled at a flat [`DAYS_PER_YEAR`]. Months between the operands are only
//! walked when a year was borrowed, and spanned leap days are not counted, so
//! multi-month and multi-year results are approximate.

use crate::consts::{DAYS_PER_YEAR, MONTHS_PER_YEAR};
use crate::types::days_in_month;
use crate::{Month, SimpleDate};
use std::iter;

/// Signed day count from `earlier` to `later`.
///
/// `later` is assumed to be the later date. Nothing enforces this: passing the
/// operands the other way round yields a meaningless (possibly negative)
/// count, so callers that do not know the order should sort the operands
/// first, as [`crate::calc::day_difference`] does.
pub fn difference(earlier: &SimpleDate, later: &SimpleDate) -> i64 {
    let day_a = i64::from(earlier.day());
    let month_a = i32::from(earlier.month());
    let year_a = i64::from(earlier.year());

    let mut day_b = i64::from(later.day());
    let mut month_b = i32::from(later.month());
    let mut year_b = i64::from(later.year());

    if day_b < day_a {
        month_b -= 1;
        // Borrowing out of January lands on December
        let borrowed = later.month_typed().previous();
        day_b += i64::from(days_in_month(earlier.year(), borrowed));
    }
    let mut total = day_b - day_a;

    if month_b < month_a {
        year_b -= 1;
        month_b += MONTHS_PER_YEAR;
        total += walk_months(later.year(), earlier.month_typed(), month_b - month_a);
    }

    if year_b > year_a {
        total += (year_b - year_a) * DAYS_PER_YEAR;
    }

    total
}

/// Sums `count` month lengths in `year`, starting with the month after `from`
/// and wrapping December to January.
fn walk_months(year: u32, from: Month, count: i32) -> i64 {
    let count = usize::try_from(count).unwrap_or_default();
    iter::successors(Some(from.next()), |month| Some(month.next()))
        .take(count)
        .map(|month| i64::from(days_in_month(year, month)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> SimpleDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_same_date_is_zero() {
        for s in ["0001/01/01", "2020/02/29", "1999/12/31", "2023/07/15"] {
            let d = date(s);
            assert_eq!(difference(&d, &d), 0, "{s} against itself");
        }
    }

    #[test]
    fn test_same_month() {
        assert_eq!(difference(&date("2020/01/01"), &date("2020/01/10")), 9);
    }

    #[test]
    fn test_day_borrow_across_month() {
        assert_eq!(difference(&date("2020/01/31"), &date("2020/02/01")), 1);
        assert_eq!(difference(&date("2023/02/28"), &date("2023/03/01")), 1);
    }

    #[test]
    fn test_day_borrow_out_of_january() {
        assert_eq!(difference(&date("2019/12/31"), &date("2020/01/01")), 1);
        assert_eq!(difference(&date("2020/03/10"), &date("2021/01/05")), 301);
    }

    #[test]
    fn test_day_borrow_uses_earlier_years_february() {
        // Borrowed February is 29 days in 2024 and 28 in 2023
        assert_eq!(difference(&date("2024/01/30"), &date("2025/03/01")), 365);
        assert_eq!(difference(&date("2023/01/30"), &date("2024/03/01")), 364);
    }

    #[test]
    fn test_month_walk_across_year() {
        // Mar..Dec of 2020 plus January 2021
        assert_eq!(difference(&date("2020/03/01"), &date("2021/01/01")), 306);
    }

    #[test]
    fn test_month_walk_uses_later_years_february() {
        // Walk visits Feb..Dec; February length comes from the later operand's year
        assert_eq!(difference(&date("2022/01/10"), &date("2023/01/05")), 360);
        assert_eq!(difference(&date("2023/01/10"), &date("2024/01/05")), 361);
    }

    #[test]
    fn test_flat_years() {
        assert_eq!(difference(&date("2020/06/15"), &date("2024/06/15")), 4 * 365);
        assert_eq!(difference(&date("0001/01/01"), &date("0101/01/01")), 100 * 365);
    }

    #[test]
    fn test_months_without_year_borrow_are_not_walked() {
        assert_eq!(difference(&date("2020/01/01"), &date("2020/03/01")), 0);
        assert_eq!(difference(&date("2020/01/01"), &date("2021/03/01")), 365);
    }

    #[test]
    fn test_short_borrowed_month_can_go_negative() {
        assert_eq!(difference(&date("2020/01/31"), &date("2020/03/01")), -1);
    }

    #[test]
    fn test_reversed_operands_are_not_symmetric() {
        assert_eq!(difference(&date("2020/02/01"), &date("2020/01/31")), 367);
    }
}
