//! Proleptic Gregorian calendar arithmetic.
//!
//! Dates are mapped to a fixed day number where 0001-01-01 is day 1.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_CENTURY, DAYS_PER_GREGORIAN_CYCLE, DAYS_PER_LEAP_CYCLE,
    FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::error::Invalid;

const fn is_leap(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn is_leap_year(year: u16) -> bool {
    is_leap(year as i64)
}

/// Number of days in `month` of `year`
///
/// # Errors
/// Returns `Invalid::Month` if `month` is not in `1..=MAX_MONTH`.
pub const fn days_in_month(year: u16, month: u8) -> Result<u8, Invalid> {
    if month == 0 || month > MAX_MONTH {
        return Err(Invalid::Month);
    }
    Ok(month_length(year, month))
}

/// Length of a month already known to be in `1..=MAX_MONTH`
pub(crate) const fn month_length(year: u16, month: u8) -> u8 {
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days in the year before the first of `month`
const fn days_before_month(year: i64, month: u8) -> i64 {
    let mut total = 0;
    let mut m = JANUARY;
    while m < month {
        total += DAYS_IN_MONTH[m as usize] as i64;
        m += 1;
    }
    if month > FEBRUARY && is_leap(year) {
        total += 1;
    }
    total
}

/// Fixed day number of a Gregorian date. The triple is assumed valid.
pub(crate) const fn fixed_from_gregorian(year: i64, month: u8, day: u8) -> i64 {
    let prior = year - 1;
    365 * prior
        + prior.div_euclid(LEAP_YEAR_CYCLE)
        - prior.div_euclid(CENTURY_CYCLE)
        + prior.div_euclid(GREGORIAN_CYCLE)
        + days_before_month(year, month)
        + day as i64
}

/// Gregorian year containing a fixed day number
const fn year_from_fixed(fixed: i64) -> i64 {
    let d0 = fixed - 1;
    let n400 = d0.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let d1 = d0.rem_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let n100 = d1 / DAYS_PER_CENTURY;
    let d2 = d1 % DAYS_PER_CENTURY;
    let n4 = d2 / DAYS_PER_LEAP_CYCLE;
    let d3 = d2 % DAYS_PER_LEAP_CYCLE;
    let n1 = d3 / 365;
    let year = GREGORIAN_CYCLE * n400 + CENTURY_CYCLE * n100 + LEAP_YEAR_CYCLE * n4 + n1;
    // The last day of a leap cycle or of a 400-year cycle lands on n = 4
    if n100 == 4 || n1 == 4 { year } else { year + 1 }
}

/// Gregorian `(year, month, day)` of a fixed day number
pub(crate) const fn gregorian_from_fixed(fixed: i64) -> (i64, u8, u8) {
    let year = year_from_fixed(fixed);
    let mut remaining = fixed - fixed_from_gregorian(year, JANUARY, 1);
    let leap = is_leap(year);
    let mut month = JANUARY;
    loop {
        let mut length = DAYS_IN_MONTH[month as usize] as i64;
        if month == FEBRUARY && leap {
            length += 1;
        }
        if remaining < length || month == MAX_MONTH {
            break;
        }
        remaining -= length;
        month += 1;
    }
    (year, month, (remaining + 1) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 1600,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                Ok(expected[month as usize]),
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), Ok(29));
        assert_eq!(days_in_month(1900, 2), Ok(28));
    }

    #[test]
    fn test_days_in_month_rejects_out_of_range_month() {
        for month in [0, 13, 255] {
            assert_eq!(days_in_month(2024, month), Err(Invalid::Month), "Month {month}");
        }
    }

    #[test]
    fn test_fixed_from_gregorian_known_days() {
        assert_eq!(fixed_from_gregorian(1, 1, 1), 1);
        assert_eq!(fixed_from_gregorian(1970, 1, 1), 719_163);
        assert_eq!(fixed_from_gregorian(2000, 1, 1), 730_120);
        assert_eq!(fixed_from_gregorian(2024, 7, 27), 739_094);
        assert_eq!(fixed_from_gregorian(622, 3, 21), 226_895);
    }

    #[test]
    fn test_gregorian_from_fixed_cycle_edges() {
        // Last days of 4, 100 and 400 year cycles
        assert_eq!(gregorian_from_fixed(fixed_from_gregorian(2000, 12, 31)), (2000, 12, 31));
        assert_eq!(gregorian_from_fixed(fixed_from_gregorian(1996, 12, 31)), (1996, 12, 31));
        assert_eq!(gregorian_from_fixed(fixed_from_gregorian(1900, 12, 31)), (1900, 12, 31));
        assert_eq!(gregorian_from_fixed(fixed_from_gregorian(2001, 1, 1)), (2001, 1, 1));
        assert_eq!(gregorian_from_fixed(fixed_from_gregorian(2024, 2, 29)), (2024, 2, 29));
        assert_eq!(gregorian_from_fixed(fixed_from_gregorian(2024, 3, 1)), (2024, 3, 1));
    }

    #[test]
    fn test_gregorian_fixed_is_contiguous() {
        let start = fixed_from_gregorian(1599, 1, 1);
        let end = fixed_from_gregorian(2401, 12, 31);
        let mut expected = (1599, 1, 1);
        for fixed in start..=end {
            let actual = gregorian_from_fixed(fixed);
            assert_eq!(actual, expected, "fixed day {fixed}");
            assert_eq!(fixed_from_gregorian(actual.0, actual.1, actual.2), fixed);

            let (y, m, d) = expected;
            expected = if d < month_length(y as u16, m) {
                (y, m, d + 1)
            } else if m < 12 {
                (y, m + 1, 1)
            } else {
                (y + 1, 1, 1)
            };
        }
    }
}
