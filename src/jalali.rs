//! Jalali (Solar Hijri) calendar arithmetic.
//!
//! Leap years follow the 33-year arithmetic cycle: a year is leap when
//! `year % 33` is one of 1, 5, 9, 13, 17, 22, 26 or 30. This is the rule
//! used by the common Jalali libraries and agrees with the astronomical
//! calendar for the years in everyday use. Dates map to the same fixed
//! day numbers as [`gregorian`](crate::gregorian), which is how the two
//! calendars are converted.

use crate::consts::{
    ESFAND, ESFAND_DAYS, ESFAND_DAYS_LEAP, JALALI_CYCLE_DAYS, JALALI_CYCLE_YEARS, JALALI_EPOCH,
    JALALI_LEAP_REMAINDERS, JALALI_LONG_MONTH_DAYS, JALALI_SHORT_MONTH_DAYS, MAX_MONTH, SHAHRIVAR,
};
use crate::error::Invalid;

/// Leap years per 33-year cycle
const LEAPS_PER_CYCLE: i64 = JALALI_LEAP_REMAINDERS.len() as i64;
/// Aligns the leap count with the positions in `JALALI_LEAP_REMAINDERS`
const LEAP_PHASE: i64 = 21;
/// Days in Farvardin..=Shahrivar
const FIRST_HALF_DAYS: i64 = SHAHRIVAR as i64 * JALALI_LONG_MONTH_DAYS as i64;

const fn is_leap(year: i64) -> bool {
    let position = year.rem_euclid(JALALI_CYCLE_YEARS);
    let mut i = 0;
    while i < JALALI_LEAP_REMAINDERS.len() {
        if JALALI_LEAP_REMAINDERS[i] == position {
            return true;
        }
        i += 1;
    }
    false
}

/// Whether the Jalali `year` has 366 days (a 30-day Esfand).
pub const fn is_leap_year(year: u16) -> bool {
    is_leap(year as i64)
}

/// Number of days in `month` of the Jalali `year`.
///
/// Farvardin..=Shahrivar have 31 days, Mehr..=Bahman 30, and Esfand 29 or
/// 30 depending on [`is_leap_year`].
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
    if month <= SHAHRIVAR {
        JALALI_LONG_MONTH_DAYS
    } else if month < ESFAND {
        JALALI_SHORT_MONTH_DAYS
    } else if is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        ESFAND_DAYS
    }
}

/// Fixed day number of 1 Farvardin of `year`
const fn fixed_new_year(year: i64) -> i64 {
    // (8y + 21) / 33 counts the leap years in 1..year
    JALALI_EPOCH + 365 * (year - 1) + (LEAPS_PER_CYCLE * year + LEAP_PHASE).div_euclid(JALALI_CYCLE_YEARS)
}

/// Fixed day number of a Jalali date. The triple is assumed valid.
pub(crate) const fn fixed_from_jalali(year: i64, month: u8, day: u8) -> i64 {
    let month = month as i64;
    let before_month = if month <= SHAHRIVAR as i64 {
        JALALI_LONG_MONTH_DAYS as i64 * (month - 1)
    } else {
        FIRST_HALF_DAYS + JALALI_SHORT_MONTH_DAYS as i64 * (month - 1 - SHAHRIVAR as i64)
    };
    fixed_new_year(year) + before_month + day as i64 - 1
}

/// Jalali `(year, month, day)` of a fixed day number
pub(crate) const fn jalali_from_fixed(fixed: i64) -> (i64, u8, u8) {
    // Mean-year estimate, off by at most one year either way
    let mut year = (JALALI_CYCLE_YEARS * (fixed - JALALI_EPOCH)).div_euclid(JALALI_CYCLE_DAYS) + 1;
    if fixed_new_year(year + 1) <= fixed {
        year += 1;
    } else if fixed_new_year(year) > fixed {
        year -= 1;
    }

    let ordinal = fixed - fixed_new_year(year);
    let (month, day) = if ordinal < FIRST_HALF_DAYS {
        let long = JALALI_LONG_MONTH_DAYS as i64;
        (ordinal / long + 1, ordinal % long + 1)
    } else {
        let short = JALALI_SHORT_MONTH_DAYS as i64;
        let rest = ordinal - FIRST_HALF_DAYS;
        (rest / short + 1 + SHAHRIVAR as i64, rest % short + 1)
    };
    (year, month as u8, day as u8)
}
