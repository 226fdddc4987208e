//! Conversion between Jalali and Gregorian dates.

use crate::calendar::CalendarDate;
use crate::clock::Clock;
use crate::error::{DateError, Invalid};
use crate::types::Calendar;

fn expect_calendar(date: &CalendarDate, expected: Calendar) -> Result<(), DateError> {
    if date.calendar() == expected {
        Ok(())
    } else {
        let (year, month, day) = date.to_tuple();
        Err(DateError::invalid(
            date.calendar(),
            year,
            month,
            day,
            Invalid::Calendar { expected },
        ))
    }
}

/// Converts a Jalali date to its Gregorian equivalent.
///
/// # Errors
/// Returns `DateError::InvalidDate` if `date` is not a Jalali date.
pub fn to_gregorian(date: &CalendarDate) -> Result<CalendarDate, DateError> {
    expect_calendar(date, Calendar::Jalali)?;
    Ok(date.to_calendar(Calendar::Gregorian))
}

/// Converts a Gregorian date to its Jalali equivalent.
///
/// # Errors
/// Returns `DateError::InvalidDate` if `date` is not a Gregorian date.
pub fn to_jalali(date: &CalendarDate) -> Result<CalendarDate, DateError> {
    expect_calendar(date, Calendar::Gregorian)?;
    Ok(date.to_calendar(Calendar::Jalali))
}

/// Today's Jalali date according to `clock`.
///
/// # Errors
/// Returns `DateError::InvalidDate` if the clock reports a date outside the
/// supported span, or a date that is not Gregorian.
pub fn today(clock: &impl Clock) -> Result<CalendarDate, DateError> {
    let today = clock.today()?;
    to_jalali(&today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::jalali;

    #[test]
    fn test_reference_dates() {
        let cases = [
            ((1403, 5, 6), (2024, 7, 27)),
            ((1348, 10, 11), (1970, 1, 1)),
            ((1379, 1, 1), (2000, 3, 20)),
            ((1403, 12, 30), (2025, 3, 20)),
            ((1404, 1, 1), (2025, 3, 21)),
            ((1, 1, 1), (622, 3, 21)),
            ((3177, 12, 30), (3799, 3, 20)),
        ];
        for ((jy, jm, jd), (gy, gm, gd)) in cases {
            let jalali = CalendarDate::jalali(jy, jm, jd).unwrap();
            let gregorian = CalendarDate::gregorian(gy, gm, gd).unwrap();
            assert_eq!(to_gregorian(&jalali), Ok(gregorian), "{jalali} to Gregorian");
            assert_eq!(to_jalali(&gregorian), Ok(jalali), "{gregorian} to Jalali");
        }
    }

    #[test]
    fn test_wrong_calendar_is_rejected() {
        let gregorian = CalendarDate::gregorian(2024, 7, 27).unwrap();
        let err = to_gregorian(&gregorian).unwrap_err();
        assert_eq!(
            err.reason(),
            Invalid::Calendar {
                expected: Calendar::Jalali
            }
        );

        let jalali = CalendarDate::jalali(1403, 5, 6).unwrap();
        assert!(to_jalali(&jalali).is_err());
    }

    #[test]
    fn test_round_trip_every_jalali_day() {
        let mut date = CalendarDate::earliest(Calendar::Jalali);
        let last = CalendarDate::latest(Calendar::Jalali);
        loop {
            let gregorian = to_gregorian(&date).unwrap();
            assert_eq!(to_jalali(&gregorian).unwrap(), date);
            if date == last {
                break;
            }
            date = CalendarDate::from_unix_epoch_days(Calendar::Jalali, date.to_unix_epoch_days() + 1)
                .unwrap();
        }
    }

    #[test]
    fn test_round_trip_gregorian_sample() {
        for year in (623..=3798).step_by(7) {
            for month in 1..=12 {
                for day in [1, 15, 28] {
                    let gregorian = CalendarDate::gregorian(year, month, day).unwrap();
                    let jalali = to_jalali(&gregorian).unwrap();
                    assert_eq!(to_gregorian(&jalali).unwrap(), gregorian);
                }
            }
        }
    }

    #[test]
    fn test_conversion_preserves_order() {
        let a = CalendarDate::jalali(1403, 12, 30).unwrap();
        let b = CalendarDate::jalali(1404, 1, 1).unwrap();
        let (ga, gb) = (to_gregorian(&a).unwrap(), to_gregorian(&b).unwrap());
        assert!(a < b);
        assert!(ga < gb);
        assert_eq!(gb.to_unix_epoch_days() - ga.to_unix_epoch_days(), 1);
    }

    #[test]
    fn test_leap_year_agrees_with_conversion() {
        for year in 1..3177u16 {
            let first = CalendarDate::jalali(year, 1, 1).unwrap();
            let next = CalendarDate::jalali(year + 1, 1, 1).unwrap();
            let length = to_gregorian(&next).unwrap().to_unix_epoch_days()
                - to_gregorian(&first).unwrap().to_unix_epoch_days();
            assert_eq!(
                length == 366,
                jalali::is_leap_year(year),
                "Year {year} is {length} days long"
            );
        }
    }

    #[test]
    fn test_today_uses_injected_clock() {
        let clock = FixedClock::new(CalendarDate::gregorian(2024, 7, 27).unwrap());
        let today = today(&clock).unwrap();
        assert_eq!(today, CalendarDate::jalali(1403, 5, 6).unwrap());
    }
}
