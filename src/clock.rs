//! Sources for "today".
//!
//! Nothing in this crate reads the wall clock on its own; constructors that
//! need the current date take a [`Clock`].

use crate::calendar::CalendarDate;
use crate::error::DateError;
use crate::types::Calendar;

/// The `Clock` trait defines an accessor to the current date.
pub trait Clock {
    /// Today's date in the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if today is outside the supported span.
    fn today(&self) -> Result<CalendarDate, DateError>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Result<CalendarDate, DateError> {
        (**self).today()
    }
}

/// A clock that is stopped on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(CalendarDate);

impl FixedClock {
    /// Stops the clock on `date`, which may be in either calendar
    pub const fn new(date: CalendarDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Result<CalendarDate, DateError> {
        Ok(self.0.to_calendar(Calendar::Gregorian))
    }
}

/// The host system clock, read as a UTC date.
#[cfg(feature = "sys")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

#[cfg(feature = "sys")]
impl Clock for SystemClock {
    fn today(&self) -> Result<CalendarDate, DateError> {
        let days = system_epoch_days();

        #[cfg(feature = "log")]
        log::trace!("system clock reports {days} days since 1970-01-01");

        CalendarDate::from_unix_epoch_days(Calendar::Gregorian, days)
    }
}

#[cfg(feature = "sys")]
const SECONDS_PER_DAY: u64 = 86_400;

/// Whole days since 1970-01-01 UTC, rounded towards the past.
#[cfg(feature = "sys")]
fn system_epoch_days() -> i64 {
    use web_time::{SystemTime, UNIX_EPOCH};

    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_secs() / SECONDS_PER_DAY).unwrap_or(i64::MAX),
        Err(before) => {
            let days = before.duration().as_secs().div_ceil(SECONDS_PER_DAY);
            i64::try_from(days).map_or(i64::MIN, |days| -days)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_gregorian() {
        let jalali = CalendarDate::jalali(1403, 5, 6).unwrap();
        let clock = FixedClock::new(jalali);
        assert_eq!(
            clock.today().unwrap(),
            CalendarDate::gregorian(2024, 7, 27).unwrap()
        );
    }

    #[test]
    fn test_clock_by_reference() {
        let clock = FixedClock::new(CalendarDate::gregorian(2025, 3, 21).unwrap());
        let by_ref: &dyn Clock = &clock;
        assert_eq!(by_ref.today(), clock.today());
    }

    #[cfg(feature = "sys")]
    #[test]
    fn test_system_clock_is_after_2024() {
        let today = SystemClock.today().unwrap();
        assert_eq!(today.calendar(), Calendar::Gregorian);
        assert!(today >= CalendarDate::gregorian(2024, 1, 1).unwrap());
    }
}
