use crate::consts::{JALALI_EPOCH, MAX_JALALI_YEAR, MAX_MONTH, MIN_JALALI_YEAR, UNIX_EPOCH_FIXED};
use crate::error::{DateError, Invalid};
use crate::prelude::*;
use crate::types::{Calendar, Day, Month, Weekday, Year};
use crate::{gregorian, jalali};
use serde::{Deserialize, Serialize};

/// First fixed day of the supported span (Jalali 1-01-01, Gregorian 622-03-21)
const MIN_FIXED: i64 = JALALI_EPOCH;
/// Last fixed day of the supported span (Jalali 3177-12-30, Gregorian 3799-03-20)
const MAX_FIXED: i64 = jalali::fixed_from_jalali(MAX_JALALI_YEAR as i64 + 1, 1, 1) - 1;

/// A validated day in either the Jalali or the Gregorian calendar.
///
/// Both calendars are limited to the span where they overlap: Jalali
/// `1-01-01..=3177-12-30`, which is Gregorian `622-03-21..=3799-03-20`.
/// Inside that span every date has exactly one counterpart in the other
/// calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
#[serde(try_from = "CalendarDateRepr", into = "CalendarDateRepr")]
pub struct CalendarDate {
    calendar: Calendar,
    year: u16,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a date, validating it against `calendar`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the month or day does not exist or
    /// the date falls outside the supported span.
    pub fn new(calendar: Calendar, year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let invalid = |reason: Invalid| DateError::invalid(calendar, year, month, day, reason);

        let year_nz = Year::new(year).map_err(invalid)?;
        if calendar == Calendar::Jalali && !(MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&year) {
            return Err(invalid(Invalid::Year));
        }
        let month_nz = Month::new(month).map_err(invalid)?;
        let day_nz = Day::new(day, calendar, year, month_nz).map_err(invalid)?;

        let date = Self::new_unchecked(calendar, year_nz.get(), month_nz.get(), day_nz.get());
        if !(MIN_FIXED..=MAX_FIXED).contains(&date.fixed()) {
            return Err(invalid(Invalid::Year));
        }
        Ok(date)
    }

    /// Creates a Jalali date
    ///
    /// # Errors
    /// See [`CalendarDate::new`].
    pub fn jalali(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::new(Calendar::Jalali, year, month, day)
    }

    /// Creates a Gregorian date
    ///
    /// # Errors
    /// See [`CalendarDate::new`].
    pub fn gregorian(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::new(Calendar::Gregorian, year, month, day)
    }

    /// Creates a date without validation. Callers must pass a triple that
    /// exists in `calendar` and lies within the supported span.
    pub(crate) const fn new_unchecked(calendar: Calendar, year: u16, month: u8, day: u8) -> Self {
        debug_assert!(
            month != 0 && month <= MAX_MONTH && day != 0 && day <= calendar.month_length(year, month)
        );
        Self {
            calendar,
            year,
            month,
            day,
        }
    }

    /// Earliest supported date in `calendar`
    pub const fn earliest(calendar: Calendar) -> Self {
        Self::from_fixed_in_span(calendar, MIN_FIXED)
    }

    /// Latest supported date in `calendar`
    pub const fn latest(calendar: Calendar) -> Self {
        Self::from_fixed_in_span(calendar, MAX_FIXED)
    }

    /// Returns the calendar this date is expressed in
    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month component (1..=12)
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)`
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Whether the year of this date is a leap year in its calendar
    pub const fn is_leap_year(&self) -> bool {
        self.calendar.is_leap_year(self.year)
    }

    /// Returns the day of the week
    pub const fn weekday(&self) -> Weekday {
        Weekday::from_fixed(self.fixed())
    }

    /// The same day expressed in `calendar`. Never fails, since both
    /// calendars cover the same span.
    pub const fn to_calendar(self, calendar: Calendar) -> Self {
        if matches!(
            (self.calendar, calendar),
            (Calendar::Jalali, Calendar::Jalali) | (Calendar::Gregorian, Calendar::Gregorian)
        ) {
            self
        } else {
            Self::from_fixed_in_span(calendar, self.fixed())
        }
    }

    /// Fixed day number, with Gregorian 0001-01-01 as day 1
    pub(crate) const fn fixed(&self) -> i64 {
        let year = self.year as i64;
        match self.calendar {
            Calendar::Jalali => jalali::fixed_from_jalali(year, self.month, self.day),
            Calendar::Gregorian => gregorian::fixed_from_gregorian(year, self.month, self.day),
        }
    }

    const fn from_fixed_in_span(calendar: Calendar, fixed: i64) -> Self {
        debug_assert!(fixed >= MIN_FIXED && fixed <= MAX_FIXED);
        let (year, month, day) = match calendar {
            Calendar::Jalali => jalali::jalali_from_fixed(fixed),
            Calendar::Gregorian => gregorian::gregorian_from_fixed(fixed),
        };
        // Years in the supported span are at most 3799
        Self::new_unchecked(calendar, year as u16, month, day)
    }

    /// Creates a date in `calendar` from a fixed day number.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` with `Invalid::Year` when the day is
    /// outside the supported span. The reported triple is exact while its
    /// year fits in `0..=u16::MAX`; beyond that the year saturates at `0` or
    /// `u16::MAX` and the month and day are only approximate.
    pub(crate) fn from_fixed(calendar: Calendar, fixed: i64) -> Result<Self, DateError> {
        if (MIN_FIXED..=MAX_FIXED).contains(&fixed) {
            return Ok(Self::from_fixed_in_span(calendar, fixed));
        }
        // Bounded so the decomposition cannot overflow
        let bounded = fixed.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
        let (year, month, day) = match calendar {
            Calendar::Jalali => jalali::jalali_from_fixed(bounded),
            Calendar::Gregorian => gregorian::gregorian_from_fixed(bounded),
        };
        let year = u16::try_from(year).unwrap_or(if year < 0 { 0 } else { u16::MAX });
        Err(DateError::invalid(calendar, year, month, day, Invalid::Year))
    }

    /// Days since Gregorian 1970-01-01; negative before it.
    ///
    /// This is the day-granularity timestamp used by numeric array libraries.
    pub const fn to_unix_epoch_days(&self) -> i64 {
        self.fixed() - UNIX_EPOCH_FIXED
    }

    /// Creates a date in `calendar` from days since Gregorian 1970-01-01.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` when the day is outside the supported
    /// span. The error carries the date the day falls on while its year fits
    /// in a `u16`; further out the year saturates at `0` or `u16::MAX` and the
    /// month and day are approximate.
    pub fn from_unix_epoch_days(calendar: Calendar, days: i64) -> Result<Self, DateError> {
        Self::from_fixed(calendar, days.saturating_add(UNIX_EPOCH_FIXED))
    }
}

#[derive(Serialize, Deserialize)]
struct CalendarDateRepr {
    calendar: Calendar,
    year: u16,
    month: u8,
    day: u8,
}

impl TryFrom<CalendarDateRepr> for CalendarDate {
    type Error = DateError;

    fn try_from(repr: CalendarDateRepr) -> Result<Self, Self::Error> {
        Self::new(repr.calendar, repr.year, repr.month, repr.day)
    }
}

impl From<CalendarDate> for CalendarDateRepr {
    fn from(date: CalendarDate) -> Self {
        Self {
            calendar: date.calendar,
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}
