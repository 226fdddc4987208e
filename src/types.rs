use crate::consts::{DAYS_PER_WEEK, MAX_MONTH, MAX_YEAR};
use crate::error::Invalid;
use crate::prelude::*;
use crate::{gregorian, jalali, locale};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// The calendar a [`CalendarDate`](crate::CalendarDate) is expressed in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    /// Solar Hijri (Shamsi) calendar, 33-year intercalation cycle
    #[display(fmt = "Jalali")]
    Jalali,
    /// Proleptic Gregorian calendar
    #[display(fmt = "Gregorian")]
    Gregorian,
}

impl Calendar {
    /// Whether `year` has 366 days in this calendar
    pub const fn is_leap_year(self, year: u16) -> bool {
        match self {
            Self::Jalali => jalali::is_leap_year(year),
            Self::Gregorian => gregorian::is_leap_year(year),
        }
    }

    /// Number of days in `month` of `year`
    ///
    /// # Errors
    /// Returns `Invalid::Month` if `month` is not in `1..=MAX_MONTH`.
    pub const fn days_in_month(self, year: u16, month: u8) -> Result<u8, Invalid> {
        match self {
            Self::Jalali => jalali::days_in_month(year, month),
            Self::Gregorian => gregorian::days_in_month(year, month),
        }
    }

    pub(crate) const fn month_length(self, year: u16, month: u8) -> u8 {
        match self {
            Self::Jalali => jalali::month_length(year, month),
            Self::Gregorian => gregorian::month_length(year, month),
        }
    }
}

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday of a fixed day number (Gregorian 0001-01-01, day 1, is a Monday)
    pub(crate) const fn from_fixed(fixed: i64) -> Self {
        Self::ALL[fixed.rem_euclid(DAYS_PER_WEEK) as usize]
    }

    /// Index with Sunday = 0
    pub const fn index(self) -> usize {
        self as usize
    }

    /// English name, e.g. `Saturday`
    pub const fn english_name(self) -> &'static str {
        locale::ENGLISH_WEEKDAYS[self.index()]
    }

    /// Persian name, e.g. `شنبه`
    pub const fn persian_name(self) -> &'static str {
        locale::PERSIAN_WEEKDAYS[self.index()]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

/// A year in `1..=MAX_YEAR`, checked before any calendar-specific span test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Year(NonZeroU16);

impl Year {
    /// # Errors
    /// Returns `Invalid::Year` if the value is 0 or > `MAX_YEAR`.
    pub(crate) fn new(value: u16) -> Result<Self, Invalid> {
        let non_zero = NonZeroU16::new(value).ok_or(Invalid::Year)?;
        if value > MAX_YEAR {
            return Err(Invalid::Year);
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub(crate) const fn get(self) -> u16 {
        self.0.get()
    }
}

/// A month in `1..=MAX_MONTH`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// Returns `Invalid::Month` if the value is 0 or > `MAX_MONTH`.
    pub(crate) fn new(value: u8) -> Result<Self, Invalid> {
        let non_zero = NonZeroU8::new(value).ok_or(Invalid::Month)?;
        if value > MAX_MONTH {
            return Err(Invalid::Month);
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub(crate) const fn get(self) -> u8 {
        self.0.get()
    }
}

/// A day that exists in a given calendar, year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// Returns `Invalid::Day` carrying the month length if the value is 0 or too large.
    pub(crate) fn new(value: u8, calendar: Calendar, year: u16, month: Month) -> Result<Self, Invalid> {
        let max_day = calendar.month_length(year, month.get());
        let non_zero = NonZeroU8::new(value).ok_or(Invalid::Day { max_day })?;
        if value > max_day {
            return Err(Invalid::Day { max_day });
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub(crate) const fn get(self) -> u8 {
        self.0.get()
    }
}
