//! Jalali (Shamsi) dates with Gregorian conversion and Persian formatting.
//!
//! ```
//! use shamsi_date::{CalendarDate, ShamsiDate};
//!
//! let date = ShamsiDate::new(1403, 5, 6)?;
//! assert_eq!(date.to_string(), "1403-05-06");
//! assert_eq!(date.to_gregorian(), CalendarDate::gregorian(2024, 7, 27)?);
//! assert_eq!(date.format_localized(), "شنبه - ۶ مرداد ۱۴۰۳");
//! # Ok::<(), shamsi_date::DateError>(())
//! ```

mod calendar;
mod clock;
mod consts;
mod convert;
mod error;
pub mod gregorian;
pub mod jalali;
pub mod locale;
mod prelude;
mod types;

pub use calendar::CalendarDate;
#[cfg(feature = "sys")]
pub use clock::SystemClock;
pub use clock::{Clock, FixedClock};
pub use consts::*;
pub use convert::{to_gregorian, to_jalali, today};
pub use error::{DateError, Invalid, ParseError};
pub use jalali::{days_in_month, is_leap_year};
pub use types::{Calendar, Weekday};

use crate::prelude::*;
use std::any::Any;
use std::str::FromStr;

/// A day in the Jalali calendar.
///
/// Always valid and within the supported span; see [`CalendarDate`].
/// Displays as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{date}")]
pub struct ShamsiDate {
    date: CalendarDate,
}

impl ShamsiDate {
    /// Creates a Jalali date, validating it
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the month or day does not exist in
    /// `year`, or `year` is outside `MIN_JALALI_YEAR..=MAX_JALALI_YEAR`.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        CalendarDate::jalali(year, month, day).map(|date| Self { date })
    }

    /// Today's date according to `clock`
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the clock reports a date outside the
    /// supported span.
    pub fn today(clock: &impl Clock) -> Result<Self, DateError> {
        convert::today(clock).map(|date| Self { date })
    }

    /// Creates a date from its Gregorian equivalent
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if `gregorian` is not a Gregorian date.
    pub fn from_gregorian(gregorian: CalendarDate) -> Result<Self, DateError> {
        convert::to_jalali(&gregorian).map(|date| Self { date })
    }

    /// Returns the Gregorian equivalent of this date
    pub const fn to_gregorian(&self) -> CalendarDate {
        self.date.to_calendar(Calendar::Gregorian)
    }

    /// Creates a date from days since Gregorian 1970-01-01
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` when the day is outside the supported span.
    pub fn from_unix_epoch_days(days: i64) -> Result<Self, DateError> {
        CalendarDate::from_unix_epoch_days(Calendar::Jalali, days).map(|date| Self { date })
    }

    /// Days since Gregorian 1970-01-01; negative before it
    pub const fn to_unix_epoch_days(&self) -> i64 {
        self.date.to_unix_epoch_days()
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.date.year()
    }

    /// Returns the month component (1 = Farvardin)
    pub const fn month(&self) -> u8 {
        self.date.month()
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    /// Returns the day of the week
    pub const fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Whether this date falls in a leap year
    pub const fn is_leap_year(&self) -> bool {
        self.date.is_leap_year()
    }

    /// Returns the underlying Jalali [`CalendarDate`]
    pub const fn as_calendar_date(&self) -> CalendarDate {
        self.date
    }

    /// Persian month name, e.g. `مرداد`
    pub const fn persian_month_name(&self) -> &'static str {
        locale::month_name(&locale::PERSIAN_MONTHS, self.month())
    }

    /// Month name transliterated to English, e.g. `Mordad`
    pub const fn english_month_name(&self) -> &'static str {
        locale::month_name(&locale::JALALI_MONTHS, self.month())
    }

    /// `YYYY-MM-DD` with zero-padded month and day
    pub fn to_iso_string(&self) -> String {
        self.to_string()
    }

    /// `<weekday> - <day> <month> <year>` in Persian names and digits,
    /// e.g. `شنبه - ۶ مرداد ۱۴۰۳`
    pub fn format_localized(&self) -> String {
        let text = format!(
            "{}{WEEKDAY_SEPARATOR}{} {} {}",
            self.weekday().persian_name(),
            self.day(),
            self.persian_month_name(),
            self.year()
        );
        locale::to_persian_digits(&text)
    }

    /// `<weekday> - <year> <day> <month>` for the Gregorian equivalent in
    /// English, e.g. `Saturday - 2024 27 July`
    pub fn format_gregorian_descriptive(&self) -> String {
        let gregorian = self.to_gregorian();
        format!(
            "{}{WEEKDAY_SEPARATOR}{} {} {}",
            gregorian.weekday().english_name(),
            gregorian.year(),
            gregorian.day(),
            locale::month_name(&locale::GREGORIAN_MONTHS, gregorian.month())
        )
    }

    /// The Gregorian descriptive form and the localized form on two lines
    pub fn format_bilingual(&self) -> String {
        format!(
            "{}\n{}",
            self.format_gregorian_descriptive(),
            self.format_localized()
        )
    }

    /// Equality against a value of any type; `false` unless `other` is an
    /// equal `ShamsiDate`.
    pub fn eq_any(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some_and(|other| other == self)
    }

    /// Parses a numeric component made of ASCII digits only
    fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
        let invalid = || ParseError::InvalidFormat(s.to_owned());
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        s.parse::<T>().map_err(|_| invalid())
    }
}

impl From<ShamsiDate> for CalendarDate {
    fn from(date: ShamsiDate) -> Self {
        date.date
    }
}

/// Accepts a date in either calendar.
impl From<CalendarDate> for ShamsiDate {
    fn from(date: CalendarDate) -> Self {
        Self {
            date: date.to_calendar(Calendar::Jalali),
        }
    }
}

impl TryFrom<(u16, u8, u8)> for ShamsiDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl FromStr for ShamsiDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`, in ASCII or Persian digits
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let ascii = locale::to_ascii_digits(trimmed);
        let parts: Vec<&str> = ascii.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} part(s): {s}",
                parts.len()
            )));
        };

        let year = Self::parse_component::<u16>(year)?;
        let month = Self::parse_component::<u8>(month)?;
        let day = Self::parse_component::<u8>(day)?;

        Ok(Self::new(year, month, day)?)
    }
}

impl serde::Serialize for ShamsiDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ShamsiDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
