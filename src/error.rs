use crate::consts::MAX_MONTH;
use crate::prelude::*;
use crate::types::Calendar;

/// Why a date component was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Invalid {
    /// Year is 0, above `MAX_YEAR`, or outside the span supported by the calendar.
    #[display(fmt = "year is outside the supported range")]
    Year,
    /// Month is not in `1..=MAX_MONTH`.
    #[display(fmt = "month must be 1-{}", MAX_MONTH)]
    Month,
    /// Day is 0 or exceeds the length of its month.
    #[display(fmt = "day must be 1-{max_day}")]
    Day { max_day: u8 },
    /// The date belongs to the other calendar.
    #[display(fmt = "expected a {expected} date")]
    Calendar { expected: Calendar },
}

impl std::error::Error for Invalid {}

/// Error returned by every fallible construction or conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DateError {
    /// The triple does not denote a supported day of `calendar`.
    #[error("Invalid {calendar} date {year:04}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        calendar: Calendar,
        year: u16,
        month: u8,
        day: u8,
        reason: Invalid,
    },
}

impl DateError {
    pub(crate) fn invalid(calendar: Calendar, year: u16, month: u8, day: u8, reason: Invalid) -> Self {
        #[cfg(feature = "log")]
        log::debug!("rejecting {calendar} date {year:04}-{month:02}-{day:02}: {reason}");

        Self::InvalidDate {
            calendar,
            year,
            month,
            day,
            reason,
        }
    }

    /// Returns the reason the date was rejected
    pub const fn reason(&self) -> Invalid {
        match *self {
            Self::InvalidDate { reason, .. } => reason,
        }
    }
}

/// Error returned when parsing a date from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "{_0}")]
    Date(DateError),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Date(err) => Some(err),
            Self::InvalidFormat(_) | Self::EmptyInput => None,
        }
    }
}

impl From<DateError> for ParseError {
    fn from(err: DateError) -> Self {
        Self::Date(err)
    }
}
