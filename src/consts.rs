/// Maximum valid year for any calendar component (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December / Esfand)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in a full 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Days in a regular Gregorian century
pub(crate) const DAYS_PER_CENTURY: i64 = 36_524;
/// Days in a 4-year Gregorian cycle
pub(crate) const DAYS_PER_LEAP_CYCLE: i64 = 1_461;

/// Month number for Esfand, the only Jalali month whose length varies
pub const ESFAND: u8 = 12;
/// Last month of the first half of the Jalali year (31-day months)
pub const SHAHRIVAR: u8 = 6;

/// Days in each of Farvardin..=Shahrivar
pub const JALALI_LONG_MONTH_DAYS: u8 = 31;
/// Days in each of Mehr..=Bahman
pub const JALALI_SHORT_MONTH_DAYS: u8 = 30;
/// Days in Esfand for common years
pub const ESFAND_DAYS: u8 = 29;
/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Length of the Jalali intercalation cycle in years
pub(crate) const JALALI_CYCLE_YEARS: i64 = 33;
/// Length of the Jalali intercalation cycle in days (8 leap years per cycle)
pub(crate) const JALALI_CYCLE_DAYS: i64 = 12_053;
/// Positions within the 33-year cycle (`year % 33`) that are leap years
pub(crate) const JALALI_LEAP_REMAINDERS: [i64; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Smallest supported Jalali year
pub const MIN_JALALI_YEAR: u16 = 1;
/// Largest supported Jalali year
pub const MAX_JALALI_YEAR: u16 = 3177;

/// Fixed day number (Gregorian 0001-01-01 is day 1) of Jalali 1-01-01.
/// Jalali 1-01-01 falls on Gregorian 622-03-21 under the 33-year rule.
pub(crate) const JALALI_EPOCH: i64 = 226_895;

/// Fixed day number of Gregorian 1970-01-01
pub(crate) const UNIX_EPOCH_FIXED: i64 = 719_163;

/// Number of weekdays
pub(crate) const DAYS_PER_WEEK: i64 = 7;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the weekday and the rest of a descriptive date
pub const WEEKDAY_SEPARATOR: &str = " - ";
