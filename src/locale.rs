//! Fixed Persian and English name and digit tables.

/// Sunday based weekdays in English.
pub const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Sunday based weekdays in Persian.
pub const PERSIAN_WEEKDAYS: [&str; 7] = [
    "یکشنبه",
    "دوشنبه",
    "سه\u{200c}شنبه",
    "چهارشنبه",
    "پنج\u{200c}شنبه",
    "جمعه",
    "شنبه",
];

/// Gregorian months in English.
pub const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Jalali months in Persian.
pub const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Jalali months transliterated to English.
pub const JALALI_MONTHS: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Persian digit glyphs, indexed by the ASCII digit they stand for.
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Name of a 1-based month from one of the month tables
pub(crate) const fn month_name(table: &'static [&'static str; 12], month: u8) -> &'static str {
    table[month as usize - 1]
}

/// Persian glyph for an ASCII digit; any other character is returned unchanged.
pub const fn to_persian_digit(c: char) -> char {
    if c.is_ascii_digit() {
        PERSIAN_DIGITS[(c as u8 - b'0') as usize]
    } else {
        c
    }
}

/// ASCII digit for a Persian glyph; any other character is returned unchanged.
pub fn to_ascii_digit(c: char) -> char {
    PERSIAN_DIGITS
        .iter()
        .position(|&glyph| glyph == c)
        .and_then(|digit| char::from_digit(digit as u32, 10))
        .unwrap_or(c)
}

/// Replaces every ASCII digit in `s` with its Persian glyph.
pub fn to_persian_digits(s: &str) -> String {
    s.chars().map(to_persian_digit).collect()
}

/// Replaces every Persian digit glyph in `s` with its ASCII digit.
pub fn to_ascii_digits(s: &str) -> String {
    s.chars().map(to_ascii_digit).collect()
}
