//! Persian numeral formatting for everything shown to users.

use core::fmt::Display;

/// Persian (Extended Arabic-Indic) digits, indexed by value.
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Arabic-Indic digits, accepted on input next to [`PERSIAN_DIGITS`].
pub const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Replace every ASCII digit of the displayed value with its Persian glyph.
///
/// Anything else (separators, letters, signs) passes through unchanged.
///
/// ```
/// use darsyar_calendar::to_persian_digits;
///
/// assert_eq!(to_persian_digits("1403/02/15"), "۱۴۰۳/۰۲/۱۵");
/// assert_eq!(to_persian_digits(7), "۷");
/// ```
pub fn to_persian_digits(value: impl Display) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c {
            '0'..='9' => PERSIAN_DIGITS[(c as u8 - b'0') as usize],
            _ => c,
        })
        .collect()
}

/// Replace Persian and Arabic-Indic digits with ASCII ones, the reverse of [`to_persian_digits`].
pub fn to_latin_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            PERSIAN_DIGITS
                .iter()
                .chain(ARABIC_INDIC_DIGITS.iter())
                .position(|&d| d == c)
                .map_or(c, |i| (b'0' + (i % 10) as u8) as char)
        })
        .collect()
}

/// Format a countdown as `MM:SS` in Persian digits.
///
/// Minutes are not wrapped into hours, a 90 minute session shows as `۹۰:۰۰`.
pub fn format_countdown(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    to_persian_digits(format_args!("{minutes:02}:{seconds:02}"))
}
