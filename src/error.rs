//! Error types for calendar computations.

use crate::primitive::{IYear, UMonth, UMonthDay};

/// Error type for all fallible operations of this crate.
///
/// Date arithmetic on a valid Gregorian instant never fails; these only surface when a caller
/// builds Jalali coordinates by hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month is outside `1..=12`.
    #[error("month must be in 1..=12, got {month}")]
    InvalidMonth {
        /// The invalid month value.
        month: UMonth,
    },

    /// Returned when a day does not exist in the given month of the given year.
    #[error("day {day} does not exist in {year}/{month:02} (max {max_day})")]
    InvalidDay {
        /// Year of the rejected date.
        year: IYear,
        /// Month of the rejected date.
        month: UMonth,
        /// The invalid day.
        day: UMonthDay,
        /// Last valid day of that month.
        max_day: UMonthDay,
    },

    /// Returned when a Jalali date has no representable Gregorian equivalent.
    #[error("year {year} is outside the supported Gregorian range")]
    OutOfRange {
        /// The year that could not be converted.
        year: IYear,
    },
}
