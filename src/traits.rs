//! Holds traits and their implementation for Rust usage.

use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::Date;

/// A point in time that can be read as a Jalali [`Date`].
///
/// Only the calendar date matters, the time of day is dropped. Zoned values are read in their own
/// zone so a `DateTime<Local>` gives the caller's local date; [`SystemTime`] is always read in the
/// local zone.
pub trait ToJalali {
    /// The Gregorian calendar date this value falls on.
    fn gregorian_date(&self) -> NaiveDate;

    /// Convert this value to a Jalali [`Date`].
    fn to_jalali(&self) -> Date {
        Date::from_gregorian(self.gregorian_date())
    }
}

impl ToJalali for NaiveDate {
    fn gregorian_date(&self) -> NaiveDate {
        *self
    }
}

impl ToJalali for NaiveDateTime {
    fn gregorian_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> ToJalali for DateTime<Tz> {
    fn gregorian_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl ToJalali for SystemTime {
    fn gregorian_date(&self) -> NaiveDate {
        DateTime::<Local>::from(*self).date_naive()
    }
}

impl<T: ToJalali + ?Sized> ToJalali for &T {
    fn gregorian_date(&self) -> NaiveDate {
        (**self).gregorian_date()
    }
}
