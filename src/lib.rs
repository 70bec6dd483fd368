#![doc = include_str!("../README.md")]

use core::fmt::Display;

use chrono::{Datelike, Local, NaiveDate};

#[macro_use]
#[path = "macro.rs"]
mod macros;

pub mod digits;
pub mod error;
pub mod month;
pub mod primitive;
pub mod traits;

#[cfg(feature = "wasm")]
pub mod ffi;

pub use digits::{format_countdown, to_latin_digits, to_persian_digits};
pub use error::CalendarError;
pub use month::{
    CalendarDay, MonthView, current_jalali_month_days, current_jalali_month_days_now, month_title,
};
pub use primitive::{IDayDiff, IYear, Month, Ordinal, UMonth, UMonthDay, UOrdinal, Weekday, Year};
pub use traits::ToJalali;

/// Is the given Jalali year leap (see [`Year::is_leap`]).
pub fn is_leap_year(year: IYear) -> bool {
    Year::new(year).is_leap()
}

/// Jalali year, month and day of an instant, read in the instant's own time zone.
///
/// Time of day is ignored.
pub fn jalali_parts_of(instant: impl ToJalali) -> JalaliParts {
    instant.to_jalali().parts()
}

/// The number of days in a Jalali month: 31 for months 1 to 6, 30 for 7 to 11 and 29 or 30 for
/// Esfand depending on [`Year::is_leap`].
pub fn days_in_jalali_month(year: IYear, month: UMonth) -> Result<UMonthDay, CalendarError> {
    Ok(Month::new(month)?.max_day(Year::new(year)))
}

/// The Persian weekday (Saturday = 0 ... Friday = 6) of a Jalali date.
pub fn jalali_day_of_week(
    year: IYear,
    month: UMonth,
    day: UMonthDay,
) -> Result<Weekday, CalendarError> {
    Date::from_ymd(year, month, day)?.weekday()
}

/// The Gregorian date of the first day of a Jalali month.
pub fn anchor_date(year: IYear, month: UMonth) -> Result<NaiveDate, CalendarError> {
    Date::from_ymd(year, month, 1)?.to_gregorian()
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today's Jalali date as `YYYY/MM/DD` with ASCII digits.
pub fn today_jalali_string() -> String {
    today().to_jalali().to_string()
}

/// Plain year, month and day triple of a Jalali date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JalaliParts {
    pub year: IYear,
    pub month: UMonth,
    pub day: UMonthDay,
}

impl Display for JalaliParts {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Jalali equivalent of the Date in whatever measures.
///
/// Since this struct works by measuring days. Does not concern leap seconds or smaller units.
///
/// Dates are stored as a year and the day of that year which makes ordering and day arithmetic
/// independent of month lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Year,
    ordinal: Ordinal,
}

impl Date {
    // constructors

    /// Create a date if the month exists and the day exists in that month of that year.
    pub fn from_ymd(year: IYear, month: UMonth, day: UMonthDay) -> Result<Self, CalendarError> {
        let y = Year::new(year);
        let m = Month::new(month)?;
        let max_day = m.max_day(y);
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self {
            year: y,
            ordinal: Ordinal::from_month_day(m, day),
        })
    }

    /// Create a date from a day of the year if the year is long enough to have it.
    pub fn from_y_ordinal(year: IYear, ordinal: UOrdinal) -> Option<Self> {
        let year = Year::new(year);
        let ordinal = Ordinal::new(ordinal)?;
        if ordinal > year.max_ordinal() {
            return None;
        }
        Some(Self { year, ordinal })
    }

    /// Convert a Gregorian date.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let date = Self::from_days_from_ce(date.num_days_from_ce());
        tracing::trace!(%date, "converted gregorian date");
        date
    }

    /// Build the date that is this many days from the Common Era (0001-01-01 is day 1).
    fn from_days_from_ce(days: i32) -> Self {
        let days = days as i64;
        // |days| < 2^31 keeps the year far inside `IYear`
        let year = Year::containing_day_from_ce(days);
        let first = Year::new(year as IYear).first_day_from_ce();
        Self {
            year: Year::new(year as IYear),
            ordinal: Ordinal((days - first + 1) as UOrdinal),
        }
    }

    // getters

    /// Getter for the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Getter for the month.
    pub fn month(&self) -> Month {
        self.ordinal.month_day().0
    }

    /// Getter for the day of month.
    pub fn day(&self) -> UMonthDay {
        self.ordinal.month_day().1
    }

    /// Getter for the day of the year (1..=366).
    pub fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    /// Year, month and day as plain numbers.
    pub fn parts(&self) -> JalaliParts {
        let (month, day) = self.ordinal.month_day();
        JalaliParts {
            year: self.year.get(),
            month: month.get(),
            day,
        }
    }

    /// Is this year leap (see [`Year::is_leap`]).
    pub fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Number of days in the month of this date.
    pub fn days_in_month(&self) -> UMonthDay {
        self.month().max_day(self.year)
    }

    /// The first day of the month of this date.
    pub fn first_of_month(&self) -> Self {
        Self {
            year: self.year,
            ordinal: Ordinal::from_month_day(self.month(), 1),
        }
    }

    // conversions

    /// This date in days from the Common Era (0001-01-01 is day 1).
    pub fn days_from_ce(&self) -> i64 {
        self.year.first_day_from_ce() + self.ordinal.get() as i64 - 1
    }

    /// Convert this date to a Gregorian one.
    pub fn to_gregorian(&self) -> Result<NaiveDate, CalendarError> {
        i32::try_from(self.days_from_ce())
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(CalendarError::OutOfRange {
                year: self.year.get(),
            })
    }

    /// The Persian weekday of this date, read from its Gregorian equivalent.
    pub fn weekday(&self) -> Result<Weekday, CalendarError> {
        Ok(Weekday::from_gregorian(self.to_gregorian()?.weekday()))
    }

    // arithmetic

    /// The date `days` days after this one (before it for negative values).
    ///
    /// Returns `None` past the range of days representable from the Common Era.
    pub fn checked_add_days(&self, days: IDayDiff) -> Option<Self> {
        let target = self.days_from_ce().checked_add(days)?;
        i32::try_from(target).ok().map(Self::from_days_from_ce)
    }

    /// The date `days` days before this one.
    pub fn checked_sub_days(&self, days: IDayDiff) -> Option<Self> {
        self.checked_add_days(days.checked_neg()?)
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.parts(), f)
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Self::from_gregorian(value)
    }
}

impl TryFrom<Date> for NaiveDate {
    type Error = CalendarError;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        value.to_gregorian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gregorian(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// The not so leap year of 1348, on Dey (10) 11th when Epoch (1970/1/1) starts.
    fn epoch_start() -> Date {
        Date::from_ymd(1348, 10, 11).unwrap()
    }

    #[test]
    fn test_unix_epoch_matches_consts() {
        let epoch = Date::from_gregorian(gregorian(1970, 1, 1));
        assert_eq!(epoch, epoch_start());
        assert_eq!(epoch.year(), Year::EPOCH);
        assert_eq!(epoch.month(), Month::EPOCH);
        assert_eq!(epoch.ordinal(), Ordinal::EPOCH);
    }

    #[test]
    fn test_known_conversions() {
        let cases = [
            ((2024, 3, 20), (1403, 1, 1)),
            ((2020, 3, 20), (1399, 1, 1)),
            ((2021, 3, 20), (1399, 12, 30)),
            ((2021, 3, 21), (1400, 1, 1)),
            ((2024, 3, 19), (1402, 12, 29)),
            ((2024, 5, 4), (1403, 2, 15)),
            ((2025, 3, 20), (1403, 12, 30)),
            ((2025, 3, 21), (1404, 1, 1)),
            ((2025, 5, 3), (1404, 2, 13)),
            ((2026, 10, 16), (1405, 7, 24)),
        ];
        for ((gy, gm, gd), (y, m, d)) in cases {
            let g = gregorian(gy, gm, gd);
            let j = Date::from_gregorian(g);
            assert_eq!(
                j.parts(),
                JalaliParts {
                    year: y,
                    month: m,
                    day: d
                },
                "{} converted wrong",
                g
            );
            assert_eq!(j.to_gregorian(), Ok(g), "{} did not convert back", j);
        }
    }

    #[test]
    fn test_gregorian_round_trip_across_centuries() {
        let mut g = gregorian(1900, 1, 1);
        let end = gregorian(2100, 12, 31);
        let mut previous = Date::from_gregorian(g);
        while g < end {
            g = g.succ_opt().unwrap();
            let j = Date::from_gregorian(g);
            assert_eq!(j.to_gregorian(), Ok(g));
            assert_eq!(previous.checked_add_days(1), Some(j), "day after {}", previous);
            previous = j;
        }
    }

    #[test]
    fn test_from_ymd_rejects_missing_days() {
        assert_eq!(
            Date::from_ymd(1402, 12, 30),
            Err(CalendarError::InvalidDay {
                year: 1402,
                month: 12,
                day: 30,
                max_day: 29
            })
        );
        assert!(Date::from_ymd(1403, 12, 30).is_ok());
        assert!(matches!(
            Date::from_ymd(1403, 7, 31),
            Err(CalendarError::InvalidDay { max_day: 30, .. })
        ));
        assert!(matches!(
            Date::from_ymd(1403, 1, 0),
            Err(CalendarError::InvalidDay { .. })
        ));
        assert_eq!(
            Date::from_ymd(1403, 13, 1),
            Err(CalendarError::InvalidMonth { month: 13 })
        );
    }

    #[test]
    fn test_from_y_ordinal_respects_leap() {
        assert!(Date::from_y_ordinal(1402, 366).is_none());
        assert_eq!(
            Date::from_y_ordinal(1403, 366).map(|d| d.parts()),
            Some(JalaliParts {
                year: 1403,
                month: 12,
                day: 30
            })
        );
        assert!(Date::from_y_ordinal(1403, 0).is_none());
    }

    #[test]
    fn test_add_days_epoch_1348() {
        let test = |offset: IDayDiff, (y, m, d): (IYear, UMonth, UMonthDay)| {
            let v = epoch_start().checked_add_days(offset).unwrap();
            assert_eq!(v, Date::from_ymd(y, m, d).unwrap(), "offset {}", offset);
        };

        test(0, (1348, 10, 11));
        test(1, (1348, 10, 12));
        test(32, (1348, 11, 13));
        test(62, (1348, 12, 13));
        test(78, (1348, 12, 29));
        // not leap
        test(79, (1349, 1, 1));
        test(79 + 186, (1349, 7, 1));
        test(-11, (1348, 9, 30));
    }

    #[test]
    fn test_sub_days_crosses_year() {
        let nowruz = Date::from_ymd(1404, 1, 1).unwrap();
        assert_eq!(
            nowruz.checked_sub_days(1).map(|d| d.parts()),
            Some(JalaliParts {
                year: 1403,
                month: 12,
                day: 30
            })
        );
        assert_eq!(nowruz.checked_sub_days(IDayDiff::MIN), None);
    }

    #[test]
    fn test_to_gregorian_out_of_range() {
        let far = Date::from_ymd(1_000_000, 1, 1).unwrap();
        assert_eq!(
            far.to_gregorian(),
            Err(CalendarError::OutOfRange { year: 1_000_000 })
        );
    }

    #[test]
    fn test_days_in_jalali_month_table() {
        for year in 1300..1500 {
            for month in 1..=6 {
                assert_eq!(days_in_jalali_month(year, month), Ok(31));
            }
            for month in 7..=11 {
                assert_eq!(days_in_jalali_month(year, month), Ok(30));
            }
            let esfand = if is_leap_year(year) { 30 } else { 29 };
            assert_eq!(days_in_jalali_month(year, 12), Ok(esfand));
        }
        assert_eq!(days_in_jalali_month(1399, 12), Ok(30));
        assert_eq!(days_in_jalali_month(1403, 12), Ok(30));
        assert_eq!(days_in_jalali_month(1402, 12), Ok(29));
        assert_eq!(days_in_jalali_month(1404, 12), Ok(29));
    }

    #[test]
    fn test_days_in_jalali_month_invalid() {
        assert_eq!(
            days_in_jalali_month(1403, 0),
            Err(CalendarError::InvalidMonth { month: 0 })
        );
        assert_eq!(
            days_in_jalali_month(1403, 13),
            Err(CalendarError::InvalidMonth { month: 13 })
        );
    }

    #[test]
    fn test_day_of_week_known_dates() {
        // 2024-05-04 was a Saturday
        assert_eq!(jalali_day_of_week(1403, 2, 15), Ok(Weekday::Saturday));
        // 2024-03-20 was a Wednesday
        assert_eq!(jalali_day_of_week(1403, 1, 1), Ok(Weekday::Wednesday));
        // 1970-01-01 was a Thursday
        assert_eq!(jalali_day_of_week(1348, 10, 11), Ok(Weekday::Thursday));
        // 2026-10-16 is a Friday
        assert_eq!(jalali_day_of_week(1405, 7, 24), Ok(Weekday::Friday));
        assert_eq!(
            jalali_day_of_week(1403, 13, 1),
            Err(CalendarError::InvalidMonth { month: 13 })
        );
    }

    #[test]
    fn test_day_of_week_cycles_through_year() {
        let mut date = Date::from_ymd(1402, 1, 1).unwrap();
        let mut weekday = date.weekday().unwrap();
        for _ in 0..800 {
            date = date.checked_add_days(1).unwrap();
            let next = date.weekday().unwrap();
            assert_eq!(next, weekday.succ(), "weekday of {}", date);
            assert_eq!(next.index(), (weekday.index() + 1) % 7);
            weekday = next;
        }
    }

    #[test]
    fn test_anchor_date() {
        assert_eq!(anchor_date(1403, 2), Ok(gregorian(2024, 4, 20)));
        assert_eq!(anchor_date(1403, 12), Ok(gregorian(2025, 2, 19)));
        assert_eq!(
            anchor_date(1403, 0),
            Err(CalendarError::InvalidMonth { month: 0 })
        );
    }

    #[test]
    fn test_jalali_parts_of_ignores_time() {
        let instant = gregorian(2024, 5, 4).and_hms_opt(0, 0, 1).unwrap();
        assert_eq!(jalali_parts_of(instant).to_string(), "1403/02/15");
    }

    #[test]
    fn test_today_string_shape() {
        let today = today_jalali_string();
        let parts: Vec<&str> = today.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 2);
    }

    #[test]
    fn test_first_of_month_matches_anchor() {
        let date = Date::from_gregorian(gregorian(2024, 5, 4));
        let first = date.first_of_month();
        assert_eq!(first.parts().to_string(), "1403/02/01");
        assert_eq!(first.to_gregorian(), anchor_date(1403, 2));
        assert_eq!(date.days_in_month(), 31);
        assert!(date.is_leap_year());
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(Date::from_ymd(1403, 2, 5).unwrap().to_string(), "1403/02/05");
    }
}
