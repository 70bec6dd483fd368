//! Holds the primitive aliases and transparent wrappers and their utilities.

use crate::CalendarError;

/// The default primitive that holds all the years ([`Year::MIN`] to [`Year::MAX`]).
///
/// There is no unsigned equivalent for this type like the others.
pub type IYear = i32;

/// The default primitive that holds all the values for months ([`Month::MIN`] to [`Month::MAX`]).
pub type UMonth = u8;

/// The unsigned primitive type for counting days of a [`Month`].
pub type UMonthDay = u8;

/// The default primitive that holds all the ordinals ([`Ordinal::MIN`] to [`Ordinal::MAX`]).
pub type UOrdinal = u16;

/// Counts consecutive days for addition and subtraction operations.
pub type IDayDiff = i64;

/// Days in every month of the first half of the year (Farvardin to Shahrivar).
pub const FIRST_HALF_MAX_DOM: UMonthDay = 31;

/// Days in the months of the second half of the year, Esfand of leap years included.
pub const SECOND_HALF_MAX_DOM: UMonthDay = 30;

/// Days in Esfand of a common year.
pub const ESFAND_COMMON_MAX_DOM: UMonthDay = 29;

/// Days in a full 33-year cycle (8 leap years).
const CYCLE_DAYS: i64 = 33 * 365 + 8;

/// 1 Farvardin of year 1 counted in days from the Common Era (0001-01-01 is day 1).
///
/// Calibrated so that 1348/10/11 falls on 1970-01-01.
const EPOCH_DAYS_FROM_CE: i64 = 226_895;

/// The base year counter type for Jalali calendar.
///
/// Years use astronomical numbering: year 0 is the year before year 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Year(pub(crate) IYear);

int_wrapper! {
    ident: Year,
    inner: IYear,
}

impl Year {
    /// Unix Epoch in this format (equivalent to Gregorian 1970).
    pub const EPOCH: Self = Self(1348);

    /// The furthest year in the past possible for this struct.
    pub const MIN: Self = Self(IYear::MIN);

    /// The furthest year in the future possible for this struct.
    pub const MAX: Self = Self(IYear::MAX);

    /// Years that are not leap while 33-year rule marks them as leap.
    ///
    /// "All these years are not leap, while they are considered leap by the 33-year
    /// rule. The year following each of them is leap, but it's considered non-leap
    /// by the 33-year rule. This table has been tested to match the modified
    /// astronomical algorithm based on the 52.5 degrees east meridian from 1178 AP
    /// (an arbitrary date before the Persian calendar was adopted in 1304 AP) to
    /// 3000 AP (an arbitrary date far into the future)."
    ///
    /// Taken from
    /// <https://github.com/unicode-org/icu4x/blob/3e3da0a0a34bfe3056d0f89183270ea683f4a23c/utils/calendrical_calculations/src/persian.rs#L23>
    pub const NON_LEAP_CORRECTION: [IYear; 78] = [
        1502, 1601, 1634, 1667, 1700, 1733, 1766, 1799, 1832, 1865, 1898, 1931, 1964, 1997, 2030,
        2059, 2063, 2096, 2129, 2158, 2162, 2191, 2195, 2224, 2228, 2257, 2261, 2290, 2294, 2323,
        2327, 2356, 2360, 2389, 2393, 2422, 2426, 2455, 2459, 2488, 2492, 2521, 2525, 2554, 2558,
        2587, 2591, 2620, 2624, 2653, 2657, 2686, 2690, 2719, 2723, 2748, 2752, 2756, 2781, 2785,
        2789, 2818, 2822, 2847, 2851, 2855, 2880, 2884, 2888, 2913, 2917, 2921, 2946, 2950, 2954,
        2979, 2983, 2987,
    ];

    /// Create a year from its number.
    pub const fn new(value: IYear) -> Self {
        Self(value)
    }

    /// A search into [`Self::NON_LEAP_CORRECTION`].
    pub fn is_non_leap_correction(&self) -> bool {
        in_correction_table(self.0 as i64)
    }

    /// Is this year a leap year (Esfand has 30 days and the year 366).
    ///
    /// Calculated using the 33-year rule, corrected by [`Self::NON_LEAP_CORRECTION`]. Taken from
    /// <https://github.com/unicode-org/icu4x/blob/3e3da0a0a34bfe3056d0f89183270ea683f4a23c/utils/calendrical_calculations/src/persian.rs#L161C1-L173C2>
    pub fn is_leap(&self) -> bool {
        let year = self.0 as i64;
        if in_correction_table(year) {
            return false;
        }
        if in_correction_table(year - 1) {
            return true;
        }

        (25 * year + 11).rem_euclid(33) < 8
    }

    /// Return the number of the maximum consecutive day of the year (365 or 366 for leaps).
    pub fn max_ordinal(&self) -> Ordinal {
        if self.is_leap() {
            Ordinal::MAX
        } else {
            Ordinal::MAX_NON_LEAP
        }
    }

    /// 1 Farvardin (Nowruz) of this year in days from the Common Era.
    pub fn first_day_from_ce(&self) -> i64 {
        first_day_from_ce(self.0 as i64)
    }

    /// Find the year a day (counted from the Common Era) falls in.
    ///
    /// The 33-year cycle gives an estimate at most one year away; the correction table can move a
    /// new year by a single day so the estimate is walked to the exact year.
    pub(crate) fn containing_day_from_ce(days: i64) -> i64 {
        let mut year = 1 + (33 * (days - EPOCH_DAYS_FROM_CE)).div_euclid(CYCLE_DAYS);
        while first_day_from_ce(year) > days {
            year -= 1;
        }
        while first_day_from_ce(year + 1) <= days {
            year += 1;
        }
        year
    }
}

impl From<IYear> for Year {
    fn from(value: IYear) -> Self {
        Self::new(value)
    }
}

fn in_correction_table(year: i64) -> bool {
    IYear::try_from(year).is_ok_and(|y| Year::NON_LEAP_CORRECTION.binary_search(&y).is_ok())
}

/// Every leap of the plain 33-year rule before `year` is counted by `(8 * year + 21) / 33`; each
/// correction entry pushes one leap day a year later, shortening the year after it.
fn first_day_from_ce(year: i64) -> i64 {
    let mut days = 365 * (year - 1) + (8 * year + 21).div_euclid(33);
    if in_correction_table(year - 1) {
        days -= 1;
    }
    EPOCH_DAYS_FROM_CE + days
}

/// Holds valid months count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Month(pub(crate) UMonth);

int_wrapper! {
    ident: Month,
    inner: UMonth,
    checked: Month::new,
}

impl Month {
    /// Unix Epoch in this format (equivalent to Gregorian January (1st) in 1970, [`Year::EPOCH`]).
    pub const EPOCH: Self = Self(10);

    /// The first month of the Jalali year; 1: Farvardin.
    pub const MIN: Self = Self(1);

    /// The start of the second half of the year in months.
    pub const MID: Self = Self(7);

    /// The last month of the Jalali year; 12: Esfand.
    pub const MAX: Self = Self(12);

    /// Jalali months in Persian.
    pub const PERSIAN_NAMES: [&'static str; 12] = [
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

    /// Jalali months in English.
    pub const ENGLISH_NAMES: [&'static str; 12] = [
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

    /// Create a month if in `1..=12`.
    pub const fn new(value: UMonth) -> Result<Self, CalendarError> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            Err(CalendarError::InvalidMonth { month: value })
        } else {
            Ok(Self(value))
        }
    }

    /// Days of the year before the first day of this month.
    pub const fn to_ordinal_assume_zero(&self) -> UOrdinal {
        let zm = self.0 as UOrdinal - 1;
        if zm < 6 {
            zm * FIRST_HALF_MAX_DOM as UOrdinal
        } else {
            (zm - 6) * SECOND_HALF_MAX_DOM as UOrdinal + 6 * FIRST_HALF_MAX_DOM as UOrdinal
        }
    }

    /// Number of days of this month in the given year.
    pub fn max_day(&self, year: Year) -> UMonthDay {
        match self.0 {
            1..=6 => FIRST_HALF_MAX_DOM,
            7..=11 => SECOND_HALF_MAX_DOM,
            _ if year.is_leap() => SECOND_HALF_MAX_DOM,
            _ => ESFAND_COMMON_MAX_DOM,
        }
    }

    /// The Persian name of this month (e.g. "اردیبهشت").
    pub const fn persian_name(&self) -> &'static str {
        Self::PERSIAN_NAMES[self.0 as usize - 1]
    }

    /// The transliterated name of this month (e.g. "Ordibehesht").
    pub const fn english_name(&self) -> &'static str {
        Self::ENGLISH_NAMES[self.0 as usize - 1]
    }
}

/// A value representing a day of a year in a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Ordinal(pub(crate) UOrdinal);

int_wrapper! {
    ident: Ordinal,
    inner: UOrdinal,
}

impl Ordinal {
    /// Unix Epoch in this format (equivalent to Gregorian 1st of January, 1970, [`Year::EPOCH`]).
    pub const EPOCH: Self = Self(287);

    /// Marks the first day of the year for a valid calendar year (this struct starts from 1).
    pub const MIN: Self = Self(1);

    /// The first day after the sixth month of the year (first day of [`Month::MID`]).
    pub const MID: Self = Self(187);

    /// The absolute maximum day count for any year (leap, 366).
    pub const MAX: Self = Self(366);

    /// The maximum day count for a non-leap year (365).
    pub const MAX_NON_LEAP: Self = Self(365);

    /// Create an ordinal if in `1..=366`.
    pub const fn new(value: UOrdinal) -> Option<Self> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Build the ordinal of a month and day; the day is not checked against the month length.
    pub(crate) const fn from_month_day(month: Month, day: UMonthDay) -> Self {
        Self(month.to_ordinal_assume_zero() + day as UOrdinal)
    }

    /// Split this ordinal into its month and day of month.
    pub const fn month_day(&self) -> (Month, UMonthDay) {
        let mid = Self::MID.0;
        if self.0 < mid {
            let zero = self.0 - 1;
            (
                Month((zero / FIRST_HALF_MAX_DOM as UOrdinal) as UMonth + 1),
                (zero % FIRST_HALF_MAX_DOM as UOrdinal) as UMonthDay + 1,
            )
        } else {
            let zero = self.0 - mid;
            (
                Month((zero / SECOND_HALF_MAX_DOM as UOrdinal) as UMonth + Month::MID.0),
                (zero % SECOND_HALF_MAX_DOM as UOrdinal) as UMonthDay + 1,
            )
        }
    }
}

/// Days of the Persian week, starting from Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl Weekday {
    /// All days in Persian week order.
    pub const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Weekday names in Persian, Saturday first.
    pub const PERSIAN_NAMES: [&'static str; 7] = [
        "شنبه",
        "یکشنبه",
        "دوشنبه",
        "سه\u{200c}شنبه",
        "چهارشنبه",
        "پنج\u{200c}شنبه",
        "جمعه",
    ];

    /// Weekday from its Persian index (0 = Saturday ... 6 = Friday).
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 7 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Remap a Gregorian weekday (Sunday = 0) to the Persian week index with `(g + 1) mod 7`.
    pub fn from_gregorian(weekday: chrono::Weekday) -> Self {
        let index = (weekday.num_days_from_sunday() + 1) % 7;
        Self::ALL[index as usize]
    }

    /// Index of this day in the Persian week (0 = Saturday ... 6 = Friday).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Move this weekday by `days`, forward for positive and backward for negative values.
    pub const fn shift(self, days: IDayDiff) -> Self {
        Self::ALL[(days.rem_euclid(7) + self as IDayDiff) as usize % 7]
    }

    /// The following day, wrapping Friday to Saturday.
    pub const fn succ(self) -> Self {
        self.shift(1)
    }

    /// Name of this day in Persian.
    pub const fn persian_name(self) -> &'static str {
        Self::PERSIAN_NAMES[self as usize]
    }

    /// Whether this is the weekly holiday (Friday).
    pub const fn is_holiday(self) -> bool {
        matches!(self, Self::Friday)
    }
}

impl From<Weekday> for u8 {
    fn from(value: Weekday) -> Self {
        value.index()
    }
}

impl core::fmt::Display for Weekday {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.persian_name())
    }
}
