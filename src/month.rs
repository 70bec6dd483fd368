//! Day sequences of a Jalali month, shaped for calendar grids.

use chrono::Local;

use crate::{
    Date, IDayDiff, JalaliParts, Month, ToJalali, UMonthDay, Weekday, digits::to_persian_digits,
};

/// One day of a Jalali month as a calendar grid needs it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CalendarDay {
    /// Day number within the month (1..=31).
    pub day_of_month: UMonthDay,
    /// `YYYY/MM/DD` with zero-padded month and day.
    pub date_string: String,
    /// Whether this is the day the sequence was derived for.
    pub is_today: bool,
    /// Persian week index, 0 = Saturday ... 6 = Friday.
    pub day_of_week: u8,
}

impl CalendarDay {
    /// [`Self::day_of_week`] as a [`Weekday`].
    pub fn weekday(&self) -> Weekday {
        Weekday::ALL[self.day_of_week as usize % 7]
    }
}

/// Every day of the Jalali month `now` falls in, in order.
///
/// The weekday of each day is read from the Gregorian weekday of `now` remapped to the Persian
/// week and stepped by the distance in days, so the whole sequence follows a single 7-day cycle.
/// Exactly one day has `is_today` set.
pub fn current_jalali_month_days(now: impl ToJalali) -> Vec<CalendarDay> {
    let gregorian = now.gregorian_date();
    let today = Date::from_gregorian(gregorian);
    let JalaliParts { year, month, day } = today.parts();
    let len = today.days_in_month();

    let today_weekday = Weekday::from_gregorian(chrono::Datelike::weekday(&gregorian));
    let first_weekday = today_weekday.shift(-(day as IDayDiff - 1));

    let days: Vec<CalendarDay> = (1..=len)
        .map(|i| CalendarDay {
            day_of_month: i,
            date_string: format!("{year}/{month:02}/{i:02}"),
            is_today: i == day,
            day_of_week: first_weekday.shift(i as IDayDiff - 1).index(),
        })
        .collect();

    tracing::debug!(
        year,
        month,
        day,
        len,
        first_weekday = first_weekday.index(),
        "derived jalali month"
    );
    days
}

/// [`current_jalali_month_days`] for the live local clock.
pub fn current_jalali_month_days_now() -> Vec<CalendarDay> {
    current_jalali_month_days(Local::now())
}

/// Header of a month view in Persian, e.g. `"اردیبهشت ۱۴۰۳"`.
///
/// Returns `None` if the month is not in `1..=12`.
pub fn month_title(parts: JalaliParts) -> Option<String> {
    let month = Month::new(parts.month).ok()?;
    Some(format!(
        "{} {}",
        month.persian_name(),
        to_persian_digits(parts.year)
    ))
}

/// A Jalali month ready for rendering: its days plus the grid helpers around them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MonthView {
    pub year: crate::IYear,
    pub month: crate::UMonth,
    pub days: Vec<CalendarDay>,
}

impl MonthView {
    /// The view of the month `now` falls in.
    pub fn at(now: impl ToJalali) -> Self {
        let JalaliParts { year, month, .. } = now.to_jalali().parts();
        Self {
            year,
            month,
            days: current_jalali_month_days(now),
        }
    }

    /// The view of the month of the live local clock.
    pub fn now() -> Self {
        Self::at(Local::now())
    }

    /// Empty cells before day 1 in a grid whose rows start on Saturday.
    pub fn leading_blanks(&self) -> usize {
        self.days.first().map_or(0, |d| d.day_of_week as usize)
    }

    /// Rows of seven cells, Saturday first; cells outside the month are `None`.
    pub fn weeks(&self) -> Vec<[Option<&CalendarDay>; 7]> {
        let mut rows = Vec::new();
        let mut row = [None; 7];
        let mut column = self.leading_blanks();
        for day in &self.days {
            row[column] = Some(day);
            column += 1;
            if column == 7 {
                rows.push(row);
                row = [None; 7];
                column = 0;
            }
        }
        if column != 0 {
            rows.push(row);
        }
        rows
    }

    /// The day marked as today.
    pub fn today(&self) -> Option<&CalendarDay> {
        self.days.iter().find(|d| d.is_today)
    }

    /// See [`month_title`].
    pub fn title(&self) -> Option<String> {
        month_title(JalaliParts {
            year: self.year,
            month: self.month,
            day: 1,
        })
    }
}
