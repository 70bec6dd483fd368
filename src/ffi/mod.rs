//! Browser bindings, compiled with the `wasm` feature.
//!
//! Everything here is a thin wrapper over the Rust API with JavaScript friendly names and types.
//! Instants are passed as milliseconds since the Unix epoch (what `Date.now()` returns) and read in
//! the browser's local time zone; leaving them out uses the current time.

use chrono::{DateTime, Local, TimeZone};
use wasm_bindgen::prelude::*;

use crate::{CalendarDay, JalaliParts};

/// [`CalendarDay`] as handed to JavaScript.
#[wasm_bindgen(getter_with_clone)]
#[derive(Debug, Clone)]
pub struct JsCalendarDay {
    #[wasm_bindgen(js_name = dayOfMonth)]
    pub day_of_month: u8,
    #[wasm_bindgen(js_name = dateString)]
    pub date_string: String,
    #[wasm_bindgen(js_name = isToday)]
    pub is_today: bool,
    #[wasm_bindgen(js_name = dayOfWeek)]
    pub day_of_week: u8,
}

impl From<CalendarDay> for JsCalendarDay {
    fn from(value: CalendarDay) -> Self {
        Self {
            day_of_month: value.day_of_month,
            date_string: value.date_string,
            is_today: value.is_today,
            day_of_week: value.day_of_week,
        }
    }
}

/// [`JalaliParts`] as handed to JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsJalaliParts {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl From<JalaliParts> for JsJalaliParts {
    fn from(value: JalaliParts) -> Self {
        Self {
            year: value.year,
            month: value.month,
            day: value.day,
        }
    }
}

fn local_instant(now_ms: Option<f64>) -> Result<DateTime<Local>, JsError> {
    match now_ms {
        None => Ok(Local::now()),
        Some(ms) if ms.is_finite() => Local
            .timestamp_millis_opt(ms as i64)
            .earliest()
            .ok_or_else(|| JsError::new(&format!("instant {ms} is out of range"))),
        Some(ms) => Err(JsError::new(&format!("instant {ms} is not a finite number"))),
    }
}

#[wasm_bindgen(js_name = jalaliPartsOf)]
pub fn jalali_parts_of(now_ms: Option<f64>) -> Result<JsJalaliParts, JsError> {
    Ok(crate::jalali_parts_of(local_instant(now_ms)?).into())
}

#[wasm_bindgen(js_name = daysInJalaliMonth)]
pub fn days_in_jalali_month(year: i32, month: u8) -> Result<u8, JsError> {
    Ok(crate::days_in_jalali_month(year, month)?)
}

/// Persian week index, 0 = Saturday ... 6 = Friday.
#[wasm_bindgen(js_name = jalaliDayOfWeek)]
pub fn jalali_day_of_week(year: i32, month: u8, day: u8) -> Result<u8, JsError> {
    Ok(crate::jalali_day_of_week(year, month, day)?.index())
}

#[wasm_bindgen(js_name = currentJalaliMonthDays)]
pub fn current_jalali_month_days(now_ms: Option<f64>) -> Result<Vec<JsCalendarDay>, JsError> {
    let days = crate::current_jalali_month_days(local_instant(now_ms)?);
    Ok(days.into_iter().map(Into::into).collect())
}

/// Month name and year in Persian for the month header, e.g. `"اردیبهشت ۱۴۰۳"`.
#[wasm_bindgen(js_name = jalaliMonthTitle)]
pub fn jalali_month_title(now_ms: Option<f64>) -> Result<String, JsError> {
    let parts = crate::jalali_parts_of(local_instant(now_ms)?);
    // a converted date always has a valid month
    Ok(crate::month_title(parts).unwrap_or_default())
}

#[wasm_bindgen(js_name = todayJalali)]
pub fn today_jalali() -> String {
    crate::today_jalali_string()
}

#[wasm_bindgen(js_name = toPersianDigits)]
pub fn to_persian_digits(value: &str) -> String {
    crate::to_persian_digits(value)
}

#[wasm_bindgen(js_name = formatCountdown)]
pub fn format_countdown(total_seconds: u32) -> String {
    crate::format_countdown(total_seconds)
}
