// Date utility functions
// Calendar-day arithmetic shared by the layout, navigation and drag code

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub fn is_same_day(date1: NaiveDateTime, date2: NaiveDateTime) -> bool {
    date1.date() == date2.date()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last whole second of `date` (23:59:59).
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1) - Duration::seconds(1)
}

/// Number of calendar days between the dates of two instants, ignoring time of day.
///
/// `diff_days(Mon 23:00, Tue 01:00)` is 1 even though only two hours pass.
pub fn diff_days(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to.date() - from.date()).num_days()
}

/// Returns `to` with the time of day taken from `from`.
pub fn copy_time(from: NaiveDateTime, to: NaiveDate) -> NaiveDateTime {
    to.and_time(from.time())
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - (first_day_of_week % 7) as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// Last date of the week that begins on `first_day_of_week` and contains `date`.
pub fn week_end(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    week_start(date, first_day_of_week) + Duration::days(6)
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

pub fn last_date_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(last_day_of_month(date.year(), date.month()))
        .unwrap_or(date)
}

/// Shift by whole months, clamping the day to the length of the target month
/// (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    let day = current.day().min(last_day_of_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(current)
}
