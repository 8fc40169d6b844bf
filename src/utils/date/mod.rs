// Date utility functions
// Calendar arithmetic shared by grid generation and navigation

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Walk back from `date` to the nearest `week_start` (inclusive).
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = days_since_week_start(date.weekday(), week_start);
    date - Duration::days(offset as i64)
}

/// Column index of `day` in a week starting on `week_start` (0..=6).
pub fn days_since_week_start(day: Weekday, week_start: Weekday) -> u32 {
    (day.num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let last_day = last_day_of_month(date.year(), date.month());
    date.with_day(last_day).unwrap_or(date)
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

/// Shift by whole calendar months, keeping the day of month where possible
/// and clamping to the target month's last day otherwise (Jan 31 -> Feb 29).
pub fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    let day = current.day().min(last_day_of_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(current)
}

pub fn is_same_month(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1.year() == date2.year() && date1.month() == date2.month()
}
