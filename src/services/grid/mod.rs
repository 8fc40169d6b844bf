//! Calendar grid generation.
//!
//! Produces the matrix of dates a month, week or day view renders. Everything
//! here is a pure function of its inputs; "today" is passed in by the caller.

use chrono::{Duration, NaiveDate, Weekday};

use crate::models::ui::ViewType;
use crate::utils::date::{
    first_of_month, is_same_month, last_of_month, shift_month_preserving_day, start_of_week,
};

/// Dates to render for one view, row by row.
///
/// Month grids hold one row per week, week grids a single row of seven and
/// day grids a single row with one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub view: ViewType,
    pub anchor: NaiveDate,
    pub weeks: Vec<Vec<NaiveDate>>,
}

impl CalendarGrid {
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flatten().copied()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days().any(|day| day == date)
    }

    /// First and last date shown.
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        let first = self.days().next().unwrap_or(self.anchor);
        let last = self.days().last().unwrap_or(self.anchor);
        (first, last)
    }

    pub fn cell_count(&self) -> usize {
        self.weeks.iter().map(Vec::len).sum()
    }
}

pub fn generate_grid(view_date: NaiveDate, view: ViewType, week_start: Weekday) -> CalendarGrid {
    let weeks = match view {
        ViewType::Month => month_weeks(view_date, week_start),
        ViewType::Week => vec![week_days(view_date, week_start)],
        ViewType::Day => vec![vec![view_date]],
    };

    CalendarGrid {
        view,
        anchor: view_date,
        weeks,
    }
}

fn month_weeks(view_date: NaiveDate, week_start: Weekday) -> Vec<Vec<NaiveDate>> {
    let last = last_of_month(view_date);
    let mut cursor = start_of_week(first_of_month(view_date), week_start);
    let mut weeks = Vec::with_capacity(6);

    while cursor <= last {
        let week = week_days(cursor, week_start);
        cursor += Duration::days(7);
        weeks.push(week);
    }

    weeks
}

fn week_days(view_date: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    start_of_week(view_date, week_start)
        .iter_days()
        .take(7)
        .collect()
}

/// Move the anchor one unit for the view: a calendar month, seven days or
/// one day. `delta` is the number of units, negative to go back.
pub fn shift(view_date: NaiveDate, view: ViewType, delta: i32) -> NaiveDate {
    match view {
        ViewType::Month => shift_month_preserving_day(view_date, delta),
        ViewType::Week => view_date + Duration::weeks(delta as i64),
        ViewType::Day => view_date + Duration::days(delta as i64),
    }
}

pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Whether a month-grid cell belongs to the anchored month rather than
/// the leading/trailing days of its neighbours.
pub fn is_current_month(date: NaiveDate, anchor: NaiveDate) -> bool {
    is_same_month(date, anchor)
}
