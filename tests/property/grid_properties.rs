// Property-based tests for calendar grid generation
// Checks week completeness and month coverage over random dates

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use clinic_calendar::models::ui::ViewType;
use clinic_calendar::services::grid::{generate_grid, is_current_month, shift};
use clinic_calendar::utils::date::last_day_of_month;
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1990..2100i32, 1..=12u32, 1..=31u32).prop_map(|(year, month, day)| {
        let day = day.min(last_day_of_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    })
}

fn any_week_start() -> impl Strategy<Value = Weekday> {
    prop_oneof![
        Just(Weekday::Sun),
        Just(Weekday::Mon),
        Just(Weekday::Sat),
    ]
}

proptest! {
    /// Property: month grids are made of complete weeks and contain every
    /// day of the month exactly once
    #[test]
    fn prop_month_grid_complete_weeks(date in any_date()) {
        let grid = generate_grid(date, ViewType::Month, Weekday::Sun);

        prop_assert!(grid.weeks.iter().all(|week| week.len() == 7));
        prop_assert!(grid.weeks.iter().all(|week| week[0].weekday() == Weekday::Sun));
        prop_assert!(grid.weeks.len() >= 4 && grid.weeks.len() <= 6);

        let in_month: Vec<_> = grid.days().filter(|day| is_current_month(*day, date)).collect();
        let expected = last_day_of_month(date.year(), date.month()) as usize;
        prop_assert_eq!(in_month.len(), expected);
        for (index, day) in in_month.iter().enumerate() {
            prop_assert_eq!(day.day() as usize, index + 1);
        }
    }

    /// Property: consecutive grid cells are one day apart
    #[test]
    fn prop_month_grid_contiguous(date in any_date(), week_start in any_week_start()) {
        let grid = generate_grid(date, ViewType::Month, week_start);
        let days: Vec<_> = grid.days().collect();

        prop_assert_eq!(days[0].weekday(), week_start);
        for pair in days.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        // The last row always reaches into the month's final day
        let last_week = grid.weeks.last().unwrap();
        prop_assert!(last_week.iter().any(|day| is_current_month(*day, date)));
    }

    /// Property: week grids hold seven consecutive days from Sunday that
    /// include the anchor date
    #[test]
    fn prop_week_grid_contains_anchor(date in any_date()) {
        let grid = generate_grid(date, ViewType::Week, Weekday::Sun);

        prop_assert_eq!(grid.weeks.len(), 1);
        let week = &grid.weeks[0];
        prop_assert_eq!(week.len(), 7);
        prop_assert_eq!(week[0].weekday(), Weekday::Sun);
        prop_assert_eq!(week[6] - week[0], Duration::days(6));
        prop_assert!(week.contains(&date));
    }

    /// Property: next then previous returns to the same week or day
    #[test]
    fn prop_week_and_day_navigation_reversible(date in any_date()) {
        for view in [ViewType::Week, ViewType::Day] {
            prop_assert_eq!(shift(shift(date, view, 1), view, -1), date);
        }
    }

    /// Property: month navigation always lands in the adjacent month
    #[test]
    fn prop_month_navigation_adjacent(date in any_date()) {
        let next = shift(date, ViewType::Month, 1);
        let months = |d: NaiveDate| d.year() * 12 + d.month() as i32;
        prop_assert_eq!(months(next) - months(date), 1);
        prop_assert!(next.day() <= date.day());
    }
}
