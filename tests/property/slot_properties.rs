// Property-based tests for slot partitioning
// Random aligned schedules must tile the working day without gaps

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::Weekday;
use clinic_calendar::models::working_hours::{
    minutes_of, time_from_minutes, BreakPeriod, WorkingHoursConfig,
};
use clinic_calendar::services::slots::generate_slots;
use fixtures::{dates, schedules};
use proptest::prelude::*;

/// Working day whose length and break are whole multiples of the slot size
fn aligned_schedule() -> impl Strategy<Value = WorkingHoursConfig> {
    (
        prop_oneof![Just(10u32), Just(15), Just(20), Just(30)],
        6u32..=10,   // start hour
        2u32..=8,    // number of units before the break
        1u32..=2,    // break length in units
        1u32..=8,    // number of units after the break
        any::<bool>(),
    )
        .prop_map(|(duration, start_hour, before, pause, after, with_break)| {
            let start = start_hour * 60;
            let break_start = start + before * duration;
            let break_end = break_start + pause * duration;
            let end = break_end + after * duration;

            let mut config = WorkingHoursConfig::new(
                time_from_minutes(start).unwrap(),
                time_from_minutes(end).unwrap(),
                duration,
            )
            .with_working_days(schedules::all_week());
            if with_break {
                config = config.with_break(BreakPeriod::new(
                    "Break",
                    time_from_minutes(break_start).unwrap(),
                    time_from_minutes(break_end).unwrap(),
                ));
            }
            config
        })
}

proptest! {
    /// Property: slots tile [start, end) with no gaps and no overlaps
    #[test]
    fn prop_slots_tile_working_day(config in aligned_schedule()) {
        let slots = generate_slots(&config, dates::wednesday_mar_13_2024()).unwrap();

        prop_assert!(!slots.is_empty());
        prop_assert_eq!(slots[0].start, config.start_time);
        prop_assert_eq!(slots.last().unwrap().end, config.end_time);
        for pair in slots.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
        for slot in &slots {
            prop_assert!(slot.start < slot.end);
        }
    }

    /// Property: identical inputs always give identical slot lists
    #[test]
    fn prop_slots_deterministic(config in aligned_schedule()) {
        let day = dates::wednesday_mar_13_2024();
        let first = generate_slots(&config, day).unwrap();
        let second = generate_slots(&config, day).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: bookable slots all have the configured duration and breaks
    /// match their configuration exactly
    #[test]
    fn prop_slot_sizes(config in aligned_schedule()) {
        let slots = generate_slots(&config, dates::wednesday_mar_13_2024()).unwrap();

        for slot in &slots {
            let length = minutes_of(slot.end) - minutes_of(slot.start);
            if slot.is_break() {
                let period = &config.breaks[0];
                prop_assert_eq!((slot.start, slot.end), (period.start, period.end));
            } else {
                prop_assert_eq!(length, config.slot_duration_minutes);
            }
        }
        prop_assert_eq!(
            slots.iter().filter(|slot| slot.is_break()).count(),
            config.breaks.len()
        );
    }

    /// Property: closed days never produce slots
    #[test]
    fn prop_closed_day_empty(config in aligned_schedule()) {
        let config = config.with_working_days([Weekday::Mon]);
        let slots = generate_slots(&config, dates::wednesday_mar_13_2024()).unwrap();
        prop_assert!(slots.is_empty());
    }
}
