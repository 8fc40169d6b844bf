//! Slot partitioning.
//!
//! Splits a working day into an ordered, contiguous sequence of bookable and
//! break slots. Works in minutes since midnight so the cursor can never wrap
//! past the end of the day.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::error::SchedulingError;
use crate::models::time_slot::TimeSlot;
use crate::models::working_hours::{minutes_of, time_from_minutes, BreakPeriod, WorkingHoursConfig};

/// Generate the slots for `day`.
///
/// Returns an empty list for days outside `working_days` and
/// `InvalidConfiguration` when the config fails validation.
pub fn generate_slots(
    config: &WorkingHoursConfig,
    day: NaiveDate,
) -> Result<Vec<TimeSlot>, SchedulingError> {
    config.validate()?;

    if !config.is_working_day(day.weekday()) {
        log::debug!("{} is not a working day; no slots generated", day);
        return Ok(Vec::new());
    }

    let end = minutes_of(config.end_time);
    let duration = config.slot_duration_minutes;
    let mut cursor = minutes_of(config.start_time);
    let mut slots = Vec::new();

    while cursor < end {
        if let Some(period) = break_at(&config.breaks, cursor) {
            // Only overlapping breaks can leave the cursor past a break's start.
            slots.push(TimeSlot::break_period(
                period.name.clone(),
                to_time(cursor)?,
                period.end,
            ));
            cursor = minutes_of(period.end);
            continue;
        }

        let full_end = cursor + duration;

        // A break starting inside this slot cuts it short, even in the
        // remainder at the end of the day.
        let slot_end = match next_break_start(&config.breaks, cursor, full_end) {
            Some(break_start) => break_start,
            None if full_end > end => break,
            None => full_end,
        };

        slots.push(TimeSlot::bookable(to_time(cursor)?, to_time(slot_end)?));
        cursor = slot_end;
    }

    Ok(slots)
}

/// Only the slots a patient can be booked into.
pub fn bookable_slots(slots: &[TimeSlot]) -> Vec<&TimeSlot> {
    slots.iter().filter(|slot| !slot.is_break()).collect()
}

/// Slot (bookable or break) starting exactly at `time`.
pub fn find_slot(slots: &[TimeSlot], time: NaiveTime) -> Option<&TimeSlot> {
    slots.iter().find(|slot| slot.start == time)
}

fn break_at(breaks: &[BreakPeriod], cursor: u32) -> Option<&BreakPeriod> {
    breaks
        .iter()
        .find(|period| minutes_of(period.start) <= cursor && cursor < minutes_of(period.end))
}

fn next_break_start(breaks: &[BreakPeriod], from: u32, until: u32) -> Option<u32> {
    breaks
        .iter()
        .map(|period| minutes_of(period.start))
        .filter(|start| from < *start && *start < until)
        .min()
}

fn to_time(minutes: u32) -> Result<NaiveTime, SchedulingError> {
    time_from_minutes(minutes)
        .ok_or_else(|| SchedulingError::invalid("Slot extends past midnight"))
}
