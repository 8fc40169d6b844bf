// Working hours module
// Doctor schedule configuration consumed by the slot partitioner

use std::collections::HashSet;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::SchedulingError;

pub const DEFAULT_SLOT_DURATION_MINUTES: u32 = 30;

/// Named interval of the working day excluded from booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakPeriod {
    pub name: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl BreakPeriod {
    pub fn new(name: impl Into<String>, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

/// Validated working-hours configuration.
///
/// Fields are public so screens can edit them in place; every consumer
/// re-runs [`WorkingHoursConfig::validate`] before generating slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingHoursConfig {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub slot_duration_minutes: u32,
    /// Checked in order; the first matching break wins.
    pub breaks: Vec<BreakPeriod>,
    pub working_days: HashSet<Weekday>,
}

impl Default for WorkingHoursConfig {
    fn default() -> Self {
        Self {
            start_time: hm(9, 0),
            end_time: hm(17, 0),
            slot_duration_minutes: DEFAULT_SLOT_DURATION_MINUTES,
            breaks: Vec::new(),
            working_days: weekdays(),
        }
    }
}

impl WorkingHoursConfig {
    pub fn new(start_time: NaiveTime, end_time: NaiveTime, slot_duration_minutes: u32) -> Self {
        Self {
            start_time,
            end_time,
            slot_duration_minutes,
            ..Self::default()
        }
    }

    pub fn with_break(mut self, period: BreakPeriod) -> Self {
        self.breaks.push(period);
        self
    }

    pub fn with_working_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.working_days = days.into_iter().collect();
        self
    }

    pub fn is_working_day(&self, day: Weekday) -> bool {
        self.working_days.contains(&day)
    }

    pub fn validate(&self) -> Result<(), SchedulingError> {
        // Slots are laid out on whole minutes.
        let times = [("Start time", self.start_time), ("End time", self.end_time)]
            .into_iter()
            .chain(self.breaks.iter().flat_map(|period| {
                [("Break start", period.start), ("Break end", period.end)]
            }));
        for (field, time) in times {
            if !is_whole_minute(time) {
                return Err(SchedulingError::invalid(format!(
                    "{} {} must be on a whole minute",
                    field,
                    time.format("%H:%M:%S")
                )));
            }
        }

        if self.start_time >= self.end_time {
            return Err(SchedulingError::invalid(
                "Start time must be before end time",
            ));
        }

        if self.slot_duration_minutes == 0 {
            return Err(SchedulingError::invalid("Slot duration must be positive"));
        }

        let working_minutes = minutes_of(self.end_time) - minutes_of(self.start_time);
        if self.slot_duration_minutes > working_minutes {
            return Err(SchedulingError::invalid(
                "Slot duration exceeds working hours",
            ));
        }

        for period in &self.breaks {
            if period.start >= period.end {
                return Err(SchedulingError::invalid(format!(
                    "Break '{}' must end after it starts",
                    period.name
                )));
            }
            if period.start < self.start_time || period.end > self.end_time {
                return Err(SchedulingError::invalid(format!(
                    "Break '{}' must lie within working hours",
                    period.name
                )));
            }
        }

        Ok(())
    }

    /// Form representation, used when persisting settings.
    pub fn to_form(&self) -> WorkingHoursForm {
        WorkingHoursForm {
            start_time: Some(format_time(self.start_time)),
            end_time: Some(format_time(self.end_time)),
            slot_duration_minutes: Some(i64::from(self.slot_duration_minutes)),
            working_days: Some(
                ordered_weekdays()
                    .into_iter()
                    .filter(|day| self.working_days.contains(day))
                    .map(|day| weekday_name(day).to_string())
                    .collect(),
            ),
            breaks: self
                .breaks
                .iter()
                .map(|period| BreakForm {
                    name: period.name.clone(),
                    start: format_time(period.start),
                    end: format_time(period.end),
                })
                .collect(),
        }
    }
}

/// Raw break row as entered on the schedule screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakForm {
    pub name: String,
    pub start: String,
    pub end: String,
}

/// Raw schedule form input. Every field may be missing or malformed until
/// [`WorkingHoursForm::into_config`] accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkingHoursForm {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub slot_duration_minutes: Option<i64>,
    /// Weekday names ("Monday", "tue", ...). Missing means Monday-Friday.
    pub working_days: Option<Vec<String>>,
    #[serde(default)]
    pub breaks: Vec<BreakForm>,
}

impl WorkingHoursForm {
    pub fn into_config(self) -> Result<WorkingHoursConfig, SchedulingError> {
        let start_time = parse_required_time(self.start_time.as_deref(), "Start time")?;
        let end_time = parse_required_time(self.end_time.as_deref(), "End time")?;

        let duration = self
            .slot_duration_minutes
            .ok_or_else(|| SchedulingError::invalid("Slot duration is required"))?;
        let slot_duration_minutes = u32::try_from(duration)
            .ok()
            .filter(|minutes| *minutes > 0)
            .ok_or_else(|| SchedulingError::invalid("Slot duration must be positive"))?;

        let mut breaks = Vec::with_capacity(self.breaks.len());
        for row in self.breaks {
            let label = format!("Break '{}' start", row.name);
            let start = parse_required_time(Some(&row.start), &label)?;
            let label = format!("Break '{}' end", row.name);
            let end = parse_required_time(Some(&row.end), &label)?;
            breaks.push(BreakPeriod::new(row.name, start, end));
        }

        let working_days = match self.working_days {
            Some(names) => names
                .iter()
                .map(|name| {
                    Weekday::from_str(name.trim()).map_err(|_| {
                        SchedulingError::invalid(format!("Unknown weekday '{}'", name))
                    })
                })
                .collect::<Result<HashSet<_>, _>>()?,
            None => weekdays(),
        };

        let config = WorkingHoursConfig {
            start_time,
            end_time,
            slot_duration_minutes,
            breaks,
            working_days,
        };

        config.validate()?;
        Ok(config)
    }
}

fn parse_required_time(value: Option<&str>, field: &str) -> Result<NaiveTime, SchedulingError> {
    let raw = value
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| SchedulingError::invalid(format!("{} is required", field)))?;

    parse_time(raw)
        .ok_or_else(|| SchedulingError::invalid(format!("{} '{}' is not a valid time", field, raw)))
}

/// Parse "HH:MM". Seconds are not accepted.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}

pub fn is_whole_minute(time: NaiveTime) -> bool {
    time.second() == 0 && time.nanosecond() == 0
}

pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Minutes since midnight
pub fn minutes_of(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

pub fn time_from_minutes(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn weekdays() -> HashSet<Weekday> {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ]
    .into_iter()
    .collect()
}

fn ordered_weekdays() -> [Weekday; 7] {
    [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ]
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}
