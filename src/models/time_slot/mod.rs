// Time slot module
// One interval of a working day, either bookable or a named break

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlotKind {
    Bookable,
    Break { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub label: String,
    pub kind: SlotKind,
}

impl TimeSlot {
    /// Bookable slot labelled "HH:MM - HH:MM"
    pub fn bookable(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            end,
            label: format!("{} - {}", start.format("%H:%M"), end.format("%H:%M")),
            kind: SlotKind::Bookable,
        }
    }

    /// Break slot labelled with the break's name
    pub fn break_period(name: impl Into<String>, start: NaiveTime, end: NaiveTime) -> Self {
        let name = name.into();
        Self {
            start,
            end,
            label: name.clone(),
            kind: SlotKind::Break { name },
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self.kind, SlotKind::Break { .. })
    }

    pub fn break_name(&self) -> Option<&str> {
        match &self.kind {
            SlotKind::Break { name } => Some(name),
            SlotKind::Bookable => None,
        }
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// Half-open containment: `start <= time < end`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_bookable_label() {
        let slot = TimeSlot::bookable(hm(9, 0), hm(9, 30));
        assert_eq!(slot.label, "09:00 - 09:30");
        assert!(!slot.is_break());
        assert_eq!(slot.break_name(), None);
        assert_eq!(slot.duration(), chrono::Duration::minutes(30));
    }

    #[test]
    fn test_break_carries_name() {
        let slot = TimeSlot::break_period("Lunch", hm(12, 0), hm(12, 30));
        assert!(slot.is_break());
        assert_eq!(slot.label, "Lunch");
        assert_eq!(slot.break_name(), Some("Lunch"));
    }

    #[test]
    fn test_contains_is_half_open() {
        let slot = TimeSlot::bookable(hm(9, 0), hm(9, 30));
        assert!(slot.contains(hm(9, 0)));
        assert!(slot.contains(hm(9, 29)));
        assert!(!slot.contains(hm(9, 30)));
    }
}
