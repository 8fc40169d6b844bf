// Settings module
// Clinic calendar preferences loaded from the TOML settings file

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::ui::ViewType;
use super::working_hours::{WorkingHoursConfig, WorkingHoursForm};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0 = Sunday ... 6 = Saturday
    pub first_day_of_week: u8,
    pub default_view: ViewType,
    pub working_hours: WorkingHoursForm,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            default_view: ViewType::Month,
            working_hours: WorkingHoursConfig::default().to_form(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err("First day of week must be between 0 (Sunday) and 6 (Saturday)".to_string());
        }

        self.working_hours
            .clone()
            .into_config()
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    pub fn week_start(&self) -> Weekday {
        match self.first_day_of_week {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    pub fn working_hours_config(&self) -> Result<WorkingHoursConfig, crate::error::SchedulingError> {
        self.working_hours.clone().into_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.week_start(), Weekday::Sun);
        assert_eq!(settings.working_hours_config().unwrap(), WorkingHoursConfig::default());
    }

    #[test]
    fn test_first_day_out_of_range() {
        let settings = Settings {
            first_day_of_week: 7,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_working_hours_reported() {
        let mut settings = Settings::default();
        settings.working_hours.slot_duration_minutes = None;

        let err = settings.validate().unwrap_err();
        assert_eq!(err, "Invalid configuration: Slot duration is required");
    }

    #[test]
    fn test_monday_week_start() {
        let settings = Settings {
            first_day_of_week: 1,
            ..Settings::default()
        };
        assert_eq!(settings.week_start(), Weekday::Mon);
    }
}
