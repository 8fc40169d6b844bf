// UI models module
// Calendar view modes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Day,
    Week,
    #[default]
    Month,
}

impl ViewType {
    pub fn all() -> [ViewType; 3] {
        [ViewType::Day, ViewType::Week, ViewType::Month]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewType::Day => "day",
            ViewType::Week => "week",
            ViewType::Month => "month",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "day" => Ok(ViewType::Day),
            "week" => Ok(ViewType::Week),
            "month" => Ok(ViewType::Month),
            _ => Err(format!(
                "Invalid view: '{}'. Must be one of: day, week, month",
                value
            )),
        }
    }
}
