//! Settings persistence.
//! Loads and saves the TOML settings file holding the week layout, the
//! default view and the doctor's working hours.

mod service;

pub use service::{SettingsService, APPOINTMENTS_FILE, SETTINGS_FILE};
