// Module exports for models

pub mod appointment;
pub mod settings;
pub mod time_slot;
pub mod ui;
pub mod working_hours;
