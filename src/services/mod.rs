// Service module exports

pub mod appointment;
pub mod booking;
pub mod calendar;
pub mod grid;
pub mod notification;
pub mod settings;
pub mod slots;
