// Scheduling errors
// Domain failures surfaced to the notification collaborator

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::models::appointment::AppointmentId;

/// Failures raised by slot generation, booking and appointment mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    /// Working hours or slot duration failed validation; nothing was generated.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Slot {} on {date} is already booked", .time.format("%H:%M"))]
    SlotAlreadyBooked { date: NaiveDate, time: NaiveTime },

    /// Break slots, closed days and times that are not a slot start.
    #[error("Slot {} on {date} is not available for booking", .time.format("%H:%M"))]
    SlotNotBookable { date: NaiveDate, time: NaiveTime },

    /// Booking details were rejected (blank patient name, ...).
    #[error("Invalid appointment: {0}")]
    InvalidAppointment(String),

    #[error("Appointment {0} not found")]
    NotFound(AppointmentId),
}

impl SchedulingError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
