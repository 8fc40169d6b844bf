// Appointment module
// Booked appointment placed on a (date, slot) grid cell

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier. Lookups go through this id, never through
/// record identity, so cloned or deserialized records still resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AppointmentId(pub u64);

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reference to the patient an appointment belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRef {
    pub id: Option<String>,
    pub name: String,
}

impl PatientRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// Appointment occupying one grid cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Option<AppointmentId>,
    pub date: NaiveDate,
    /// Start time of the slot the appointment occupies
    pub time_slot: NaiveTime,
    pub patient: PatientRef,
    pub title: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Appointment {
    /// Create a new appointment with required fields
    ///
    /// # Examples
    /// ```
    /// use clinic_calendar::models::appointment::{Appointment, PatientRef};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    /// let slot = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    /// let appointment =
    ///     Appointment::new("Checkup", PatientRef::named("Jane Doe"), date, slot).unwrap();
    /// assert!(appointment.id.is_none());
    /// ```
    pub fn new(
        title: impl Into<String>,
        patient: PatientRef,
        date: NaiveDate,
        time_slot: NaiveTime,
    ) -> Result<Self, String> {
        let appointment = Self {
            id: None,
            date,
            time_slot,
            patient,
            title: title.into(),
            contact: None,
            notes: None,
            created_at: None,
        };

        appointment.validate()?;
        Ok(appointment)
    }

    /// Create a builder for constructing appointments with optional fields
    pub fn builder() -> AppointmentBuilder {
        AppointmentBuilder::new()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Appointment title cannot be empty".to_string());
        }

        if self.patient.name.trim().is_empty() {
            return Err("Patient name cannot be empty".to_string());
        }

        Ok(())
    }

    /// True when the appointment sits on the given grid cell.
    pub fn occupies(&self, date: NaiveDate, time_slot: NaiveTime) -> bool {
        self.date == date && self.time_slot == time_slot
    }
}

/// Builder for creating appointments with optional fields
#[derive(Default)]
pub struct AppointmentBuilder {
    title: Option<String>,
    patient: Option<PatientRef>,
    date: Option<NaiveDate>,
    time_slot: Option<NaiveTime>,
    contact: Option<String>,
    notes: Option<String>,
    created_at: Option<NaiveDateTime>,
}

impl AppointmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn patient(mut self, patient: PatientRef) -> Self {
        self.patient = Some(patient);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn time_slot(mut self, time_slot: NaiveTime) -> Self {
        self.time_slot = Some(time_slot);
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the appointment
    pub fn build(self) -> Result<Appointment, String> {
        let title = self.title.ok_or("Appointment title is required")?;
        let patient = self.patient.ok_or("Patient is required")?;
        let date = self.date.ok_or("Appointment date is required")?;
        let time_slot = self.time_slot.ok_or("Appointment time slot is required")?;

        let appointment = Appointment {
            id: None,
            date,
            time_slot,
            patient,
            title,
            contact: self.contact,
            notes: self.notes,
            created_at: self.created_at,
        };

        appointment.validate()?;
        Ok(appointment)
    }
}
