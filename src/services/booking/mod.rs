//! Booking dialog seam.
//!
//! The controller asks a [`BookingDialog`] for patient details when a free
//! cell is clicked; the dialog returns `None` when the user cancels.

use chrono::{NaiveDate, NaiveTime};

use crate::models::appointment::{Appointment, PatientRef};

/// Details collected by the booking form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetails {
    pub patient_name: String,
    pub patient_id: Option<String>,
    pub contact: Option<String>,
    pub notes: Option<String>,
    /// Defaults to "Appointment with <patient>" when empty.
    pub title: Option<String>,
}

impl BookingDetails {
    pub fn for_patient(name: impl Into<String>) -> Self {
        Self {
            patient_name: name.into(),
            patient_id: None,
            contact: None,
            notes: None,
            title: None,
        }
    }

    pub fn into_appointment(self, date: NaiveDate, slot: NaiveTime) -> Result<Appointment, String> {
        let title = self
            .title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| format!("Appointment with {}", self.patient_name.trim()));

        let mut builder = Appointment::builder()
            .title(title)
            .patient(PatientRef {
                id: self.patient_id,
                name: self.patient_name,
            })
            .date(date)
            .time_slot(slot);

        if let Some(contact) = self.contact {
            builder = builder.contact(contact);
        }
        if let Some(notes) = self.notes {
            builder = builder.notes(notes);
        }

        builder.build()
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait BookingDialog {
    fn collect(&mut self, date: NaiveDate, slot: NaiveTime) -> Option<BookingDetails>;
}
