//! In-memory appointment store.
//!
//! Owns every appointment booked on one calendar screen for the session. The
//! JSON snapshot helpers in [`persistence`] mirror it to disk.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::SchedulingError;
use crate::models::appointment::{Appointment, AppointmentId};

pub mod persistence;

/// Serializable state handed to the persistence collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentSnapshot {
    pub next_id: u64,
    pub appointments: Vec<Appointment>,
}

#[derive(Debug)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
    next_id: u64,
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::from_snapshot(AppointmentSnapshot::default())
    }

    pub fn from_snapshot(snapshot: AppointmentSnapshot) -> Self {
        let mut store = Self {
            appointments: Vec::with_capacity(snapshot.appointments.len()),
            next_id: snapshot.next_id.max(1),
        };
        // Re-adding keeps the counter ahead of every stored id.
        for appointment in snapshot.appointments {
            store.add(appointment);
        }
        store
    }

    pub fn snapshot(&self) -> AppointmentSnapshot {
        AppointmentSnapshot {
            next_id: self.next_id,
            appointments: self.appointments.clone(),
        }
    }

    /// Append an appointment, assigning a fresh id when it has none or its
    /// id is already taken.
    ///
    /// No uniqueness is enforced on (date, slot); preventing double booking
    /// is the caller's policy.
    pub fn add(&mut self, mut appointment: Appointment) -> AppointmentId {
        let kept = appointment
            .id
            .filter(|id| self.get(*id).is_none())
            .and_then(|id| id.0.checked_add(1).map(|after| (id, after)));
        let id = match kept {
            Some((id, after)) => {
                self.next_id = self.next_id.max(after);
                id
            }
            None => {
                if let Some(stale) = appointment.id {
                    log::debug!("Reassigning appointment id {}", stale);
                }
                let id = AppointmentId(self.next_id);
                // The counter only saturates on hand-edited snapshots, which
                // `load_snapshot` rejects.
                self.next_id = self.next_id.saturating_add(1);
                id
            }
        };
        appointment.id = Some(id);
        self.appointments.push(appointment);
        id
    }

    /// Reassign an appointment to a new grid cell.
    pub fn move_to(
        &mut self,
        id: AppointmentId,
        new_date: NaiveDate,
        new_slot: NaiveTime,
    ) -> Result<(), SchedulingError> {
        let Some(appointment) = self.get_mut(id) else {
            log::warn!("Cannot move appointment {}: not found", id);
            return Err(SchedulingError::NotFound(id));
        };

        log::debug!(
            "Moving appointment {} from {} {} to {} {}",
            id,
            appointment.date,
            appointment.time_slot.format("%H:%M"),
            new_date,
            new_slot.format("%H:%M")
        );
        appointment.date = new_date;
        appointment.time_slot = new_slot;
        Ok(())
    }

    /// All appointments on exactly this (date, slot) cell, in insertion order.
    pub fn query(&self, date: NaiveDate, slot: NaiveTime) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| appointment.occupies(date, slot))
            .collect()
    }

    pub fn is_booked(&self, date: NaiveDate, slot: NaiveTime) -> bool {
        self.appointments
            .iter()
            .any(|appointment| appointment.occupies(date, slot))
    }

    pub fn remove(&mut self, id: AppointmentId) -> Result<Appointment, SchedulingError> {
        let Some(index) = self.position(id) else {
            log::warn!("Cannot remove appointment {}: not found", id);
            return Err(SchedulingError::NotFound(id));
        };
        Ok(self.appointments.remove(index))
    }

    pub fn get(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments
            .iter()
            .find(|appointment| appointment.id == Some(id))
    }

    fn get_mut(&mut self, id: AppointmentId) -> Option<&mut Appointment> {
        self.appointments
            .iter_mut()
            .find(|appointment| appointment.id == Some(id))
    }

    fn position(&self, id: AppointmentId) -> Option<usize> {
        self.appointments
            .iter()
            .position(|appointment| appointment.id == Some(id))
    }

    /// Appointments on `date`, ordered by slot.
    pub fn on_date(&self, date: NaiveDate) -> Vec<&Appointment> {
        let mut found: Vec<_> = self
            .appointments
            .iter()
            .filter(|appointment| appointment.date == date)
            .collect();
        found.sort_by_key(|appointment| appointment.time_slot);
        found
    }

    /// Appointments between `start` and `end` inclusive, ordered by date and slot.
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Appointment> {
        let mut found: Vec<_> = self
            .appointments
            .iter()
            .filter(|appointment| start <= appointment.date && appointment.date <= end)
            .collect();
        found.sort_by_key(|appointment| (appointment.date, appointment.time_slot));
        found
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}
