use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{self, Error as SerdeError};

use super::AppointmentSnapshot;

/// Load the mirrored appointments; a missing file is an empty calendar.
pub fn load_snapshot(path: &Path) -> Result<AppointmentSnapshot> {
    if !path.exists() {
        log::info!("No appointment snapshot at {}; starting empty", path.display());
        return Ok(AppointmentSnapshot::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read appointments from {}", path.display()))?;
    let snapshot: AppointmentSnapshot =
        serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    check_id_space(&snapshot)
        .with_context(|| format!("invalid appointment snapshot {}", path.display()))?;
    log::info!(
        "Loaded {} appointments from {}",
        snapshot.appointments.len(),
        path.display()
    );
    Ok(snapshot)
}

pub fn save_snapshot(path: &Path, snapshot: &AppointmentSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write appointments to {}", path.display()))?;
    Ok(())
}

/// Ids must leave room for the counter to advance past them.
fn check_id_space(snapshot: &AppointmentSnapshot) -> Result<()> {
    if snapshot.next_id == u64::MAX {
        bail!("next id {} exhausts the id space", snapshot.next_id);
    }
    if let Some(id) = snapshot
        .appointments
        .iter()
        .filter_map(|appointment| appointment.id)
        .find(|id| id.0 == u64::MAX)
    {
        bail!("appointment id {} exhausts the id space", id);
    }
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize appointments from {}",
        path.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::{Appointment, AppointmentId, PatientRef};
    use crate::services::appointment::AppointmentStore;
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    fn sample() -> Appointment {
        Appointment::builder()
            .title("Checkup")
            .patient(PatientRef::named("Jane Doe"))
            .date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
            .time_slot(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
            .notes("Fasting bloods")
            .build()
            .unwrap()
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let snapshot = load_snapshot(&dir.path().join("appointments.json")).unwrap();
        assert!(snapshot.appointments.is_empty());
    }

    #[test]
    fn test_save_then_load_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("appointments.json");

        let mut store = AppointmentStore::new();
        let id = store.add(sample());
        save_snapshot(&path, &store.snapshot()).unwrap();

        let restored = AppointmentStore::from_snapshot(load_snapshot(&path).unwrap());
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.get(id).unwrap().notes.as_deref(), Some("Fasting bloods"));
        assert_eq!(id, AppointmentId(1));
    }

    #[test]
    fn test_exhausted_id_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("appointments.json");
        let mut snapshot = AppointmentStore::new().snapshot();
        let mut appointment = sample();
        appointment.id = Some(AppointmentId(u64::MAX));
        snapshot.appointments.push(appointment);
        save_snapshot(&path, &snapshot).unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("exhausts the id space"));
    }

    #[test]
    fn test_exhausted_next_id_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("appointments.json");
        fs::write(&path, r#"{ "next_id": 18446744073709551615, "appointments": [] }"#).unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(err.to_string().contains("invalid appointment snapshot"));
    }

    #[test]
    fn test_corrupt_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("appointments.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(err.to_string().contains("failed to deserialize appointments"));
    }
}
