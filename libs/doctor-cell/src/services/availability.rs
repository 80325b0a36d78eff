// libs/doctor-cell/src/services/availability.rs

use tracing::{debug, info, warn};

use shared_database::{ClinicDatabase, Record, RecordStore};
use shared_models::error::StoreError;

use crate::models::{Doctor, DoctorError};

pub struct AvailabilityService {
    db: ClinicDatabase,
}

impl AvailabilityService {
    pub fn new(db: &ClinicDatabase) -> Self {
        Self { db: db.clone() }
    }

    /// Manual override of a doctor's availability flag.
    ///
    /// Active appointments are not consulted, so this can mark a busy doctor
    /// as free (or a free doctor as busy).
    pub async fn set_availability(
        &self,
        doctor_id: i64,
        is_available: bool,
    ) -> Result<Doctor, DoctorError> {
        debug!("Setting availability of doctor {} to {}", doctor_id, is_available);

        let mut data = self.db.write().await;

        let assigned = data
            .appointments
            .iter()
            .any(|appointment| appointment.doctor.id == doctor_id);
        let doctor = set_flag(&mut data.doctors, doctor_id, is_available)?;

        if assigned && is_available {
            warn!(doctor_id, "Doctor marked available while assigned to an active appointment");
        }

        Ok(doctor)
    }

    pub async fn available_doctors(&self) -> Vec<Doctor> {
        self.db
            .read()
            .await
            .doctors
            .iter()
            .filter(|doctor| doctor.is_available)
            .cloned()
            .collect()
    }
}

/// Picks the first available doctor in registration order and marks them busy.
///
/// Callers must hold the database write lock for the whole booking so the
/// check and the flag flip cannot be separated.
pub fn claim_first_available(doctors: &mut RecordStore<Doctor>) -> Option<Doctor> {
    let doctor = doctors.find_mut(|doctor| doctor.is_available)?;
    doctor.is_available = false;

    info!(doctor_id = doctor.id, "Doctor assigned");
    Some(doctor.clone())
}

/// Marks the live record of the doctor held by an appointment as available again.
///
/// Ids may be shared by several doctors, so the busy record matching the
/// appointment's copy wins, then any busy record with that id, then the
/// first record with that id.
pub fn release(doctors: &mut RecordStore<Doctor>, assigned: &Doctor) -> Result<Doctor, StoreError> {
    let doctor_id = assigned.id;
    let busy_copy = |d: &Doctor| !d.is_available && same_doctor(d, assigned);
    let busy_namesake = |d: &Doctor| d.id == doctor_id && !d.is_available;

    let doctor = if doctors.iter().any(|d| busy_copy(d)) {
        doctors.find_mut(busy_copy)
    } else if doctors.iter().any(|d| busy_namesake(d)) {
        doctors.find_mut(busy_namesake)
    } else {
        doctors.find_mut(|d| d.id == doctor_id)
    }
    .ok_or(StoreError::NotFound { kind: Doctor::KIND, id: doctor_id })?;
    doctor.is_available = true;

    info!(doctor_id, "Doctor released");
    Ok(doctor.clone())
}

fn same_doctor(live: &Doctor, assigned: &Doctor) -> bool {
    live.id == assigned.id
        && live.name == assigned.name
        && live.specialization == assigned.specialization
        && live.phone == assigned.phone
}

fn set_flag(
    doctors: &mut RecordStore<Doctor>,
    doctor_id: i64,
    is_available: bool,
) -> Result<Doctor, StoreError> {
    let doctor = doctors.get_mut(doctor_id)?;
    doctor.is_available = is_available;
    Ok(doctor.clone())
}
