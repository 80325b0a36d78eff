// libs/appointment-cell/src/services/lifecycle.rs
use tracing::{debug, info, warn};

use doctor_cell::services::availability;
use shared_database::ClinicDatabase;

use crate::models::{Appointment, AppointmentError, AppointmentOutcome};

pub struct AppointmentLifecycleService {
    db: ClinicDatabase,
}

impl AppointmentLifecycleService {
    pub fn new(db: &ClinicDatabase) -> Self {
        Self { db: db.clone() }
    }

    pub async fn complete_appointment(
        &self,
        appointment_id: i64,
    ) -> Result<Appointment, AppointmentError> {
        self.close(appointment_id, AppointmentOutcome::Completed).await
    }

    pub async fn cancel_appointment(
        &self,
        appointment_id: i64,
    ) -> Result<Appointment, AppointmentError> {
        self.close(appointment_id, AppointmentOutcome::Cancelled).await
    }

    /// Remove the appointment and free its doctor.
    ///
    /// The doctor is looked up in the live registry by the id held in the
    /// appointment's copy; the copy itself is never modified.
    async fn close(
        &self,
        appointment_id: i64,
        outcome: AppointmentOutcome,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Closing appointment {} as {}", appointment_id, outcome);

        let mut data = self.db.write().await;

        let appointment = data
            .appointments
            .remove(appointment_id)
            .map_err(|_| AppointmentError::NotFound(appointment_id))?;

        if let Err(err) = availability::release(&mut data.doctors, &appointment.doctor) {
            warn!(
                appointment_id,
                doctor_id = appointment.doctor.id,
                "Doctor no longer registered, nothing to release: {}",
                err
            );
        }

        info!(appointment_id, outcome = %outcome, "Appointment closed");
        Ok(appointment)
    }
}
