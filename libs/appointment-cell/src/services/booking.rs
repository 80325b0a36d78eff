// libs/appointment-cell/src/services/booking.rs
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use doctor_cell::services::availability;
use shared_database::ClinicDatabase;

use crate::models::{Appointment, AppointmentError};

pub struct AppointmentBookingService {
    db: ClinicDatabase,
}

impl AppointmentBookingService {
    pub fn new(db: &ClinicDatabase) -> Self {
        Self { db: db.clone() }
    }

    /// Book `patient_id` with the first available doctor.
    ///
    /// The whole booking runs under the database write lock: the doctor is
    /// claimed and the appointment stored before any other request can look
    /// at availability.
    pub async fn create_appointment(
        &self,
        patient_id: i64,
        date: DateTime<Utc>,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Booking appointment for patient {} at {}", patient_id, date);

        let mut data = self.db.write().await;

        let patient = data
            .patients
            .get(patient_id)
            .map_err(|_| AppointmentError::PatientNotFound(patient_id))?;

        let doctor = availability::claim_first_available(&mut data.doctors).ok_or_else(|| {
            warn!(patient_id, "No available doctor for booking");
            AppointmentError::NoAvailableDoctor
        })?;

        let appointment = Appointment {
            id: data.next_appointment_id(),
            patient,
            doctor,
            date,
        };
        let appointment = data.appointments.add(appointment);

        info!(
            appointment_id = appointment.id,
            patient_id,
            doctor_id = appointment.doctor.id,
            "Appointment booked"
        );

        Ok(appointment)
    }

    pub async fn list_appointments(&self) -> Vec<Appointment> {
        self.db.read().await.appointments.list_all()
    }

    pub async fn get_appointment(&self, appointment_id: i64) -> Result<Appointment, AppointmentError> {
        debug!("Fetching appointment: {}", appointment_id);

        self.db
            .read()
            .await
            .appointments
            .get(appointment_id)
            .map_err(|_| AppointmentError::NotFound(appointment_id))
    }
}
