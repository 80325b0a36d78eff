use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use shared_models::Appointment;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient_id: i64,
    pub date: DateTime<Utc>,
}

/// How an appointment left the active set. Neither outcome is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentOutcome {
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppointmentOutcome::Completed => write!(f, "completed"),
            AppointmentOutcome::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment {0} not found")]
    NotFound(i64),

    #[error("Patient {0} not found")]
    PatientNotFound(i64),

    #[error("No available doctors")]
    NoAvailableDoctor,
}
