use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::doctor::Doctor;
use crate::patient::Patient;

/// An active appointment.
///
/// `patient` and `doctor` are copies taken when the appointment was booked.
/// Later edits through the registries are not reflected here; use the
/// embedded ids to reach the live records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient: Patient,
    pub doctor: Doctor,
    pub date: DateTime<Utc>,
}
