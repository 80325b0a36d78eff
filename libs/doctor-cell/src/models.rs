use serde::{Deserialize, Serialize};

use shared_models::error::{AppError, StoreError};

pub use shared_models::Doctor;

/// Body of `PATCH /doctors/{id}/availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetAvailabilityRequest {
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor {0} not found")]
    NotFound(i64),

    #[error("Doctor with id {0} already exists")]
    AlreadyExists(i64),
}

impl From<StoreError> for DoctorError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id, .. } => DoctorError::NotFound(id),
            StoreError::Conflict { id, .. } => DoctorError::AlreadyExists(id),
        }
    }
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) => AppError::NotFound(err.to_string()),
            DoctorError::AlreadyExists(_) => AppError::Conflict(err.to_string()),
        }
    }
}
