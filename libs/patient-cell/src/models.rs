use shared_models::error::{AppError, StoreError};

pub use shared_models::Patient;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatientError {
    #[error("Patient {0} not found")]
    NotFound(i64),

    #[error("Patient with id {0} already exists")]
    AlreadyExists(i64),
}

impl From<StoreError> for PatientError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id, .. } => PatientError::NotFound(id),
            StoreError::Conflict { id, .. } => PatientError::AlreadyExists(id),
        }
    }
}

impl From<PatientError> for AppError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::NotFound(_) => AppError::NotFound(err.to_string()),
            PatientError::AlreadyExists(_) => AppError::Conflict(err.to_string()),
        }
    }
}
