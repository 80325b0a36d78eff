// libs/appointment-cell/src/handlers.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_database::ClinicDatabase;
use shared_models::error::AppError;

use crate::models::{Appointment, AppointmentError, CreateAppointmentRequest};
use crate::services::{AppointmentBookingService, AppointmentLifecycleService};

fn to_app_error(err: AppointmentError) -> AppError {
    match err {
        AppointmentError::NotFound(_) | AppointmentError::PatientNotFound(_) => {
            AppError::NotFound(err.to_string())
        }
        AppointmentError::NoAvailableDoctor => AppError::BadRequest(err.to_string()),
    }
}

/// Book with the first available doctor.
#[axum::debug_handler]
pub async fn create_appointment(
    State(db): State<ClinicDatabase>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let booking_service = AppointmentBookingService::new(&db);

    let appointment = booking_service
        .create_appointment(request.patient_id, request.date)
        .await
        .map_err(to_app_error)?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[axum::debug_handler]
pub async fn list_appointments(State(db): State<ClinicDatabase>) -> Json<Vec<Appointment>> {
    let booking_service = AppointmentBookingService::new(&db);

    Json(booking_service.list_appointments().await)
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(db): State<ClinicDatabase>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Appointment>, AppError> {
    let booking_service = AppointmentBookingService::new(&db);

    let appointment = booking_service
        .get_appointment(appointment_id)
        .await
        .map_err(to_app_error)?;

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn complete_appointment(
    State(db): State<ClinicDatabase>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let lifecycle_service = AppointmentLifecycleService::new(&db);

    lifecycle_service
        .complete_appointment(appointment_id)
        .await
        .map_err(to_app_error)?;

    Ok(Json(json!({
        "message": "Appointment completed"
    })))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(db): State<ClinicDatabase>,
    Path(appointment_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let lifecycle_service = AppointmentLifecycleService::new(&db);

    lifecycle_service
        .cancel_appointment(appointment_id)
        .await
        .map_err(to_app_error)?;

    Ok(StatusCode::NO_CONTENT)
}
