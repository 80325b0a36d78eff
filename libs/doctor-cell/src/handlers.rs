use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared_database::ClinicDatabase;
use shared_models::error::AppError;

use crate::models::{Doctor, SetAvailabilityRequest};
use crate::services::{AvailabilityService, DoctorService};

// ==============================================================================
// DOCTOR REGISTRY HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn create_doctor(
    State(db): State<ClinicDatabase>,
    Json(doctor): Json<Doctor>,
) -> Result<(StatusCode, Json<Doctor>), AppError> {
    let service = DoctorService::new(&db);

    let doctor = service.create_doctor(doctor).await?;

    Ok((StatusCode::CREATED, Json(doctor)))
}

#[axum::debug_handler]
pub async fn list_doctors(State(db): State<ClinicDatabase>) -> Json<Vec<Doctor>> {
    let service = DoctorService::new(&db);

    Json(service.list_doctors().await)
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(db): State<ClinicDatabase>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Doctor>, AppError> {
    let service = DoctorService::new(&db);

    let doctor = service.get_doctor(doctor_id).await?;

    Ok(Json(doctor))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(db): State<ClinicDatabase>,
    Path(doctor_id): Path<i64>,
    Json(doctor): Json<Doctor>,
) -> Result<Json<Doctor>, AppError> {
    let service = DoctorService::new(&db);

    let doctor = service.update_doctor(doctor_id, doctor).await?;

    Ok(Json(doctor))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(db): State<ClinicDatabase>,
    Path(doctor_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let service = DoctorService::new(&db);

    service.delete_doctor(doctor_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ==============================================================================
// AVAILABILITY HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn set_doctor_availability(
    State(db): State<ClinicDatabase>,
    Path(doctor_id): Path<i64>,
    Json(request): Json<SetAvailabilityRequest>,
) -> Result<Json<Doctor>, AppError> {
    let service = AvailabilityService::new(&db);

    let doctor = service
        .set_availability(doctor_id, request.is_available)
        .await?;

    Ok(Json(doctor))
}
