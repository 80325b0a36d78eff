use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared_database::ClinicDatabase;
use shared_models::error::AppError;

use crate::models::Patient;
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn create_patient(
    State(db): State<ClinicDatabase>,
    Json(patient): Json<Patient>,
) -> Result<(StatusCode, Json<Patient>), AppError> {
    let service = PatientService::new(&db);

    let patient = service.create_patient(patient).await?;

    Ok((StatusCode::CREATED, Json(patient)))
}

#[axum::debug_handler]
pub async fn list_patients(State(db): State<ClinicDatabase>) -> Json<Vec<Patient>> {
    let service = PatientService::new(&db);

    Json(service.list_patients().await)
}

#[axum::debug_handler]
pub async fn get_patient(
    State(db): State<ClinicDatabase>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Patient>, AppError> {
    let service = PatientService::new(&db);

    let patient = service.get_patient(patient_id).await?;

    Ok(Json(patient))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(db): State<ClinicDatabase>,
    Path(patient_id): Path<i64>,
    Json(patient): Json<Patient>,
) -> Result<Json<Patient>, AppError> {
    let service = PatientService::new(&db);

    let patient = service.update_patient(patient_id, patient).await?;

    Ok(Json(patient))
}

#[axum::debug_handler]
pub async fn delete_patient(
    State(db): State<ClinicDatabase>,
    Path(patient_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let service = PatientService::new(&db);

    service.delete_patient(patient_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
