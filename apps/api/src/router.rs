use axum::{
    Json, Router,
    routing::get,
};
use serde_json::{json, Value};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use appointment_cell::appointment_routes;
use doctor_cell::doctor_routes;
use patient_cell::patient_routes;
use shared_database::ClinicDatabase;

pub fn create_router(db: ClinicDatabase) -> Router {
    Router::new()
        .route("/", get(welcome))
        .nest("/patients", patient_routes(db.clone()))
        .nest("/doctors", doctor_routes(db.clone()))
        .nest("/appointments", appointment_routes(db))
}

/// Lets `/patients/` and `/patients` reach the same handler.
pub fn with_trailing_slash(app: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app)
}

async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Hello, welcome to the API!" }))
}
