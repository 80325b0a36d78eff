// libs/appointment-cell/src/router.rs
use axum::{
    Router,
    routing::{get, post},
};

use shared_database::ClinicDatabase;

use crate::handlers;

pub fn appointment_routes(db: ClinicDatabase) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_appointments).post(handlers::create_appointment),
        )
        .route(
            "/{appointment_id}",
            get(handlers::get_appointment).delete(handlers::cancel_appointment),
        )
        .route("/{appointment_id}/complete", post(handlers::complete_appointment))
        .with_state(db)
}
