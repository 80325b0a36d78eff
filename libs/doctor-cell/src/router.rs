use axum::{
    Router,
    routing::{get, patch},
};

use shared_database::ClinicDatabase;

use crate::handlers;

pub fn doctor_routes(db: ClinicDatabase) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors).post(handlers::create_doctor))
        .route(
            "/{doctor_id}",
            get(handlers::get_doctor)
                .put(handlers::update_doctor)
                .delete(handlers::delete_doctor),
        )
        .route("/{doctor_id}/availability", patch(handlers::set_doctor_availability))
        .with_state(db)
}
