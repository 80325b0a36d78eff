use axum::{routing::get, Router};

use shared_database::ClinicDatabase;

use crate::handlers::*;

pub fn patient_routes(db: ClinicDatabase) -> Router {
    Router::new()
        .route("/", get(list_patients).post(create_patient))
        .route(
            "/{patient_id}",
            get(get_patient).put(update_patient).delete(delete_patient),
        )
        .with_state(db)
}
