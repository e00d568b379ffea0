use axum::{routing::get, Router};

use crate::handlers::{self, DoctorState};

pub fn doctor_routes(state: DoctorState) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route("/{doctor_id}/available-times", get(handlers::get_available_times))
        .route("/{doctor_id}/available-dates", get(handlers::get_available_dates))
        .with_state(state)
}
