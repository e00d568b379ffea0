// libs/appointment-cell/src/router.rs
use axum::{routing::get, Router};

use crate::handlers::{self, AppointmentState};

pub fn appointment_routes(state: AppointmentState) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .with_state(state)
}
