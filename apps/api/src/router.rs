use axum::{routing::get, Router};

use appointment_cell::handlers::AppointmentState;
use appointment_cell::router::appointment_routes;
use doctor_cell::handlers::DoctorState;
use doctor_cell::router::doctor_routes;

pub fn create_router(doctors: DoctorState, appointments: AppointmentState) -> Router {
    Router::new()
        .route("/", get(|| async { "Telehealth API is running!" }))
        .nest("/doctors", doctor_routes(doctors))
        .nest("/appointments", appointment_routes(appointments))
}
