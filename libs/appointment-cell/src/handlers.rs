// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{Appointment, AppointmentError, AppointmentFilter, AppointmentListResponse};
use crate::services::{AppointmentListService, AppointmentRepository};

pub type AppointmentState = Arc<dyn AppointmentRepository>;

#[axum::debug_handler]
pub async fn list_appointments(
    State(repository): State<AppointmentState>,
    Query(filter): Query<AppointmentFilter>,
) -> Result<Json<AppointmentListResponse>, AppError> {
    let response = AppointmentListService::new(repository).list(&filter)?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(repository): State<AppointmentState>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    let appointment_id = Uuid::parse_str(&appointment_id)
        .map_err(|_| AppointmentError::InvalidId(appointment_id.clone()))?;

    let appointment = AppointmentListService::new(repository).get(appointment_id)?;
    Ok(Json(appointment))
}
