// libs/doctor-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{
    AvailableDatesResponse, AvailableTimesResponse, Doctor, DoctorError, DoctorListResponse,
};
use crate::services::{AvailabilityService, DoctorRepository, DoctorService};

pub type DoctorState = Arc<dyn DoctorRepository>;

#[derive(Debug, Deserialize)]
pub struct DoctorSearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
}

fn parse_doctor_id(raw: &str) -> Result<Uuid, DoctorError> {
    Uuid::parse_str(raw).map_err(|_| DoctorError::InvalidId(raw.to_string()))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(repository): State<DoctorState>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<DoctorListResponse>, AppError> {
    let doctors = DoctorService::new(repository).search_doctors(query.q.as_deref())?;

    Ok(Json(DoctorListResponse {
        total: doctors.len(),
        doctors,
    }))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(repository): State<DoctorState>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Doctor>, AppError> {
    let doctor_id = parse_doctor_id(&doctor_id)?;
    let doctor = DoctorService::new(repository).get_doctor(doctor_id)?;
    Ok(Json(doctor))
}

#[axum::debug_handler]
pub async fn get_available_times(
    State(repository): State<DoctorState>,
    Path(doctor_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailableTimesResponse>, AppError> {
    let doctor_id = parse_doctor_id(&doctor_id)?;
    let doctor = DoctorService::new(repository).get_doctor(doctor_id)?;

    Ok(Json(AvailableTimesResponse {
        doctor_id,
        date: query.date,
        times: AvailabilityService::available_times(&doctor, query.date),
    }))
}

#[axum::debug_handler]
pub async fn get_available_dates(
    State(repository): State<DoctorState>,
    Path(doctor_id): Path<String>,
) -> Result<Json<AvailableDatesResponse>, AppError> {
    let doctor_id = parse_doctor_id(&doctor_id)?;
    let doctor = DoctorService::new(repository).get_doctor(doctor_id)?;

    Ok(Json(AvailableDatesResponse {
        doctor_id,
        dates: AvailabilityService::available_dates(&doctor),
    }))
}
