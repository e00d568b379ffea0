// libs/doctor-cell/src/models.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{NaiveDate, NaiveDateTime};

use shared_models::error::AppError;

/// Every published slot is implicitly this long.
pub const DEFAULT_SLOT_MINUTES: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub rating: f32,
    pub image_url: Option<String>,
    /// Published start times, local basis, in no particular order.
    pub available_slots: Vec<NaiveDateTime>,
}

impl Doctor {
    pub fn has_slots(&self) -> bool {
        !self.available_slots.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorListResponse {
    pub doctors: Vec<Doctor>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableTimesResponse {
    pub doctor_id: Uuid,
    pub date: NaiveDate,
    pub times: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableDatesResponse {
    pub doctor_id: Uuid,
    pub dates: Vec<NaiveDate>,
}

#[derive(Debug, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid doctor id: {0}")]
    InvalidId(String),

    #[error("Doctor repository error: {0}")]
    Repository(String),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) => AppError::NotFound(err.to_string()),
            DoctorError::InvalidId(_) => AppError::BadRequest(err.to_string()),
            DoctorError::Repository(msg) => AppError::Internal(msg),
        }
    }
}
