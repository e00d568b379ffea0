// libs/appointment-cell/src/models.rs
use serde::de::value::StringDeserializer;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

use shared_models::error::AppError;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_name: String,
    pub doctor_specialty: String,
    pub doctor_image_url: Option<String>,
    pub start_time: NaiveDateTime,
    pub duration_minutes: i64,
    pub modality: Modality,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

impl Appointment {
    pub fn end_time(&self) -> NaiveDateTime {
        self.start_time + chrono::Duration::minutes(self.duration_minutes)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Upcoming => write!(f, "upcoming"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// How the consultation is delivered.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    #[default]
    Video,
    Phone,
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modality::Video => write!(f, "video"),
            Modality::Phone => write!(f, "phone"),
        }
    }
}

// ==============================================================================
// LIST FILTER MODELS
// ==============================================================================

/// Top-level grouping of the appointments page.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentTab {
    #[default]
    Upcoming,
    Past,
    Cancelled,
}

impl AppointmentTab {
    pub fn includes(&self, status: AppointmentStatus) -> bool {
        matches!(
            (self, status),
            (AppointmentTab::Upcoming, AppointmentStatus::Upcoming)
                | (AppointmentTab::Past, AppointmentStatus::Completed)
                | (AppointmentTab::Cancelled, AppointmentStatus::Cancelled)
        )
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Upcoming,
    Completed,
    Cancelled,
}

impl StatusFilter {
    pub fn matches(&self, status: AppointmentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Upcoming => status == AppointmentStatus::Upcoming,
            StatusFilter::Completed => status == AppointmentStatus::Completed,
            StatusFilter::Cancelled => status == AppointmentStatus::Cancelled,
        }
    }
}

/// Every criterion must pass; tab and status both constrain the status field.
///
/// Blank query parameters (`date=`, `tab=`) count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentFilter {
    #[serde(deserialize_with = "blank_as_default")]
    pub tab: AppointmentTab,
    #[serde(deserialize_with = "blank_as_default")]
    pub status: StatusFilter,
    #[serde(deserialize_with = "blank_as_none")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "q")]
    pub query: Option<String>,
}

impl AppointmentFilter {
    pub fn for_tab(tab: AppointmentTab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn matching(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn matches(&self, appointment: &Appointment) -> bool {
        if !self.tab.includes(appointment.status) || !self.status.matches(appointment.status) {
            return false;
        }

        if let Some(date) = self.date {
            if appointment.start_time.date() != date {
                return false;
            }
        }

        match self.normalized_query() {
            Some(needle) => {
                appointment.doctor_name.to_lowercase().contains(&needle)
                    || appointment.doctor_specialty.to_lowercase().contains(&needle)
                    || appointment
                        .notes
                        .as_deref()
                        .is_some_and(|notes| notes.to_lowercase().contains(&needle))
            }
            None => true,
        }
    }

    /// Lower-cased query, or `None` when absent or blank.
    fn normalized_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            let value: StringDeserializer<D::Error> = value.to_string().into_deserializer();
            T::deserialize(value).map(Some)
        }
    }
}

fn blank_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    blank_as_none(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabCounts {
    pub upcoming: usize,
    pub past: usize,
    pub cancelled: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentListResponse {
    pub appointments: Vec<Appointment>,
    pub total: usize,
    pub counts: TabCounts,
}

// ==============================================================================
// BOOKING MODELS
// ==============================================================================

/// A confirmed wizard session, handed to the booking submission handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub doctor_id: Uuid,
    pub doctor_name: String,
    pub doctor_specialty: String,
    /// Selected date combined with the selected "HH:MM", seconds zeroed.
    pub start_time: NaiveDateTime,
    pub duration_minutes: i64,
    pub modality: Modality,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    SelectingDoctor,
    SelectingSlot,
    ConfirmingDetails,
    Booked,
    Cancelled,
}

impl WizardStep {
    /// 1-based step shown in the modal header; `None` once the session is over.
    pub fn number(&self) -> Option<u8> {
        match self {
            WizardStep::SelectingDoctor => Some(1),
            WizardStep::SelectingSlot => Some(2),
            WizardStep::ConfirmingDetails => Some(3),
            WizardStep::Booked | WizardStep::Cancelled => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.number().is_none()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStep::SelectingDoctor => write!(f, "selecting a doctor"),
            WizardStep::SelectingSlot => write!(f, "selecting a slot"),
            WizardStep::ConfirmingDetails => write!(f, "confirming details"),
            WizardStep::Booked => write!(f, "booked"),
            WizardStep::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid appointment id: {0}")]
    InvalidId(String),

    #[error("Appointment repository error: {0}")]
    Repository(String),

    #[error("Booking submission rejected: {0}")]
    SubmissionRejected(String),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound(_) => AppError::NotFound(err.to_string()),
            AppointmentError::InvalidId(_) => AppError::BadRequest(err.to_string()),
            AppointmentError::Repository(msg) | AppointmentError::SubmissionRejected(msg) => {
                AppError::Internal(msg)
            }
        }
    }
}

/// Unmet preconditions of the booking wizard. Callers can avoid most of these
/// by consulting `BookingWizard::can_advance` first.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WizardError {
    #[error("Select a doctor to continue")]
    DoctorNotSelected,

    #[error("Select a date to continue")]
    DateNotSelected,

    #[error("Select a time to continue")]
    TimeNotSelected,

    #[error("Invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),

    #[error("{time} on {date} is not available for {doctor}")]
    SlotUnavailable {
        doctor: String,
        date: NaiveDate,
        time: String,
    },

    #[error("Cannot {action} while {step}")]
    InvalidAction {
        action: &'static str,
        step: WizardStep,
    },

    #[error("Booking session is closed")]
    SessionClosed,

    #[error(transparent)]
    Submission(#[from] AppointmentError),
}
