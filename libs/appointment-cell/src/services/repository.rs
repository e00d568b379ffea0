// libs/appointment-cell/src/services/repository.rs
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;
use uuid::Uuid;

use crate::models::{Appointment, AppointmentError, AppointmentStatus, Modality};

pub trait AppointmentRepository: Send + Sync {
    /// All appointments in display order.
    fn list_appointments(&self) -> Result<Vec<Appointment>, AppointmentError>;

    fn find_appointment(&self, appointment_id: Uuid) -> Result<Option<Appointment>, AppointmentError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryAppointmentRepository {
    appointments: Vec<Appointment>,
}

impl InMemoryAppointmentRepository {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    pub fn with_sample_data(today: NaiveDate) -> Self {
        Self::new(sample_appointments(today))
    }
}

impl AppointmentRepository for InMemoryAppointmentRepository {
    fn list_appointments(&self) -> Result<Vec<Appointment>, AppointmentError> {
        Ok(self.appointments.clone())
    }

    fn find_appointment(&self, appointment_id: Uuid) -> Result<Option<Appointment>, AppointmentError> {
        debug!("Looking up appointment {}", appointment_id);
        Ok(self.appointments.iter().find(|a| a.id == appointment_id).cloned())
    }
}

pub const CARDIOLOGY_FOLLOW_UP_ID: Uuid = Uuid::from_u128(0x3a9f_0b10_0000_4000_8000_0000_0000_0001);
pub const DERMATOLOGY_VISIT_ID: Uuid = Uuid::from_u128(0x3a9f_0b10_0000_4000_8000_0000_0000_0002);
pub const PEDIATRIC_CHECK_ID: Uuid = Uuid::from_u128(0x3a9f_0b10_0000_4000_8000_0000_0000_0003);
pub const ANNUAL_PHYSICAL_ID: Uuid = Uuid::from_u128(0x3a9f_0b10_0000_4000_8000_0000_0000_0004);
pub const NEUROLOGY_CONSULT_ID: Uuid = Uuid::from_u128(0x3a9f_0b10_0000_4000_8000_0000_0000_0005);

fn day_at(today: NaiveDate, offset_days: i64, hour: u32, minute: u32) -> NaiveDateTime {
    let date = today
        .checked_add_signed(Duration::days(offset_days))
        .unwrap_or(today);
    date.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN))
}

/// Five sample records: two upcoming, two completed, one cancelled.
pub fn sample_appointments(today: NaiveDate) -> Vec<Appointment> {
    vec![
        Appointment {
            id: CARDIOLOGY_FOLLOW_UP_ID,
            doctor_name: "Dr. Sarah Johnson".to_string(),
            doctor_specialty: "Cardiologist".to_string(),
            doctor_image_url: Some("/images/doctors/sarah-johnson.jpg".to_string()),
            start_time: day_at(today, 1, 10, 0),
            duration_minutes: 30,
            modality: Modality::Video,
            status: AppointmentStatus::Upcoming,
            notes: Some("Follow-up on blood pressure readings".to_string()),
        },
        Appointment {
            id: DERMATOLOGY_VISIT_ID,
            doctor_name: "Dr. Michael Chen".to_string(),
            doctor_specialty: "Dermatologist".to_string(),
            doctor_image_url: Some("/images/doctors/michael-chen.jpg".to_string()),
            start_time: day_at(today, -7, 14, 30),
            duration_minutes: 30,
            modality: Modality::Video,
            status: AppointmentStatus::Completed,
            notes: Some("Skin rash review, topical cream prescribed".to_string()),
        },
        Appointment {
            id: PEDIATRIC_CHECK_ID,
            doctor_name: "Dr. Emily Rodriguez".to_string(),
            doctor_specialty: "Pediatrician".to_string(),
            doctor_image_url: Some("/images/doctors/emily-rodriguez.jpg".to_string()),
            start_time: day_at(today, 3, 11, 0),
            duration_minutes: 30,
            modality: Modality::Phone,
            status: AppointmentStatus::Upcoming,
            notes: None,
        },
        Appointment {
            id: ANNUAL_PHYSICAL_ID,
            doctor_name: "Dr. James Wilson".to_string(),
            doctor_specialty: "General Practitioner".to_string(),
            doctor_image_url: None,
            start_time: day_at(today, -14, 9, 0),
            duration_minutes: 45,
            modality: Modality::Phone,
            status: AppointmentStatus::Completed,
            notes: Some("Annual physical, all results normal".to_string()),
        },
        Appointment {
            id: NEUROLOGY_CONSULT_ID,
            doctor_name: "Dr. Lisa Park".to_string(),
            doctor_specialty: "Neurologist".to_string(),
            doctor_image_url: None,
            start_time: day_at(today, -2, 16, 0),
            duration_minutes: 30,
            modality: Modality::Video,
            status: AppointmentStatus::Cancelled,
            notes: Some("Patient rescheduled due to travel".to_string()),
        },
    ]
}
