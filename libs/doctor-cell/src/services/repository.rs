// libs/doctor-cell/src/services/repository.rs
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;
use uuid::Uuid;

use crate::models::{Doctor, DoctorError};

/// Read access to the doctor directory.
///
/// Doctors are reference data: the booking flow never creates or edits them.
pub trait DoctorRepository: Send + Sync {
    fn list_doctors(&self) -> Result<Vec<Doctor>, DoctorError>;

    fn find_doctor(&self, doctor_id: Uuid) -> Result<Option<Doctor>, DoctorError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryDoctorRepository {
    doctors: Vec<Doctor>,
}

impl InMemoryDoctorRepository {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// Directory seeded with the sample doctors, slots laid out around `today`.
    pub fn with_sample_data(today: NaiveDate) -> Self {
        Self::new(sample_doctors(today))
    }
}

impl DoctorRepository for InMemoryDoctorRepository {
    fn list_doctors(&self) -> Result<Vec<Doctor>, DoctorError> {
        Ok(self.doctors.clone())
    }

    fn find_doctor(&self, doctor_id: Uuid) -> Result<Option<Doctor>, DoctorError> {
        debug!("Looking up doctor {}", doctor_id);
        Ok(self.doctors.iter().find(|d| d.id == doctor_id).cloned())
    }
}

pub const SARAH_JOHNSON_ID: Uuid = Uuid::from_u128(0x7c1e_44a0_0000_4000_8000_0000_0000_0001);
pub const MICHAEL_CHEN_ID: Uuid = Uuid::from_u128(0x7c1e_44a0_0000_4000_8000_0000_0000_0002);
pub const EMILY_RODRIGUEZ_ID: Uuid = Uuid::from_u128(0x7c1e_44a0_0000_4000_8000_0000_0000_0003);
pub const JAMES_WILSON_ID: Uuid = Uuid::from_u128(0x7c1e_44a0_0000_4000_8000_0000_0000_0004);

fn slot(day: NaiveDate, offset_days: i64, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    let date = day.checked_add_signed(Duration::days(offset_days))?;
    Some(date.and_time(NaiveTime::from_hms_opt(hour, minute, 0)?))
}

fn slots(today: NaiveDate, layout: &[(i64, u32, u32)]) -> Vec<NaiveDateTime> {
    layout
        .iter()
        .filter_map(|&(offset, hour, minute)| slot(today, offset, hour, minute))
        .collect()
}

pub fn sample_doctors(today: NaiveDate) -> Vec<Doctor> {
    vec![
        Doctor {
            id: SARAH_JOHNSON_ID,
            name: "Dr. Sarah Johnson".to_string(),
            specialty: "Cardiologist".to_string(),
            rating: 4.9,
            image_url: Some("/images/doctors/sarah-johnson.jpg".to_string()),
            available_slots: slots(today, &[(0, 10, 0), (0, 14, 0), (1, 11, 0), (2, 9, 30)]),
        },
        Doctor {
            id: MICHAEL_CHEN_ID,
            name: "Dr. Michael Chen".to_string(),
            specialty: "Dermatologist".to_string(),
            rating: 4.8,
            image_url: Some("/images/doctors/michael-chen.jpg".to_string()),
            available_slots: slots(today, &[(1, 15, 30), (1, 9, 0), (3, 13, 0)]),
        },
        Doctor {
            id: EMILY_RODRIGUEZ_ID,
            name: "Dr. Emily Rodriguez".to_string(),
            specialty: "Pediatrician".to_string(),
            rating: 4.7,
            image_url: Some("/images/doctors/emily-rodriguez.jpg".to_string()),
            available_slots: slots(today, &[(0, 16, 0), (2, 10, 30), (2, 11, 0)]),
        },
        Doctor {
            id: JAMES_WILSON_ID,
            name: "Dr. James Wilson".to_string(),
            specialty: "General Practitioner".to_string(),
            rating: 4.6,
            image_url: None,
            available_slots: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
    }

    #[test]
    fn test_sample_directory_lookup() {
        let repo = InMemoryDoctorRepository::with_sample_data(today());

        assert_eq!(repo.list_doctors().unwrap().len(), 4);

        let sarah = repo.find_doctor(SARAH_JOHNSON_ID).unwrap().unwrap();
        assert_eq!(sarah.specialty, "Cardiologist");
        assert_eq!(sarah.available_slots.len(), 4);

        assert!(repo.find_doctor(Uuid::nil()).unwrap().is_none());
    }

    #[test]
    fn test_sample_slots_follow_anchor_date() {
        let doctors = sample_doctors(today());
        let first = doctors[0].available_slots[0];
        assert_eq!(first.date(), today());

        let shifted = sample_doctors(today() + Duration::days(7));
        assert_eq!(shifted[0].available_slots[0].date(), today() + Duration::days(7));
    }
}
