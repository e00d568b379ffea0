// libs/doctor-cell/src/services/doctor.rs
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::models::{Doctor, DoctorError};
use crate::services::repository::DoctorRepository;

pub struct DoctorService {
    repository: Arc<dyn DoctorRepository>,
}

impl DoctorService {
    pub fn new(repository: Arc<dyn DoctorRepository>) -> Self {
        Self { repository }
    }

    pub fn list_doctors(&self) -> Result<Vec<Doctor>, DoctorError> {
        self.repository.list_doctors()
    }

    pub fn get_doctor(&self, doctor_id: Uuid) -> Result<Doctor, DoctorError> {
        self.repository
            .find_doctor(doctor_id)?
            .ok_or(DoctorError::NotFound(doctor_id))
    }

    /// Case-insensitive match on name or specialty. A blank query returns the
    /// whole directory in repository order.
    pub fn search_doctors(&self, query: Option<&str>) -> Result<Vec<Doctor>, DoctorError> {
        let doctors = self.repository.list_doctors()?;

        let needle = match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => q.to_lowercase(),
            None => return Ok(doctors),
        };

        let matched: Vec<Doctor> = doctors
            .into_iter()
            .filter(|d| {
                d.name.to_lowercase().contains(&needle)
                    || d.specialty.to_lowercase().contains(&needle)
            })
            .collect();

        debug!("Doctor search {:?} matched {} doctor(s)", needle, matched.len());
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use crate::services::repository::{InMemoryDoctorRepository, MICHAEL_CHEN_ID};

    fn service() -> DoctorService {
        let today = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        DoctorService::new(Arc::new(InMemoryDoctorRepository::with_sample_data(today)))
    }

    #[test]
    fn test_search_by_specialty_case_insensitive() {
        let found = service().search_doctors(Some("DERMA")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, MICHAEL_CHEN_ID);
    }

    #[test]
    fn test_search_by_name() {
        let found = service().search_doctors(Some("rodriguez")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].specialty, "Pediatrician");
    }

    #[test]
    fn test_blank_search_returns_everyone() {
        assert_eq!(service().search_doctors(Some("   ")).unwrap().len(), 4);
        assert_eq!(service().search_doctors(None).unwrap().len(), 4);
    }

    #[test]
    fn test_get_unknown_doctor() {
        let missing = Uuid::new_v4();
        assert_matches!(service().get_doctor(missing), Err(DoctorError::NotFound(id)) if id == missing);
    }
}
