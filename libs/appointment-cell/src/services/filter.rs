// libs/appointment-cell/src/services/filter.rs
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::models::{
    Appointment, AppointmentError, AppointmentFilter, AppointmentListResponse, AppointmentStatus,
    TabCounts,
};
use crate::services::repository::AppointmentRepository;

pub struct AppointmentListService {
    repository: Arc<dyn AppointmentRepository>,
}

impl AppointmentListService {
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self { repository }
    }

    pub fn list(&self, filter: &AppointmentFilter) -> Result<AppointmentListResponse, AppointmentError> {
        let all = self.repository.list_appointments()?;
        let appointments = filter_appointments(&all, filter);

        debug!(
            "Appointment filter {:?} kept {} of {}",
            filter,
            appointments.len(),
            all.len()
        );

        Ok(AppointmentListResponse {
            total: appointments.len(),
            counts: tab_counts(&all),
            appointments,
        })
    }

    pub fn get(&self, appointment_id: Uuid) -> Result<Appointment, AppointmentError> {
        self.repository
            .find_appointment(appointment_id)?
            .ok_or(AppointmentError::NotFound(appointment_id))
    }
}

/// Order-preserving subsequence of `appointments` passing every criterion.
pub fn filter_appointments(appointments: &[Appointment], filter: &AppointmentFilter) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|a| filter.matches(a))
        .cloned()
        .collect()
}

pub fn tab_counts(appointments: &[Appointment]) -> TabCounts {
    appointments
        .iter()
        .fold(TabCounts::default(), |mut counts, a| {
            match a.status {
                AppointmentStatus::Upcoming => counts.upcoming += 1,
                AppointmentStatus::Completed => counts.past += 1,
                AppointmentStatus::Cancelled => counts.cancelled += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::{AppointmentTab, StatusFilter};
    use crate::services::repository::{
        sample_appointments, ANNUAL_PHYSICAL_ID, CARDIOLOGY_FOLLOW_UP_ID, DERMATOLOGY_VISIT_ID,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
    }

    fn ids(appointments: &[Appointment]) -> Vec<Uuid> {
        appointments.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_past_tab_keeps_completed_in_order() {
        let all = sample_appointments(today());
        let past = filter_appointments(&all, &AppointmentFilter::for_tab(AppointmentTab::Past));

        assert_eq!(ids(&past), vec![DERMATOLOGY_VISIT_ID, ANNUAL_PHYSICAL_ID]);
    }

    #[test]
    fn test_tab_and_status_intersect() {
        let all = sample_appointments(today());
        let filter = AppointmentFilter::for_tab(AppointmentTab::Upcoming)
            .with_status(StatusFilter::Cancelled);

        assert!(filter_appointments(&all, &filter).is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive_over_specialty() {
        let all = sample_appointments(today());
        let filter = AppointmentFilter::for_tab(AppointmentTab::Upcoming).matching("CARDIO");

        assert_eq!(ids(&filter_appointments(&all, &filter)), vec![CARDIOLOGY_FOLLOW_UP_ID]);
    }

    #[test]
    fn test_tab_counts() {
        let counts = tab_counts(&sample_appointments(today()));
        assert_eq!(
            counts,
            TabCounts {
                upcoming: 2,
                past: 2,
                cancelled: 1
            }
        );
    }
}
