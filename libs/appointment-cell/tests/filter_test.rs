use chrono::Duration;
use uuid::Uuid;

use appointment_cell::models::{Appointment, AppointmentFilter, AppointmentTab, StatusFilter};
use appointment_cell::services::filter::filter_appointments;
use appointment_cell::services::repository::{
    sample_appointments, ANNUAL_PHYSICAL_ID, CARDIOLOGY_FOLLOW_UP_ID, DERMATOLOGY_VISIT_ID,
    NEUROLOGY_CONSULT_ID, PEDIATRIC_CHECK_ID,
};
use shared_utils::test_utils::anchor_date;

fn ids(appointments: &[Appointment]) -> Vec<Uuid> {
    appointments.iter().map(|a| a.id).collect()
}

fn samples() -> Vec<Appointment> {
    sample_appointments(anchor_date())
}

#[test]
fn test_each_tab_selects_its_status() {
    let all = samples();

    let upcoming = filter_appointments(&all, &AppointmentFilter::for_tab(AppointmentTab::Upcoming));
    assert_eq!(ids(&upcoming), vec![CARDIOLOGY_FOLLOW_UP_ID, PEDIATRIC_CHECK_ID]);

    let past = filter_appointments(&all, &AppointmentFilter::for_tab(AppointmentTab::Past));
    assert_eq!(ids(&past), vec![DERMATOLOGY_VISIT_ID, ANNUAL_PHYSICAL_ID]);

    let cancelled = filter_appointments(&all, &AppointmentFilter::for_tab(AppointmentTab::Cancelled));
    assert_eq!(ids(&cancelled), vec![NEUROLOGY_CONSULT_ID]);
}

#[test]
fn test_tab_and_status_never_union() {
    let all = samples();

    for tab in [AppointmentTab::Upcoming, AppointmentTab::Past, AppointmentTab::Cancelled] {
        for status in [StatusFilter::Upcoming, StatusFilter::Completed, StatusFilter::Cancelled] {
            let filter = AppointmentFilter::for_tab(tab).with_status(status);
            let result = filter_appointments(&all, &filter);

            for appointment in &result {
                assert!(tab.includes(appointment.status));
                assert!(status.matches(appointment.status));
            }
        }
    }

    let filter = AppointmentFilter::for_tab(AppointmentTab::Upcoming).with_status(StatusFilter::Cancelled);
    assert!(filter_appointments(&all, &filter).is_empty());

    let filter = AppointmentFilter::for_tab(AppointmentTab::Past).with_status(StatusFilter::Completed);
    assert_eq!(filter_appointments(&all, &filter).len(), 2);
}

#[test]
fn test_query_matches_only_cardiologist() {
    let all = samples();

    let matched: Vec<Appointment> = [AppointmentTab::Upcoming, AppointmentTab::Past, AppointmentTab::Cancelled]
        .into_iter()
        .flat_map(|tab| filter_appointments(&all, &AppointmentFilter::for_tab(tab).matching("cardio")))
        .collect();

    assert_eq!(ids(&matched), vec![CARDIOLOGY_FOLLOW_UP_ID]);
    assert_eq!(matched[0].doctor_specialty, "Cardiologist");
}

#[test]
fn test_query_searches_doctor_name_and_notes() {
    let all = samples();

    let by_name = AppointmentFilter::for_tab(AppointmentTab::Past).matching("wilson");
    assert_eq!(ids(&filter_appointments(&all, &by_name)), vec![ANNUAL_PHYSICAL_ID]);

    let by_notes = AppointmentFilter::for_tab(AppointmentTab::Past).matching("Topical Cream");
    assert_eq!(ids(&filter_appointments(&all, &by_notes)), vec![DERMATOLOGY_VISIT_ID]);
}

#[test]
fn test_missing_notes_do_not_match() {
    let all = samples();
    let filter = AppointmentFilter::for_tab(AppointmentTab::Upcoming).matching("blood");

    assert_eq!(ids(&filter_appointments(&all, &filter)), vec![CARDIOLOGY_FOLLOW_UP_ID]);
}

#[test]
fn test_date_and_query_both_apply() {
    let all = samples();
    let tomorrow = anchor_date() + Duration::days(1);

    let on_date = AppointmentFilter::for_tab(AppointmentTab::Upcoming).on_date(tomorrow);
    assert_eq!(ids(&filter_appointments(&all, &on_date)), vec![CARDIOLOGY_FOLLOW_UP_ID]);

    let on_date_other_doctor = on_date.clone().matching("pediatric");
    assert!(filter_appointments(&all, &on_date_other_doctor).is_empty());

    let on_date_same_doctor = on_date.matching("johnson");
    assert_eq!(ids(&filter_appointments(&all, &on_date_same_doctor)), vec![CARDIOLOGY_FOLLOW_UP_ID]);
}

#[test]
fn test_blank_query_is_ignored() {
    let all = samples();
    let filter = AppointmentFilter::for_tab(AppointmentTab::Upcoming).matching("   ");

    assert_eq!(filter_appointments(&all, &filter).len(), 2);
}

#[test]
fn test_empty_collection() {
    let filter = AppointmentFilter::default();
    assert!(filter_appointments(&[], &filter).is_empty());
}
