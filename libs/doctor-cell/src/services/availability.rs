// libs/doctor-cell/src/services/availability.rs
use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::models::Doctor;

/// Display format of a time-of-day option.
pub const TIME_FORMAT: &str = "%H:%M";

/// Computes bookable time options from a doctor's published slots.
///
/// Matching is by calendar date only. Slots are naive local timestamps and
/// no timezone normalisation happens here.
pub struct AvailabilityService;

impl AvailabilityService {
    /// Ascending, de-duplicated "HH:MM" options for the slots falling on `date`.
    ///
    /// An empty result means the doctor has nothing that day; it is not an error.
    pub fn available_times(doctor: &Doctor, date: NaiveDate) -> Vec<String> {
        // Zero-padded HH:MM sorts lexically in chronological order.
        let times: BTreeSet<String> = doctor
            .available_slots
            .iter()
            .filter(|slot| slot.date() == date)
            .map(|slot| format_time(slot.time()))
            .collect();

        debug!(
            "Doctor {} has {} time option(s) on {}",
            doctor.id,
            times.len(),
            date
        );

        times.into_iter().collect()
    }

    /// Whether `time` is one of the options offered for `date`.
    pub fn is_time_available(doctor: &Doctor, date: NaiveDate, time: NaiveTime) -> bool {
        let wanted = format_time(time);
        doctor
            .available_slots
            .iter()
            .any(|slot| slot.date() == date && format_time(slot.time()) == wanted)
    }

    /// Distinct calendar dates carrying at least one slot, ascending.
    pub fn available_dates(doctor: &Doctor) -> Vec<NaiveDate> {
        doctor
            .available_slots
            .iter()
            .map(|slot| slot.date())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Parses an "HH:MM" option back into a time of day with zero seconds.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}
