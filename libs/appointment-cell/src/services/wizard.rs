// libs/appointment-cell/src/services/wizard.rs
//
// Three step booking wizard: doctor, then slot, then details and confirm.
// Each state carries exactly the selections it needs, so a session on step 3
// always holds a doctor/date/time triple already checked against the
// doctor's availability.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::{debug, info, warn};

use doctor_cell::services::availability::{format_time, parse_time};
use doctor_cell::{AvailabilityService, Doctor};

use crate::models::{BookingRequest, Modality, WizardError, WizardStep};
use crate::services::booking::BookingSubmitter;

/// Date/time picked on step 2, either of which may still be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotChoice {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitDetails {
    pub modality: Modality,
    pub reason: String,
}

/// A slot proven to be on the doctor's published availability.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSlot {
    doctor: Doctor,
    date: NaiveDate,
    time: NaiveTime,
}

impl ValidatedSlot {
    pub fn new(doctor: Doctor, date: NaiveDate, time: NaiveTime) -> Result<Self, WizardError> {
        let time = truncate_to_minute(time);

        if !AvailabilityService::is_time_available(&doctor, date, time) {
            return Err(WizardError::SlotUnavailable {
                doctor: doctor.name.clone(),
                date,
                time: format_time(time),
            });
        }

        Ok(Self { doctor, date, time })
    }

    pub fn doctor(&self) -> &Doctor {
        &self.doctor
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Calendar date combined with the time of day; seconds are always zero.
    pub fn start_time(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardState {
    SelectingDoctor {
        doctor: Option<Doctor>,
        slot: SlotChoice,
    },
    SelectingSlot {
        doctor: Doctor,
        slot: SlotChoice,
    },
    ConfirmingDetails {
        slot: ValidatedSlot,
    },
    Booked(BookingRequest),
    Cancelled,
}

impl WizardState {
    pub fn step(&self) -> WizardStep {
        match self {
            WizardState::SelectingDoctor { .. } => WizardStep::SelectingDoctor,
            WizardState::SelectingSlot { .. } => WizardStep::SelectingSlot,
            WizardState::ConfirmingDetails { .. } => WizardStep::ConfirmingDetails,
            WizardState::Booked(_) => WizardStep::Booked,
            WizardState::Cancelled => WizardStep::Cancelled,
        }
    }
}

/// One booking attempt. Owned by whoever opened the booking modal.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWizard {
    state: WizardState,
    details: VisitDetails,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingWizard {
    pub fn new() -> Self {
        Self {
            state: WizardState::SelectingDoctor {
                doctor: None,
                slot: SlotChoice::default(),
            },
            details: VisitDetails::default(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> WizardStep {
        self.state.step()
    }

    pub fn details(&self) -> &VisitDetails {
        &self.details
    }

    pub fn selected_doctor(&self) -> Option<&Doctor> {
        match &self.state {
            WizardState::SelectingDoctor { doctor, .. } => doctor.as_ref(),
            WizardState::SelectingSlot { doctor, .. } => Some(doctor),
            WizardState::ConfirmingDetails { slot } => Some(slot.doctor()),
            WizardState::Booked(_) | WizardState::Cancelled => None,
        }
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        match &self.state {
            WizardState::SelectingDoctor { slot, .. } | WizardState::SelectingSlot { slot, .. } => slot.date,
            WizardState::ConfirmingDetails { slot } => Some(slot.date()),
            WizardState::Booked(_) | WizardState::Cancelled => None,
        }
    }

    /// Selected time as its "HH:MM" option.
    pub fn selected_time(&self) -> Option<String> {
        match &self.state {
            WizardState::SelectingDoctor { slot, .. } | WizardState::SelectingSlot { slot, .. } => {
                slot.time.map(format_time)
            }
            WizardState::ConfirmingDetails { slot } => Some(format_time(slot.time())),
            WizardState::Booked(_) | WizardState::Cancelled => None,
        }
    }

    /// Time options for the selected doctor and date.
    ///
    /// `None` means nothing to show yet (no doctor or no date); `Some(vec![])`
    /// means the doctor has no slots that day.
    pub fn time_options(&self) -> Option<Vec<String>> {
        let doctor = self.selected_doctor()?;
        let date = self.selected_date()?;
        Some(AvailabilityService::available_times(doctor, date))
    }

    pub fn booking(&self) -> Option<&BookingRequest> {
        match &self.state {
            WizardState::Booked(booking) => Some(booking),
            _ => None,
        }
    }

    // ==========================================================================
    // SELECTIONS
    // ==========================================================================

    /// Step 1 only. Re-selecting the current doctor is a no-op; switching
    /// doctors keeps the chosen date and drops a time the new doctor lacks.
    pub fn select_doctor(&mut self, doctor: Doctor) -> Result<(), WizardError> {
        if self.step() != WizardStep::SelectingDoctor {
            return Err(self.reject("select a doctor"));
        }

        if let WizardState::SelectingDoctor { doctor: current, slot } = &mut self.state {
            if current.as_ref().is_some_and(|c| c.id == doctor.id) {
                return Ok(());
            }

            if let (Some(date), Some(time)) = (slot.date, slot.time) {
                if !AvailabilityService::is_time_available(&doctor, date, time) {
                    slot.time = None;
                }
            }

            debug!("Wizard doctor selected: {}", doctor.id);
            *current = Some(doctor);
        }

        Ok(())
    }

    /// Step 2 only. A previously chosen time survives only if the doctor
    /// also offers it on the new date.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), WizardError> {
        if self.step() != WizardStep::SelectingSlot {
            return Err(self.reject("select a date"));
        }

        if let WizardState::SelectingSlot { doctor, slot } = &mut self.state {
            if slot.date == Some(date) {
                return Ok(());
            }

            if let Some(time) = slot.time {
                if !AvailabilityService::is_time_available(doctor, date, time) {
                    slot.time = None;
                }
            }

            debug!("Wizard date selected: {}", date);
            slot.date = Some(date);
        }

        Ok(())
    }

    /// Step 2 only. `time` must be one of the current `time_options`.
    pub fn select_time(&mut self, time: &str) -> Result<(), WizardError> {
        if self.step() != WizardStep::SelectingSlot {
            return Err(self.reject("select a time"));
        }

        if let WizardState::SelectingSlot { doctor, slot } = &mut self.state {
            let date = slot.date.ok_or(WizardError::DateNotSelected)?;
            let parsed = parse_time(time).ok_or_else(|| WizardError::InvalidTime(time.to_string()))?;

            if !AvailabilityService::is_time_available(doctor, date, parsed) {
                warn!("Rejected time {} on {} for doctor {}", time, date, doctor.id);
                return Err(WizardError::SlotUnavailable {
                    doctor: doctor.name.clone(),
                    date,
                    time: format_time(parsed),
                });
            }

            debug!("Wizard time selected: {}", format_time(parsed));
            slot.time = Some(parsed);
        }

        Ok(())
    }

    pub fn set_modality(&mut self, modality: Modality) -> Result<(), WizardError> {
        self.ensure_confirming("choose the appointment type")?;
        self.details.modality = modality;
        Ok(())
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_confirming("enter a reason")?;
        self.details.reason = reason.into();
        Ok(())
    }

    // ==========================================================================
    // TRANSITIONS
    // ==========================================================================

    /// Whether the "next" action should be enabled.
    pub fn can_advance(&self) -> bool {
        match &self.state {
            WizardState::SelectingDoctor { doctor, .. } => doctor.is_some(),
            WizardState::SelectingSlot { doctor, slot } => match (slot.date, slot.time) {
                (Some(date), Some(time)) => AvailabilityService::is_time_available(doctor, date, time),
                _ => false,
            },
            _ => false,
        }
    }

    pub fn can_confirm(&self) -> bool {
        matches!(self.state, WizardState::ConfirmingDetails { .. })
    }

    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let next = match &self.state {
            WizardState::SelectingDoctor { doctor: None, .. } => {
                return Err(self.precondition(WizardError::DoctorNotSelected));
            }
            WizardState::SelectingDoctor { doctor: Some(doctor), slot } => WizardState::SelectingSlot {
                doctor: doctor.clone(),
                slot: slot.clone(),
            },
            WizardState::SelectingSlot { doctor, slot } => {
                let date = slot.date.ok_or_else(|| self.precondition(WizardError::DateNotSelected))?;
                let time = slot.time.ok_or_else(|| self.precondition(WizardError::TimeNotSelected))?;
                let slot = ValidatedSlot::new(doctor.clone(), date, time).map_err(|e| self.precondition(e))?;
                WizardState::ConfirmingDetails { slot }
            }
            _ => return Err(self.reject("advance")),
        };

        self.state = next;
        debug!("Wizard advanced to {}", self.step());
        Ok(self.step())
    }

    /// Returns to the previous step keeping that step's selections.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        let previous = match &self.state {
            WizardState::SelectingSlot { doctor, slot } => WizardState::SelectingDoctor {
                doctor: Some(doctor.clone()),
                slot: slot.clone(),
            },
            WizardState::ConfirmingDetails { slot } => WizardState::SelectingSlot {
                doctor: slot.doctor().clone(),
                slot: SlotChoice {
                    date: Some(slot.date()),
                    time: Some(slot.time()),
                },
            },
            _ => return Err(self.reject("go back")),
        };

        self.state = previous;
        debug!("Wizard went back to {}", self.step());
        Ok(self.step())
    }

    /// Emits the booking to `submitter`. On a submission failure the session
    /// stays on step 3 so the user can retry or go back.
    pub fn confirm(
        &mut self,
        submitter: &dyn BookingSubmitter,
        duration_minutes: i64,
    ) -> Result<BookingRequest, WizardError> {
        let booking = match &self.state {
            WizardState::ConfirmingDetails { slot } => BookingRequest {
                doctor_id: slot.doctor().id,
                doctor_name: slot.doctor().name.clone(),
                doctor_specialty: slot.doctor().specialty.clone(),
                start_time: slot.start_time(),
                duration_minutes,
                modality: self.details.modality,
                reason: self.details.reason.trim().to_string(),
            },
            _ => return Err(self.reject("confirm")),
        };

        submitter.submit(&booking)?;

        info!(
            "Booked {} appointment with {} at {}",
            booking.modality, booking.doctor_name, booking.start_time
        );
        self.state = WizardState::Booked(booking.clone());
        Ok(booking)
    }

    /// Closes the session from any state and drops every selection.
    pub fn cancel(&mut self) {
        debug!("Wizard cancelled while {}", self.step());
        self.state = WizardState::Cancelled;
        self.details = VisitDetails::default();
    }

    fn ensure_confirming(&self, action: &'static str) -> Result<(), WizardError> {
        if self.can_confirm() {
            Ok(())
        } else {
            Err(self.reject(action))
        }
    }

    fn reject(&self, action: &'static str) -> WizardError {
        let step = self.step();
        warn!("Rejected wizard action {:?} while {}", action, step);

        if step.is_terminal() {
            WizardError::SessionClosed
        } else {
            WizardError::InvalidAction { action, step }
        }
    }

    fn precondition(&self, err: WizardError) -> WizardError {
        warn!("Wizard cannot leave {}: {}", self.step(), err);
        err
    }
}
