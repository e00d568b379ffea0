// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;

use tracing::info;

use shared_config::AppConfig;
use shared_utils::notification::{Notifier, Severity, TracingNotifier};

use crate::models::{AppointmentError, BookingRequest, WizardError};
use crate::services::wizard::BookingWizard;

/// Receives confirmed bookings. Persisting them is the implementor's job.
#[cfg_attr(test, mockall::automock)]
pub trait BookingSubmitter: Send + Sync {
    fn submit(&self, booking: &BookingRequest) -> Result<(), AppointmentError>;
}

/// Accepts every booking and only logs it; nothing is stored.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingBookingSubmitter;

impl BookingSubmitter for LoggingBookingSubmitter {
    fn submit(&self, booking: &BookingRequest) -> Result<(), AppointmentError> {
        info!(
            doctor_id = %booking.doctor_id,
            start_time = %booking.start_time,
            modality = %booking.modality,
            "Booking submitted"
        );
        Ok(())
    }
}

/// Drives booking sessions against a submitter and reports outcomes as toasts.
///
/// Library entry point for the in-process front end; wizard sessions are not
/// served over HTTP.
pub struct BookingService {
    submitter: Arc<dyn BookingSubmitter>,
    notifier: Arc<dyn Notifier>,
    duration_minutes: i64,
}

impl BookingService {
    pub fn new(
        submitter: Arc<dyn BookingSubmitter>,
        notifier: Arc<dyn Notifier>,
        config: &AppConfig,
    ) -> Self {
        Self {
            submitter,
            notifier,
            duration_minutes: config.appointment_duration_minutes,
        }
    }

    /// Logging submitter and tracing toasts: bookings are accepted and only
    /// written to the log.
    pub fn with_defaults(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(LoggingBookingSubmitter),
            Arc::new(TracingNotifier),
            config,
        )
    }

    /// A fresh session, as when the booking modal opens.
    pub fn open_session(&self) -> BookingWizard {
        BookingWizard::new()
    }

    pub fn confirm(&self, wizard: &mut BookingWizard) -> Result<BookingRequest, WizardError> {
        match wizard.confirm(self.submitter.as_ref(), self.duration_minutes) {
            Ok(booking) => {
                self.notifier.notify(
                    Severity::Success,
                    &format!(
                        "Appointment booked with {} on {}",
                        booking.doctor_name,
                        booking.start_time.format("%b %-d at %H:%M")
                    ),
                );
                Ok(booking)
            }
            Err(WizardError::Submission(err)) => {
                self.notifier
                    .notify(Severity::Error, &format!("Could not book appointment: {}", err));
                Err(WizardError::Submission(err))
            }
            Err(err) => Err(err),
        }
    }

    /// Closing the modal cancels whatever step the session was on.
    pub fn close_session(&self, wizard: &mut BookingWizard) {
        wizard.cancel();
    }
}
