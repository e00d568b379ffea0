pub mod repository;
pub mod filter;
pub mod wizard;
pub mod booking;
pub mod call_timer;

pub use repository::{AppointmentRepository, InMemoryAppointmentRepository};
pub use filter::{filter_appointments, tab_counts, AppointmentListService};
pub use wizard::{BookingWizard, SlotChoice, ValidatedSlot, VisitDetails, WizardState};
pub use booking::{BookingService, BookingSubmitter, LoggingBookingSubmitter};
pub use call_timer::CallTimer;
