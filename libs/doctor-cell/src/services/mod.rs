pub mod repository;
pub mod doctor;
pub mod availability;

pub use repository::{DoctorRepository, InMemoryDoctorRepository};
pub use doctor::DoctorService;
pub use availability::AvailabilityService;
