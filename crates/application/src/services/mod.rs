//! Typed wrappers over the request core, one per platform area.
//!
//! Each service borrows the shared `ApiClient`; none holds state of its own.

mod assessments;
mod auth;
mod complaints;
mod dashboard;
mod habits;
mod therapists;

pub use assessments::AssessmentService;
pub use auth::AuthService;
pub use complaints::ComplaintService;
pub use dashboard::DashboardService;
pub use habits::HabitService;
pub use therapists::TherapistService;
