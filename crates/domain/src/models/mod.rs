//! Request and response payloads for the platform API

pub mod assessment;
pub mod auth;
pub mod complaint;
pub mod dashboard;
pub mod habit;
pub mod therapist;

pub use assessment::{Answer, AnswerSubmission, Assessment, AssessmentKind, AssessmentResult, Question};
pub use auth::{AuthResponse, Credentials, RefreshRequest, RefreshResponse, UserSummary};
pub use complaint::{Complaint, ComplaintCategory, ComplaintStatus, NewComplaint};
pub use dashboard::{DashboardSummary, ProfileCompletion};
pub use habit::{Habit, HabitFrequency, HabitLog, NewHabit};
pub use therapist::{Booking, BookingRequest, Therapist};
