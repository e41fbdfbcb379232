//! Complaint and incident reporting types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a complaint is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintCategory {
    /// Bullying or harassment.
    Bullying,
    /// Academic issue.
    Academic,
    /// Safety concern.
    Safety,
    /// Conduct of a therapist or staff member.
    Conduct,
    /// Anything else.
    Other,
}

/// Where a complaint is in its review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    /// Submitted, not yet picked up.
    Open,
    /// Being reviewed.
    InReview,
    /// Closed with an outcome.
    Resolved,
    /// Closed without action.
    Rejected,
}

impl ComplaintStatus {
    /// Whether the complaint is closed.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Resolved | Self::Rejected)
    }
}

/// Body of the submit-complaint call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComplaint {
    /// Category.
    pub category: ComplaintCategory,
    /// One-line subject.
    pub subject: String,
    /// Full description.
    pub description: String,
    /// Hide the reporter's identity from reviewers.
    #[serde(default)]
    pub anonymous: bool,
}

/// A complaint as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Server identifier.
    pub id: String,
    /// Category.
    pub category: ComplaintCategory,
    /// One-line subject.
    pub subject: String,
    /// Review state.
    pub status: ComplaintStatus,
    /// Submission time.
    pub created_at: DateTime<Utc>,
    /// Reviewer response, once there is one.
    #[serde(default)]
    pub resolution: Option<String>,
}
