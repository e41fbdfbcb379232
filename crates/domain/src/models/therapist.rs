//! Therapist marketplace types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A therapist listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Therapist {
    /// Server identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Areas of practice.
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Price per session hour.
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    /// Average review score out of 5.
    #[serde(default)]
    pub rating: Option<f32>,
    /// Profile text.
    #[serde(default)]
    pub bio: Option<String>,
}

/// Body of the booking call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Session start.
    pub starts_at: DateTime<Utc>,
    /// Session length.
    pub duration_minutes: u32,
    /// Note for the therapist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A confirmed or pending booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Server identifier.
    pub id: String,
    /// Booked therapist.
    pub therapist_id: String,
    /// Session start.
    pub starts_at: DateTime<Utc>,
    /// Server-side status string, e.g. `PENDING` or `CONFIRMED`.
    pub status: String,
}
