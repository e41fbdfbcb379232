//! Dashboard aggregation types

use serde::{Deserialize, Serialize};

/// How much of the user's profile has been filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCompletion {
    /// Completion percentage, 0 to 100.
    pub percent: u8,
    /// Sections still missing, e.g. `"emergency_contact"`.
    #[serde(default)]
    pub missing_sections: Vec<String>,
}

impl ProfileCompletion {
    /// True once every section is filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.percent >= 100 && self.missing_sections.is_empty()
    }
}

/// Everything the dashboard page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Profile completion state.
    #[serde(default)]
    pub profile: ProfileCompletion,
    /// Assessments assigned but not taken.
    #[serde(default)]
    pub pending_assessments: u32,
    /// Habits currently tracked.
    #[serde(default)]
    pub active_habits: u32,
    /// Complaints not yet closed.
    #[serde(default)]
    pub open_complaints: u32,
}
