//! Habit tracking types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How often a habit is meant to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HabitFrequency {
    /// Every day.
    #[default]
    Daily,
    /// Every week.
    Weekly,
}

/// A tracked habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Server identifier.
    pub id: String,
    /// Short name, e.g. "Sleep 8 hours".
    pub name: String,
    /// Period the target applies to.
    #[serde(default)]
    pub frequency: HabitFrequency,
    /// Completions expected per period.
    #[serde(default = "default_target")]
    pub target_per_period: u32,
    /// Current streak in periods.
    #[serde(default)]
    pub streak: u32,
}

const fn default_target() -> u32 {
    1
}

/// Body of the create-habit call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabit {
    /// Short name.
    pub name: String,
    /// Period the target applies to.
    pub frequency: HabitFrequency,
    /// Completions expected per period.
    pub target_per_period: u32,
}

/// One day's entry for a habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitLog {
    /// Day the entry is for.
    pub date: NaiveDate,
    /// Whether the habit was done.
    pub completed: bool,
    /// Free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
