//! Habit tracking.

use chrono::NaiveDate;
use wellspring_domain::models::{Habit, HabitLog, NewHabit};

use crate::api_client::ApiClient;
use crate::error::ApiResult;

/// Habit endpoints.
#[derive(Debug, Clone, Copy)]
pub struct HabitService<'a> {
    client: &'a ApiClient,
}

impl<'a> HabitService<'a> {
    /// Creates the service over a shared client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists the user's habits.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn list(&self) -> ApiResult<Vec<Habit>> {
        self.client.get("/api/habits").await
    }

    /// Creates a habit.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn create(&self, habit: &NewHabit) -> ApiResult<Habit> {
        self.client.post("/api/habits", habit).await
    }

    /// Records one day's entry.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn log(&self, habit_id: &str, entry: &HabitLog) -> ApiResult<HabitLog> {
        self.client
            .post(&format!("/api/habits/{habit_id}/logs"), entry)
            .await
    }

    /// Entries between two dates, inclusive.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn history(
        &self,
        habit_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ApiResult<Vec<HabitLog>> {
        self.client
            .get(&format!("/api/habits/{habit_id}/logs?from={from}&to={to}"))
            .await
    }
}
