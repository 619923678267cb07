//! Typed client over a [`Transport`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::endpoints;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{BearerToken, Credentials, Identity, NewRoutine, NewWorkout, Routine, Workout};

/// Typed wrapper over a [`Transport`]; holds no credentials of its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /` on the API.
    ///
    /// # Errors
    ///
    /// Transport or status failures.
    pub async fn health(&self) -> Result<String, ApiError> {
        let response = self.transport.send(endpoints::health()).await?;
        let response = response.error_for_status()?;
        Ok(serde_json::from_str::<String>(&response.body).unwrap_or(response.body))
    }

    /// Exchange credentials for an [`Identity`].
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] on bad credentials, or transport/decode failures.
    pub async fn login(&self, credentials: &Credentials) -> Result<Identity, ApiError> {
        self.transport
            .send(endpoints::login(credentials))
            .await?
            .json()
    }

    /// Create a user account. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Transport or status failures (e.g. duplicate username).
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.transport
            .send(endpoints::register(credentials)?)
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// # Errors
    ///
    /// Transport, status or decode failures.
    pub async fn workouts(&self, token: &BearerToken) -> Result<Vec<Workout>, ApiError> {
        self.transport
            .send(endpoints::list_workouts(token))
            .await?
            .json()
    }

    /// `None` when the API has no workout with that id.
    ///
    /// # Errors
    ///
    /// Transport, status or decode failures.
    pub async fn workout(&self, token: &BearerToken, workout_id: i64) -> Result<Option<Workout>, ApiError> {
        self.transport
            .send(endpoints::get_workout(token, workout_id))
            .await?
            .json()
    }

    /// # Errors
    ///
    /// Transport, status or decode failures.
    pub async fn create_workout(&self, token: &BearerToken, workout: &NewWorkout) -> Result<Workout, ApiError> {
        self.transport
            .send(endpoints::create_workout(token, workout)?)
            .await?
            .json()
    }

    /// Returns the deleted workout, `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// Transport, status or decode failures.
    pub async fn delete_workout(&self, token: &BearerToken, workout_id: i64) -> Result<Option<Workout>, ApiError> {
        self.transport
            .send(endpoints::delete_workout(token, workout_id))
            .await?
            .json()
    }

    /// # Errors
    ///
    /// Transport, status or decode failures.
    pub async fn routines(&self, token: &BearerToken) -> Result<Vec<Routine>, ApiError> {
        self.transport
            .send(endpoints::list_routines(token))
            .await?
            .json()
    }

    /// # Errors
    ///
    /// Transport, status or decode failures.
    pub async fn create_routine(&self, token: &BearerToken, routine: &NewRoutine) -> Result<Routine, ApiError> {
        self.transport
            .send(endpoints::create_routine(token, routine)?)
            .await?
            .json()
    }

    /// Returns the deleted routine, `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// Transport, status or decode failures.
    pub async fn delete_routine(&self, token: &BearerToken, routine_id: i64) -> Result<Option<Routine>, ApiError> {
        self.transport
            .send(endpoints::delete_routine(token, routine_id))
            .await?
            .json()
    }

    /// Fetch workouts and routines concurrently; both or nothing.
    ///
    /// # Errors
    ///
    /// The first failure of either read.
    pub async fn dashboard(&self, token: &BearerToken) -> Result<(Vec<Workout>, Vec<Routine>), ApiError> {
        futures::future::try_join(self.workouts(token), self.routines(token)).await
    }
}
