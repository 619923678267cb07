//! Home-screen state: the user's workouts and routines.
//!
//! DESIGN
//! ======
//! The two lists are only replaced together. A failed refresh is logged and
//! the previous (possibly empty) lists stay on screen. Fetching needs the
//! session's token, which does not exist until the session is restored or a
//! login succeeds, so no read can go out with an empty credential.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::forms::{FormError, RoutineForm, WorkoutForm};
use crate::transport::Transport;
use crate::types::{BearerToken, Routine, Workout};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub workouts: Vec<Workout>,
    pub routines: Vec<Routine>,
    /// At least one refresh has succeeded.
    pub loaded: bool,
}

impl DashboardState {
    /// Apply the outcome of the paired read. Returns whether state changed.
    pub fn apply_fetch(&mut self, result: Result<(Vec<Workout>, Vec<Routine>), ApiError>) -> bool {
        match result {
            Ok((workouts, routines)) => {
                self.workouts = workouts;
                self.routines = routines;
                self.loaded = true;
                true
            }
            Err(err) => {
                log::error!("failed to fetch workouts and routines: {err}");
                false
            }
        }
    }

    pub fn apply_created_workout(&mut self, result: Result<Workout, SubmitError>) -> bool {
        match result {
            Ok(workout) => {
                self.workouts.push(workout);
                true
            }
            Err(err) => {
                log::error!("failed to create workout: {err}");
                false
            }
        }
    }

    pub fn apply_created_routine(&mut self, result: Result<Routine, SubmitError>) -> bool {
        match result {
            Ok(routine) => {
                self.routines.push(routine);
                true
            }
            Err(err) => {
                log::error!("failed to create routine: {err}");
                false
            }
        }
    }

    /// Drop routine `routine_id` once the API confirmed the delete.
    pub fn apply_deleted_routine(&mut self, routine_id: i64, result: Result<Option<Routine>, ApiError>) -> bool {
        match result {
            Ok(_) => {
                let before = self.routines.len();
                self.routines.retain(|r| r.id != routine_id);
                before != self.routines.len()
            }
            Err(err) => {
                log::error!("failed to delete routine {routine_id}: {err}");
                false
            }
        }
    }

    #[must_use]
    pub fn workout(&self, workout_id: i64) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == workout_id)
    }

    /// Fetch both lists concurrently and apply the result.
    pub async fn refresh<T: Transport>(&mut self, api: &ApiClient<T>, token: &BearerToken) -> bool {
        let result = api.dashboard(token).await;
        self.apply_fetch(result)
    }
}

/// Validate `form`, then create the workout.
///
/// # Errors
///
/// [`SubmitError::Invalid`] without any request, or the API failure.
pub async fn submit_workout<T: Transport>(
    api: &ApiClient<T>,
    token: &BearerToken,
    form: &WorkoutForm,
) -> Result<Workout, SubmitError> {
    let workout = form.validate()?;
    Ok(api.create_workout(token, &workout).await?)
}

/// Validate `form`, then create the routine.
///
/// # Errors
///
/// [`SubmitError::Invalid`] without any request, or the API failure.
pub async fn submit_routine<T: Transport>(
    api: &ApiClient<T>,
    token: &BearerToken,
    form: &RoutineForm,
) -> Result<Routine, SubmitError> {
    let routine = form.validate()?;
    Ok(api.create_routine(token, &routine).await?)
}
