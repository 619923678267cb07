//! Request builders for every workout API endpoint the app uses.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::types::{BearerToken, Credentials, NewRoutine, NewWorkout};

pub const HEALTH_PATH: &str = "/";
pub const TOKEN_PATH: &str = "/auth/token";
pub const REGISTER_PATH: &str = "/auth";
pub const WORKOUT_LIST_PATH: &str = "/workouts/workouts";
pub const WORKOUTS_PATH: &str = "/workouts";
pub const WORKOUT_ITEM_PATH: &str = "/workouts/";
pub const ROUTINES_PATH: &str = "/routines";
pub const ROUTINE_ITEM_PATH: &str = "/routines/";

#[must_use]
pub fn health() -> ApiRequest {
    ApiRequest::get(HEALTH_PATH)
}

/// `POST /auth/token` with a form-encoded body.
#[must_use]
pub fn login(credentials: &Credentials) -> ApiRequest {
    ApiRequest::post(TOKEN_PATH).form(&[
        ("username", credentials.username.as_str()),
        ("password", credentials.password.as_str()),
    ])
}

/// `POST /auth` with a JSON body.
///
/// # Errors
///
/// Returns [`ApiError::Json`] if the body cannot be serialized.
pub fn register(credentials: &Credentials) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(REGISTER_PATH).json(credentials)
}

#[must_use]
pub fn list_workouts(token: &BearerToken) -> ApiRequest {
    ApiRequest::get(WORKOUT_LIST_PATH).bearer(token)
}

#[must_use]
pub fn get_workout(token: &BearerToken, workout_id: i64) -> ApiRequest {
    ApiRequest::get(WORKOUT_ITEM_PATH)
        .bearer(token)
        .query("workout_id", workout_id)
}

/// # Errors
///
/// Returns [`ApiError::Json`] if the body cannot be serialized.
pub fn create_workout(token: &BearerToken, workout: &NewWorkout) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(WORKOUTS_PATH).bearer(token).json(workout)
}

#[must_use]
pub fn delete_workout(token: &BearerToken, workout_id: i64) -> ApiRequest {
    ApiRequest::delete(WORKOUT_ITEM_PATH)
        .bearer(token)
        .query("workout_id", workout_id)
}

#[must_use]
pub fn list_routines(token: &BearerToken) -> ApiRequest {
    ApiRequest::get(ROUTINES_PATH).bearer(token)
}

/// # Errors
///
/// Returns [`ApiError::Json`] if the body cannot be serialized.
pub fn create_routine(token: &BearerToken, routine: &NewRoutine) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(ROUTINES_PATH).bearer(token).json(routine)
}

#[must_use]
pub fn delete_routine(token: &BearerToken, routine_id: i64) -> ApiRequest {
    ApiRequest::delete(ROUTINE_ITEM_PATH)
        .bearer(token)
        .query("routine_id", routine_id)
}
