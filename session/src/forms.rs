//! Client-side form validation for login, registration, workouts and routines.
//!
//! Required fields are checked before any request is built, so an invalid
//! submission never reaches the network.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::types::{Credentials, NewRoutine, NewWorkout};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
}

/// Login or registration input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

impl CredentialsForm {
    /// Both fields are sent exactly as typed; a blank username is rejected.
    ///
    /// # Errors
    ///
    /// [`FormError::Required`] naming the first empty field.
    pub fn validate(&self) -> Result<Credentials, FormError> {
        required("username", &self.username)?;
        if self.password.is_empty() {
            return Err(FormError::Required("password"));
        }
        Ok(Credentials::new(self.username.clone(), self.password.clone()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkoutForm {
    pub name: String,
    pub description: String,
}

impl WorkoutForm {
    /// # Errors
    ///
    /// [`FormError::Required`] naming the first empty field.
    pub fn validate(&self) -> Result<NewWorkout, FormError> {
        let name = required("name", &self.name)?;
        let description = required("description", &self.description)?;
        Ok(NewWorkout {
            name,
            description: Some(description),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoutineForm {
    pub name: String,
    pub description: String,
    /// Selected workout ids in selection order.
    pub selected: Vec<i64>,
}

impl RoutineForm {
    /// Select `workout_id` if unselected, otherwise deselect it.
    pub fn toggle_workout(&mut self, workout_id: i64) {
        if let Some(pos) = self.selected.iter().position(|id| *id == workout_id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(workout_id);
        }
    }

    #[must_use]
    pub fn is_selected(&self, workout_id: i64) -> bool {
        self.selected.contains(&workout_id)
    }

    /// The workout selection is optional.
    ///
    /// # Errors
    ///
    /// [`FormError::Required`] naming the first empty field.
    pub fn validate(&self) -> Result<NewRoutine, FormError> {
        let name = required("name", &self.name)?;
        let description = required("description", &self.description)?;
        Ok(NewRoutine {
            name,
            description: Some(description),
            workouts: self.selected.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(trimmed.to_owned())
}
