//! Wire DTOs for the workout API.
//!
//! DESIGN
//! ======
//! Response types are lenient (`#[serde(default)]` on optional fields) because
//! the API returns ORM rows verbatim; request types only serialize what the
//! endpoints accept.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque bearer credential presented on authorized requests.
///
/// `Debug` is redacted so tokens never end up in log output.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearerToken(String);

impl BearerToken {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw token string, as persisted in durable storage.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(..)")
    }
}

/// The authenticated user as returned by `POST /auth/token`.
///
/// Only `access_token` is interpreted; every other field is carried along
/// untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub access_token: BearerToken,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identity {
    /// Identity rebuilt from a persisted credential alone.
    #[must_use]
    pub fn from_token(token: BearerToken) -> Self {
        Self {
            access_token: token,
            token_type: Some("bearer".to_owned()),
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn token(&self) -> &BearerToken {
        &self.access_token
    }
}

/// Username/password pair used for both login (form) and registration (JSON).
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"..")
            .finish()
    }
}

/// A workout row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A routine with its embedded workouts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub workouts: Vec<Workout>,
}

/// Body of `POST /workouts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewWorkout {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /routines`; `workouts` holds workout ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewRoutine {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub workouts: Vec<i64>,
}
