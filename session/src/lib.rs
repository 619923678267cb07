//! Platform-neutral session core for the workout planner.
//!
//! This crate owns everything the browser app and the CLI share: the wire
//! DTOs of the workout API, request builders, the `Transport` seam, the
//! session store with its durable credential, the route guard, and the
//! dashboard/form state. Nothing here touches the DOM or a concrete HTTP
//! stack; the `client` and `cli` crates plug those in.

pub mod api;
pub mod dashboard;
pub mod endpoints;
pub mod error;
pub mod forms;
pub mod guard;
pub mod request;
pub mod storage;
pub mod store;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_helpers;

pub use api::ApiClient;
pub use dashboard::{DashboardState, SubmitError, submit_routine, submit_workout};
pub use error::{ApiError, StorageError};
pub use forms::{CredentialsForm, FormError, RoutineForm, WorkoutForm};
pub use guard::{GuardAction, GuardView, RouteGuard};
pub use request::{ApiRequest, Method, RequestBody};
pub use storage::{DurableStorage, MemoryStorage, TOKEN_KEY};
pub use store::{HOME_PATH, LOGIN_PATH, LocalCell, Navigator, Session, SessionCell, SessionStatus};
pub use transport::{ApiResponse, Transport};
pub use types::{BearerToken, Credentials, Identity, NewRoutine, NewWorkout, Routine, Workout};
