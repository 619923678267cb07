//! Command execution against a [`CliSession`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Every command builds on the shared session store. Commands that need a
//! user go through [`require_token`], which consults the same route guard as
//! the browser: without a stored session they fail before any request.
//!
//! Each runner returns the text to print so tests can assert on it.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::path::PathBuf;

use serde::Serialize;
use session::{
    ApiClient, BearerToken, CredentialsForm, GuardAction, LocalCell, Navigator, RouteGuard, RoutineForm, Session,
    SessionStatus, WorkoutForm, submit_routine, submit_workout,
};

use crate::storage::FileStorage;
use crate::transport::ReqwestTransport;
use crate::{CliError, Command, CredentialsArgs, RoutinesCommand, WorkoutsCommand};

pub type CliSession = Session<ReqwestTransport, FileStorage, TraceNavigator, LocalCell>;

/// The CLI has no screens; session navigations are only traced.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceNavigator;

impl Navigator for TraceNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "session navigation");
    }
}

/// # Errors
///
/// [`CliError::Http`] if the HTTP client cannot be built.
pub fn build_session(base_url: &str, state_file: PathBuf) -> Result<CliSession, CliError> {
    let transport = ReqwestTransport::new(base_url)?;
    Ok(Session::new(
        ApiClient::new(transport),
        FileStorage::new(state_file),
        TraceNavigator,
        LocalCell::default(),
    ))
}

/// Restore the stored session and admit only authenticated callers.
///
/// # Errors
///
/// [`CliError::NotLoggedIn`] when no session is stored.
pub fn require_token(session: &CliSession) -> Result<BearerToken, CliError> {
    let status = session.restore();
    let mut guard = RouteGuard::default();
    if let GuardAction::Redirect(path) = guard.observe(&status) {
        tracing::debug!(path, "protected command without a session");
        return Err(CliError::NotLoggedIn);
    }
    status.token().cloned().ok_or(CliError::NotLoggedIn)
}

fn render<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// # Errors
///
/// Whatever the command's API call, validation or storage step reported.
pub async fn run(session: &CliSession, command: Command) -> Result<String, CliError> {
    match command {
        Command::Ping => Ok(session.api().health().await?),
        Command::Login(args) => {
            let credentials = validate(&args)?;
            session.login(&credentials.username, &credentials.password).await?;
            Ok(format!("logged in as {}", credentials.username))
        }
        Command::Register(args) => {
            let credentials = validate(&args)?;
            session
                .register(&credentials.username, &credentials.password)
                .await?;
            Ok(format!("registered and logged in as {}", credentials.username))
        }
        Command::Logout => {
            session.restore();
            session.logout();
            Ok("logged out".to_owned())
        }
        Command::Status => Ok(match session.restore() {
            SessionStatus::Authenticated(_) => "logged in".to_owned(),
            SessionStatus::Unknown | SessionStatus::Anonymous => "not logged in".to_owned(),
        }),
        Command::Workouts(command) => run_workouts(session, command).await,
        Command::Routines(command) => run_routines(session, command).await,
        Command::Dashboard => {
            let token = require_token(session)?;
            let (workouts, routines) = session.api().dashboard(&token).await?;
            render(&serde_json::json!({ "workouts": workouts, "routines": routines }))
        }
    }
}

fn validate(args: &CredentialsArgs) -> Result<session::Credentials, CliError> {
    let form = CredentialsForm {
        username: args.username.clone(),
        password: args.password.clone(),
    };
    Ok(form.validate()?)
}

async fn run_workouts(session: &CliSession, command: WorkoutsCommand) -> Result<String, CliError> {
    let token = require_token(session)?;
    let api = session.api();
    match command {
        WorkoutsCommand::List => render(&api.workouts(&token).await?),
        WorkoutsCommand::Show { workout_id } => match api.workout(&token, workout_id).await? {
            Some(workout) => render(&workout),
            None => Err(CliError::NotFound(format!("workout {workout_id}"))),
        },
        WorkoutsCommand::Create { name, description } => {
            let form = WorkoutForm { name, description };
            render(&submit_workout(api, &token, &form).await?)
        }
        WorkoutsCommand::Delete { workout_id } => match api.delete_workout(&token, workout_id).await? {
            Some(workout) => Ok(format!("deleted workout {} ({})", workout.id, workout.name)),
            None => Err(CliError::NotFound(format!("workout {workout_id}"))),
        },
    }
}

async fn run_routines(session: &CliSession, command: RoutinesCommand) -> Result<String, CliError> {
    let token = require_token(session)?;
    let api = session.api();
    match command {
        RoutinesCommand::List => render(&api.routines(&token).await?),
        RoutinesCommand::Create {
            name,
            description,
            workouts,
        } => {
            let mut form = RoutineForm {
                name,
                description,
                selected: Vec::new(),
            };
            for workout_id in workouts {
                if !form.is_selected(workout_id) {
                    form.toggle_workout(workout_id);
                }
            }
            render(&submit_routine(api, &token, &form).await?)
        }
        RoutinesCommand::Delete { routine_id } => match api.delete_routine(&token, routine_id).await? {
            Some(routine) => Ok(format!("deleted routine {} ({})", routine.id, routine.name)),
            None => Err(CliError::NotFound(format!("routine {routine_id}"))),
        },
    }
}
