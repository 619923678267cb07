//! `workout-cli`: drive the workout API from a terminal with the same
//! session rules as the browser app.

mod commands;
mod storage;
mod transport;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use session::{ApiError, FormError, StorageError, SubmitError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `workout-cli login` first")]
    NotLoggedIn,
    #[error("{0} not found")]
    NotFound(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "workout-cli", about = "Workout planner API CLI")]
struct Cli {
    #[arg(long, env = "WORKOUT_API_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    /// Where the session token is kept between runs.
    #[arg(long, env = "WORKOUT_STATE_FILE")]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the API is up.
    Ping,
    Login(CredentialsArgs),
    /// Create an account, then log in with it.
    Register(CredentialsArgs),
    Logout,
    /// Show whether a session is stored.
    Status,
    #[command(subcommand)]
    Workouts(WorkoutsCommand),
    #[command(subcommand)]
    Routines(RoutinesCommand),
    /// Fetch workouts and routines together.
    Dashboard,
}

#[derive(Args, Debug)]
struct CredentialsArgs {
    #[arg(long)]
    username: String,

    #[arg(long, env = "WORKOUT_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Subcommand, Debug)]
enum WorkoutsCommand {
    List,
    Show {
        workout_id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
    },
    Delete {
        workout_id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum RoutinesCommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        /// Workout id to include; repeatable.
        #[arg(long = "workout")]
        workouts: Vec<i64>,
    },
    Delete {
        routine_id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let state_file = cli.state_file.unwrap_or_else(storage::default_state_file);
    let session = commands::build_session(&cli.base_url, state_file)?;

    let output = commands::run(&session, cli.command).await?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
