//! Host for the workout planner: serves the server-rendered app shell and
//! the compiled WASM bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The workout API is a separate service; this process only ships the
//! frontend. The browser talks to the API directly.

mod config;
mod routes;

/// Fatal startup or serve failure.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(port = config.port, "workout-planner listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
