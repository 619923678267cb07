//! Host configuration from the environment.
//!
//! A `.env` file is honored for local development; real environment
//! variables take precedence.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl HostConfig {
    /// Load from `.env` and the process environment.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPort`] if `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPort`] if `PORT` is set but not a port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            _ => DEFAULT_PORT,
        };
        Ok(Self { port })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
