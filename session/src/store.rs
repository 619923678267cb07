//! Session store: the single source of truth for who is logged in.
//!
//! SYSTEM CONTEXT
//! ==============
//! A [`Session`] is handed explicitly to every consumer (pages, the route
//! guard, CLI commands). It owns no global state: the status lives in a
//! [`SessionCell`] supplied by the host (a reactive signal in the browser, a
//! `RefCell` elsewhere), the credential in a [`DurableStorage`], and
//! navigation goes through a [`Navigator`].
//!
//! LIFECYCLE
//! =========
//! `Unknown` → `restore()` → `Anonymous` | `Authenticated`;
//! `login()` → `Authenticated`; `logout()` → `Anonymous`.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged and returned; status is left untouched so the UI can
//! ignore the `Result` and keep its prior state.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::storage::{self, DurableStorage};
use crate::transport::Transport;
use crate::types::{BearerToken, Credentials, Identity};

/// Public login route.
pub const LOGIN_PATH: &str = "/login";
/// Protected application root.
pub const HOME_PATH: &str = "/";

/// What the app knows about the current user.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionStatus {
    /// Durable storage has not been consulted yet.
    #[default]
    Unknown,
    /// Known to have no session.
    Anonymous,
    Authenticated(Identity),
}

impl SessionStatus {
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Unknown | Self::Anonymous => None,
        }
    }

    /// Credential for authorized requests, only once authenticated.
    #[must_use]
    pub fn token(&self) -> Option<&BearerToken> {
        self.identity().map(Identity::token)
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Holder of the current [`SessionStatus`].
pub trait SessionCell {
    /// Current status, read without subscribing.
    fn get(&self) -> SessionStatus;
    fn set(&self, status: SessionStatus);
}

/// Non-reactive cell; clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct LocalCell(Rc<RefCell<SessionStatus>>);

impl SessionCell for LocalCell {
    fn get(&self) -> SessionStatus {
        self.0.borrow().clone()
    }

    fn set(&self, status: SessionStatus) {
        *self.0.borrow_mut() = status;
    }
}

/// Client-side route changes requested by the session.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, path: &str) {
        self(path);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Session<T, S, N, C = LocalCell> {
    api: ApiClient<T>,
    storage: S,
    navigator: N,
    cell: C,
}

impl<T, S, N, C> Session<T, S, N, C>
where
    T: Transport,
    S: DurableStorage,
    N: Navigator,
    C: SessionCell,
{
    pub fn new(api: ApiClient<T>, storage: S, navigator: N, cell: C) -> Self {
        Self {
            api,
            storage,
            navigator,
            cell,
        }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    pub fn status(&self) -> SessionStatus {
        self.cell.get()
    }

    pub fn identity(&self) -> Option<Identity> {
        match self.cell.get() {
            SessionStatus::Authenticated(identity) => Some(identity),
            SessionStatus::Unknown | SessionStatus::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<BearerToken> {
        self.identity().map(|identity| identity.access_token)
    }

    /// Resolve `Unknown` from durable storage. Later calls are no-ops.
    ///
    /// The persisted token is trusted as-is; expiry only surfaces as failed
    /// API calls.
    pub fn restore(&self) -> SessionStatus {
        let current = self.cell.get();
        if current.is_known() {
            return current;
        }
        let restored = match storage::load_token(&self.storage) {
            Some(token) => {
                log::debug!("session restored from durable storage");
                SessionStatus::Authenticated(Identity::from_token(token))
            }
            None => SessionStatus::Anonymous,
        };
        self.cell.set(restored.clone());
        restored
    }

    /// Exchange credentials for a session, persist it, and go home.
    ///
    /// # Errors
    ///
    /// The API failure; it is also logged and the status is left unchanged.
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity, ApiError> {
        let credentials = Credentials::new(username, password);
        match self.api.login(&credentials).await {
            Ok(identity) => {
                self.establish(identity.clone());
                Ok(identity)
            }
            Err(err) => {
                log::error!("login failed for {username}: {err}");
                Err(err)
            }
        }
    }

    /// Create an account, then log in with the same credentials.
    ///
    /// # Errors
    ///
    /// The registration or login failure, logged as well.
    pub async fn register(&self, username: &str, password: &str) -> Result<Identity, ApiError> {
        let credentials = Credentials::new(username, password);
        if let Err(err) = self.api.register(&credentials).await {
            log::error!("registration failed for {username}: {err}");
            return Err(err);
        }
        log::info!("registered {username}");
        self.login(username, password).await
    }

    /// Drop the session and return to the login screen.
    ///
    /// The persisted token is removed too, otherwise `restore()` would bring
    /// the session back on the next start.
    pub fn logout(&self) {
        self.cell.set(SessionStatus::Anonymous);
        if let Err(err) = storage::forget_token(&self.storage) {
            log::warn!("could not clear persisted token: {err}");
        }
        self.navigator.navigate(LOGIN_PATH);
    }

    fn establish(&self, identity: Identity) {
        if let Err(err) = storage::persist_token(&self.storage, identity.token()) {
            log::warn!("could not persist token: {err}");
        }
        self.cell.set(SessionStatus::Authenticated(identity));
        self.navigator.navigate(HOME_PATH);
    }
}
