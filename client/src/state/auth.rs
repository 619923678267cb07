//! Signal-backed wiring of the session store for the browser.
//!
//! DESIGN
//! ======
//! `SessionCell` and `Navigator` are implemented over `RwSignal`s so the whole
//! [`AppSession`] is `Copy + Send + Sync` and can be captured by view
//! closures. Navigation is queued in a signal and performed by the
//! `NavigationBridge` inside the router, because `use_navigate` only works
//! under `<Router>` while the session is created above it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::{ApiClient, DurableStorage, Navigator, Session, SessionCell, SessionStatus, Transport};

use crate::net::transport::BrowserTransport;
use crate::util::storage::BrowserStorage;

/// The browser's concrete session type.
pub type AppSession = Session<BrowserTransport, BrowserStorage, SignalNavigator, SignalCell>;

/// Session status held in a reactive signal.
#[derive(Clone, Copy, Debug)]
pub struct SignalCell(RwSignal<SessionStatus>);

impl SignalCell {
    pub fn new() -> Self {
        Self(RwSignal::new(SessionStatus::Unknown))
    }

    /// The underlying signal, for tracked reads in views and effects.
    pub fn signal(&self) -> RwSignal<SessionStatus> {
        self.0
    }
}

impl Default for SignalCell {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCell for SignalCell {
    fn get(&self) -> SessionStatus {
        self.0.get_untracked()
    }

    fn set(&self, status: SessionStatus) {
        self.0.set(status);
    }
}

/// Queue of at most one pending client-side navigation.
#[derive(Clone, Copy, Debug)]
pub struct SignalNavigator(RwSignal<Option<String>>);

impl SignalNavigator {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    /// Tracked read of the queued path.
    pub fn pending(&self) -> Option<String> {
        self.0.get()
    }

    /// Remove the queued path without notifying subscribers.
    pub fn take(&self) -> Option<String> {
        self.0.try_update_untracked(Option::take).flatten()
    }
}

impl Default for SignalNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for SignalNavigator {
    /// Queue `path`. A request for the path already queued is dropped, so
    /// `logout()` and the route guard reacting to the same transition
    /// produce a single navigation.
    fn navigate(&self, path: &str) {
        if self.0.with_untracked(|queued| queued.as_deref() == Some(path)) {
            return;
        }
        self.0.set(Some(path.to_owned()));
    }
}

/// Session over the given transport and storage with fresh signals.
pub fn session_with<T, S>(transport: T, storage: S) -> Session<T, S, SignalNavigator, SignalCell>
where
    T: Transport,
    S: DurableStorage,
{
    Session::new(ApiClient::new(transport), storage, SignalNavigator::new(), SignalCell::new())
}

/// The session used by the app: `fetch` transport and `localStorage`.
pub fn app_session() -> AppSession {
    session_with(BrowserTransport::default(), BrowserStorage)
}

/// Token of the current session, tracked.
pub fn tracked_token<T, S>(session: &Session<T, S, SignalNavigator, SignalCell>) -> Option<session::BearerToken>
where
    T: Transport,
    S: DurableStorage,
{
    session.cell().signal().with(|status| status.token().cloned())
}
