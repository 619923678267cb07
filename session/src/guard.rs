//! Route guard for protected screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser `ProtectedRoute` component and the CLI's protected commands
//! both consult [`RouteGuard`] so the redirect rule lives in one place.
//!
//! States map as follows:
//! - `Unknown` → [`GuardView::Pending`], no redirect (restoration pending)
//! - `Anonymous` → [`GuardView::Blocked`], one redirect per entry
//! - `Authenticated` → [`GuardView::Content`]

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::store::{LOGIN_PATH, SessionStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Session not resolved yet; show a placeholder.
    Pending,
    /// No session; render nothing.
    Blocked,
    /// Render the wrapped content.
    Content,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardAction {
    None,
    Redirect(&'static str),
}

/// Remembers whether the current anonymous stretch already redirected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteGuard {
    redirected: bool,
}

impl RouteGuard {
    #[must_use]
    pub fn view(status: &SessionStatus) -> GuardView {
        match status {
            SessionStatus::Unknown => GuardView::Pending,
            SessionStatus::Anonymous => GuardView::Blocked,
            SessionStatus::Authenticated(_) => GuardView::Content,
        }
    }

    /// Feed the latest status; returns the navigation to schedule, if any.
    pub fn observe(&mut self, status: &SessionStatus) -> GuardAction {
        if matches!(status, SessionStatus::Anonymous) {
            if self.redirected {
                return GuardAction::None;
            }
            self.redirected = true;
            return GuardAction::Redirect(LOGIN_PATH);
        }
        self.redirected = false;
        GuardAction::None
    }
}
