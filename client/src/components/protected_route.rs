//! Route guard component for screens that need a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps protected page content. The decision of what to render and when to
//! redirect is `session::RouteGuard`'s; this component only binds it to the
//! session signal.

use leptos::prelude::*;
use session::{GuardAction, GuardView, Navigator, RouteGuard};

use crate::state::auth::AppSession;

/// Render `children` only while authenticated.
///
/// While the session is still being restored a placeholder is shown. Once
/// it is known to be anonymous nothing is rendered and a single navigation
/// to the login route is queued.
#[component]
pub fn ProtectedRoute(session: AppSession, children: ChildrenFn) -> impl IntoView {
    let status = session.cell().signal();

    Effect::new(move |prev: Option<RouteGuard>| {
        let mut guard = prev.unwrap_or_default();
        if let GuardAction::Redirect(path) = status.with(|s| guard.observe(s)) {
            session.navigator().navigate(path);
        }
        guard
    });

    let view_state = Memo::new(move |_| status.with(RouteGuard::view));

    move || match view_state.get() {
        GuardView::Pending => view! { <p class="route-pending">"Loading..."</p> }.into_any(),
        GuardView::Blocked => ().into_any(),
        GuardView::Content => children().into_any(),
    }
}
