//! Login page with independent login and registration forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Both forms delegate to the session store; on success the
//! session itself navigates to the home route. Failures are logged to the
//! console only and the forms keep their input.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use session::CredentialsForm;

use crate::state::auth::AppSession;

/// Which session operation a credentials form drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthAction {
    Login,
    Register,
}

impl AuthAction {
    fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    fn form_class(self) -> &'static str {
        match self {
            Self::Login => "auth-form auth-form--login",
            Self::Register => "auth-form auth-form--register",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CredentialField {
    Username,
    Password,
}

impl CredentialField {
    fn apply(self, form: &mut CredentialsForm, value: String) {
        match self {
            Self::Username => form.username = value,
            Self::Password => form.password = value,
        }
    }
}

#[component]
pub fn LoginPage(session: AppSession) -> impl IntoView {
    view! {
        <div class="login-page">
            <CredentialsPanel session=session action=AuthAction::Login/>
            <CredentialsPanel session=session action=AuthAction::Register/>
        </div>
    }
}

#[component]
fn CredentialsPanel(session: AppSession, action: AuthAction) -> impl IntoView {
    let form = RwSignal::new(CredentialsForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match form.with_untracked(CredentialsForm::validate) {
            Ok(credentials) => credentials,
            Err(e) => {
                leptos::logging::warn!("{} rejected: {e}", action.label());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match action {
                AuthAction::Login => session.login(&credentials.username, &credentials.password).await,
                AuthAction::Register => {
                    session
                        .register(&credentials.username, &credentials.password)
                        .await
                }
            };
            if result.is_ok() {
                form.update(|f| f.password.clear());
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, session);
            busy.set(false);
        }
    };

    view! {
        <form class=action.form_class() on:submit=on_submit>
            <h2>{action.label()}</h2>
            <input
                class="auth-input"
                type="text"
                placeholder="Username"
                required=true
                prop:value=move || form.with(|f| f.username.clone())
                on:input=move |ev| form.update(|f| CredentialField::Username.apply(f, event_target_value(&ev)))
            />
            <input
                class="auth-input"
                type="password"
                placeholder="Password"
                required=true
                prop:value=move || form.with(|f| f.password.clone())
                on:input=move |ev| form.update(|f| CredentialField::Password.apply(f, event_target_value(&ev)))
            />
            <button class="auth-button" type="submit" disabled=move || busy.get()>
                {action.label()}
            </button>
        </form>
    }
}
