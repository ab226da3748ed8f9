//! Login page with sign-in and registration forms.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionContext;
use crate::config::DASHBOARD_PATH;
#[cfg(feature = "hydrate")]
use crate::state::session::AuthOutcome;
use crate::state::session::{Credentials, Session};

/// Which form the login page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    SignIn,
    Register,
}

impl LoginMode {
    fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::Register,
            Self::Register => Self::SignIn,
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::Register => "Create Account",
        }
    }

    fn toggle_label(self) -> &'static str {
        match self {
            Self::SignIn => "No account yet? Register",
            Self::Register => "Already registered? Sign in",
        }
    }
}

/// Whether the login page should hand over to the dashboard.
///
/// The page's effect is the only place that navigates after sign-in, whether
/// the identity came from the form or from a restored token.
pub(crate) fn should_enter_dashboard(session: &Session) -> bool {
    session.is_authenticated()
}

pub(crate) fn validate_sign_in(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials::SignIn {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

pub(crate) fn validate_register(username: &str, email: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.trim().is_empty() {
        return Err("Fill in username, email, and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(Credentials::Register {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let SessionContext { manager, state } = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let mode = RwSignal::new(LoginMode::SignIn);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if should_enter_dashboard(&state.get()) {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let validated = match mode.get_untracked() {
            LoginMode::SignIn => validate_sign_in(&username.get_untracked(), &password.get_untracked()),
            LoginMode::Register => validate_register(
                &username.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
            ),
        };
        let credentials = match validated {
            Ok(c) => c,
            Err(msg) => {
                message.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        message.set(None);

        #[cfg(feature = "hydrate")]
        {
            let manager = manager.clone();
            leptos::task::spawn_local(async move {
                let outcome = manager.submit(credentials).await;
                busy.set(false);
                match outcome {
                    AuthOutcome::Success => password.set(String::new()),
                    AuthOutcome::Failure { message: text } => message.set(Some(text)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&manager, credentials);
            busy.set(false);
        }
    };

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        mode.update(|m| *m = m.toggled());
        message.set(None);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Credit Risk Rating Platform"</h1>
                <p class="login-card__subtitle">
                    {move || match mode.get() {
                        LoginMode::SignIn => "Sign in to continue",
                        LoginMode::Register => "Create your account",
                    }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <Show when=move || mode.get() == LoginMode::Register>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait..." } else { mode.get().submit_label() }}
                    </button>
                </form>
                <Show when=move || message.get().is_some()>
                    <p class="login-message">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <a href="#" class="login-toggle" on:click=on_toggle>
                    {move || mode.get().toggle_label()}
                </a>
            </div>
        </div>
    }
}
