//! Login page: email + password exchanged for a credential token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::config::ApiConfig;
use crate::state::session::Session;
use crate::util::paths;
use crate::util::validation::{Field, ValidationErrors, validate_login};

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(err: &ApiError) -> String {
    format!("Login failed. {}", err.reason())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        message.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, &credentials).await {
                    Ok(token) => {
                        session.sign_in(&token);
                        navigate(paths::DASHBOARD, NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        message.set(login_failed_message(&e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &config, &navigate, credentials);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Login"</h2>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormField id="email" label="Email" input_type="email" value=email errors=errors field=Field::Email/>
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        value=password
                        errors=errors
                        field=Field::Password
                    />
                    <div class="auth-form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Login"
                        </button>
                        <a class="auth-form__link" href=paths::REGISTER>
                            "Register"
                        </a>
                    </div>
                    <Show when=move || !message.get().is_empty()>
                        <p class="auth-form__message">{move || message.get()}</p>
                    </Show>
                </form>
            </div>
        </div>
    }
}
