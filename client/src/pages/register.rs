//! Registration page. On success the new token signs the user straight in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

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
use crate::util::validation::{Field, ValidationErrors, validate_registration};

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(err: &ApiError) -> String {
    format!("Register failed. {}", err.reason())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let validated = validate_registration(
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        let credentials = match validated {
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
                match crate::net::api::register(&config, &credentials).await {
                    Ok(token) => {
                        session.sign_in(&token);
                        navigate(paths::DASHBOARD, NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("register failed: {e}");
                        message.set(register_failed_message(&e));
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
                <h2>"Register"</h2>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormField id="email" label="Email" value=email errors=errors field=Field::Email/>
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        value=password
                        errors=errors
                        field=Field::Password
                    />
                    <FormField
                        id="confirmPassword"
                        label="Confirm Password"
                        input_type="password"
                        value=confirm_password
                        errors=errors
                        field=Field::ConfirmPassword
                    />
                    <div class="auth-form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Register"
                        </button>
                        <a class="auth-form__link" href=paths::LOGIN>
                            "Login"
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
