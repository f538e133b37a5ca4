//! Create / edit user page.
//!
//! The `:id` route param selects edit mode. In edit mode the user is fetched
//! once to prefill the form; the avatar is carried through unchanged since the
//! form does not expose it. An unparseable `:id` renders an error and never
//! submits.

#[cfg(test)]
#[path = "user_form_test.rs"]
mod user_form_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::form_field::FormField;
use crate::net::config::ApiConfig;
#[cfg(feature = "hydrate")]
use crate::state::notices::NoticeKind;
use crate::state::notices::NoticesState;
use crate::util::paths::{self, UserFormMode};
use crate::util::validation::{Field, ValidationErrors, validate_user_draft};

/// Delay between a successful save and the return to the dashboard.
pub const REDIRECT_DELAY_MS: u32 = 4000;
pub const LOAD_USER_FAILED_MESSAGE: &str = "Failed to load user.";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save user.";
pub const INVALID_USER_ID_MESSAGE: &str = "Invalid user id.";

/// Request a submit issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveTarget {
    Create,
    Update(u32),
}

/// `None` when the page must not submit at all.
const fn save_target(mode: UserFormMode) -> Option<SaveTarget> {
    match mode {
        UserFormMode::Create => Some(SaveTarget::Create),
        UserFormMode::Edit(id) => Some(SaveTarget::Update(id)),
        UserFormMode::InvalidId => None,
    }
}

const fn form_title(mode: UserFormMode) -> &'static str {
    match mode {
        UserFormMode::Create => "Create User",
        UserFormMode::Edit(_) | UserFormMode::InvalidId => "Edit User",
    }
}

const fn submit_label(target: SaveTarget) -> &'static str {
    match target {
        SaveTarget::Create => "Create",
        SaveTarget::Update(_) => "Update",
    }
}

#[cfg(any(test, feature = "hydrate"))]
const fn save_success_message(target: SaveTarget) -> &'static str {
    match target {
        SaveTarget::Create => "User created successfully!",
        SaveTarget::Update(_) => "User updated successfully!",
    }
}

#[component]
pub fn UserFormPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let notices = expect_context::<RwSignal<NoticesState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let mode = Memo::new(move |_| paths::user_form_mode(params.read().get("id").as_deref()));

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let avatar = RwSignal::new(None::<String>);
    let errors = RwSignal::new(ValidationErrors::default());
    let busy = RwSignal::new(false);

    // Prefill from the API when editing.
    Effect::new({
        let config = config.clone();
        move || {
            let UserFormMode::Edit(id) = mode.get() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let config = config.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_user(&config, id).await {
                        Ok(user) => {
                            first_name.set(user.first_name);
                            last_name.set(user.last_name);
                            email.set(user.email);
                            avatar.set(Some(user.avatar).filter(|a| !a.is_empty()));
                        }
                        Err(e) => {
                            leptos::logging::warn!("fetch user {id} failed: {e}");
                            crate::components::notice_stack::notify(notices, NoticeKind::Error, LOAD_USER_FAILED_MESSAGE);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&config, id);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(target) = save_target(mode.get_untracked()) else {
            return;
        };
        let draft = match validate_user_draft(
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &email.get_untracked(),
            avatar.get_untracked().as_deref(),
        ) {
            Ok(draft) => draft,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match target {
                    SaveTarget::Update(id) => crate::net::api::update_user(&config, id, &draft).await,
                    SaveTarget::Create => crate::net::api::create_user(&config, &draft).await,
                };
                match result {
                    Ok(saved) => {
                        leptos::logging::log!("saved user {:?} ({target:?})", saved.id);
                        crate::components::notice_stack::notify(
                            notices,
                            NoticeKind::Success,
                            save_success_message(target),
                        );
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(REDIRECT_DELAY_MS)))
                            .await;
                        navigate(paths::DASHBOARD, NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("save user failed: {e}");
                        crate::components::notice_stack::notify(notices, NoticeKind::Error, SAVE_FAILED_MESSAGE);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &navigate, &notices, draft, target);
        }
    };

    view! {
        <div class="user-form-page">
            <div class="user-form-card">
                <h2>{move || form_title(mode.get())}</h2>
                <Show when=move || save_target(mode.get()).is_none()>
                    <p class="user-form__error">{INVALID_USER_ID_MESSAGE}</p>
                    <a class="btn" href=paths::DASHBOARD>
                        "Back to dashboard"
                    </a>
                </Show>
                <form
                    class="user-form"
                    hidden=move || save_target(mode.get()).is_none()
                    on:submit=on_submit
                    novalidate=true
                >
                    <FormField
                        id="firstName"
                        label="First Name"
                        value=first_name
                        errors=errors
                        field=Field::FirstName
                    />
                    <FormField id="lastName" label="Last Name" value=last_name errors=errors field=Field::LastName/>
                    <FormField id="email" label="Email" input_type="email" value=email errors=errors field=Field::Email/>
                    <div class="user-form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || save_target(mode.get()).map(submit_label).unwrap_or_default()}
                        </button>
                        <a class="btn" href=paths::DASHBOARD>
                            "Cancel"
                        </a>
                    </div>
                </form>
            </div>
        </div>
    }
}
