//! Dashboard page: paginated user table with page-size selection and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Listing state is page-local and rebuilt on
//! every visit. Each user action asks `ListingState` for a request ticket,
//! runs it against the API in a local task, and feeds the result back so the
//! controller can drop stale responses.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination_bar::PaginationBar;
use crate::components::user_table::UserTable;
use crate::net::config::ApiConfig;
use crate::state::listing::{DeleteRequest, ListingState, PageRequest, PageSize};
#[cfg(any(test, feature = "hydrate"))]
use crate::state::listing::{DELETE_FAILED_MESSAGE, DELETE_SUCCESS_MESSAGE, DeleteOutcome};
#[cfg(feature = "hydrate")]
use crate::state::listing::LoadOutcome;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::notices::NoticeKind;
use crate::state::notices::NoticesState;
use crate::state::session::Session;
use crate::util::paths;

/// Notice to show for a finished delete.
#[cfg(any(test, feature = "hydrate"))]
fn delete_notice(outcome: &DeleteOutcome) -> (NoticeKind, &'static str) {
    match outcome {
        DeleteOutcome::Removed { .. } => (NoticeKind::Success, DELETE_SUCCESS_MESSAGE),
        DeleteOutcome::Failed(_) => (NoticeKind::Error, DELETE_FAILED_MESSAGE),
    }
}

/// Run a page load and hand the result back to the controller.
fn dispatch_load(config: ApiConfig, listing: RwSignal<ListingState>, request: PageRequest) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_users_page(&config, request.page, request.page_size.get()).await;
        if let Err(e) = &result {
            leptos::logging::warn!("users page {} failed: {e}", request.page);
        }
        if listing.try_update(|s| s.complete_load(request, result)) == Some(LoadOutcome::Stale) {
            leptos::logging::log!("discarded stale users page {} (seq {})", request.page, request.seq);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, listing, request);
    }
}

/// Run a delete, update the list, and surface the outcome as a notice.
fn dispatch_delete(
    config: ApiConfig,
    listing: RwSignal<ListingState>,
    notices: RwSignal<NoticesState>,
    request: DeleteRequest,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::delete_user(&config, request.user_id).await;
        if let Err(e) = &result {
            leptos::logging::warn!("delete user {} failed: {e}", request.user_id);
        }
        let outcome = listing
            .try_update(|s| s.complete_delete(request, result))
            .unwrap_or_else(|| DeleteOutcome::Failed(DELETE_FAILED_MESSAGE.to_owned()));
        let (kind, text) = delete_notice(&outcome);
        crate::components::notice_stack::notify(notices, kind, text);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, listing, notices, request);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let config = expect_context::<ApiConfig>();
    let notices = expect_context::<RwSignal<NoticesState>>();
    let navigate = use_navigate();

    let listing = RwSignal::new(ListingState::default());
    let pending_delete = RwSignal::new(None::<u32>);

    let load = Callback::new({
        let config = config.clone();
        move |request: PageRequest| dispatch_load(config.clone(), listing, request)
    });

    // Initial fetch once mounted in the browser.
    Effect::new(move || {
        if let Some(request) = listing.try_update(ListingState::reload) {
            load.run(request);
        }
    });

    let on_page = Callback::new(move |page: u32| {
        if let Some(request) = listing.try_update(|s| s.go_to_page(page)).flatten() {
            load.run(request);
        }
    });

    let on_page_size = move |ev: leptos::ev::Event| {
        let Some(size) = PageSize::parse(&event_target_value(&ev)) else {
            return;
        };
        if let Some(request) = listing.try_update(|s| s.change_page_size(size)) {
            load.run(request);
        }
    };

    let on_retry = move |_| {
        if let Some(request) = listing.try_update(ListingState::reload) {
            load.run(request);
        }
    };

    let on_delete_request = Callback::new(move |id: u32| pending_delete.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new({
        let config = config.clone();
        move |()| {
            let Some(id) = pending_delete.get_untracked() else {
                return;
            };
            pending_delete.set(None);
            if let Some(request) = listing.try_update(|s| s.begin_delete(id)).flatten() {
                dispatch_delete(config.clone(), listing, notices, request);
            }
        }
    });

    let on_logout = move |_| {
        session.sign_out();
        navigate(paths::LOGIN, NavigateOptions::default());
    };

    let users = Signal::derive(move || listing.with(|s| s.users().to_vec()));
    let pagination = Signal::derive(move || listing.with(ListingState::pagination));
    let deleting = Signal::derive(move || listing.with(ListingState::deleting));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"User Dashboard"</h1>
                <button class="btn btn--danger" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            {move || {
                listing
                    .with(|s| s.initial_failure().map(str::to_owned))
                    .map(|message| {
                        view! {
                            <div class="dashboard-page__error">
                                <p>{message}</p>
                                <button class="btn" on:click=on_retry>
                                    "Retry"
                                </button>
                            </div>
                        }
                    })
            }}

            <Show when=move || listing.with(|s| s.is_initial_load() && s.initial_failure().is_none())>
                <p class="dashboard-page__loading">"Loading..."</p>
            </Show>

            <Show when=move || listing.with(|s| !s.is_initial_load())>
                <div class="dashboard-page__toolbar">
                    <label for="usersPerPage">"Users Per Page:"</label>
                    <select
                        id="usersPerPage"
                        prop:value=move || listing.with(ListingState::selected_page_size).get().to_string()
                        on:change=on_page_size
                    >
                        {PageSize::options()
                            .map(|size| {
                                let value = size.get().to_string();
                                view! { <option value=value.clone()>{value.clone()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <span class="dashboard-page__spinner" class:is-active=move || listing.with(ListingState::is_loading)>
                        "Loading..."
                    </span>
                    <a class="btn btn--primary" href=paths::USER_CREATE>
                        "Create User"
                    </a>
                </div>

                <Show when=move || listing.with(|s| s.banner_error().is_some())>
                    <p class="dashboard-page__banner">
                        {move || listing.with(|s| s.banner_error().unwrap_or_default().to_owned())}
                    </p>
                </Show>

                <UserTable users=users deleting=deleting on_delete=on_delete_request/>
                <PaginationBar pagination=pagination on_page=on_page/>
            </Show>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete User"
                    message="Are you sure you want to delete this user?"
                    confirm_label="Delete"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}
