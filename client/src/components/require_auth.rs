//! Route guard for pages that need a credential token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected route in `App`. The check runs client-side and is
//! re-run whenever the location path changes, so each navigation re-reads the
//! session, including moves between two URLs of the same route.
//! Server rendering always shows the placeholder because the token lives in
//! browser storage.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::Session;
use crate::util::auth::{GuardDecision, check_session};
use crate::util::paths;

/// Render `children` only when a token is present; otherwise redirect to login.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let decision = RwSignal::new(None::<GuardDecision>);

    Effect::new(move || {
        pathname.track();
        let outcome = check_session(&session);
        if outcome == GuardDecision::RedirectToLogin {
            navigate(paths::LOGIN, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        decision.set(Some(outcome));
    });

    view! {
        <Show
            when=move || decision.get() == Some(GuardDecision::Allow)
            fallback=move || {
                view! {
                    <div class="guard">
                        <p>
                            {move || match decision.get() {
                                Some(GuardDecision::RedirectToLogin) => "Redirecting to login...",
                                _ => "Loading...",
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
