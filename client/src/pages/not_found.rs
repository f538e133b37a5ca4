//! Fallback page for unmatched routes.

use leptos::prelude::*;

use crate::util::paths;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h2>"Page not found."</h2>
            <a href=paths::DASHBOARD>"Back to dashboard"</a>
        </div>
    }
}
