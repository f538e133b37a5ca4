//! Previous / numbered / Next page controls.

#[cfg(test)]
#[path = "pagination_bar_test.rs"]
mod pagination_bar_test;

use leptos::prelude::*;

use crate::state::listing::Pagination;

fn page_button_class(page: u32, current: u32) -> &'static str {
    if page == current { "page-btn page-btn--current" } else { "page-btn" }
}

/// Pagination controls. `on_page` receives the requested page number; range
/// checks happen in the listing controller.
#[component]
pub fn PaginationBar(pagination: Signal<Pagination>, on_page: Callback<u32>) -> impl IntoView {
    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="page-btn page-btn--step"
                disabled=move || !pagination.get().has_previous()
                on:click=move |_| on_page.run(pagination.get_untracked().current_page.saturating_sub(1))
            >
                "Previous"
            </button>
            {move || {
                let current = pagination.get();
                current
                    .page_numbers()
                    .map(|page| {
                        view! {
                            <button
                                class=page_button_class(page, current.current_page)
                                on:click=move |_| on_page.run(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="page-btn page-btn--step"
                disabled=move || !pagination.get().has_next()
                on:click=move |_| on_page.run(pagination.get_untracked().current_page.saturating_add(1))
            >
                "Next"
            </button>
        </nav>
    }
}
