//! Toast-style notice stack.

use leptos::prelude::*;

use crate::state::notices::{NoticeKind, NoticesState};
#[cfg(feature = "hydrate")]
use crate::state::notices::NOTICE_AUTO_CLOSE_MS;

/// Push a notice and schedule its auto-dismissal.
pub fn notify(notices: RwSignal<NoticesState>, kind: NoticeKind, text: impl Into<String>) {
    let text = text.into();
    let Some(id) = notices.try_update(move |s| s.push(kind, text)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(NOTICE_AUTO_CLOSE_MS))).await;
        notices.try_update(|s| s.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed-position stack of active notices.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticesState>>();

    view! {
        <div class="notice-stack" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items()
                    .iter()
                    .cloned()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div class=notice.kind.class() role="status">
                                <span class="notice__text">{notice.text}</span>
                                <button
                                    class="notice__close"
                                    title="Dismiss"
                                    on:click=move |_| notices.update(|s| s.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
