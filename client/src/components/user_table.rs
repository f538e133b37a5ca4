//! Dashboard table of user records.

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::paths;

/// One row per user with Edit and Delete actions.
#[component]
pub fn UserTable(users: Signal<Vec<User>>, deleting: Signal<Option<u32>>, on_delete: Callback<u32>) -> impl IntoView {
    view! {
        <table class="user-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Avatar"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    users
                        .get()
                        .into_iter()
                        .map(|user| {
                            let id = user.id;
                            let name = user.full_name();
                            view! {
                                <tr>
                                    <td class="user-table__id">{id}</td>
                                    <td>
                                        <img class="user-table__avatar" src=user.avatar alt=user.first_name/>
                                    </td>
                                    <td>{name}</td>
                                    <td>{user.email}</td>
                                    <td class="user-table__actions">
                                        <a class="btn btn--primary" href=paths::user_edit(id)>
                                            "Edit"
                                        </a>
                                        <button
                                            class="btn btn--danger"
                                            disabled=move || deleting.get().is_some()
                                            on:click=move |_| on_delete.run(id)
                                        >
                                            {move || if deleting.get() == Some(id) { "Deleting..." } else { "Delete" }}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}
