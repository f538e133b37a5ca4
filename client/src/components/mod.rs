//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the route guard, listing table, pagination controls,
//! form fields, dialogs, and notices while reading shared state from Leptos
//! context providers.

pub mod confirm_dialog;
pub mod form_field;
pub mod notice_stack;
pub mod pagination_bar;
pub mod require_auth;
pub mod user_table;
