//! Client route paths.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";
pub const USER_CREATE: &str = "/users/create";

pub fn user_edit(id: u32) -> String {
    format!("/users/{id}/edit")
}

/// Parse the `:id` route segment of the edit page.
pub fn parse_user_id(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse::<u32>().ok().filter(|id| *id > 0)
}

/// Mode of the user form page, derived from the `:id` route segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserFormMode {
    /// No segment: the `/users/create` route.
    Create,
    Edit(u32),
    /// A segment is present but is not a positive integer.
    InvalidId,
}

pub fn user_form_mode(raw: Option<&str>) -> UserFormMode {
    match raw {
        None => UserFormMode::Create,
        Some(raw) => parse_user_id(Some(raw)).map_or(UserFormMode::InvalidId, UserFormMode::Edit),
    }
}
