//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical unauthenticated redirect behavior
//! through `RequireAuth`, which delegates the decision to `guard_decision`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::Session;

/// Outcome of checking a protected route entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

/// Allow when a non-empty token is present, otherwise redirect.
pub fn guard_decision(token: Option<&str>) -> GuardDecision {
    match token {
        Some(token) if !token.is_empty() => GuardDecision::Allow,
        _ => GuardDecision::RedirectToLogin,
    }
}

/// Read the session and decide. Performs no writes and no requests.
pub fn check_session(session: &Session) -> GuardDecision {
    guard_decision(session.token().as_deref())
}
