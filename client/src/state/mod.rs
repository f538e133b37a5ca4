//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `listing`, `notices`) so pages and
//! components depend on small focused models.

pub mod listing;
pub mod notices;
pub mod session;
