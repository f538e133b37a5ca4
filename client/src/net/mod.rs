//! Networking modules for the remote user-management API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` locates the API, `api` performs the REST calls, and `types`
//! defines the JSON wire schema.

pub mod api;
pub mod config;
pub mod types;
