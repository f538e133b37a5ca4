//! REST calls against the remote user-management API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-success outcome collapses into `ApiError`; callers decide whether
//! it becomes an inline message, a banner, or a transient notice.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use super::types::{Credentials, SavedUser, User, UserDraft, UserPage};

/// The one status code the API uses to acknowledge a delete.
pub const DELETE_SUCCESS_STATUS: u16 = 204;

/// Failure of a network call or a non-success response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {status}{}", message_suffix(.message.as_deref()))]
    Status { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Short reason for inline display, preferring the server's own message.
    pub fn reason(&self) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

fn message_suffix(message: Option<&str>) -> String {
    message.map(|m| format!(" ({m})")).unwrap_or_default()
}

#[cfg(any(test, feature = "hydrate"))]
/// Build a status error from a non-2xx response body.
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty());
    ApiError::Status { status, message }
}

/// Delete succeeds on 204 exactly; any other status, including other 2xx, fails.
///
/// # Errors
///
/// Returns `ApiError::Status` for every status other than 204.
pub fn delete_outcome_for_status(status: u16) -> Result<(), ApiError> {
    if status == DELETE_SUCCESS_STATUS {
        Ok(())
    } else {
        Err(ApiError::Status { status, message: None })
    }
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Method, Request, RequestBuilder, Response};

    use super::{ApiError, status_error};
    use crate::net::config::{API_KEY_HEADER, ApiConfig};

    pub(super) fn builder(config: &ApiConfig, method: Method, url: &str) -> RequestBuilder {
        let builder = RequestBuilder::new(url).method(method);
        match config.api_key.as_deref() {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }

    pub(super) fn network(err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }

    /// Send and return the raw response regardless of status.
    pub(super) async fn send_raw(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        request.map_err(network)?.send().await.map_err(network)
    }

    /// Send and reject non-2xx responses.
    pub(super) async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        let response = send_raw(request).await?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body))
    }

    pub(super) async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Exchange credentials for a token via `POST /login`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the credentials.
pub async fn login(config: &ApiConfig, credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::builder(config, gloo_net::http::Method::POST, &config.login_url()).json(credentials);
        let response = transport::send(request).await?;
        let body: super::types::TokenResponse = transport::decode(response).await?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(ApiError::Unavailable)
    }
}

/// Create an account and receive a token via `POST /register`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the registration.
pub async fn register(config: &ApiConfig, credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request =
            transport::builder(config, gloo_net::http::Method::POST, &config.register_url()).json(credentials);
        let response = transport::send(request).await?;
        let body: super::types::TokenResponse = transport::decode(response).await?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of users via `GET /users?page=&per_page=`.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn fetch_users_page(config: &ApiConfig, page: u32, per_page: u32) -> Result<UserPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.users_page_url(page, per_page);
        let request = transport::builder(config, gloo_net::http::Method::GET, &url).build();
        let response = transport::send(request).await?;
        transport::decode(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, page, per_page);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single user via `GET /users/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the user does not exist.
pub async fn fetch_user(config: &ApiConfig, id: u32) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::builder(config, gloo_net::http::Method::GET, &config.user_url(id)).build();
        let response = transport::send(request).await?;
        let envelope: super::types::UserEnvelope = transport::decode(response).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id);
        Err(ApiError::Unavailable)
    }
}

/// Create a user via `POST /users`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the payload.
pub async fn create_user(config: &ApiConfig, draft: &UserDraft) -> Result<SavedUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::builder(config, gloo_net::http::Method::POST, &config.users_url()).json(draft);
        let response = transport::send(request).await?;
        transport::decode(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, draft);
        Err(ApiError::Unavailable)
    }
}

/// Replace a user via `PUT /users/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the payload.
pub async fn update_user(config: &ApiConfig, id: u32, draft: &UserDraft) -> Result<SavedUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::builder(config, gloo_net::http::Method::PUT, &config.user_url(id)).json(draft);
        let response = transport::send(request).await?;
        transport::decode(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id, draft);
        Err(ApiError::Unavailable)
    }
}

/// Delete a user via `DELETE /users/{id}`.
///
/// # Errors
///
/// Returns an error on transport failure or any status other than 204.
pub async fn delete_user(config: &ApiConfig, id: u32) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::builder(config, gloo_net::http::Method::DELETE, &config.user_url(id)).build();
        let response = transport::send_raw(request).await?;
        delete_outcome_for_status(response.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id);
        Err(ApiError::Unavailable)
    }
}
