//! Remote API location and endpoint builders.
//!
//! The base URL and optional API key are baked in at build time so the WASM
//! bundle and the SSR host agree on the same endpoint without a runtime fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://reqres.in/api";

/// Header carrying the optional API key.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, None)
    }
}

impl ApiConfig {
    /// Build a config, trimming trailing slashes and treating a blank key as absent.
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        let base_url = match base_url.trim().trim_end_matches('/') {
            "" => DEFAULT_API_BASE_URL.to_owned(),
            trimmed => trimmed.to_owned(),
        };
        let api_key = api_key.map(str::trim).filter(|k| !k.is_empty()).map(str::to_owned);
        Self { base_url, api_key }
    }

    /// Config from `USERDESK_API_BASE_URL` / `USERDESK_API_KEY` at compile time.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("USERDESK_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL),
            option_env!("USERDESK_API_KEY"),
        )
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    pub fn register_url(&self) -> String {
        format!("{}/register", self.base_url)
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn users_page_url(&self, page: u32, per_page: u32) -> String {
        format!("{}/users?page={page}&per_page={per_page}", self.base_url)
    }

    pub fn user_url(&self, id: u32) -> String {
        format!("{}/users/{id}", self.base_url)
    }
}
