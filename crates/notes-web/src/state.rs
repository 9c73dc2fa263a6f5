//! Application state shared by all handlers.

use anyhow::Context;
use axum_extra::extract::cookie::{Cookie, SameSite};
use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::WebConfig;
use crate::session::Session;

/// Shared application state.
///
/// Immutable after startup; per-request data (the session) travels with the
/// request and is bound to a client copy through [`AppState::api_for`].
#[derive(Clone)]
pub struct AppState {
    /// Frontend configuration
    pub config: Arc<WebConfig>,

    /// Notes API client without session credentials
    pub api: ApiClient,
}

impl AppState {
    /// Create the state, validating the notes API base URL.
    pub fn new(config: WebConfig) -> anyhow::Result<Self> {
        let base_url = config
            .backend_url()
            .with_context(|| format!("invalid notes api base url: {}", config.backend.base_url))?;
        let api = ApiClient::new(base_url, config.backend_timeout());

        Ok(Self {
            config: Arc::new(config),
            api,
        })
    }

    /// Client that forwards `session`'s token to the notes API.
    pub fn api_for(&self, session: Option<Session>) -> ApiClient {
        self.api.for_session(session)
    }

    /// `path=/; HttpOnly; SameSite=Strict` cookie, `Secure` unless disabled.
    pub fn session_cookie(&self, name: &'static str, value: String) -> Cookie<'static> {
        Cookie::build((name, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.config.cookies.secure)
            .build()
    }

    /// Removal cookie matching the attributes of [`AppState::session_cookie`].
    pub fn expired_cookie(&self, name: &'static str) -> Cookie<'static> {
        Cookie::build(name).path("/").build()
    }
}
