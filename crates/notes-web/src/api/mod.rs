//! Notes API client.
//!
//! Every backend call goes through [`ApiClient`] and comes back as an
//! [`ApiResult`]: transport failures, non-2xx statuses and undecodable
//! bodies are all folded into [`ApiError`], so callers never deal with
//! anything but a plain `Result`.
//!
//! The typed accessors for each backend resource live in [`auth`],
//! [`users`] and [`notes`].

pub mod auth;
pub mod notes;
pub mod users;

use reqwest::{header, Method};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::result_ext::ResultExt;
use crate::session::{forward_credentials, Session};

/// Failure of a single notes API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout or body read failure
    #[error("api transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response status outside the 2xx range
    #[error("api error: {0}")]
    Status(u16),

    /// Response body is not the expected JSON
    #[error("api decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Path could not be joined onto the base URL
    #[error("api url error: {0}")]
    Url(#[from] url::ParseError),
}

/// Result of a notes API call.
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP client bound to the notes API base URL.
///
/// The shared instance carries no session; handlers derive a per-request
/// copy with [`ApiClient::for_session`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
    session: Option<Session>,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        Self {
            base_url,
            http: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            session: None,
        }
    }

    /// Copy of this client whose calls forward `session`'s credentials.
    pub fn for_session(&self, session: Option<Session>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            http: self.http.clone(),
            session,
        }
    }

    /// Absolute URL of an API path.
    pub fn url(&self, path: &str) -> ApiResult<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    /// Call an endpoint and decode its JSON body as `T`.
    pub async fn call<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(method, path, body).await?;
        let bytes = response.bytes().await?;
        let data = serde_json::from_slice::<T>(&bytes)
            .log(format!("failed to decode response of {path}"))?;
        Ok(data)
    }

    /// `GET` an endpoint and decode its JSON body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.call(Method::GET, path, None::<&()>).await
    }

    /// Call an endpoint whose response body is irrelevant (often empty).
    pub async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.request(method, path, body).await?;
        Ok(())
    }

    async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let mut request = self.http.request(method.clone(), url.clone());

        if let Some(authorization) = forward_credentials(self.session.as_ref(), &url, &self.base_url) {
            request = request.header(header::AUTHORIZATION, authorization);
        }

        // Sets content-type: application/json
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, authenticated = self.session.is_some(), "calling notes api");

        let response = request
            .send()
            .await
            .log(format!("notes api request failed: {method} {path}"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%method, %url, status = status.as_u16(), "notes api returned an error status");
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response)
    }
}
