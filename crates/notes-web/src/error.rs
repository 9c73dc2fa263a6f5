//! Error types for page loaders and form actions.
//!
//! Loaders fail with [`AppError`], which maps onto a status code (or a
//! redirect for pages that need a session). Form actions fail with
//! [`ActionFailure`], the `{ username?, message }` payload the form is
//! re-rendered with.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::api::ApiError;

/// Application-level errors for page loaders.
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested note or notes collection is absent
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The page needs a session; answered with a 303 to the given path
    #[error("Authentication required, redirecting to {0}")]
    AuthRequired(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::AuthRequired(path) => {
                tracing::debug!(redirect = %path, "authentication required");
                return Redirect::to(path).into_response();
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

/// Failed form submission.
#[derive(Debug, Serialize)]
pub struct ActionFailure {
    #[serde(skip)]
    pub status: StatusCode,
    /// Echoed back so the form can be re-filled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub message: String,
}

impl ActionFailure {
    /// Input rejected before any backend call.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            username: None,
            message: message.into(),
        }
    }

    /// Backend call failed; the cause is logged, not shown.
    pub fn backend(err: &ApiError, message: impl Into<String>) -> Self {
        tracing::warn!(error = %err, "form action backend call failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            username: None,
            message: message.into(),
        }
    }

    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }
}

impl IntoResponse for ActionFailure {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
