//! `POST /auth`: exchange credentials for a session token.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ApiClient, ApiResult};

/// Supported authentication methods, tagged by `method`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum AuthenticationMethod {
    Password { username: String, password: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserSession {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Authentication {
    pub user: AuthenticatedUser,
    pub session: UserSession,
}

pub async fn authenticate(
    api: &ApiClient,
    method: &AuthenticationMethod,
) -> ApiResult<Authentication> {
    api.call(Method::POST, "/auth", Some(method)).await
}
