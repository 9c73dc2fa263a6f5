//! User accounts, passwords and sessions.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auth::UserSession;
use super::{ApiClient, ApiResult};

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUser {
    pub username: String,
}

/// Response of `POST /users`: the new user and a session for it.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedUser {
    pub user: User,
    pub session: UserSession,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePassword {
    pub password: String,
}

/// POST /users
pub async fn create_user(api: &ApiClient, user: &CreateUser) -> ApiResult<CreatedUser> {
    api.call(Method::POST, "/users", Some(user)).await
}

/// PUT /users/{user_id}/password
pub async fn set_user_password(
    api: &ApiClient,
    user_id: &Uuid,
    password: &CreatePassword,
) -> ApiResult<()> {
    api.send(Method::PUT, &format!("/users/{user_id}/password"), Some(password))
        .await
}

/// DELETE /users/{user_id}/sessions/{session_id}
pub async fn delete_user_session(
    api: &ApiClient,
    user_id: &Uuid,
    session_id: &Uuid,
) -> ApiResult<()> {
    api.send(
        Method::DELETE,
        &format!("/users/{user_id}/sessions/{session_id}"),
        None::<&()>,
    )
    .await
}
