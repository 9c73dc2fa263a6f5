//! Sign-in, sign-out and the two-step sign-up flow.

use axum::{extract::State, response::Redirect, Form, Json};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{auth, users};
use crate::error::ActionFailure;
use crate::session::{CurrentSession, SESSION_COOKIE, USER_ID_COOKIE};
use crate::state::AppState;

const MIN_USERNAME_CHARS: usize = 6;
const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Debug, Default, Deserialize)]
pub struct SignInForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SignUpForm {
    pub username: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PasswordForm {
    pub password: Option<String>,
}

/// Blank form fields count as missing.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub async fn sign_in_page() -> Json<serde_json::Value> {
    Json(serde_json::json!({}))
}

/// `POST /signin`
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    jar: CookieJar,
    Form(form): Form<SignInForm>,
) -> Result<(CookieJar, Redirect), ActionFailure> {
    let username =
        non_empty(form.username).ok_or_else(|| ActionFailure::invalid("username is required"))?;
    let password =
        non_empty(form.password).ok_or_else(|| ActionFailure::invalid("password is required"))?;

    let method = auth::AuthenticationMethod::Password {
        username: username.clone(),
        password,
    };
    let authentication = auth::authenticate(&state.api_for(session), &method)
        .await
        .map_err(|e| {
            ActionFailure::backend(&e, "authentication failed").with_username(Some(username.clone()))
        })?;

    tracing::info!(user_id = %authentication.user.id, "user signed in");

    let jar = jar
        .add(state.session_cookie(USER_ID_COOKIE, authentication.user.id.to_string()))
        .add(state.session_cookie(SESSION_COOKIE, authentication.session.token));

    Ok((jar, Redirect::to("/")))
}

/// `POST /signout`
pub async fn sign_out(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), ActionFailure> {
    let Some(session) = session else {
        return Ok((jar, Redirect::to("/signin")));
    };

    let (user_id, session_id) = (session.user_id, session.id);
    users::delete_user_session(&state.api_for(Some(session)), &user_id, &session_id)
        .await
        .map_err(|e| ActionFailure::backend(&e, "something went wrong"))?;

    tracing::info!(%user_id, %session_id, "user signed out");

    let jar = jar
        .remove(state.expired_cookie(USER_ID_COOKIE))
        .remove(state.expired_cookie(SESSION_COOKIE));

    Ok((jar, Redirect::to("/signin")))
}

pub async fn sign_up_page() -> Json<serde_json::Value> {
    Json(serde_json::json!({}))
}

/// `POST /signup`: create the user and its first session.
pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    jar: CookieJar,
    Form(form): Form<SignUpForm>,
) -> Result<(CookieJar, Redirect), ActionFailure> {
    let username = match non_empty(form.username) {
        Some(username) if has_min_chars(&username, MIN_USERNAME_CHARS) => username,
        username => {
            return Err(
                ActionFailure::invalid("username must contain at least 6 characters")
                    .with_username(username),
            )
        }
    };

    let created = users::create_user(&state.api_for(session), &users::CreateUser { username })
        .await
        .map_err(|e| ActionFailure::backend(&e, "something went wrong"))?;

    tracing::info!(user_id = %created.user.id, username = %created.user.username, "user created");

    let jar = jar
        .add(state.session_cookie(SESSION_COOKIE, created.session.token))
        .add(state.session_cookie(USER_ID_COOKIE, created.user.id.to_string()));

    Ok((jar, Redirect::to("/signup/password")))
}

pub async fn sign_up_password_page() -> Json<serde_json::Value> {
    Json(serde_json::json!({}))
}

/// `POST /signup/password`: second sign-up step for the user in `userId`.
pub async fn sign_up_password(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    jar: CookieJar,
    Form(form): Form<PasswordForm>,
) -> Result<Redirect, ActionFailure> {
    let Some(user_id) = jar
        .get(USER_ID_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
    else {
        return Ok(Redirect::to("/signin"));
    };

    let password = non_empty(form.password)
        .filter(|password| has_min_chars(password, MIN_PASSWORD_CHARS))
        .ok_or_else(|| ActionFailure::invalid("password must contain at least 6 characters"))?;

    users::set_user_password(
        &state.api_for(session),
        &user_id,
        &users::CreatePassword { password },
    )
    .await
    .map_err(|e| ActionFailure::backend(&e, "something went wrong"))?;

    tracing::info!(%user_id, "user password set");

    Ok(Redirect::to("/"))
}
