use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use std::convert::Infallible;

use super::types::Session;
use super::SESSION_COOKIE;

/// Middleware that turns the session cookie into a request-scoped `Session`.
///
/// A missing or undecodable cookie leaves the request without a session;
/// it never rejects the request.
pub async fn session_middleware(jar: CookieJar, mut request: Request, next: Next) -> Response {
    if let Some(session) = session_from_cookies(&jar) {
        tracing::debug!(session_id = %session.id, user_id = %session.user_id, "session attached");
        request.extensions_mut().insert(session);
    }

    next.run(request).await
}

/// Decode the session cookie, if any
pub fn session_from_cookies(jar: &CookieJar) -> Option<Session> {
    let cookie = jar.get(SESSION_COOKIE)?;

    match Session::from_token(cookie.value()) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring undecodable session cookie");
            None
        }
    }
}

/// Session inserted by [`session_middleware`], `None` when unauthenticated.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<Session>);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<Session>().cloned()))
    }
}
