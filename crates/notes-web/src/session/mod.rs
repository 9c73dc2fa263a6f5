//! Session handling for inbound requests and credential forwarding for
//! outbound notes API calls.

pub mod middleware;
pub mod types;

use axum::http::HeaderValue;
use url::Url;

pub use middleware::{session_middleware, CurrentSession};
pub use types::{ClaimsError, Session};

/// Cookie carrying the opaque session token
pub const SESSION_COOKIE: &str = "sessionToken";

/// Cookie carrying the signed-in user's id
pub const USER_ID_COOKIE: &str = "userId";

/// Authorization header to attach to an outbound request, if any.
///
/// Only requests whose host and effective port match the notes API base URL
/// carry the session token; every other destination gets nothing.
pub fn forward_credentials(
    session: Option<&Session>,
    target: &Url,
    backend: &Url,
) -> Option<HeaderValue> {
    let session = session?;

    if target.host_str() != backend.host_str()
        || target.port_or_known_default() != backend.port_or_known_default()
    {
        return None;
    }

    let mut value = HeaderValue::from_str(&format!("Bearer {}", session.token)).ok()?;
    value.set_sensitive(true);
    Some(value)
}
