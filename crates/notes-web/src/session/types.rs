use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

/// Session context built from the `sessionToken` cookie of one request.
///
/// `token` is the opaque credential issued by the notes API. `id` and
/// `user_id` are read from the token envelope without verification and are
/// only used to address backend resources; the backend checks them against
/// the token itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub id: Uuid,
    pub user_id: Uuid,
}

/// Claims carried in the clear in the token's protected header.
#[derive(Debug, Deserialize)]
struct EnvelopeClaims {
    session_id: Uuid,
    user_id: Uuid,
}

/// Why a session token could not be decoded
#[derive(Debug, Error)]
pub enum ClaimsError {
    #[error("session token is empty")]
    Empty,

    #[error("invalid token encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("invalid token claims: {0}")]
    Claims(#[from] serde_json::Error),
}

impl Session {
    /// Decode the non-sensitive claims of a compact token (`header.rest...`).
    pub fn from_token(token: &str) -> Result<Self, ClaimsError> {
        let header = token
            .split('.')
            .next()
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .ok_or(ClaimsError::Empty)?;

        let bytes = URL_SAFE_NO_PAD.decode(header.trim_end_matches('='))?;
        let claims: EnvelopeClaims = serde_json::from_slice(&bytes)?;

        Ok(Self {
            token: token.to_string(),
            id: claims.session_id,
            user_id: claims.user_id,
        })
    }
}
