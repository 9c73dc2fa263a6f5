//! Notes Web Library
//!
//! Server-side frontend for the notes application. It signs users up and
//! in, keeps the notes API session token in a cookie, and serves the notes
//! pages and form actions on top of the notes API.
//!
//! ## Request flow
//!
//! An inbound request first passes the session middleware, which decodes
//! the `sessionToken` cookie into a request-scoped [`session::Session`].
//! Handlers bind that session to an [`api::ApiClient`], which forwards the
//! token as a bearer credential to the notes API host only. Every backend
//! call returns an [`api::ApiResult`]; handlers turn it into page data, a
//! 303 redirect or a structured failure.
//!
//! ## Modules
//!
//! - [`api`]: notes API client and typed accessors
//! - [`config`]: configuration loading from file and environment
//! - [`error`]: loader and form action errors with Axum integration
//! - [`routes`]: page loaders and form actions
//! - [`session`]: session cookie decoding and credential forwarding
//! - [`state`]: shared application state

pub mod api;
pub mod config;
pub mod error;
pub mod result_ext;
pub mod routes;
pub mod session;
pub mod state;

pub use error::{ActionFailure, AppError, AppResult};
pub use result_ext::ResultExt;
