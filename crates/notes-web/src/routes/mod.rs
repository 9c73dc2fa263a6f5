//! HTTP routes of the notes frontend.
//!
//! Page loaders (`GET`) answer with JSON page data; form actions (`POST`)
//! answer with a 303 redirect on success or an [`ActionFailure`] payload.
//!
//! [`ActionFailure`]: crate::error::ActionFailure

pub mod auth;
pub mod health;
pub mod notes;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::session::session_middleware;
use crate::state::AppState;

/// Build the application router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/signin", get(auth::sign_in_page).post(auth::sign_in))
        .route("/signout", post(auth::sign_out))
        .route("/signup", get(auth::sign_up_page).post(auth::sign_up))
        .route(
            "/signup/password",
            get(auth::sign_up_password_page).post(auth::sign_up_password),
        );

    let notes_routes = Router::new()
        .route("/", get(notes::index))
        .route("/notes", get(notes::list))
        .route("/create", get(notes::create_page).post(notes::create))
        .route("/{note_id}", get(notes::show))
        .route("/{note_id}/delete", post(notes::delete))
        .route("/{note_id}/edit", get(notes::edit_page).post(notes::edit));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(auth_routes)
        .merge(notes_routes)
        .layer(middleware::from_fn(session_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
