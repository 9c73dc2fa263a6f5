//! Notes pages and note actions.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::notes::{self, Note, NoteSummary, UpsertNote};
use crate::api::ApiClient;
use crate::error::{ActionFailure, AppError, AppResult};
use crate::session::CurrentSession;
use crate::state::AppState;

/// Page data shared by every page of the notes layout.
#[derive(Debug, Serialize)]
pub struct NotesPage {
    pub notes: Vec<NoteSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Note>,
}

#[derive(Debug, Serialize)]
pub struct NotePage {
    pub notes: Vec<NoteSummary>,
    pub note: Note,
}

#[derive(Debug, Default, Deserialize)]
pub struct NoteForm {
    pub markdown: Option<String>,
}

/// Notes layout: the sidebar listing. Failing to list means the user has no
/// usable session, so the page sends them to sign in.
async fn load_layout(api: &ApiClient) -> AppResult<Vec<NoteSummary>> {
    match notes::search_notes(api).await {
        Ok(listing) => Ok(listing.data),
        Err(e) => {
            tracing::debug!(error = %e, "notes listing unavailable");
            Err(AppError::AuthRequired("/signin"))
        }
    }
}

/// Note ids are taken as raw path segments and checked after the session guard.
fn parse_note_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

async fn load_note(api: &ApiClient, note_id: &Uuid, message: &str) -> AppResult<Note> {
    notes::get_note_by_id(api, note_id).await.map_err(|e| {
        tracing::debug!(error = %e, %note_id, "note unavailable");
        AppError::NotFound(message.to_string())
    })
}

/// `GET /`: jump to the first note.
pub async fn index(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Redirect> {
    let listing = notes::search_notes(&state.api_for(session))
        .await
        .map_err(|e| {
            tracing::debug!(error = %e, "notes listing unavailable");
            AppError::NotFound("notes could not be fetched".to_string())
        })?;

    let first_note = listing
        .data
        .first()
        .ok_or_else(|| AppError::NotFound("not notes found".to_string()))?;

    Ok(Redirect::to(&format!("/{}", first_note.id)))
}

/// `GET /notes`: the listing plus the first note, if there is one.
pub async fn list(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<NotesPage>> {
    let api = state.api_for(session);
    let notes = load_layout(&api).await?;

    let note = match notes.first() {
        Some(first_note) => Some(load_note(&api, &first_note.id, "failed to fetch note").await?),
        None => None,
    };

    Ok(Json(NotesPage { notes, note }))
}

/// `GET /{note_id}`
pub async fn show(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Path(note_id): Path<String>,
) -> AppResult<Json<NotePage>> {
    let api = state.api_for(session);
    let notes = load_layout(&api).await?;
    let note_id = parse_note_id(&note_id)
        .ok_or_else(|| AppError::NotFound("note could not be found".to_string()))?;
    let note = load_note(&api, &note_id, "note could not be found").await?;

    Ok(Json(NotePage { notes, note }))
}

/// `POST /{note_id}/delete`
pub async fn delete(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Path(note_id): Path<String>,
) -> Result<Redirect, ActionFailure> {
    if session.is_none() {
        return Ok(Redirect::to("/signup"));
    }
    let note_id =
        parse_note_id(&note_id).ok_or_else(|| ActionFailure::invalid("invalid note id"))?;

    notes::delete_note_by_id(&state.api_for(session), &note_id)
        .await
        .map_err(|e| ActionFailure::backend(&e, "something went wrong"))?;

    tracing::info!(%note_id, "note deleted");

    Ok(Redirect::to("/"))
}

/// `GET /{note_id}/edit`
pub async fn edit_page(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Path(note_id): Path<String>,
) -> AppResult<Json<NotePage>> {
    show(State(state), CurrentSession(session), Path(note_id)).await
}

/// `POST /{note_id}/edit`
pub async fn edit(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Path(note_id): Path<String>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, ActionFailure> {
    if session.is_none() {
        return Ok(Redirect::to("/signup"));
    }
    let note_id =
        parse_note_id(&note_id).ok_or_else(|| ActionFailure::invalid("invalid note id"))?;

    save_note(&state.api_for(session), note_id, form).await?;
    tracing::info!(%note_id, "note updated");

    Ok(Redirect::to(&format!("/{note_id}")))
}

/// `GET /create`
pub async fn create_page(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<NotesPage>> {
    let notes = load_layout(&state.api_for(session)).await?;
    Ok(Json(NotesPage { notes, note: None }))
}

/// `POST /create`: store the markdown under a fresh random id.
pub async fn create(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, ActionFailure> {
    if session.is_none() {
        return Ok(Redirect::to("/signup"));
    }

    let note_id = Uuid::new_v4();
    save_note(&state.api_for(session), note_id, form).await?;
    tracing::info!(%note_id, "note created");

    Ok(Redirect::to(&format!("/{note_id}")))
}

async fn save_note(api: &ApiClient, id: Uuid, form: NoteForm) -> Result<(), ActionFailure> {
    let markdown = form
        .markdown
        .filter(|markdown| !markdown.is_empty())
        .ok_or_else(|| ActionFailure::invalid("markdown cannot be empty"))?;

    notes::upsert_note_by_id(api, &UpsertNote { id, markdown })
        .await
        .map_err(|e| ActionFailure::backend(&e, "something went wrong"))
}
