//! Notes owned by the signed-in user.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ApiClient, ApiResult};

/// Listing entry; the title is derived by the backend from the markdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: Uuid,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notes {
    pub data: Vec<NoteSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: Option<String>,
    pub markdown: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpsertNote {
    pub id: Uuid,
    pub markdown: String,
}

/// GET /notes
pub async fn search_notes(api: &ApiClient) -> ApiResult<Notes> {
    api.get("/notes").await
}

/// GET /notes/{id}
pub async fn get_note_by_id(api: &ApiClient, note_id: &Uuid) -> ApiResult<Note> {
    api.get(&format!("/notes/{note_id}")).await
}

/// PUT /notes/{id}, creating the note when the id is new
pub async fn upsert_note_by_id(api: &ApiClient, note: &UpsertNote) -> ApiResult<()> {
    api.send(Method::PUT, &format!("/notes/{}", note.id), Some(note))
        .await
}

/// DELETE /notes/{id}
pub async fn delete_note_by_id(api: &ApiClient, note_id: &Uuid) -> ApiResult<()> {
    api.send(Method::DELETE, &format!("/notes/{note_id}"), None::<&()>)
        .await
}
