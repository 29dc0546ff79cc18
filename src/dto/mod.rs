use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Note;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    /// Note ID
    pub id: u64,
    /// Note title
    pub title: String,
    /// Note content
    pub content: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
        }
    }
}

/// Both fields are optional on the wire so a missing one can be answered
/// with a 400 instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    /// Note title
    pub title: Option<String>,
    /// Note content
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    /// New title, the current one is kept when omitted
    pub title: Option<String>,
    /// New content, the current one is kept when omitted
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNoteResponse {
    /// The note that was removed
    pub deleted_note: NoteResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable error message
    pub error: String,
}
