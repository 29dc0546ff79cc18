use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{
    dto::{
        CreateNoteRequest, DeleteNoteResponse, ErrorResponse, NoteResponse, UpdateNoteRequest,
    },
    service::{NoteService, NoteServiceError},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        create_note,
        update_note,
        delete_note,
        get_one_note,
        get_all_notes
    ),
    components(schemas(
        NoteResponse,
        CreateNoteRequest,
        UpdateNoteRequest,
        DeleteNoteResponse,
        ErrorResponse
    )),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

/// Ids that are not positive integers can never match a note.
fn parse_id(raw: &str) -> Result<u64, NoteServiceError> {
    raw.parse::<u64>().map_err(|_| NoteServiceError::NotFound)
}

fn error_response(e: &NoteServiceError) -> Response {
    let status = match e {
        NoteServiceError::MissingFields => StatusCode::BAD_REQUEST,
        NoteServiceError::NotFound => StatusCode::NOT_FOUND,
    };

    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = NoteResponse),
        (status = 400, description = "Title, content or body missing", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!("rejected note creation body: {}", rejection);
            return error_response(&NoteServiceError::MissingFields);
        }
    };

    match service.create_note(payload).await {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(e) => error_response(&e),
    }
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(
        ("id" = u64, Path, description = "Note ID")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated successfully", body = NoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Response {
    // An unusable body changes nothing, so lookups still decide the outcome.
    let payload = payload.map_or_else(
        |rejection| {
            tracing::debug!("ignoring note update body: {}", rejection);
            UpdateNoteRequest::default()
        },
        |Json(payload)| payload,
    );

    let result = match parse_id(&id) {
        Ok(id) => service.update_note(id, payload).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => {
            tracing::warn!("failed to update note '{}': {}", id, e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(
        ("id" = u64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note deleted successfully", body = DeleteNoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
) -> Response {
    let result = match parse_id(&id) {
        Ok(id) => service.delete_note(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(note) => (
            StatusCode::OK,
            Json(DeleteNoteResponse { deleted_note: note }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("failed to delete note '{}': {}", id, e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(
        ("id" = u64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_one_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
) -> Response {
    let result = match parse_id(&id) {
        Ok(id) => service.get_one_note(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => {
            tracing::warn!("failed to get note '{}': {}", id, e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "List of all notes", body = Vec<NoteResponse>)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(State(service): State<Arc<NoteService>>) -> Response {
    (StatusCode::OK, Json(service.get_all_notes().await)).into_response()
}
