pub mod config;
pub mod dto;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

use handlers::rest;
use service::NoteService;

/// Builds the REST router around a shared note service.
pub fn app(service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/notes", get(rest::get_all_notes).post(rest::create_note))
        .route(
            "/notes/{id}",
            get(rest::get_one_note)
                .put(rest::update_note)
                .delete(rest::delete_note),
        )
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", rest::ApiDoc::openapi()),
        )
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Response {
    (StatusCode::OK, "Hello world!").into_response()
}
