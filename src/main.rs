use std::sync::Arc;

use notes_api::{config, service::NoteService, store::NoteStore};

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().expect("failed to load config");
    let addr = cfg.socket_addr().expect("invalid listen address");

    // Store and service creation
    let store = Arc::new(tokio::sync::Mutex::new(NoteStore::new()));
    let service = Arc::new(NoteService::new(store));

    let router = notes_api::app(service);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("Notes API listening on {}", addr);

    axum::serve(listener, router)
        .await
        .expect("failed to start server");
}
