use crate::{
    dto::{CreateNoteRequest, NoteResponse, UpdateNoteRequest},
    store::NoteStore,
};

use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum NoteServiceError {
    #[error("Title and content are required")]
    MissingFields,

    #[error("Note not found")]
    NotFound,
}

#[derive(Clone)]
pub struct NoteService {
    store: Arc<tokio::sync::Mutex<NoteStore>>,
}

impl NoteService {
    pub const fn new(store: Arc<tokio::sync::Mutex<NoteStore>>) -> Self {
        Self { store }
    }

    pub async fn create_note(
        &self,
        request: CreateNoteRequest,
    ) -> Result<NoteResponse, NoteServiceError> {
        let (Some(title), Some(content)) = (
            request.title.filter(|t| !t.is_empty()),
            request.content.filter(|c| !c.is_empty()),
        ) else {
            tracing::warn!("rejected note creation: title or content missing");
            return Err(NoteServiceError::MissingFields);
        };

        let note = self.store.lock().await.add(title, content);
        tracing::info!("Created note {}", note.id);

        Ok(note.into())
    }

    pub async fn get_all_notes(&self) -> Vec<NoteResponse> {
        let store = self.store.lock().await;
        tracing::debug!("Listing {} notes", store.len());

        store.all().iter().cloned().map(NoteResponse::from).collect()
    }

    pub async fn get_one_note(&self, id: u64) -> Result<NoteResponse, NoteServiceError> {
        tracing::debug!("Fetching note {}", id);

        self.store
            .lock()
            .await
            .get(id)
            .cloned()
            .map(NoteResponse::from)
            .ok_or(NoteServiceError::NotFound)
    }

    /// Omitted fields keep their current value; no other validation happens
    /// on update.
    pub async fn update_note(
        &self,
        id: u64,
        request: UpdateNoteRequest,
    ) -> Result<NoteResponse, NoteServiceError> {
        let mut store = self.store.lock().await;

        let current = store.get(id).ok_or(NoteServiceError::NotFound)?;
        let title = request.title.unwrap_or_else(|| current.title.clone());
        let content = request.content.unwrap_or_else(|| current.content.clone());

        let note = store
            .update(id, title, content)
            .ok_or(NoteServiceError::NotFound)?;
        tracing::info!("Updated note {}", note.id);

        Ok(note.into())
    }

    pub async fn delete_note(&self, id: u64) -> Result<NoteResponse, NoteServiceError> {
        let note = self
            .store
            .lock()
            .await
            .delete(id)
            .ok_or(NoteServiceError::NotFound)?;
        tracing::info!("Deleted note {}", note.id);

        Ok(note.into())
    }

    /// Empties the underlying store. Test support only.
    pub async fn reset(&self) {
        self.store.lock().await.reset();
        tracing::debug!("Note store reset");
    }
}
