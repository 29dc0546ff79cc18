use crate::models::Note;

/// In-memory note collection.
///
/// Notes are kept in insertion order. Identifiers start at 1 and are never
/// reused, even after the note holding one is deleted.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    last_id: u64,
}

impl NoteStore {
    pub const fn new() -> Self {
        Self {
            notes: Vec::new(),
            last_id: 0,
        }
    }

    pub fn add(&mut self, title: String, content: String) -> Note {
        self.last_id += 1;

        let note = Note {
            id: self.last_id,
            title,
            content,
        };
        self.notes.push(note.clone());

        note
    }

    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn update(&mut self, id: u64, title: String, content: String) -> Option<Note> {
        let note = self.notes.iter_mut().find(|note| note.id == id)?;
        note.title = title;
        note.content = content;

        Some(note.clone())
    }

    pub fn delete(&mut self, id: u64) -> Option<Note> {
        let index = self.notes.iter().position(|note| note.id == id)?;

        Some(self.notes.remove(index))
    }

    /// Drops every note and rewinds the id counter. Only meant for isolating
    /// tests, nothing routes to it.
    pub fn reset(&mut self) {
        self.notes.clear();
        self.last_id = 0;
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
