//! In-memory `NotesApi` used by tests

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use super::{ApiError, ApiOperation, ApiResult, NotesApi};
use crate::models::{DeleteAck, Note, NoteDraft};

/// A request the mock received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List(Option<String>),
    Create(NoteDraft),
    Get(String),
    Update(String, NoteDraft),
    Delete(String),
}

#[derive(Default)]
struct MockState {
    notes: Vec<Note>,
    calls: Vec<ApiCall>,
    failing: HashSet<ApiOperation>,
    next_id: u32,
}

/// Behaves like the notes backend over an in-memory store, recording calls
#[derive(Default)]
pub struct MockNotesApi {
    state: Mutex<MockState>,
}

pub fn note(id: &str, title: &str, content: &str) -> Note {
    Note {
        note_id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        updated_at: None,
        user_id: None,
    }
}

impl MockNotesApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        let api = Self::default();
        api.state.lock().unwrap().notes = notes;
        api
    }

    /// Make every request of this kind fail until `recover` is called
    pub fn fail(&self, operation: ApiOperation) {
        self.state.lock().unwrap().failing.insert(operation);
    }

    pub fn recover(&self, operation: ApiOperation) {
        self.state.lock().unwrap().failing.remove(&operation);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, ApiCall::List(_)))
            .count()
    }

    /// Calls other than list fetches
    pub fn mutation_calls(&self) -> Vec<ApiCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, ApiCall::List(_) | ApiCall::Get(_)))
            .collect()
    }

    pub fn stored_notes(&self) -> Vec<Note> {
        self.state.lock().unwrap().notes.clone()
    }

    fn record(&self, call: ApiCall, operation: ApiOperation) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.failing.contains(&operation) {
            return Err(ApiError::request_failed(operation, "server responded with 500 Internal Server Error"));
        }
        Ok(())
    }

    fn not_found(operation: ApiOperation) -> ApiError {
        ApiError::request_failed(operation, "server responded with 404 Not Found")
    }
}

#[async_trait]
impl NotesApi for MockNotesApi {
    async fn list_notes(&self, search: Option<&str>) -> ApiResult<Vec<Note>> {
        self.record(ApiCall::List(search.map(str::to_string)), ApiOperation::ListNotes)?;
        let state = self.state.lock().unwrap();
        let notes = match search.filter(|term| !term.is_empty()) {
            Some(term) => {
                let term = term.to_lowercase();
                state
                    .notes
                    .iter()
                    .filter(|n| n.title.to_lowercase().contains(&term) || n.content.to_lowercase().contains(&term))
                    .cloned()
                    .collect()
            }
            None => state.notes.clone(),
        };
        Ok(notes)
    }

    async fn create_note(&self, draft: &NoteDraft) -> ApiResult<Note> {
        self.record(ApiCall::Create(draft.clone()), ApiOperation::CreateNote)?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let created = note(&format!("n{}", state.next_id), &draft.title, &draft.content);
        state.notes.insert(0, created.clone());
        Ok(created)
    }

    async fn get_note(&self, note_id: &str) -> ApiResult<Note> {
        self.record(ApiCall::Get(note_id.to_string()), ApiOperation::GetNote)?;
        let state = self.state.lock().unwrap();
        state
            .notes
            .iter()
            .find(|n| n.note_id == note_id)
            .cloned()
            .ok_or_else(|| Self::not_found(ApiOperation::GetNote))
    }

    async fn update_note(&self, note_id: &str, draft: &NoteDraft) -> ApiResult<Note> {
        self.record(ApiCall::Update(note_id.to_string(), draft.clone()), ApiOperation::UpdateNote)?;
        let mut state = self.state.lock().unwrap();
        let stored = state
            .notes
            .iter_mut()
            .find(|n| n.note_id == note_id)
            .ok_or_else(|| Self::not_found(ApiOperation::UpdateNote))?;
        stored.title = draft.title.clone();
        stored.content = draft.content.clone();
        stored.updated_at = Some("2024-01-02T00:00:00Z".to_string());
        Ok(stored.clone())
    }

    async fn delete_note(&self, note_id: &str) -> ApiResult<DeleteAck> {
        self.record(ApiCall::Delete(note_id.to_string()), ApiOperation::DeleteNote)?;
        let mut state = self.state.lock().unwrap();
        let before = state.notes.len();
        state.notes.retain(|n| n.note_id != note_id);
        if state.notes.len() == before {
            return Err(Self::not_found(ApiOperation::DeleteNote));
        }
        Ok(DeleteAck {
            message: Some("Note deleted successfully".to_string()),
        })
    }
}
