//! Requests issued by the panes and the completions that come back from the
//! background tasks running them

use crate::api::ApiResult;
use crate::models::{DeleteAck, Note, NoteDraft};

/// A list fetch, tagged so stale responses can be recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub search: Option<String>,
}

/// What a save turns into on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Create(NoteDraft),
    Update { note_id: String, draft: NoteDraft },
}

/// Completions delivered back to the event loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A list fetch finished
    NotesLoaded { seq: u64, result: ApiResult<Vec<Note>> },
    /// A create or update finished
    NoteSaved(ApiResult<Note>),
    /// A delete finished
    NoteDeleted { note_id: String, result: ApiResult<DeleteAck> },
}
