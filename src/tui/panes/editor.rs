//! Editor pane: title and content of the open note, or of a new one

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::debug;

use crate::models::{Note, NoteDraft};
use crate::tui::{
    app::Focus,
    events::SaveRequest,
    handlers::CommonKeyHandler,
    traits::PaneAction,
    ui::{InputField, Styles, TextArea},
};

/// Editor pane state
pub struct EditorPane {
    pub title_input: InputField,
    pub content_input: TextArea,
    /// A create or update is in flight
    pub saving: bool,
    /// A delete is in flight
    pub deleting: bool,
    /// Waiting for the user to confirm a delete
    pub confirming_delete: bool,
}

impl EditorPane {
    pub fn new() -> Self {
        Self {
            title_input: InputField::new("Title").with_placeholder("Note title..."),
            content_input: TextArea::new("Content").with_placeholder("Write your note here..."),
            saving: false,
            deleting: false,
            confirming_delete: false,
        }
    }

    /// Reset the fields to the given note, or blank them for a new note
    pub fn load(&mut self, note: Option<&Note>) {
        match note {
            Some(note) => {
                self.title_input.set_value(&note.title);
                self.content_input.set_value(&note.content);
            }
            None => {
                self.title_input.clear();
                self.content_input.clear();
            }
        }
        self.confirming_delete = false;
    }

    pub fn draft(&self) -> NoteDraft {
        NoteDraft::new(self.title_input.value.clone(), self.content_input.value.clone())
    }

    pub fn can_save(&self) -> bool {
        !self.saving && !self.draft().is_blank()
    }

    /// Start a save: an update when a note is open, a create otherwise.
    /// Returns `None` when there is nothing to save or a save is in flight.
    pub fn begin_save(&mut self, selected: Option<&Note>) -> Option<SaveRequest> {
        if self.saving {
            debug!("Save ignored: already saving");
            return None;
        }

        let draft = self.draft();
        if draft.is_blank() {
            debug!("Save ignored: title and content are blank");
            return None;
        }

        self.saving = true;
        Some(match selected {
            Some(note) => SaveRequest::Update {
                note_id: note.note_id.clone(),
                draft,
            },
            None => SaveRequest::Create(draft),
        })
    }

    pub fn finish_save(&mut self) {
        self.saving = false;
    }

    /// Ask for confirmation before deleting. Returns true when the
    /// confirmation prompt is now showing.
    pub fn request_delete(&mut self, selected: Option<&Note>) -> bool {
        if selected.is_none() || self.deleting {
            return false;
        }
        self.confirming_delete = true;
        true
    }

    /// Close the confirmation prompt. Returns the id to delete when the user
    /// confirmed.
    pub fn resolve_delete(&mut self, confirmed: bool, selected: Option<&Note>) -> Option<String> {
        if !self.confirming_delete {
            return None;
        }
        self.confirming_delete = false;

        let note = selected.filter(|_| confirmed)?;
        self.deleting = true;
        Some(note.note_id.clone())
    }

    pub fn finish_delete(&mut self) {
        self.deleting = false;
    }

    pub fn new_note(&mut self) {
        self.load(None);
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.title_input.set_focus(focus == Focus::Title);
        self.content_input.set_focus(focus == Focus::Content);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, focus: Focus) -> PaneAction {
        match focus {
            Focus::Title => {
                CommonKeyHandler::handle_input_keys(&mut self.title_input, key);
            }
            Focus::Content => {
                CommonKeyHandler::handle_text_area_keys(&mut self.content_input, key);
            }
            _ => {}
        }
        PaneAction::None
    }

    fn action_bar(&self, selected: Option<&Note>) -> Line<'static> {
        let mut spans = vec![Span::styled("[^N] New Note", Styles::default())];

        if selected.is_some() {
            spans.push(Span::raw("   "));
            if self.deleting {
                spans.push(Span::styled("Deleting...", Styles::error()));
            } else {
                spans.push(Span::styled("[^D] Delete", Styles::error()));
            }
        }

        spans.push(Span::raw("   "));
        if self.saving {
            spans.push(Span::styled("Saving...", Styles::success()));
        } else if self.can_save() {
            spans.push(Span::styled("[^S] Save", Styles::success()));
        } else {
            spans.push(Span::styled("[^S] Save", Styles::disabled()));
        }

        Line::from(spans)
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, selected: Option<&Note>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(area);

        let heading = if selected.is_some() { "Edit Note" } else { "New Note" };
        let created = selected
            .map(|note| format!("Created {}", note.formatted_created_at()))
            .unwrap_or_default();

        let header = Paragraph::new(vec![self.action_bar(selected), Line::from(Span::styled(created, Styles::inactive()))])
            .block(
                Block::default()
                    .title(Span::styled(heading, Styles::title()))
                    .borders(Borders::ALL),
            );
        f.render_widget(header, chunks[0]);

        self.title_input.render(f, chunks[1]);
        self.content_input.render(f, chunks[2]);
    }
}

impl Default for EditorPane {
    fn default() -> Self {
        Self::new()
    }
}
