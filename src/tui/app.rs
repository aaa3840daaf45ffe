//! Main TUI application state and logic
//!
//! `App` is the coordinator between the notes list and the editor. It owns
//! the selected note and the refresh generation, turns pane actions into
//! background requests, and applies their completions.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use super::components::popup::{render_delete_confirmation, render_help, Notification};
use super::events::{AppEvent, FetchRequest, SaveRequest};
use super::handlers::{CommonKeyHandler, GlobalAction};
use super::panes::{EditorPane, FetchOutcome, NotesListPane};
use super::traits::PaneAction;
use super::ui::Styles;
use crate::api::NotesApi;
use crate::config::Config;
use crate::models::Note;

/// How long the loop waits for a key before checking for completions
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which input has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    List,
    Title,
    Content,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Search, Focus::List, Focus::Title, Focus::Content];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Focus::Search => "Search",
            Focus::List => "Notes",
            Focus::Title => "Title",
            Focus::Content => "Content",
        }
    }
}

/// Main TUI application state
pub struct App {
    /// Application configuration
    pub config: Config,
    api: Arc<dyn NotesApi>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,

    /// Note loaded in the editor, if any
    pub selected_note: Option<Note>,
    /// Bumped once per successful create, update or delete
    pub refresh_generation: u64,

    pub focus: Focus,
    pub notes_list: NotesListPane,
    pub editor: EditorPane,

    // Global application state
    pub should_quit: bool,
    pub show_help_popup: bool,
    pub notification: Option<Notification>,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
}

impl App {
    /// Create a new TUI application
    pub fn new(config: Config, api: Arc<dyn NotesApi>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            config,
            api,
            events_tx,
            events_rx,

            selected_note: None,
            refresh_generation: 0,

            focus: Focus::List,
            notes_list: NotesListPane::new(),
            editor: EditorPane::new(),

            should_quit: false,
            show_help_popup: false,
            notification: None,
            status_message: None,
            error_message: None,
        };
        app.set_focus(Focus::List);
        app
    }

    /// Issue the initial list fetch
    pub fn start(&mut self) {
        info!("Loading notes from {}", self.config.api_url);
        let request = self.notes_list.begin_fetch();
        self.spawn_fetch(request);
    }

    /// Run the main application loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.start();

        loop {
            self.drain_events();

            terminal.draw(|f| self.draw(f))?;

            if event::poll(INPUT_POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    // Coordinator operations

    /// A row of the list was chosen
    pub fn select_note(&mut self, note: Note) {
        if self.selected_note.as_ref() != Some(&note) {
            self.editor.load(Some(&note));
        }
        self.selected_note = Some(note);
    }

    /// A save succeeded; the server's copy becomes the selection
    pub fn note_saved(&mut self, saved: Option<Note>) {
        if let Some(note) = saved {
            self.editor.load(Some(&note));
            self.selected_note = Some(note);
        }
        self.refresh_list();
    }

    /// A delete succeeded
    pub fn note_deleted(&mut self) {
        self.selected_note = None;
        self.editor.load(None);
        self.refresh_list();
    }

    /// The user asked for a blank note; the list is unaffected
    pub fn new_note_requested(&mut self) {
        self.selected_note = None;
    }

    fn refresh_list(&mut self) {
        self.refresh_generation += 1;
        debug!("Refreshing notes list (generation {})", self.refresh_generation);
        let request = self.notes_list.invalidate();
        self.spawn_fetch(request);
    }

    // Editor actions

    fn save(&mut self) {
        let Some(request) = self.editor.begin_save(self.selected_note.as_ref()) else {
            return;
        };
        self.set_status("Saving...".to_string());
        self.spawn_save(request);
    }

    fn delete(&mut self) {
        if !self.editor.request_delete(self.selected_note.as_ref()) {
            debug!("Delete ignored: no note open or delete in flight");
        }
    }

    fn resolve_delete(&mut self, confirmed: bool) {
        match self.editor.resolve_delete(confirmed, self.selected_note.as_ref()) {
            Some(note_id) => {
                self.set_status("Deleting...".to_string());
                self.spawn_delete(note_id);
            }
            None => self.set_status("Delete cancelled".to_string()),
        }
    }

    fn new_note(&mut self) {
        self.editor.new_note();
        self.new_note_requested();
        self.set_focus(Focus::Title);
    }

    // Background requests

    fn spawn_fetch(&self, request: FetchRequest) {
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.list_notes(request.search.as_deref()).await;
            let _ = tx.send(AppEvent::NotesLoaded {
                seq: request.seq,
                result,
            });
        });
    }

    fn spawn_save(&self, request: SaveRequest) {
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = match request {
                SaveRequest::Create(draft) => api.create_note(&draft).await,
                SaveRequest::Update { note_id, draft } => api.update_note(&note_id, &draft).await,
            };
            let _ = tx.send(AppEvent::NoteSaved(result));
        });
    }

    fn spawn_delete(&self, note_id: String) {
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.delete_note(&note_id).await;
            let _ = tx.send(AppEvent::NoteDeleted { note_id, result });
        });
    }

    /// Apply every completion that has already arrived
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_app_event(event);
        }
    }

    /// Wait for the next completion and apply it
    pub async fn process_next_event(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => {
                self.handle_app_event(event);
                true
            }
            None => false,
        }
    }

    /// Apply a completion from a background request
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::NotesLoaded { seq, result } => match self.notes_list.apply_fetch(seq, result) {
                FetchOutcome::Applied(count) => debug!("Loaded {} notes", count),
                FetchOutcome::Failed(err) => self.set_error(format!("Could not load notes: {}", err)),
                FetchOutcome::Stale => {}
            },
            AppEvent::NoteSaved(result) => {
                self.editor.finish_save();
                match result {
                    Ok(note) => {
                        info!("Saved note {}", note.note_id);
                        self.set_status(format!("Saved \"{}\"", note.display_title()));
                        self.note_saved(Some(note));
                    }
                    Err(err) => {
                        error!("Error saving note: {}", err);
                        self.clear_messages();
                        self.notification = Some(Notification::new("Failed to save note").with_detail(err.to_string()));
                    }
                }
            }
            AppEvent::NoteDeleted { note_id, result } => {
                self.editor.finish_delete();
                match result {
                    Ok(_) => {
                        info!("Deleted note {}", note_id);
                        self.set_status("Note deleted".to_string());
                        self.note_deleted();
                    }
                    Err(err) => {
                        error!("Error deleting note {}: {}", note_id, err);
                        self.clear_messages();
                        self.notification =
                            Some(Notification::new("Failed to delete note").with_detail(err.to_string()));
                    }
                }
            }
        }
    }

    /// Handle keyboard input events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Modal popups swallow everything until dismissed
        if self.notification.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notification = None;
            }
            return;
        }

        if self.editor.confirming_delete {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.resolve_delete(true),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.resolve_delete(false),
                _ => {}
            }
            return;
        }

        if self.show_help_popup {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                self.show_help_popup = false;
            }
            return;
        }

        if let Some(action) = CommonKeyHandler::handle_global_keys(key) {
            match action {
                GlobalAction::Quit => self.should_quit = true,
                GlobalAction::Save => self.save(),
                GlobalAction::NewNote => self.new_note(),
                GlobalAction::Delete => self.delete(),
                GlobalAction::ToggleHelp => self.show_help_popup = true,
                GlobalAction::FocusNext => self.set_focus(self.focus.next()),
                GlobalAction::FocusPrevious => self.set_focus(self.focus.previous()),
            }
            return;
        }

        let action = match self.focus {
            Focus::Search | Focus::List => self.notes_list.handle_key_event(key, self.focus),
            Focus::Title | Focus::Content => self.editor.handle_key_event(key, self.focus),
        };
        self.apply_action(action);
    }

    fn apply_action(&mut self, action: PaneAction) {
        match action {
            PaneAction::SelectNote(note) => self.select_note(note),
            PaneAction::FetchNotes(request) => self.spawn_fetch(request),
            PaneAction::Save => self.save(),
            PaneAction::Delete => self.delete(),
            PaneAction::NewNote => self.new_note(),
            PaneAction::SetStatus(message) => self.set_status(message),
            PaneAction::None => {}
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.notes_list.set_focus(focus);
        self.editor.set_focus(focus);
    }

    /// Draw the UI
    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.size();

        // Main layout: status bar at bottom, panes above
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(chunks[0]);

        let open_note_id = self.selected_note.as_ref().map(|note| note.note_id.as_str());
        self.notes_list.draw(f, panes[0], open_note_id);
        self.editor.draw(f, panes[1], self.selected_note.as_ref());

        self.draw_status_bar(f, chunks[1]);

        if self.editor.confirming_delete {
            let title = self
                .selected_note
                .as_ref()
                .map(|note| note.display_title())
                .unwrap_or_default();
            render_delete_confirmation(f, size, title);
        }
        if let Some(ref notification) = self.notification {
            notification.render(f, size);
        }
        if self.show_help_popup {
            render_help(f, size, HELP_TEXT);
        }
    }

    /// Draw status bar with focus info and shortcuts
    fn draw_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if let Some(ref msg) = self.status_message {
            format!("Status: {}", msg)
        } else if let Some(ref err) = self.error_message {
            format!("Error: {}", err)
        } else {
            format!(
                "Notes - {} | Tab: Focus | ^S: Save | ^N: New | ^D: Delete | ^Q: Quit | F1: Help",
                self.focus.as_str()
            )
        };

        let style = if self.error_message.is_some() {
            Styles::error()
        } else if self.status_message.is_some() {
            Styles::success()
        } else {
            Styles::inactive()
        };

        let status_bar = Paragraph::new(status_text)
            .style(style)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(status_bar, area);
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.status_message = None;
    }

    /// Clear status and error messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }
}

const HELP_TEXT: &str = "Global Shortcuts:\n\
    Tab / Shift+Tab - Move focus (search, notes, title, content)\n\
    Ctrl+S - Save note\n\
    Ctrl+N - New note\n\
    Ctrl+D - Delete open note\n\
    Ctrl+Q / Ctrl+C - Quit\n\
    F1 - Toggle this help\n\n\
    Notes List:\n\
    ↑/↓ - Move cursor\n\
    Home/End - First/last note\n\
    Enter - Open note\n\
    r - Reload notes\n\n\
    Search / Title / Content:\n\
    Type to edit, ←/→ to move the cursor\n\
    Enter - New line (content only)";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{note, ApiCall, MockNotesApi};
    use crate::api::ApiOperation;
    use crate::models::NoteDraft;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    /// App that has finished its initial fetch
    async fn started_app(api: Arc<MockNotesApi>) -> App {
        let mut app = App::new(Config::default(), api);
        app.start();
        assert!(app.process_next_event().await);
        app
    }

    #[tokio::test]
    async fn test_initial_fetch_is_unfiltered() {
        let api = Arc::new(MockNotesApi::with_notes(vec![note("n1", "Groceries", "Milk, eggs")]));
        let app = started_app(api.clone()).await;

        assert_eq!(api.calls(), vec![ApiCall::List(None)]);
        assert_eq!(app.notes_list.notes.len(), 1);
        assert!(!app.notes_list.loading);
    }

    #[tokio::test]
    async fn test_create_note_scenario() {
        let api = Arc::new(MockNotesApi::new());
        let mut app = started_app(api.clone()).await;

        app.handle_key_event(ctrl('n'));
        assert_eq!(app.focus, Focus::Title);
        type_text(&mut app, "Groceries");
        app.handle_key_event(key(KeyCode::Tab));
        type_text(&mut app, "Milk, eggs");
        app.handle_key_event(ctrl('s'));
        assert!(app.editor.saving);

        app.process_next_event().await; // save completes
        assert_eq!(app.refresh_generation, 1);
        app.process_next_event().await; // refresh completes

        assert_eq!(
            api.mutation_calls(),
            vec![ApiCall::Create(NoteDraft::new("Groceries", "Milk, eggs"))]
        );
        let selected = app.selected_note.clone().unwrap();
        assert_eq!(selected.note_id, "n1");
        assert_eq!(selected.title, "Groceries");
        assert_eq!(api.list_calls(), 2);
        assert_eq!(app.notes_list.notes, vec![selected]);
        assert!(!app.editor.saving);
    }

    #[tokio::test]
    async fn test_update_note_scenario() {
        let api = Arc::new(MockNotesApi::with_notes(vec![note("n1", "Groceries", "Milk, eggs")]));
        let mut app = started_app(api.clone()).await;

        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.selected_note.as_ref().map(|n| n.note_id.as_str()), Some("n1"));
        assert_eq!(app.refresh_generation, 0);

        app.set_focus(Focus::Title);
        type_text(&mut app, " v2");
        app.handle_key_event(ctrl('s'));
        app.process_next_event().await;
        app.process_next_event().await;

        assert_eq!(
            api.mutation_calls(),
            vec![ApiCall::Update(
                "n1".to_string(),
                NoteDraft::new("Groceries v2", "Milk, eggs")
            )]
        );
        let selected = app.selected_note.clone().unwrap();
        assert_eq!(selected.title, "Groceries v2");
        assert_eq!(selected.updated_at.as_deref(), Some("2024-01-02T00:00:00Z"));
        assert_eq!(app.refresh_generation, 1);
    }

    #[tokio::test]
    async fn test_editor_shows_server_copy_after_save() {
        let api = Arc::new(MockNotesApi::new());
        let mut app = started_app(api).await;

        app.set_focus(Focus::Title);
        type_text(&mut app, "typed");
        app.handle_key_event(ctrl('s'));

        // the server normalises what it stores
        app.handle_app_event(AppEvent::NoteSaved(Ok(note("n9", "Normalised", "body"))));

        assert_eq!(app.editor.draft(), NoteDraft::new("Normalised", "body"));
        assert_eq!(app.selected_note.as_ref().unwrap().note_id, "n9");
    }

    #[tokio::test]
    async fn test_blank_save_makes_no_request() {
        let api = Arc::new(MockNotesApi::new());
        let mut app = started_app(api.clone()).await;

        app.set_focus(Focus::Title);
        type_text(&mut app, "   ");
        app.handle_key_event(ctrl('s'));

        assert!(!app.editor.saving);
        assert_eq!(api.calls(), vec![ApiCall::List(None)]);
        assert_eq!(app.refresh_generation, 0);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_fields_and_selection() {
        let api = Arc::new(MockNotesApi::with_notes(vec![note("n1", "Groceries", "Milk, eggs")]));
        let mut app = started_app(api.clone()).await;
        app.handle_key_event(key(KeyCode::Enter));
        api.fail(ApiOperation::UpdateNote);

        app.set_focus(Focus::Content);
        type_text(&mut app, ", bread");
        app.handle_key_event(ctrl('s'));
        app.process_next_event().await;

        let notification = app.notification.clone().unwrap();
        assert_eq!(notification.message, "Failed to save note");
        assert_eq!(app.editor.draft(), NoteDraft::new("Groceries", "Milk, eggs, bread"));
        assert_eq!(app.selected_note.as_ref().unwrap().content, "Milk, eggs");
        assert_eq!(app.refresh_generation, 0);
        assert_eq!(api.list_calls(), 1);
        assert!(!app.editor.saving);

        // the notification blocks other input until dismissed
        app.handle_key_event(key(KeyCode::Char('x')));
        assert_eq!(app.editor.content_input.value, "Milk, eggs, bread");
        app.handle_key_event(key(KeyCode::Enter));
        assert!(app.notification.is_none());
    }

    #[tokio::test]
    async fn test_delete_declined_sends_nothing() {
        let api = Arc::new(MockNotesApi::with_notes(vec![note("n1", "Groceries", "Milk, eggs")]));
        let mut app = started_app(api.clone()).await;
        app.handle_key_event(key(KeyCode::Enter));

        app.handle_key_event(ctrl('d'));
        assert!(app.editor.confirming_delete);
        app.handle_key_event(key(KeyCode::Char('n')));

        assert!(!app.editor.confirming_delete);
        assert!(api.mutation_calls().is_empty());
        assert_eq!(app.selected_note.as_ref().unwrap().note_id, "n1");
        assert_eq!(app.refresh_generation, 0);
    }

    #[tokio::test]
    async fn test_delete_confirmed_clears_selection_and_refreshes() {
        let api = Arc::new(MockNotesApi::with_notes(vec![note("n1", "Groceries", "Milk, eggs")]));
        let mut app = started_app(api.clone()).await;
        app.handle_key_event(key(KeyCode::Enter));

        app.handle_key_event(ctrl('d'));
        app.handle_key_event(key(KeyCode::Char('y')));
        assert!(app.editor.deleting);

        app.process_next_event().await; // delete completes
        app.process_next_event().await; // refresh completes

        assert_eq!(api.mutation_calls(), vec![ApiCall::Delete("n1".to_string())]);
        assert!(app.selected_note.is_none());
        assert_eq!(app.editor.draft(), NoteDraft::new("", ""));
        assert_eq!(app.refresh_generation, 1);
        assert_eq!(api.list_calls(), 2);
        assert!(app.notes_list.notes.is_empty());
        assert!(!app.editor.deleting);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_selection() {
        let api = Arc::new(MockNotesApi::with_notes(vec![note("n1", "Groceries", "Milk, eggs")]));
        let mut app = started_app(api.clone()).await;
        app.handle_key_event(key(KeyCode::Enter));
        api.fail(ApiOperation::DeleteNote);

        app.handle_key_event(ctrl('d'));
        app.handle_key_event(key(KeyCode::Char('y')));
        app.process_next_event().await;

        assert_eq!(app.notification.as_ref().unwrap().message, "Failed to delete note");
        assert_eq!(app.selected_note.as_ref().unwrap().note_id, "n1");
        assert_eq!(app.refresh_generation, 0);
        assert_eq!(api.stored_notes().len(), 1);

        // dismiss and retry once the backend is healthy again
        app.handle_key_event(key(KeyCode::Esc));
        api.recover(ApiOperation::DeleteNote);
        app.handle_key_event(ctrl('d'));
        app.handle_key_event(key(KeyCode::Enter));
        app.process_next_event().await;

        assert!(app.notification.is_none());
        assert!(app.selected_note.is_none());
        assert!(api.stored_notes().is_empty());
        assert_eq!(app.refresh_generation, 1);
    }

    #[tokio::test]
    async fn test_delete_without_selection_is_noop() {
        let api = Arc::new(MockNotesApi::new());
        let mut app = started_app(api.clone()).await;

        app.handle_key_event(ctrl('d'));

        assert!(!app.editor.confirming_delete);
        assert!(api.mutation_calls().is_empty());
    }

    #[tokio::test]
    async fn test_selection_and_new_note_do_not_refresh() {
        let api = Arc::new(MockNotesApi::with_notes(vec![
            note("n1", "One", "first"),
            note("n2", "Two", "second"),
        ]));
        let mut app = started_app(api.clone()).await;

        app.handle_key_event(key(KeyCode::Enter));
        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.selected_note.as_ref().unwrap().note_id, "n2");
        assert_eq!(app.editor.draft(), NoteDraft::new("Two", "second"));

        app.handle_key_event(ctrl('n'));
        assert!(app.selected_note.is_none());
        assert_eq!(app.editor.draft(), NoteDraft::new("", ""));

        assert_eq!(app.refresh_generation, 0);
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_reselecting_open_note_keeps_edits() {
        let api = Arc::new(MockNotesApi::with_notes(vec![note("n1", "One", "first")]));
        let mut app = started_app(api).await;
        app.handle_key_event(key(KeyCode::Enter));

        app.set_focus(Focus::Title);
        type_text(&mut app, "!");
        app.set_focus(Focus::List);
        app.handle_key_event(key(KeyCode::Enter));

        assert_eq!(app.editor.title_input.value, "One!");
    }

    #[tokio::test]
    async fn test_search_refetches_with_term() {
        let api = Arc::new(MockNotesApi::with_notes(vec![
            note("n1", "Groceries", "Milk"),
            note("n2", "Work", "Standup"),
        ]));
        let mut app = started_app(api.clone()).await;

        app.set_focus(Focus::Search);
        type_text(&mut app, "mi");
        app.process_next_event().await;
        app.process_next_event().await;

        assert_eq!(
            api.calls(),
            vec![
                ApiCall::List(None),
                ApiCall::List(Some("m".to_string())),
                ApiCall::List(Some("mi".to_string())),
            ]
        );
        assert_eq!(app.notes_list.notes.len(), 1);
        assert_eq!(app.notes_list.notes[0].note_id, "n1");
        assert_eq!(app.refresh_generation, 0);
    }

    #[tokio::test]
    async fn test_list_failure_is_not_blocking() {
        let api = Arc::new(MockNotesApi::with_notes(vec![note("n1", "One", "")]));
        let mut app = started_app(api.clone()).await;
        api.fail(ApiOperation::ListNotes);

        app.handle_key_event(key(KeyCode::Char('r')));
        app.process_next_event().await;

        assert!(app.notification.is_none());
        assert!(app.error_message.is_some());
        assert_eq!(app.notes_list.notes.len(), 1);
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::Search.next(), Focus::List);
        assert_eq!(Focus::Content.next(), Focus::Search);
        assert_eq!(Focus::Search.previous(), Focus::Content);
    }

    #[tokio::test]
    async fn test_quit_shortcut() {
        let mut app = App::new(Config::default(), Arc::new(MockNotesApi::new()));
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        app.handle_key_event(ctrl('q'));
        assert!(app.should_quit);
    }
}
