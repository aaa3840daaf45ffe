//! Notes list pane: search box plus the notes fetched from the server

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::{debug, warn};

use crate::api::{ApiError, ApiResult};
use crate::models::Note;
use crate::tui::{
    app::Focus,
    events::FetchRequest,
    handlers::CommonKeyHandler,
    traits::{Navigable, PaneAction},
    ui::{truncate_to_width, InputField, Styles},
};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const NO_MATCHES_MESSAGE: &str = "No notes found";
pub const NO_NOTES_MESSAGE: &str = "No notes yet";

/// What the list area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDisplay {
    Loading,
    Empty(&'static str),
    Notes,
}

/// Result of applying a fetch response
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The list now holds this many notes
    Applied(usize),
    /// The fetch failed; the previous list is still shown
    Failed(ApiError),
    /// A newer fetch was issued after this one; the response was dropped
    Stale,
}

/// Notes list pane state
pub struct NotesListPane {
    pub notes: Vec<Note>,
    pub list_state: ListState,
    pub search_input: InputField,
    pub loading: bool,
    pub list_focused: bool,
    latest_seq: u64,
}

impl NotesListPane {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            list_state: ListState::default(),
            search_input: InputField::new("Search").with_placeholder("Search notes..."),
            loading: true,
            list_focused: false,
            latest_seq: 0,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_input.value
    }

    pub fn has_search(&self) -> bool {
        !self.search_input.is_empty()
    }

    /// Issue a fetch for the current search term. Any fetch still in flight
    /// becomes stale.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.latest_seq += 1;
        self.loading = true;
        let search = self.has_search().then(|| self.search_term().to_string());
        debug!("Fetch #{} issued (search: {:?})", self.latest_seq, search);
        FetchRequest {
            seq: self.latest_seq,
            search,
        }
    }

    /// Drop the cached notes and fetch them again
    pub fn invalidate(&mut self) -> FetchRequest {
        self.notes.clear();
        self.begin_fetch()
    }

    /// Apply a fetch response. Only the most recently issued fetch may change
    /// what is displayed.
    pub fn apply_fetch(&mut self, seq: u64, result: ApiResult<Vec<Note>>) -> FetchOutcome {
        if seq != self.latest_seq {
            debug!("Dropping stale fetch #{} (latest is #{})", seq, self.latest_seq);
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(notes) => {
                self.notes = notes;
                self.clamp_selection();
                FetchOutcome::Applied(self.notes.len())
            }
            Err(err) => {
                warn!("Error fetching notes: {}", err);
                FetchOutcome::Failed(err)
            }
        }
    }

    fn clamp_selection(&mut self) {
        let selected = match (self.list_state.selected(), self.notes.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.list_state.select(selected);
    }

    pub fn empty_message(&self) -> &'static str {
        if self.has_search() {
            NO_MATCHES_MESSAGE
        } else {
            NO_NOTES_MESSAGE
        }
    }

    pub fn display(&self) -> ListDisplay {
        if self.loading {
            ListDisplay::Loading
        } else if self.notes.is_empty() {
            ListDisplay::Empty(self.empty_message())
        } else {
            ListDisplay::Notes
        }
    }

    /// Note under the list cursor
    pub fn highlighted_note(&self) -> Option<&Note> {
        self.list_state.selected().and_then(|i| self.notes.get(i))
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.search_input.set_focus(focus == Focus::Search);
        self.list_focused = focus == Focus::List;
    }

    /// Handle key events for the search box or the list
    pub fn handle_key_event(&mut self, key: KeyEvent, focus: Focus) -> PaneAction {
        match focus {
            Focus::Search => match CommonKeyHandler::handle_input_keys(&mut self.search_input, key) {
                Some(true) => PaneAction::FetchNotes(self.begin_fetch()),
                _ => PaneAction::None,
            },
            Focus::List => {
                if let Some(action) = CommonKeyHandler::handle_navigation_keys(self, key) {
                    return action;
                }
                match key.code {
                    KeyCode::Enter => match self.highlighted_note() {
                        Some(note) => PaneAction::SelectNote(note.clone()),
                        None => PaneAction::SetStatus("No note selected".to_string()),
                    },
                    KeyCode::Char('r') => PaneAction::FetchNotes(self.begin_fetch()),
                    _ => PaneAction::None,
                }
            }
            _ => PaneAction::None,
        }
    }

    /// Render the pane. `open_note_id` marks the note loaded in the editor.
    pub fn draw(&mut self, f: &mut Frame, area: Rect, open_note_id: Option<&str>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.search_input.render(f, chunks[0]);

        let border_style = if self.list_focused {
            Styles::active_border()
        } else {
            Styles::inactive_border()
        };
        let block = Block::default()
            .title(format!("Notes ({})", self.notes.len()))
            .borders(Borders::ALL)
            .border_style(border_style);

        match self.display() {
            ListDisplay::Loading => {
                let loading = Paragraph::new(LOADING_MESSAGE)
                    .style(Styles::inactive())
                    .block(block);
                f.render_widget(loading, chunks[1]);
            }
            ListDisplay::Empty(message) => {
                let empty = Paragraph::new(message)
                    .style(Styles::inactive())
                    .alignment(ratatui::layout::Alignment::Center)
                    .block(block);
                f.render_widget(empty, chunks[1]);
            }
            ListDisplay::Notes => {
                let title_width = chunks[1].width.saturating_sub(6) as usize;
                let items: Vec<ListItem> = self
                    .notes
                    .iter()
                    .map(|note| {
                        let is_open = open_note_id == Some(note.note_id.as_str());
                        let (marker, title_style) = if is_open {
                            ("▌ ", Styles::open_note())
                        } else {
                            ("  ", Styles::default())
                        };
                        ListItem::new(vec![
                            Line::from(vec![
                                Span::styled(marker, title_style),
                                Span::styled(truncate_to_width(note.display_title(), title_width), title_style),
                            ]),
                            Line::from(Span::styled(
                                format!("  {}", note.formatted_created_at()),
                                Styles::inactive(),
                            )),
                        ])
                    })
                    .collect();

                let highlight = if self.list_focused {
                    Styles::selected()
                } else {
                    Styles::default()
                };
                let list = List::new(items).block(block).highlight_style(highlight);
                f.render_stateful_widget(list, chunks[1], &mut self.list_state);
            }
        }
    }
}

impl Default for NotesListPane {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigable for NotesListPane {
    fn navigate_up(&mut self) {
        if self.notes.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.notes.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn navigate_down(&mut self) {
        if self.notes.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.notes.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn get_selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn set_selected_index(&mut self, index: Option<usize>) {
        self.list_state.select(index);
    }

    fn get_item_count(&self) -> usize {
        self.notes.len()
    }
}
