//! Modal popups drawn over the panes

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::ui::{centered_rect, Styles};

/// Blocking error message; stays up until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub detail: Option<String>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(50, 30, area);
        f.render_widget(Clear, popup_area);

        let mut lines = vec![Line::from(Span::styled(self.message.clone(), Styles::error()))];
        if let Some(ref detail) = self.detail {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(detail.clone(), Styles::inactive())));
        }
        lines.push(Line::from(""));
        lines.push(Line::from("Press Enter to continue"));

        let popup = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Error")
                    .borders(Borders::ALL)
                    .border_style(Styles::error()),
            );
        f.render_widget(popup, popup_area);
    }
}

/// Yes/no prompt shown before a note is deleted
pub fn render_delete_confirmation(f: &mut Frame, area: Rect, note_title: &str) {
    let popup_area = centered_rect(50, 25, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Are you sure you want to delete this note?"),
        Line::from(Span::styled(note_title.to_string(), Styles::title())),
        Line::from(""),
        Line::from("y: delete    n / Esc: keep"),
    ];

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Delete Note")
                .borders(Borders::ALL)
                .border_style(Styles::active_border()),
        );
    f.render_widget(popup, popup_area);
}

/// Help popup with the key bindings
pub fn render_help(f: &mut Frame, area: Rect, help_text: &str) {
    let popup_area = centered_rect(70, 70, area);
    f.render_widget(Clear, popup_area);

    let help_popup = Paragraph::new(help_text.to_string())
        .block(
            Block::default()
                .title("Help - Shortcuts")
                .borders(Borders::ALL)
                .style(Styles::title()),
        )
        .style(Styles::default());

    f.render_widget(help_popup, popup_area);
}
