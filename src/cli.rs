use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use tracing::info;

use crate::api::NotesApi;
use crate::models::{Note, NoteDraft};
use crate::tui::ui::truncate_to_width;

#[derive(Parser, Debug)]
#[command(name = "notes-tui")]
#[command(about = "Terminal client for a remote notes service")]
#[command(version)]
pub struct Cli {
    /// Base URL of the notes API (overrides NOTES_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Launch the interactive interface (the default)
    Tui,

    /// List notes, newest first
    List {
        /// Only notes whose title or content match this term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Print a single note
    Show {
        /// Note identifier
        note_id: String,
    },

    /// Create a note
    Create {
        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short, long, default_value = "")]
        content: String,
    },

    /// Replace a note's title and content
    Update {
        /// Note identifier
        note_id: String,

        /// New title; kept as is when omitted
        #[arg(short, long)]
        title: Option<String>,

        /// New content; kept as is when omitted
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete a note
    Delete {
        /// Note identifier
        note_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl Commands {
    pub fn is_tui(&self) -> bool {
        matches!(self, Commands::Tui)
    }
}

const ID_WIDTH: usize = 24;
const DATE_WIDTH: usize = 14;
const TITLE_WIDTH: usize = 40;

/// Run a non-interactive command, printing to `out`. `input` answers the
/// delete confirmation.
pub async fn run_command(
    command: Commands,
    api: &dyn NotesApi,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> Result<()> {
    match command {
        Commands::Tui => bail!("the interactive interface is not a CLI command"),

        Commands::List { search } => {
            let notes = api.list_notes(search.as_deref()).await?;
            if notes.is_empty() {
                let message = if search.as_deref().is_some_and(|s| !s.is_empty()) {
                    "No notes found"
                } else {
                    "No notes yet"
                };
                writeln!(out, "{}", message)?;
                return Ok(());
            }

            writeln!(out, "{:<ID_WIDTH$} {:<DATE_WIDTH$} {}", "ID", "Created", "Title")?;
            writeln!(out, "{}", "-".repeat(ID_WIDTH + DATE_WIDTH + TITLE_WIDTH + 2))?;
            for note in &notes {
                writeln!(
                    out,
                    "{:<ID_WIDTH$} {:<DATE_WIDTH$} {}",
                    truncate_to_width(&note.note_id, ID_WIDTH),
                    note.formatted_created_at(),
                    truncate_to_width(note.display_title(), TITLE_WIDTH)
                )?;
            }
            writeln!(out)?;
            writeln!(out, "Total: {} notes", notes.len())?;
        }

        Commands::Show { note_id } => {
            let note = api.get_note(&note_id).await?;
            print_note(out, &note)?;
        }

        Commands::Create { title, content } => {
            let draft = NoteDraft::new(title, content);
            if draft.is_blank() {
                bail!("a note needs a title or some content");
            }
            let note = api.create_note(&draft).await?;
            info!("Created note {}", note.note_id);
            writeln!(out, "Created note {}", note.note_id)?;
        }

        Commands::Update { note_id, title, content } => {
            let current = api
                .get_note(&note_id)
                .await
                .with_context(|| format!("could not load note {}", note_id))?;
            let draft = NoteDraft::new(
                title.unwrap_or(current.title),
                content.unwrap_or(current.content),
            );
            if draft.is_blank() {
                bail!("a note needs a title or some content");
            }
            let note = api.update_note(&note_id, &draft).await?;
            info!("Updated note {}", note.note_id);
            writeln!(out, "Updated note {}", note.note_id)?;
        }

        Commands::Delete { note_id, yes } => {
            if !yes {
                write!(out, "Are you sure you want to delete note {}? [y/N] ", note_id)?;
                out.flush()?;
                let mut answer = String::new();
                input.read_line(&mut answer).context("failed to read confirmation")?;
                if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                    writeln!(out, "Cancelled")?;
                    return Ok(());
                }
            }
            let ack = api.delete_note(&note_id).await?;
            info!("Deleted note {}", note_id);
            writeln!(
                out,
                "{}",
                ack.message.unwrap_or_else(|| format!("Deleted note {}", note_id))
            )?;
        }
    }

    Ok(())
}

fn print_note(out: &mut impl Write, note: &Note) -> Result<()> {
    writeln!(out, "{}", note.display_title())?;
    writeln!(out, "ID: {}", note.note_id)?;
    writeln!(out, "Created: {}", note.formatted_created_at())?;
    if let Some(ref updated_at) = note.updated_at {
        writeln!(out, "Updated: {}", updated_at)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", note.content)?;
    Ok(())
}
