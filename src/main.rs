use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use notes_tui::{
    api::{HttpNotesApi, NotesApi},
    cli::{self, Cli, Commands},
    config::Config,
    tui::App,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "notes_tui=info");
    }

    let mut config = Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }
    config.validate()?;

    let command = cli.command.unwrap_or(Commands::Tui);
    let interactive = command.is_tui();
    init_logging(&config, !interactive)?;

    info!("Using notes API at {}", config.api_url);
    let api = Arc::new(HttpNotesApi::new(&config)?);

    if interactive {
        run_tui(config, api).await
    } else {
        let stdout = io::stdout();
        let stdin = io::stdin();
        let result = cli::run_command(command, api.as_ref(), &mut stdout.lock(), &mut stdin.lock()).await;
        if let Err(ref e) = result {
            error!("Command failed: {:#}", e);
        }
        result
    }
}

/// File logging always; stderr too when the terminal is not taken over
fn init_logging(config: &Config, log_to_stderr: bool) -> Result<()> {
    let directory = config
        .log_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let file_name = config
        .log_file
        .file_name()
        .context("log file path has no file name")?;
    let file_appender = tracing_appender::rolling::never(directory, file_name);

    let stderr_layer = log_to_stderr.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_filter(EnvFilter::from_default_env())
    });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .try_init()
        .context("failed to initialise logging")?;

    Ok(())
}

async fn run_tui(config: Config, api: Arc<dyn NotesApi>) -> Result<()> {
    info!("Starting notes TUI...");

    let mut terminal = setup_terminal()?;

    let mut app = App::new(config, api);
    let result = app.run(&mut terminal).await;

    restore_terminal()?;
    terminal.show_cursor()?;

    match result {
        Ok(_) => {
            info!("Notes TUI exited successfully");
            Ok(())
        }
        Err(e) => {
            error!("Notes TUI encountered an error: {}", e);
            Err(e)
        }
    }
}

/// Raw mode plus alternate screen; undone again if any later step fails
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    undo_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        || {
            if let Err(e) = restore_terminal() {
                error!("Failed to restore terminal: {}", e);
            }
        },
    )
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run `step`; call `undo` before handing back its error
fn undo_on_error<T>(step: impl FnOnce() -> Result<T>, undo: impl FnOnce()) -> Result<T> {
    step().map_err(|e| {
        undo();
        e
    })
}
