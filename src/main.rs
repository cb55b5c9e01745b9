//! AutoFlow - AI-assisted automation builder for the terminal.
//!
//! Walks through describing an automation, picking apps, and configuring a
//! trigger and actions, then asks Gemini for a ready-to-import blueprint.
//! Settings and saved automations live in a JSON store under the user's data
//! directory.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use autoflow::application::App;
use autoflow::infrastructure::{logging::init_logging, AppConfig};
use autoflow::presentation::{render_ui, InputHandler};

/// How long to wait for a key before checking on background jobs.
const TICK: Duration = Duration::from_millis(100);

/// Entry point for the AutoFlow terminal application.
///
/// Reads configuration from the environment, starts file logging, builds the
/// application state, and runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, if terminal setup
/// fails, or if the terminal fails during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();
    let log_path = init_logging(&config.log_dir(), &config.log_filter);
    tracing::info!(
        model = %config.model,
        store = %config.store_path().display(),
        "starting autoflow"
    );

    let mut app = App::from_config(config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal error");
        println!("{err:?}");
    }
    if let Some(path) = log_path {
        tracing::info!("exiting");
        println!("Log written to {}", path.display());
    }

    Ok(())
}

/// Main application event loop.
///
/// Redraws, applies finished generation jobs, and dispatches key presses.
/// Continues running until the app asks to quit.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.poll_jobs();
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    InputHandler::handle_key_event(app, key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
