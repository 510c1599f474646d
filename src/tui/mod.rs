//! Terminal User Interface (TUI) for twenty.
//!
//! Full-screen countdown with keyboard control. Built with ratatui and
//! crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Settings;
use crate::error::TwentyError;

/// How long one countdown step takes.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How long to wait for input between redraws.
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the configured periods are invalid or the
/// terminal cannot be initialized.
pub fn run(settings: &Settings) -> Result<(), TwentyError> {
    // Validate before touching the terminal so errors print normally.
    let mut app = App::new(settings)?;

    enable_raw_mode().map_err(|e| TwentyError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TwentyError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TwentyError::Config(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), TwentyError> {
    let mut last_tick = Instant::now();

    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TwentyError::Config(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(INPUT_POLL)? {
            match action {
                event::Action::Quit => break,
                event::Action::TogglePause => app.toggle()?,
                event::Action::Reset => app.reset(),
            }
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
