//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::TwentyError;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    TogglePause,
    /// Reset to a fresh focus period.
    Reset,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(timeout: Duration) -> Result<Option<Action>, TwentyError> {
    if event::poll(timeout).map_err(|e| TwentyError::Config(format!("Event poll failed: {e}")))? {
        if let Event::Key(key) =
            event::read().map_err(|e| TwentyError::Config(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),
                KeyCode::Char(' ') => return Ok(Some(Action::TogglePause)),
                KeyCode::Char('r') => return Ok(Some(Action::Reset)),
                _ => {}
            }
        }
    }

    Ok(None)
}
