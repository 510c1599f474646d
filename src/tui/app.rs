//! Application state for the TUI.

use crate::config::Settings;
use crate::error::TwentyError;
use crate::notify::DesktopNotifier;
use crate::timer::{Period, PeriodTimer};

/// Application state.
pub struct App {
    /// The countdown being displayed.
    pub timer: PeriodTimer,
    /// Status message for the bottom bar.
    pub status: Option<String>,
    notifier: DesktopNotifier,
}

impl App {
    /// Create the app from persisted settings.
    ///
    /// Honors `auto_start`: the countdown begins immediately when set.
    ///
    /// # Errors
    ///
    /// Returns an error if either configured period has zero length.
    pub fn new(settings: &Settings) -> Result<Self, TwentyError> {
        let config = settings.timer_config();
        config.validate()?;

        let mut timer = PeriodTimer::new(config);
        let status = if settings.auto_start {
            timer.start()?;
            None
        } else {
            Some("Press space to start".to_string())
        };

        Ok(Self {
            timer,
            status,
            notifier: DesktopNotifier::default(),
        })
    }

    /// Start or pause the countdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured periods are invalid.
    pub fn toggle(&mut self) -> Result<(), TwentyError> {
        if self.timer.is_running() {
            self.timer.pause();
            self.status = Some("Paused".to_string());
        } else {
            self.timer.start()?;
            self.status = None;
        }
        Ok(())
    }

    /// Reset to a fresh, idle focus period.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.status = Some("Reset. Press space to start".to_string());
    }

    /// Advance the countdown by one second and react to boundaries.
    pub fn tick(&mut self) {
        let Some(tick) = self.timer.tick() else { return };

        if let Some(finished) = tick.ended {
            self.notifier.period_ended(finished);
            self.status = Some(match finished {
                Period::Focus => "Look at something 20 feet away".to_string(),
                Period::Break => "Back to focus".to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(focus_minutes: u32, break_seconds: u32, auto_start: bool) -> Settings {
        Settings {
            focus_minutes,
            focus_seconds: 0,
            break_minutes: 0,
            break_seconds,
            auto_start,
        }
    }

    #[test]
    fn test_new_waits_without_auto_start() {
        let app = App::new(&settings(20, 20, false)).unwrap();
        assert!(!app.timer.is_running());
        assert!(app.status.is_some());
    }

    #[test]
    fn test_new_honors_auto_start() {
        let app = App::new(&settings(20, 20, true)).unwrap();
        assert!(app.timer.is_running());
        assert!(app.status.is_none());
    }

    #[test]
    fn test_new_rejects_zero_periods() {
        assert!(App::new(&settings(0, 20, false)).is_err());
        assert!(App::new(&settings(20, 0, false)).is_err());
    }

    #[test]
    fn test_toggle_pauses_and_resumes() {
        let mut app = App::new(&settings(20, 20, true)).unwrap();
        app.tick();
        let remaining = app.timer.seconds_remaining();

        app.toggle().unwrap();
        assert!(!app.timer.is_running());

        app.toggle().unwrap();
        assert!(app.timer.is_running());
        assert_eq!(app.timer.seconds_remaining(), remaining);
    }

    #[test]
    fn test_tick_is_noop_while_idle() {
        let mut app = App::new(&settings(20, 20, false)).unwrap();
        app.tick();
        assert_eq!(app.timer.seconds_remaining(), 20 * 60);
    }
}
