//! Persisted settings for twenty.
//!
//! Settings are stored as a flat JSON object in
//! `~/.twenty/settings.json`. Durations are split into minutes and
//! seconds the way they are entered, and combined into whole seconds
//! only when handed to the timer.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::TwentyError;
use crate::timer::TimerConfig;

/// Persisted settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Focus period, minutes part.
    pub focus_minutes: u32,
    /// Focus period, seconds part.
    pub focus_seconds: u32,
    /// Break period, minutes part.
    pub break_minutes: u32,
    /// Break period, seconds part.
    pub break_seconds: u32,
    /// Begin counting down immediately on launch.
    pub auto_start: bool,
}

impl Default for Settings {
    /// 20 minutes of focus, 20 seconds of break, no auto-start.
    fn default() -> Self {
        Self {
            focus_minutes: 20,
            focus_seconds: 0,
            break_minutes: 0,
            break_seconds: 20,
            auto_start: false,
        }
    }
}

impl Settings {
    /// Load settings from the default path.
    ///
    /// A missing file yields default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, TwentyError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.settings_file)
    }

    /// Load settings from a specific path.
    ///
    /// A missing file yields default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TwentyError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TwentyError::Config(format!(
                "Failed to read settings file {}: {e}",
                path.display()
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            TwentyError::Config(format!(
                "Failed to parse settings file {}: {e}",
                path.display()
            ))
        })
    }

    /// Load settings, falling back to defaults if the file is malformed.
    ///
    /// The parse error is reported on stderr so the user knows their
    /// file was ignored.
    #[must_use]
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("warning: {e}; using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<(), TwentyError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.settings_file)
    }

    /// Save settings to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), TwentyError> {
        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(path, contents).map_err(|e| {
            TwentyError::Config(format!(
                "Failed to write settings file {}: {e}",
                path.display()
            ))
        })
    }

    /// Combine the minute/second parts into timer durations.
    ///
    /// Absurdly large values saturate at `u32::MAX` seconds instead of
    /// overflowing.
    #[must_use]
    pub const fn timer_config(&self) -> TimerConfig {
        TimerConfig::new(
            self.focus_minutes
                .saturating_mul(60)
                .saturating_add(self.focus_seconds),
            self.break_minutes
                .saturating_mul(60)
                .saturating_add(self.break_seconds),
        )
    }

    /// Check that both periods have positive total length.
    ///
    /// # Errors
    ///
    /// Returns `TwentyError::ZeroLengthPeriod` naming the offending
    /// period(s).
    pub const fn validate(&self) -> Result<(), TwentyError> {
        self.timer_config().validate()
    }
}
