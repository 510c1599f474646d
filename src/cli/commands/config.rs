//! Settings command implementation.
//!
//! Shows, edits, and clears the persisted settings file.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Paths, Settings};
use crate::error::TwentyError;
use crate::output::to_json;
use crate::timer::format_mmss;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the settings file cannot be read, parsed, or
/// written, or if an edit would leave a zero-length period.
pub fn config(cmd: ConfigCommands, format: OutputFormat) -> Result<String, TwentyError> {
    match cmd {
        ConfigCommands::Show => show(format),
        ConfigCommands::Path => path(),
        ConfigCommands::Set {
            focus_minutes,
            focus_seconds,
            break_minutes,
            break_seconds,
            auto_start,
        } => set(
            focus_minutes,
            focus_seconds,
            break_minutes,
            break_seconds,
            auto_start,
            format,
        ),
        ConfigCommands::Clear { force } => clear(force),
    }
}

/// Show the current settings.
fn show(format: OutputFormat) -> Result<String, TwentyError> {
    // Unlike the countdown commands, show surfaces a parse error
    // instead of papering over it with defaults.
    let settings = Settings::load()?;

    match format {
        OutputFormat::Json => to_json(&settings),
        OutputFormat::Pretty => {
            let timer_config = settings.timer_config();
            let mut output = Vec::new();

            output.push(format!(
                "Focus period:  {}",
                format_mmss(timer_config.focus_seconds)
            ));
            output.push(format!(
                "Break period:  {}",
                format_mmss(timer_config.break_seconds)
            ));
            output.push(format!(
                "Auto-start:    {}",
                if settings.auto_start { "on" } else { "off" }
            ));

            Ok(output.join("\n"))
        }
    }
}

/// Print the settings file path.
fn path() -> Result<String, TwentyError> {
    let paths = Paths::new()?;
    Ok(paths.settings_file.display().to_string())
}

/// Update the given fields and persist the result.
fn set(
    focus_minutes: Option<u32>,
    focus_seconds: Option<u32>,
    break_minutes: Option<u32>,
    break_seconds: Option<u32>,
    auto_start: Option<bool>,
    format: OutputFormat,
) -> Result<String, TwentyError> {
    let mut settings = Settings::load_or_default();

    if let Some(v) = focus_minutes {
        settings.focus_minutes = v;
    }
    if let Some(v) = focus_seconds {
        settings.focus_seconds = v;
    }
    if let Some(v) = break_minutes {
        settings.break_minutes = v;
    }
    if let Some(v) = break_seconds {
        settings.break_seconds = v;
    }
    if let Some(v) = auto_start {
        settings.auto_start = v;
    }

    settings.validate()?;
    settings.save()?;

    match format {
        OutputFormat::Json => to_json(&settings),
        OutputFormat::Pretty => {
            let timer_config = settings.timer_config();
            Ok(format!(
                "{} Focus {} / Break {}{}",
                "Settings saved.".green(),
                format_mmss(timer_config.focus_seconds),
                format_mmss(timer_config.break_seconds),
                if settings.auto_start {
                    " (auto-start on)"
                } else {
                    ""
                }
            ))
        }
    }
}

/// Delete the settings file.
fn clear(force: bool) -> Result<String, TwentyError> {
    if !force {
        return Err(TwentyError::Config(
            "This will delete the saved settings.\nUse --force to confirm.".to_string(),
        ));
    }

    let paths = Paths::new()?;
    if paths.settings_file.exists() {
        std::fs::remove_file(&paths.settings_file)?;
        Ok("Settings cleared. Defaults apply on the next run.".to_string())
    } else {
        Ok("No settings file to clear.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_requires_force() {
        let result = clear(false);
        assert!(result.is_err());
    }
}
