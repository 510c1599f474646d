//! Human-readable output formatting.

use chrono::Local;
use colored::Colorize;

use crate::timer::{format_mmss, Period, Snapshot};

/// Format a one-line countdown status, e.g. `Focus  19:59 remaining`.
#[must_use]
pub fn format_tick_line(period: Period, seconds_remaining: u32) -> String {
    let label = match period {
        Period::Focus => period.display_name().cyan().bold(),
        Period::Break => period.display_name().green().bold(),
    };

    format!("{label}  {} remaining", format_mmss(seconds_remaining))
}

/// Format a period-boundary announcement with a local timestamp.
#[must_use]
pub fn format_boundary(finished: Period, next: Period, next_seconds: u32) -> String {
    let stamp = Local::now().format("%H:%M:%S");
    let message = match finished {
        Period::Focus => "Focus period ended, time for a break".green().bold(),
        Period::Break => "Break over, back to focus".cyan().bold(),
    };

    format!(
        "[{stamp}] {message} ({} {})",
        next.display_name(),
        format_mmss(next_seconds)
    )
}

/// Render a progress bar for the elapsed share of the current period.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = (progress.clamp(0.0, 1.0) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Elapsed share of the current period, 0.0 - 1.0.
#[must_use]
pub fn progress_of(snapshot: &Snapshot) -> f64 {
    if snapshot.total_seconds == 0 {
        return 1.0;
    }
    1.0 - (f64::from(snapshot.seconds_remaining) / f64::from(snapshot.total_seconds))
}
