//! Output formatting for twenty.

pub mod json;
pub mod pretty;

pub use json::{period_ended_json, to_json};
pub use pretty::{format_boundary, format_tick_line, progress_of, render_progress_bar};
