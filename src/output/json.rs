//! JSON output formatting for twenty.

use serde::Serialize;
use serde_json::json;

use crate::error::TwentyError;
use crate::timer::Period;

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `TwentyError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TwentyError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One-line JSON record for a period boundary, suitable for piping.
///
/// # Errors
///
/// Returns `TwentyError::Parse` if JSON serialization fails.
pub fn period_ended_json(
    finished: Period,
    next: Period,
    next_seconds: u32,
) -> Result<String, TwentyError> {
    let record = json!({
        "event": "period_ended",
        "finished": finished,
        "next": next,
        "next_seconds": next_seconds,
    });
    Ok(serde_json::to_string(&record)?)
}
