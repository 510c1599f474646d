//! The focus/break countdown core.
//!
//! Owns the period state machine and the event seam the presentation
//! layer subscribes to:
//! - Alternating focus and break periods
//! - Start/pause/reset, pause-preserving resume
//! - One event stream consumed by independent observers

pub mod event;
pub mod period;

pub use event::{EventBus, TimerEvent, TimerObserver};
pub use period::{format_mmss, parse_duration, Period, PeriodTimer, Phase, Snapshot, Tick, TimerConfig};
