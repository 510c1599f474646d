//! Desktop notifications for period transitions.
//!
//! Sends an OS toast when a period ends. When no notification daemon is
//! reachable the notifier degrades to the terminal bell rather than
//! aborting the countdown.

use std::io::Write;

use notify_rust::Notification;

use crate::timer::{Period, TimerEvent, TimerObserver};

/// Application name shown in notification headers.
const APP_NAME: &str = "twenty";

/// Sends a desktop notification at each period boundary.
pub struct DesktopNotifier {
    enabled: bool,
}

impl DesktopNotifier {
    /// Create a notifier. When `enabled` is false only the terminal
    /// bell is used.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Announce that a period has finished.
    pub fn period_ended(&self, finished: Period) {
        if !self.enabled {
            bell();
            return;
        }

        let body = match finished {
            Period::Focus => "Time for a break. Look at something 20 feet away.",
            Period::Break => "Break over. Back to focus.",
        };

        let sent = Notification::new()
            .summary(APP_NAME)
            .body(body)
            .appname(APP_NAME)
            .show();

        if sent.is_err() {
            bell();
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TimerObserver for DesktopNotifier {
    fn on_event(&mut self, event: &TimerEvent) {
        if let TimerEvent::PeriodEnded { finished, .. } = event {
            self.period_ended(*finished);
        }
    }
}

/// Ring the terminal bell.
fn bell() {
    print!("\x07");
    std::io::stdout().flush().ok();
}
