//! The period countdown state machine.
//!
//! Alternates between a focus period and a break period, counting down
//! one second per tick. The timer performs no I/O itself; a scheduler
//! drives [`PeriodTimer::tick`] once per second and observers react to
//! the values it reports.

use serde::{Deserialize, Serialize};

use crate::error::TwentyError;

/// Which period the countdown is measuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// The working interval before a break is signaled.
    Focus,
    /// The short rest interval after a focus period.
    Break,
}

impl Period {
    /// The period that follows this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Focus => Self::Break,
            Self::Break => Self::Focus,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Break => "Break",
        }
    }

}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Configured durations for the two periods, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Focus period length in seconds.
    pub focus_seconds: u32,
    /// Break period length in seconds.
    pub break_seconds: u32,
}

impl TimerConfig {
    /// Create a config from explicit second counts.
    #[must_use]
    pub const fn new(focus_seconds: u32, break_seconds: u32) -> Self {
        Self {
            focus_seconds,
            break_seconds,
        }
    }

    /// The configured length of the given period.
    #[must_use]
    pub const fn duration_of(&self, period: Period) -> u32 {
        match period {
            Period::Focus => self.focus_seconds,
            Period::Break => self.break_seconds,
        }
    }

    /// Check that both periods have positive length.
    ///
    /// A zero-length period would flip the countdown on every tick, so
    /// it is rejected before it can become the active period.
    ///
    /// # Errors
    ///
    /// Returns `TwentyError::ZeroLengthPeriod` naming the offending
    /// period(s).
    pub const fn validate(&self) -> Result<(), TwentyError> {
        match (self.focus_seconds, self.break_seconds) {
            (0, 0) => Err(TwentyError::ZeroLengthPeriod("focus and break periods")),
            (0, _) => Err(TwentyError::ZeroLengthPeriod("focus period")),
            (_, 0) => Err(TwentyError::ZeroLengthPeriod("break period")),
            _ => Ok(()),
        }
    }
}

impl Default for TimerConfig {
    /// 20 minutes of focus, 20 seconds of break.
    fn default() -> Self {
        Self::new(20 * 60, 20)
    }
}

/// State machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not counting down. Either fresh, reset, or paused mid-period.
    Idle,
    /// Counting down a focus period.
    RunningFocus,
    /// Counting down a break period.
    RunningBreak,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Period the counter belongs to after this tick.
    pub period: Period,
    /// Seconds left in that period.
    pub seconds_remaining: u32,
    /// The period that just finished, when this tick crossed a boundary.
    pub ended: Option<Period>,
}

/// Display snapshot of the timer, valid at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Current period.
    pub period: Period,
    /// Seconds left in the current period.
    pub seconds_remaining: u32,
    /// Configured length of the current period.
    pub total_seconds: u32,
    /// Whether the countdown is active.
    pub running: bool,
    /// Remaining time as `mm:ss`.
    pub display: String,
}

/// The alternating focus/break countdown.
///
/// Driven by an external once-per-second scheduler. The timer owns the
/// current period and remaining seconds; it never performs I/O.
#[derive(Debug, Clone)]
pub struct PeriodTimer {
    config: TimerConfig,
    /// Durations to adopt at the next period boundary.
    pending: Option<TimerConfig>,
    period: Period,
    seconds_remaining: u32,
    running: bool,
}

impl PeriodTimer {
    /// Create an idle timer holding a full focus period.
    #[must_use]
    pub const fn new(config: TimerConfig) -> Self {
        Self {
            config,
            pending: None,
            period: Period::Focus,
            seconds_remaining: config.focus_seconds,
            running: false,
        }
    }

    /// Start the countdown, or resume it from where it was paused.
    ///
    /// No-op if the countdown is already active.
    ///
    /// # Errors
    ///
    /// Returns `TwentyError::ZeroLengthPeriod` if either period has zero
    /// configured length; the timer stays idle.
    pub fn start(&mut self) -> Result<(), TwentyError> {
        self.config.validate()?;
        self.running = true;
        Ok(())
    }

    /// Pause the countdown, preserving the period and remaining seconds
    /// so a later [`start`](Self::start) resumes mid-period.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Force the timer back to an idle, full focus period.
    ///
    /// Any durations deferred by [`apply_config`](Self::apply_config)
    /// take effect now.
    pub fn reset(&mut self) {
        if let Some(new) = self.pending.take() {
            self.config = new;
        }
        self.period = Period::Focus;
        self.seconds_remaining = self.config.focus_seconds;
        self.running = false;
    }

    /// Replace the configured durations.
    ///
    /// An in-flight countdown is not altered: while running or paused
    /// mid-period the new durations are adopted at the next period
    /// boundary. At a fresh boundary they apply immediately.
    ///
    /// # Errors
    ///
    /// Returns `TwentyError::ZeroLengthPeriod` if either new period has
    /// zero length; the stored config is unchanged.
    pub fn apply_config(&mut self, new: TimerConfig) -> Result<(), TwentyError> {
        new.validate()?;
        if self.running || self.mid_period() {
            self.pending = Some(new);
        } else {
            self.config = new;
            self.seconds_remaining = new.duration_of(self.period);
        }
        Ok(())
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `None` while idle. Otherwise decrements the counter; when
    /// it reaches zero the finished period is reported in
    /// [`Tick::ended`], the period flips, and the counter restarts at
    /// the new period's full duration without leaving the running state.
    pub fn tick(&mut self) -> Option<Tick> {
        if !self.running {
            return None;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining > 0 {
            return Some(Tick {
                period: self.period,
                seconds_remaining: self.seconds_remaining,
                ended: None,
            });
        }

        // Period boundary: adopt deferred durations, flip, refill.
        let finished = self.period;
        if let Some(new) = self.pending.take() {
            self.config = new;
        }
        self.period = finished.other();
        self.seconds_remaining = self.config.duration_of(self.period);

        Some(Tick {
            period: self.period,
            seconds_remaining: self.seconds_remaining,
            ended: Some(finished),
        })
    }

    /// Current machine phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if !self.running {
            Phase::Idle
        } else {
            match self.period {
                Period::Focus => Phase::RunningFocus,
                Period::Break => Phase::RunningBreak,
            }
        }
    }

    /// Current period.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// Seconds left in the current period.
    #[must_use]
    pub const fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Check if the countdown is active.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// The configured durations currently in effect.
    #[must_use]
    pub const fn config(&self) -> TimerConfig {
        self.config
    }

    /// Display snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            period: self.period,
            seconds_remaining: self.seconds_remaining,
            total_seconds: self.config.duration_of(self.period),
            running: self.running,
            display: format_mmss(self.seconds_remaining),
        }
    }

    /// Whether the counter has left the top of its period.
    fn mid_period(&self) -> bool {
        self.seconds_remaining != self.config.duration_of(self.period)
    }
}

/// Format a second count as `mm:ss`.
///
/// Minutes are unbounded; there is no hour rollover.
#[must_use]
pub fn format_mmss(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Parse a duration string like "20m", "90s", "1m30s" into seconds.
///
/// A bare number is read as minutes.
#[must_use]
pub fn parse_duration(s: &str) -> Option<u32> {
    let s = s.trim().to_lowercase();

    // Bare number: assume minutes.
    if let Ok(minutes) = s.parse::<u32>() {
        return Some(minutes.checked_mul(60)?);
    }

    let mut total_seconds: u32 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else if current_num.is_empty() {
            return None;
        } else {
            let num: u32 = current_num.parse().ok()?;
            current_num.clear();

            let unit: u32 = match c {
                'h' => 3600,
                'm' => 60,
                's' => 1,
                _ => return None,
            };
            total_seconds = total_seconds.checked_add(num.checked_mul(unit)?)?;
        }
    }

    // Trailing number without a unit: assume minutes.
    if !current_num.is_empty() {
        let num: u32 = current_num.parse().ok()?;
        total_seconds = total_seconds.checked_add(num.checked_mul(60)?)?;
    }

    if total_seconds > 0 {
        Some(total_seconds)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_timer_holds_full_focus_period() {
        let timer = PeriodTimer::new(TimerConfig::new(120, 20));
        assert_eq!(timer.period(), Period::Focus);
        assert_eq!(timer.seconds_remaining(), 120);
        assert_eq!(timer.phase(), Phase::Idle);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_tick_is_noop_while_idle() {
        let mut timer = PeriodTimer::new(TimerConfig::new(10, 5));
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.seconds_remaining(), 10);
    }

    #[test]
    fn test_period_of_length_n_takes_n_ticks() {
        let mut timer = PeriodTimer::new(TimerConfig::new(5, 3));
        timer.start().unwrap();

        for expected in (1..5).rev() {
            let tick = timer.tick().unwrap();
            assert_eq!(tick.ended, None);
            assert_eq!(tick.seconds_remaining, expected);
        }

        let boundary = timer.tick().unwrap();
        assert_eq!(boundary.ended, Some(Period::Focus));
        assert_eq!(boundary.period, Period::Break);
        assert_eq!(boundary.seconds_remaining, 3);
        assert_eq!(timer.phase(), Phase::RunningBreak);
    }

    #[test]
    fn test_countdown_keeps_running_across_boundaries() {
        // Config {focus: 3, break: 2} produces the tick sequence
        // 2,1,0(focus ends) 1,0(break ends) 2,1,0(focus ends).
        let mut timer = PeriodTimer::new(TimerConfig::new(3, 2));
        timer.start().unwrap();

        let mut observed = Vec::new();
        for _ in 0..8 {
            let tick = timer.tick().unwrap();
            observed.push((tick.seconds_remaining, tick.ended));
            assert!(timer.is_running());
        }

        assert_eq!(
            observed,
            vec![
                (2, None),
                (1, None),
                (2, Some(Period::Focus)),
                (1, None),
                (3, Some(Period::Break)),
                (2, None),
                (1, None),
                (2, Some(Period::Focus)),
            ]
        );
    }

    #[test]
    fn test_pause_preserves_remaining_time() {
        let mut timer = PeriodTimer::new(TimerConfig::new(10, 5));
        timer.start().unwrap();
        timer.tick();
        timer.tick();
        assert_eq!(timer.seconds_remaining(), 8);

        timer.pause();
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.seconds_remaining(), 8);
        assert_eq!(timer.period(), Period::Focus);

        timer.start().unwrap();
        assert_eq!(timer.phase(), Phase::RunningFocus);
        assert_eq!(timer.seconds_remaining(), 8);
    }

    #[test]
    fn test_reset_returns_to_full_focus_period() {
        let mut timer = PeriodTimer::new(TimerConfig::new(4, 2));
        timer.start().unwrap();
        for _ in 0..5 {
            timer.tick();
        }
        assert_eq!(timer.period(), Period::Break);

        timer.reset();
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.period(), Period::Focus);
        assert_eq!(timer.seconds_remaining(), 4);
    }

    #[test]
    fn test_start_rejects_zero_length_periods() {
        let mut timer = PeriodTimer::new(TimerConfig::new(0, 20));
        assert!(timer.start().is_err());
        assert_eq!(timer.phase(), Phase::Idle);

        let mut timer = PeriodTimer::new(TimerConfig::new(20, 0));
        assert!(timer.start().is_err());
        assert_eq!(timer.phase(), Phase::Idle);
    }

    #[test]
    fn test_start_is_noop_while_running() {
        let mut timer = PeriodTimer::new(TimerConfig::new(10, 5));
        timer.start().unwrap();
        timer.tick();
        timer.start().unwrap();
        assert_eq!(timer.seconds_remaining(), 9);
        assert_eq!(timer.phase(), Phase::RunningFocus);
    }

    #[test]
    fn test_apply_config_defers_until_boundary() {
        let mut timer = PeriodTimer::new(TimerConfig::new(3, 2));
        timer.start().unwrap();
        timer.tick();

        timer.apply_config(TimerConfig::new(100, 50)).unwrap();
        // In-flight focus countdown unchanged.
        assert_eq!(timer.tick().unwrap().seconds_remaining, 1);

        // Boundary adopts the new break length.
        let boundary = timer.tick().unwrap();
        assert_eq!(boundary.ended, Some(Period::Focus));
        assert_eq!(boundary.seconds_remaining, 50);
        assert_eq!(timer.config(), TimerConfig::new(100, 50));
    }

    #[test]
    fn test_apply_config_at_fresh_boundary_is_immediate() {
        let mut timer = PeriodTimer::new(TimerConfig::new(3, 2));
        timer.apply_config(TimerConfig::new(60, 10)).unwrap();
        assert_eq!(timer.seconds_remaining(), 60);
    }

    #[test]
    fn test_apply_config_rejects_zero_lengths() {
        let mut timer = PeriodTimer::new(TimerConfig::new(3, 2));
        assert!(timer.apply_config(TimerConfig::new(0, 2)).is_err());
        assert_eq!(timer.config(), TimerConfig::new(3, 2));
    }

    #[test]
    fn test_reset_adopts_deferred_config() {
        let mut timer = PeriodTimer::new(TimerConfig::new(30, 10));
        timer.start().unwrap();
        timer.tick();
        timer.apply_config(TimerConfig::new(60, 20)).unwrap();

        timer.reset();
        assert_eq!(timer.seconds_remaining(), 60);
        assert_eq!(timer.config(), TimerConfig::new(60, 20));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut timer = PeriodTimer::new(TimerConfig::new(125, 20));
        timer.start().unwrap();
        timer.tick();

        let snap = timer.snapshot();
        assert_eq!(snap.period, Period::Focus);
        assert_eq!(snap.seconds_remaining, 124);
        assert_eq!(snap.total_seconds, 125);
        assert!(snap.running);
        assert_eq!(snap.display, "02:04");
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(125), "02:05");
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(59), "00:59");
        assert_eq!(format_mmss(3661), "61:01");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("20"), Some(1200));
        assert_eq!(parse_duration("20m"), Some(1200));
        assert_eq!(parse_duration("90s"), Some(90));
        assert_eq!(parse_duration("1m30s"), Some(90));
        assert_eq!(parse_duration("1h"), Some(3600));
        assert_eq!(parse_duration("0s"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("abc"), None);
    }

    #[test]
    fn test_default_config_is_twenty_twenty_twenty() {
        let config = TimerConfig::default();
        assert_eq!(config.focus_seconds, 1200);
        assert_eq!(config.break_seconds, 20);
        assert!(config.validate().is_ok());
    }
}
