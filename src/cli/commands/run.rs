//! Line-mode countdown command.
//!
//! Drives the period timer once per second on the main thread. Display
//! and notification are independent observers of the same event stream;
//! Ctrl-C flips a flag for a clean exit.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::Settings;
use crate::error::TwentyError;
use crate::notify::DesktopNotifier;
use crate::output::{format_boundary, format_tick_line, period_ended_json, render_progress_bar};
use crate::timer::{
    parse_duration, EventBus, Period, PeriodTimer, TimerConfig, TimerEvent, TimerObserver,
};

/// Width of the textual progress bar in line mode.
const BAR_WIDTH: usize = 20;

/// Execute the `run` command.
///
/// # Errors
///
/// Returns an error for unparseable duration overrides, zero-length
/// periods, or a failed Ctrl-C handler installation.
pub fn run(args: &RunArgs, format: OutputFormat) -> Result<String, TwentyError> {
    let settings = Settings::load_or_default();
    let config = override_durations(settings.timer_config(), args)?;

    let mut timer = PeriodTimer::new(config);
    timer.start()?;

    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))
        .map_err(|e| TwentyError::Config(format!("Failed to set Ctrl-C handler: {e}")))?;

    let mut bus = EventBus::new();
    bus.subscribe(Box::new(LinePrinter::new(format, args.quiet, config)));
    bus.subscribe(Box::new(DesktopNotifier::new(!args.no_notify)));

    let mut boundaries: u32 = 0;
    while running.load(Ordering::SeqCst) {
        thread::sleep(Duration::from_secs(1));

        let Some(tick) = timer.tick() else { break };
        bus.publish(&TimerEvent::from_tick(tick));

        if let Some(finished) = tick.ended {
            boundaries += 1;
            if args.once && finished == Period::Focus {
                break;
            }
        }
    }

    // Leave the overwritten countdown line tidy before the summary.
    if !args.quiet && format == OutputFormat::Pretty {
        println!();
    }

    Ok(match format {
        OutputFormat::Json => String::new(),
        OutputFormat::Pretty => format!(
            "{boundaries} period{} completed",
            if boundaries == 1 { "" } else { "s" }
        ),
    })
}

/// Apply `--focus`/`--break` overrides on top of the saved settings.
fn override_durations(mut config: TimerConfig, args: &RunArgs) -> Result<TimerConfig, TwentyError> {
    if let Some(ref value) = args.focus {
        config.focus_seconds =
            parse_duration(value).ok_or_else(|| TwentyError::InvalidDuration(value.clone()))?;
    }
    if let Some(ref value) = args.r#break {
        config.break_seconds =
            parse_duration(value).ok_or_else(|| TwentyError::InvalidDuration(value.clone()))?;
    }
    config.validate()?;
    Ok(config)
}

/// Writes the countdown to the terminal.
///
/// In pretty mode a single status line is overwritten once per second
/// and each boundary gets its own line. In JSON mode only boundaries
/// are emitted, one record per line.
struct LinePrinter {
    format: OutputFormat,
    quiet: bool,
    config: TimerConfig,
}

impl LinePrinter {
    const fn new(format: OutputFormat, quiet: bool, config: TimerConfig) -> Self {
        Self {
            format,
            quiet,
            config,
        }
    }
}

impl TimerObserver for LinePrinter {
    fn on_event(&mut self, event: &TimerEvent) {
        match *event {
            TimerEvent::Tick {
                period,
                seconds_remaining,
            } => {
                if self.quiet || self.format == OutputFormat::Json {
                    return;
                }
                let total = self.config.duration_of(period);
                let progress = if total == 0 {
                    1.0
                } else {
                    1.0 - (f64::from(seconds_remaining) / f64::from(total))
                };
                print!(
                    "\r{} {} ",
                    format_tick_line(period, seconds_remaining),
                    render_progress_bar(progress, BAR_WIDTH)
                );
                std::io::stdout().flush().ok();
            }
            TimerEvent::PeriodEnded {
                finished,
                next,
                next_seconds,
            } => match self.format {
                OutputFormat::Json => {
                    if let Ok(record) = period_ended_json(finished, next, next_seconds) {
                        println!("{record}");
                    }
                }
                OutputFormat::Pretty => {
                    // \r so the boundary line replaces the countdown line.
                    println!("\r{}", format_boundary(finished, next, next_seconds));
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(focus: Option<&str>, brk: Option<&str>) -> RunArgs {
        RunArgs {
            focus: focus.map(String::from),
            r#break: brk.map(String::from),
            once: false,
            quiet: false,
            no_notify: true,
        }
    }

    #[test]
    fn test_override_durations_keeps_settings_when_absent() {
        let config = override_durations(TimerConfig::new(1200, 20), &run_args(None, None)).unwrap();
        assert_eq!(config, TimerConfig::new(1200, 20));
    }

    #[test]
    fn test_override_durations_applies_flags() {
        let config =
            override_durations(TimerConfig::new(1200, 20), &run_args(Some("25m"), Some("30s")))
                .unwrap();
        assert_eq!(config, TimerConfig::new(1500, 30));
    }

    #[test]
    fn test_override_durations_rejects_garbage() {
        let err = override_durations(TimerConfig::new(1200, 20), &run_args(Some("soon"), None));
        assert!(err.is_err());
    }

    #[test]
    fn test_override_durations_rejects_zero() {
        // "0s" parses to nothing, so a zero period cannot sneak in
        // through the flags.
        let err = override_durations(TimerConfig::new(1200, 20), &run_args(Some("0s"), None));
        assert!(err.is_err());
    }
}
