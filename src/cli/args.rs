use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "twenty")]
#[command(about = "A 20-20-20 eye-rest reminder for the terminal")]
#[command(long_about = "twenty - A 20-20-20 eye-rest reminder for the terminal

Counts down alternating focus and break periods, shows the remaining
time, and fires a desktop notification at each transition. Every 20
minutes, look at something 20 feet away for 20 seconds.

QUICK START:
  twenty run                Count down with the saved settings
  twenty run -f 25m -b 30s  One-off custom durations
  twenty tui                Interactive full-screen countdown
  twenty config set --focus-minutes 20 --break-seconds 20

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  twenty <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the countdown in line mode
    ///
    /// Counts focus and break periods in the current terminal, updating
    /// a single status line once per second and announcing each period
    /// boundary. A desktop notification fires at every transition.
    /// Durations come from the settings file unless overridden here;
    /// overrides are not persisted.
    ///
    /// # Examples
    ///
    ///   twenty run                   Use saved settings
    ///   twenty run -f 25m -b 5m      One-off pomodoro durations
    ///   twenty run --once            Stop after the first focus period
    ///   twenty run --quiet           Boundaries only, no countdown line
    ///   twenty run -o json           One JSON record per boundary
    #[command(alias = "r")]
    Run(RunArgs),

    /// Interactive full-screen countdown
    ///
    /// Opens a terminal UI with the remaining time, a progress bar, and
    /// keyboard control.
    ///
    /// # Keys
    ///
    ///   space   Start / pause
    ///   r       Reset to a fresh focus period
    ///   q/Esc   Quit
    Tui,

    /// Inspect or edit the persisted settings
    ///
    /// Settings live in ~/.twenty/settings.json as a flat JSON object:
    /// focus_minutes, focus_seconds, break_minutes, break_seconds,
    /// auto_start.
    ///
    /// # Examples
    ///
    ///   twenty config show
    ///   twenty config set --focus-minutes 20 --break-seconds 20
    ///   twenty config set --auto-start true
    ///   twenty config path
    ///   twenty config clear --force
    Config(ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Writes a completion script for the given shell to stdout.
    ///
    /// # Examples
    ///
    ///   twenty completions bash > /usr/local/etc/bash_completion.d/twenty
    ///   twenty completions zsh > ~/.zfunc/_twenty
    ///   twenty completions fish > ~/.config/fish/completions/twenty.fish
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

/// Arguments for the `run` command.
#[derive(Args)]
pub struct RunArgs {
    /// Focus period length (e.g. 20m, 90s, 1m30s); overrides settings
    #[arg(long, short = 'f')]
    pub focus: Option<String>,

    /// Break period length (e.g. 20s, 5m); overrides settings
    #[arg(long, short = 'b', value_name = "DURATION")]
    pub r#break: Option<String>,

    /// Stop after the first focus period ends
    #[arg(long)]
    pub once: bool,

    /// Print period boundaries only, not the per-second countdown
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Skip desktop notifications, ring the terminal bell instead
    #[arg(long)]
    pub no_notify: bool,
}

/// Arguments for the `config` command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current settings
    Show,

    /// Print the settings file path
    Path,

    /// Update one or more settings
    ///
    /// Only the given fields change; the rest keep their stored values.
    /// The resulting focus and break periods must both be longer than
    /// zero seconds.
    Set {
        /// Focus period, minutes part
        #[arg(long)]
        focus_minutes: Option<u32>,

        /// Focus period, seconds part
        #[arg(long)]
        focus_seconds: Option<u32>,

        /// Break period, minutes part
        #[arg(long)]
        break_minutes: Option<u32>,

        /// Break period, seconds part
        #[arg(long)]
        break_seconds: Option<u32>,

        /// Begin counting down immediately on launch
        #[arg(long)]
        auto_start: Option<bool>,
    },

    /// Delete the settings file
    ///
    /// The next run falls back to the defaults (20 min focus,
    /// 20 s break).
    Clear {
        /// Skip the confirmation requirement
        #[arg(long, short = 'f')]
        force: bool,
    },
}
