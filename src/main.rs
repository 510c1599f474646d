use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use twenty::cli::args::{Cli, Commands};
use twenty::cli::commands;
use twenty::config::Settings;
use twenty::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command {
        Commands::Run(args) => commands::run(&args, format)?,
        Commands::Tui => {
            let settings = Settings::load_or_default();
            tui::run(&settings)?;
            String::new()
        }
        Commands::Config(args) => commands::config(args.command, format)?,
        Commands::Completions { shell } => commands::completions(&shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
