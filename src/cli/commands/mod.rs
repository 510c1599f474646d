//! Command implementations for the twenty CLI.

mod completions;
mod config;
mod run;

pub use completions::completions;
pub use config::config;
pub use run::run;
