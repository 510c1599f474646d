//! Command-line interface for twenty.

pub mod args;
pub mod commands;
