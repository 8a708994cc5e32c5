//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod commands;

pub use commands::{handle_command, Commands};
