//! Command-line interface for album-smith.
//!
//! The CLI is a thin adapter over the assembly core: it parses flags,
//! wires up config-driven components, and renders results. It owns no
//! business logic.

mod commands;

pub use commands::{Cli, Commands, run_command};
