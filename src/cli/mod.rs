//! Command-line interface for item control.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, InitArgs, QueryArgs, WatchArgs};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
