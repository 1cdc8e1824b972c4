//! Command dispatching.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

use super::check::CheckCommand;
use super::context::CommandContext;
use super::init::InitCommand;
use super::query::QueryCommand;
use super::snapshot::SnapshotCommand;
use super::watch::WatchCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    root: PathBuf,
    catalog: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a dispatcher for a config root and optional catalog override.
    pub fn new(root: PathBuf, catalog: Option<PathBuf>) -> Self {
        Self { root, catalog }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let context = CommandContext::new(&self.root, self.catalog.clone());
        match &cli.command {
            Commands::Init(args) => InitCommand::new(context, args.clone()).execute(ui),
            Commands::Check(args) => CheckCommand::new(context, args.clone()).execute(ui),
            Commands::Snapshot => SnapshotCommand::new(context).execute(ui),
            Commands::Query(args) => QueryCommand::new(context, args.clone()).execute(ui),
            Commands::Watch(args) => WatchCommand::new(context, args.clone()).execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatches_init() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["item-control", "init"]);
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), None);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(dispatcher.root(), temp.path());
        assert!(temp.path().join("ItemControl").is_dir());
    }
}
