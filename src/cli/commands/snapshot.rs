//! Snapshot command implementation.
//!
//! `item-control snapshot` prints the value a host would publish on the
//! sync channel, so it can be inspected or fed to a peer.

use std::sync::Arc;

use crate::error::Result;
use crate::sync::{SyncChannel, SyncedValue};
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The snapshot command implementation.
pub struct SnapshotCommand {
    context: CommandContext,
}

impl SnapshotCommand {
    /// Create a new snapshot command.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }
}

impl Command for SnapshotCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(catalog) = self.context.catalog(ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let channel = Arc::new(SyncedValue::server_item_controller());
        let mut manager = self.context.inspector(catalog, channel.clone())?;
        let report = manager.init()?;
        for rejected in &report.rejected {
            ui.warning(&format!("{}: {}", rejected.source, rejected.reason));
        }

        ui.raw(channel.value().trim_end());
        Ok(CommandResult::success())
    }
}
