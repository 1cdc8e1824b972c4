//! Watch command implementation.
//!
//! `item-control watch` runs a host manager with a file watcher and
//! reloads whenever documents, display names or settings change.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::cli::args::WatchArgs;
use crate::error::Result;
use crate::sync::{snapshot, SyncChannel, SyncedValue};
use crate::ui::UserInterface;
use crate::watch::FileWatch;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// The watch command implementation.
pub struct WatchCommand {
    context: CommandContext,
    args: WatchArgs,
}

impl WatchCommand {
    /// Create a new watch command.
    pub fn new(context: CommandContext, args: WatchArgs) -> Self {
        Self { context, args }
    }
}

impl Command for WatchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(catalog) = self.context.catalog(ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let channel = Arc::new(SyncedValue::server_item_controller());
        let mut manager = self.context.host(catalog, channel.clone())?;
        let report = manager.init()?;
        let _watch = FileWatch::start(manager.paths(), manager.event_sender())?;

        ui.show_header(&format!(
            "Watching {}",
            self.context.paths().folder.display()
        ));
        ui.success(&format!("{} items loaded", report.loaded.len()));

        let deadline = self
            .args
            .duration
            .map(|secs| Instant::now() + Duration::from_secs(secs));
        let mut published = snapshot::digest(&channel.value());

        while deadline.is_none_or(|deadline| Instant::now() < deadline) {
            let pending = manager.pump_blocking(POLL_INTERVAL);
            if pending.settings {
                let settings = manager.settings();
                ui.message(&format!(
                    "Reloaded settings (enabled: {}, validation: {:?})",
                    settings.enabled, settings.validation
                ));
            }
            if pending.display_names {
                ui.message(&format!(
                    "Reloaded {} skill display names",
                    manager.display_names().len()
                ));
            }
            if pending.documents {
                let digest = snapshot::digest(&channel.value());
                if digest != published {
                    ui.success(&format!(
                        "Reloaded {} items, published snapshot {}",
                        manager.store().len(),
                        &digest[..8]
                    ));
                    published = digest;
                } else {
                    ui.message("Documents changed; snapshot unchanged");
                }
            }
        }

        Ok(CommandResult::success())
    }
}
