//! Check command implementation.
//!
//! `item-control check` runs the host load path against the catalog and
//! reports what was accepted, dropped and rejected.

use std::sync::Arc;

use crate::cli::args::CheckArgs;
use crate::control::LoadReport;
use crate::error::{ItemControlError, Result};
use crate::sync::SyncedValue;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    context: CommandContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: CommandContext, args: CheckArgs) -> Self {
        Self { context, args }
    }

    fn show_report(ui: &mut dyn UserInterface, report: &LoadReport) {
        for prefab in &report.loaded {
            ui.success(prefab);
        }
        for entry in &report.unresolved {
            ui.warning(&format!(
                "{}: unknown skill '{}' dropped from {} requirements",
                entry.prefab, entry.skill, entry.kind
            ));
        }
        for rejected in &report.rejected {
            ui.error(&format!("{}: {}", rejected.source, rejected.reason));
        }
        ui.message("");
        ui.message(&format!(
            "{} loaded, {} rejected, {} skills dropped",
            report.loaded.len(),
            report.rejected.len(),
            report.unresolved.len()
        ));
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(catalog) = self.context.catalog(ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let mut manager = self
            .context
            .inspector(catalog, Arc::new(SyncedValue::server_item_controller()))?;
        let report = manager.init()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| ItemControlError::Other(e.into()))?;
            ui.raw(&json);
        } else {
            ui.show_header(&format!(
                "Checking {}",
                self.context.paths().folder.display()
            ));
            Self::show_report(ui, &report);
        }

        if report.rejected.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
