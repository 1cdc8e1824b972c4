//! Query command implementation.
//!
//! `item-control query <key>` loads the requirement folder and evaluates
//! one item for an actor described in a YAML file.

use serde::Serialize;
use std::sync::Arc;

use crate::attributes::AttributeSystems;
use crate::catalog::{SkillSource, StaticActor};
use crate::requirements::RequirementKind;
use crate::cli::args::QueryArgs;
use crate::error::{ItemControlError, Result};
use crate::query::MissingRequirement;
use crate::sync::SyncedValue;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// JSON form of a query result.
#[derive(Debug, Serialize)]
struct QueryOutput<'a> {
    key: &'a str,
    enabled: bool,
    controlled: bool,
    can_craft: bool,
    can_equip: bool,
    can_consume: bool,
    missing: Vec<MissingRequirement>,
}

/// The query command implementation.
pub struct QueryCommand {
    context: CommandContext,
    args: QueryArgs,
}

impl QueryCommand {
    /// Create a new query command.
    pub fn new(context: CommandContext, args: QueryArgs) -> Self {
        Self { context, args }
    }
}

fn verdict(allowed: bool) -> &'static str {
    if allowed {
        "allowed"
    } else {
        "blocked"
    }
}

impl Command for QueryCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(catalog) = self.context.catalog(ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let (actor, attributes) = match &self.args.actor {
            Some(path) => {
                let (actor, attributes) = StaticActor::load(path)?;
                (Some(actor), attributes)
            }
            None => (None, AttributeSystems::new()),
        };

        let mut manager = self
            .context
            .inspector(catalog, Arc::new(SyncedValue::server_item_controller()))?;
        manager.init()?;
        let gate = manager.gate(attributes);

        let key = self.args.key.as_str();
        let by_name = self.args.by_name;
        let source = actor.as_ref().map(|actor| actor as &dyn SkillSource);
        let output = QueryOutput {
            key,
            enabled: gate.is_enabled(),
            controlled: manager.store().get(key, by_name).is_some(),
            can_craft: gate.allow(RequirementKind::Craft, key, by_name, source),
            can_equip: gate.allow(RequirementKind::Equip, key, by_name, source),
            can_consume: gate.allow(RequirementKind::Consume, key, by_name, source),
            missing: gate.missing(key, by_name, source),
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| ItemControlError::Other(e.into()))?;
            ui.raw(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(key);
        if !output.enabled {
            ui.message("Item control is disabled; every action is allowed");
            return Ok(CommandResult::success());
        }
        if !output.controlled {
            ui.message("Not controlled; every action is allowed");
            return Ok(CommandResult::success());
        }

        ui.key_value("Craft", verdict(output.can_craft));
        ui.key_value("Equip", verdict(output.can_equip));
        ui.key_value("Consume", verdict(output.can_consume));
        for missing in &output.missing {
            ui.warning(&format!(
                "{} requires {} {}",
                missing.kind, missing.label, missing.required
            ));
        }

        Ok(CommandResult::success())
    }
}
