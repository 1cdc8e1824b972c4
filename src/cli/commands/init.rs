//! Init command implementation.
//!
//! `item-control init` prepares a config root: the requirement folder with
//! an example document, a settings file, and a starter catalog.

use std::fs;

use crate::catalog::{CatalogFile, CatalogItem};
use crate::cli::args::InitArgs;
use crate::config::Settings;
use crate::error::{ItemControlError, Result};
use crate::requirements::{document_paths, example_documents, write_document};
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    context: CommandContext,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(context: CommandContext, args: InitArgs) -> Self {
        Self { context, args }
    }

    fn starter_catalog() -> CatalogFile {
        CatalogFile {
            items: example_documents()
                .into_iter()
                .map(|doc| CatalogItem {
                    name: format!("$item_{}", doc.prefab_name.to_lowercase()),
                    prefab: doc.prefab_name,
                    recipe: true,
                })
                .collect(),
            skills: Vec::new(),
        }
    }
}

fn to_yaml<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| ItemControlError::Other(e.into()))
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let paths = self.context.paths();
        paths.ensure_folder()?;
        ui.show_header(&format!("Initializing {}", paths.folder.display()));

        if document_paths(paths)?.is_empty() && !paths.display_names.exists() {
            for doc in example_documents() {
                let path = write_document(paths, &doc)?;
                ui.success(&format!("Wrote example {}", path.display()));
            }
        } else {
            ui.message("Requirement documents already present");
        }

        if self.args.force || !paths.settings.exists() {
            fs::write(&paths.settings, to_yaml(&Settings::default())?)?;
            ui.success(&format!("Wrote settings {}", paths.settings.display()));
        } else {
            ui.message("Settings file already present");
        }

        let catalog = self.context.catalog_path();
        if !catalog.exists() {
            fs::write(catalog, to_yaml(&Self::starter_catalog())?)?;
            ui.success(&format!("Wrote catalog {}", catalog.display()));
        }

        Ok(CommandResult::success())
    }
}
