//! State shared by every command.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::StaticCatalog;
use crate::config::{ControlPaths, Settings};
use crate::control::{ItemControlManager, Role};
use crate::error::Result;
use crate::sync::SyncedValue;
use crate::ui::UserInterface;

/// Catalog file looked up under the root when `--catalog` is not given.
pub const CATALOG_FILE: &str = "ItemControl.catalog.yml";

/// Resolved paths for one invocation.
#[derive(Debug, Clone)]
pub struct CommandContext {
    paths: ControlPaths,
    catalog: PathBuf,
}

impl CommandContext {
    /// Resolve the context for `root`, with an optional catalog override.
    pub fn new(root: &Path, catalog: Option<PathBuf>) -> Self {
        Self {
            paths: ControlPaths::new(root),
            catalog: catalog.unwrap_or_else(|| root.join(CATALOG_FILE)),
        }
    }

    pub fn paths(&self) -> &ControlPaths {
        &self.paths
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog
    }

    /// Read the settings file, or defaults if there is none.
    pub fn settings(&self) -> Result<Settings> {
        Settings::load(&self.paths.settings)
    }

    /// Load the catalog, reporting to `ui` and returning `None` if the file
    /// does not exist.
    pub fn catalog(&self, ui: &mut dyn UserInterface) -> Result<Option<StaticCatalog>> {
        if !self.catalog.exists() {
            ui.error(&format!(
                "No catalog found at {}. Pass --catalog or create {}.",
                self.catalog.display(),
                CATALOG_FILE
            ));
            return Ok(None);
        }
        Ok(Some(StaticCatalog::load(&self.catalog)?))
    }

    /// Build a host manager over a local channel.
    pub fn host(&self, catalog: StaticCatalog, channel: Arc<SyncedValue>) -> Result<ItemControlManager> {
        Ok(ItemControlManager::new(
            Role::Host,
            self.paths.clone(),
            Arc::new(catalog),
            channel,
        )
        .with_settings(self.settings()?))
    }

    /// Build a host manager for read-only commands. It never writes
    /// examples into an empty folder.
    pub fn inspector(
        &self,
        catalog: StaticCatalog,
        channel: Arc<SyncedValue>,
    ) -> Result<ItemControlManager> {
        Ok(self.host(catalog, channel)?.without_examples())
    }
}
