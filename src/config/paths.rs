//! Filesystem layout.
//!
//! Everything lives under a config root (the engine's config directory):
//!
//! ```text
//! <root>/
//!   ItemControl.settings.yml      settings
//!   ItemControl/
//!     SkillDisplayNames.yml       display name overrides
//!     SwordBronze.yml             one requirement document per item
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Name of the requirement document folder.
pub const FOLDER_NAME: &str = "ItemControl";

/// Name of the display name override file inside the folder.
pub const DISPLAY_NAMES_FILE: &str = "SkillDisplayNames.yml";

/// Name of the settings file inside the config root.
pub const SETTINGS_FILE: &str = "ItemControl.settings.yml";

/// Extension of requirement documents.
pub const DOCUMENT_EXTENSION: &str = "yml";

/// Resolved paths for one config root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPaths {
    /// Config root
    pub root: PathBuf,
    /// Requirement document folder
    pub folder: PathBuf,
    /// Display name override file
    pub display_names: PathBuf,
    /// Settings file
    pub settings: PathBuf,
}

impl ControlPaths {
    /// Resolve the layout under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let folder = root.join(FOLDER_NAME);
        Self {
            display_names: folder.join(DISPLAY_NAMES_FILE),
            settings: root.join(SETTINGS_FILE),
            folder,
            root,
        }
    }

    /// Create the document folder if it does not exist.
    pub fn ensure_folder(&self) -> Result<()> {
        fs::create_dir_all(&self.folder)?;
        Ok(())
    }

    /// Whether `path` names the display name override file.
    pub fn is_display_names(&self, path: &Path) -> bool {
        path == self.display_names
            || (path.file_name() == self.display_names.file_name()
                && path.parent().and_then(Path::file_name) == self.folder.file_name())
    }

    /// Whether `path` names the settings file.
    pub fn is_settings(&self, path: &Path) -> bool {
        path == self.settings
            || (path.file_name() == self.settings.file_name()
                && path.parent().and_then(Path::file_name) == self.root.file_name())
    }

    /// Whether `path` looks like a requirement document inside the folder.
    pub fn is_document(&self, path: &Path) -> bool {
        path.starts_with(&self.folder)
            && path.extension().is_some_and(|ext| ext == DOCUMENT_EXTENSION)
            && !self.is_display_names(path)
    }

    /// Path a document for `prefab` is written to.
    pub fn document_path(&self, prefab: &str) -> PathBuf {
        self.folder
            .join(format!("{}.{}", prefab, DOCUMENT_EXTENSION))
    }
}
