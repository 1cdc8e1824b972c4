//! Engine settings.

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ItemControlError, Result};
use crate::requirements::ValidationPolicy;

/// Settings read from `ItemControl.settings.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// If off, every action is allowed and no tooltip is added
    pub enabled: bool,

    /// If on, the actor learns every controlled item's recipe
    #[serde(skip_serializing_if = "is_false")]
    pub learn_items: bool,

    /// How to treat unresolvable skill names
    pub validation: ValidationPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            learn_items: false,
            validation: ValidationPolicy::Lenient,
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if it is missing.
    ///
    /// # Errors
    ///
    /// Returns `SettingsParse` if the YAML is invalid.
    pub fn load(path: &Path) -> Result<Settings> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings at {}, using defaults", path.display());
                return Ok(Settings::default());
            }
            Err(e) => return Err(ItemControlError::Io(e)),
        };

        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_yaml::from_str(&content).map_err(|e| ItemControlError::SettingsParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Shared handle to the current settings.
///
/// The manager replaces the settings when the file changes; gates and
/// queries holding a clone see the new values on their next read.
#[derive(Debug, Clone, Default)]
pub struct SettingsHandle {
    current: Arc<ArcSwap<Settings>>,
}

impl SettingsHandle {
    pub fn new(settings: Settings) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(settings)),
        }
    }

    /// The current settings.
    pub fn load(&self) -> Arc<Settings> {
        self.current.load_full()
    }

    /// Replace the settings.
    pub fn store(&self, settings: Settings) {
        self.current.store(Arc::new(settings));
    }

    /// Whether item control is currently enabled.
    pub fn enabled(&self) -> bool {
        self.current.load().enabled
    }
}
