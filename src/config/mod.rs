//! Configuration for item control.
//!
//! - Filesystem layout in [`paths`]
//! - Settings file loading and the shared [`SettingsHandle`] in [`settings`]
//!
//! # Example
//!
//! ```
//! use item_control::config::{ControlPaths, Settings};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let paths = ControlPaths::new(temp.path());
//! paths.ensure_folder().unwrap();
//!
//! let settings = Settings::load(&paths.settings).unwrap();
//! assert!(settings.enabled);
//! ```

pub mod paths;
pub mod settings;

pub use paths::{ControlPaths, DISPLAY_NAMES_FILE, DOCUMENT_EXTENSION, FOLDER_NAME, SETTINGS_FILE};
pub use settings::{Settings, SettingsHandle};
