//! Item control - skill and attribute requirements for items.
//!
//! Server operators author one YAML document per item stating the skill
//! levels (and optional class or leveling-system thresholds) an actor needs
//! to craft, equip or consume it. The host validates the documents against
//! the running catalog and distributes them to peers; every process then
//! answers permission queries locally.
//!
//! # Modules
//!
//! - [`skills`] - Skill identity and name resolution
//! - [`catalog`] - Interfaces to the engine's items, skills and actor
//! - [`attributes`] - Optional external attribute systems
//! - [`requirements`] - Document schema, validation and the requirement store
//! - [`sync`] - Host-to-peer snapshot channel
//! - [`control`] - Host and peer reload orchestration
//! - [`watch`] - Filesystem watching
//! - [`query`] - Permission checks and tooltips
//! - [`gate`] - Verdict filter for engine hooks
//! - [`config`] - Paths and settings
//! - [`cli`] - Command-line interface
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use item_control::attributes::AttributeSystems;
//! use item_control::catalog::{StaticActor, StaticCatalog};
//! use item_control::config::ControlPaths;
//! use item_control::control::{ItemControlManager, Role};
//! use item_control::sync::SyncedValue;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let catalog = StaticCatalog::new().with_item("SwordBronze", "$item_sword_bronze");
//! let mut host = ItemControlManager::new(
//!     Role::Host,
//!     ControlPaths::new(temp.path()),
//!     Arc::new(catalog),
//!     Arc::new(SyncedValue::server_item_controller()),
//! );
//!
//! // An empty folder gets the SwordBronze example written and loaded.
//! host.init().unwrap();
//!
//! let query = host.query(AttributeSystems::new());
//! let actor = StaticActor::new().with_skill("Swords", 7.0);
//! assert!(query.can_craft("SwordBronze", false, Some(&actor)));
//! assert!(!query.can_equip("SwordBronze", false, Some(&actor)));
//! ```

pub mod attributes;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod control;
pub mod error;
pub mod gate;
pub mod query;
pub mod requirements;
pub mod skills;
pub mod sync;
pub mod ui;
pub mod watch;

pub use error::{ItemControlError, Result};
