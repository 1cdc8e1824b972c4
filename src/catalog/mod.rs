//! Interfaces to the host engine's live state.
//!
//! The engine owns items, skill definitions, recipes and the local actor.
//! Item control only reads them through the traits defined here:
//!
//! - [`ItemCatalog`] - item lookup by prefab, recipe availability
//! - [`SkillRegistry`] - which skill ids the running engine defines
//! - [`SkillSource`] - the querying actor's current skill levels
//! - [`RecipeBook`] - the actor's known recipes
//!
//! [`static_catalog`] provides YAML-backed implementations for the CLI
//! and tests.

pub mod static_catalog;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::skills::SkillId;

pub use static_catalog::{ActorFile, CatalogFile, CatalogItem, StaticActor, StaticCatalog};

/// An item known to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Internal prefab name (e.g., "SwordBronze")
    pub prefab: String,
    /// Shared display name token (e.g., "$item_sword_bronze")
    pub name: String,
}

impl Item {
    /// Create a new item.
    pub fn new(prefab: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            prefab: prefab.into(),
            name: name.into(),
        }
    }
}

/// Read access to the engine's item database.
pub trait ItemCatalog: Send + Sync {
    /// Find an item by prefab name.
    ///
    /// Returns a shared handle; the engine keeps ownership of item identity.
    fn find_item(&self, prefab: &str) -> Option<Arc<Item>>;

    /// Whether a crafting recipe produces this item.
    fn has_recipe(&self, _prefab: &str) -> bool {
        false
    }
}

/// Read access to the engine's skill definitions.
pub trait SkillRegistry: Send + Sync {
    /// Whether a skill definition exists for `id`.
    fn has_skill(&self, id: SkillId) -> bool;
}

/// Everything validation needs from the engine.
pub trait Catalog: ItemCatalog + SkillRegistry {}

impl<T: ItemCatalog + SkillRegistry + ?Sized> Catalog for T {}

/// The querying actor's live skill levels.
pub trait SkillSource {
    /// Current level of `skill`; unknown skills read as zero.
    fn skill_level(&self, skill: SkillId) -> f32;
}

/// The querying actor's known recipes.
pub trait RecipeBook {
    /// Whether the actor already knows the recipe for `prefab`.
    fn knows_recipe(&self, prefab: &str) -> bool;

    /// Teach the actor the recipe for `prefab`.
    fn learn_recipe(&mut self, prefab: &str);
}

/// A recipe book shared between the engine and the manager.
pub type SharedRecipeBook = Arc<Mutex<dyn RecipeBook + Send>>;
