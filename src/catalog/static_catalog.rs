//! YAML-described catalog and actor.
//!
//! A dedicated host has no live game world to query, so the CLI reads the
//! item list, recipes and registered dynamic skills from a catalog file:
//!
//! ```yaml
//! items:
//!   - prefab: SwordBronze
//!     name: $item_sword_bronze
//!     recipe: true
//! skills:
//!   - Mining
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::{Item, ItemCatalog, RecipeBook, SkillRegistry, SkillSource};
use crate::attributes::{AttributeSystemKind, AttributeSystems, StaticAttributeSystem};
use crate::skills::{dynamic_skill_id, SkillId, SkillType};

/// On-disk catalog format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    /// Items the engine knows
    pub items: Vec<CatalogItem>,
    /// Names of dynamically registered skills
    pub skills: Vec<String>,
}

/// One item entry in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub prefab: String,
    pub name: String,
    #[serde(default)]
    pub recipe: bool,
}

/// In-memory catalog implementing [`ItemCatalog`] and [`SkillRegistry`].
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: HashMap<String, Arc<Item>>,
    recipes: HashSet<String>,
    skills: HashSet<SkillId>,
}

impl StaticCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item.
    pub fn with_item(mut self, prefab: &str, name: &str) -> Self {
        self.items
            .insert(prefab.to_string(), Arc::new(Item::new(prefab, name)));
        self
    }

    /// Add an item that has a crafting recipe.
    pub fn with_craftable_item(mut self, prefab: &str, name: &str) -> Self {
        self.recipes.insert(prefab.to_string());
        self.with_item(prefab, name)
    }

    /// Register a dynamic skill by display name.
    pub fn with_skill(mut self, name: &str) -> Self {
        if let Some(id) = dynamic_skill_id(name) {
            self.skills.insert(id);
        }
        self
    }

    /// Build a catalog from its file representation.
    pub fn from_file(file: CatalogFile) -> Self {
        let mut catalog = Self::new();
        for item in file.items {
            catalog = if item.recipe {
                catalog.with_craftable_item(&item.prefab, &item.name)
            } else {
                catalog.with_item(&item.prefab, &item.name)
            };
        }
        for skill in &file.skills {
            catalog = catalog.with_skill(skill);
        }
        catalog
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let file: CatalogFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
        Ok(Self::from_file(file))
    }

    /// Number of items in the catalog.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl ItemCatalog for StaticCatalog {
    fn find_item(&self, prefab: &str) -> Option<Arc<Item>> {
        self.items.get(prefab).cloned()
    }

    fn has_recipe(&self, prefab: &str) -> bool {
        self.recipes.contains(prefab)
    }
}

impl SkillRegistry for StaticCatalog {
    fn has_skill(&self, id: SkillId) -> bool {
        id.is_builtin() || self.skills.contains(&id)
    }
}

/// On-disk actor format used by `item-control query`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorFile {
    /// Skill name to current level
    pub skills: HashMap<String, f32>,
    /// Recipes the actor already knows
    pub known_recipes: Vec<String>,
    /// Attribute values per installed attribute system
    pub attributes: HashMap<AttributeSystemKind, HashMap<String, i32>>,
}

/// In-memory actor implementing [`SkillSource`] and [`RecipeBook`].
#[derive(Debug, Clone, Default)]
pub struct StaticActor {
    levels: HashMap<SkillId, f32>,
    known_recipes: HashSet<String>,
}

impl StaticActor {
    /// Create an actor with no skills.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a skill level, by built-in or dynamic name.
    pub fn with_skill(mut self, name: &str, level: f32) -> Self {
        let id = SkillType::from_name(name)
            .map(SkillId::from)
            .or_else(|| dynamic_skill_id(name));
        if let Some(id) = id {
            self.levels.insert(id, level);
        }
        self
    }

    /// Load an actor file, returning the actor and its attribute systems.
    pub fn load(path: &Path) -> anyhow::Result<(Self, AttributeSystems)> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read actor {}", path.display()))?;
        let file: ActorFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse actor {}", path.display()))?;
        Ok(Self::from_file(file))
    }

    /// Build an actor and its attribute systems from the file format.
    pub fn from_file(file: ActorFile) -> (Self, AttributeSystems) {
        let mut actor = Self::new();
        for (name, level) in &file.skills {
            actor = actor.with_skill(name, *level);
        }
        actor.known_recipes = file.known_recipes.into_iter().collect();

        let mut systems = AttributeSystems::new();
        for (kind, values) in file.attributes {
            systems.install(Box::new(StaticAttributeSystem::new(kind, values)));
        }
        (actor, systems)
    }
}

impl SkillSource for StaticActor {
    fn skill_level(&self, skill: SkillId) -> f32 {
        self.levels.get(&skill).copied().unwrap_or(0.0)
    }
}

impl RecipeBook for StaticActor {
    fn knows_recipe(&self, prefab: &str) -> bool {
        self.known_recipes.contains(prefab)
    }

    fn learn_recipe(&mut self, prefab: &str) {
        self.known_recipes.insert(prefab.to_string());
    }
}
