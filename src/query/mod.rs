//! Permission checks against the current requirement store.
//!
//! Every operation is a pure read of one store generation. Items the store
//! does not control are unrestricted. A missing actor reads every skill as
//! zero, so any positive skill threshold fails.
//!
//! # Example
//!
//! ```
//! use item_control::attributes::AttributeSystems;
//! use item_control::catalog::{StaticActor, StaticCatalog};
//! use item_control::query::RequirementQuery;
//! use item_control::requirements::{
//!     example_documents, RequirementStore, SkillDisplayNames, Validator,
//! };
//!
//! let catalog = StaticCatalog::new().with_item("SwordBronze", "$item_sword_bronze");
//! let validation = Validator::new(&catalog).validate(&example_documents()[0]).unwrap();
//! let store = RequirementStore::new();
//! store.replace_all(vec![validation.item]);
//!
//! let query = RequirementQuery::new(store, SkillDisplayNames::new(), AttributeSystems::new());
//! let actor = StaticActor::new().with_skill("Swords", 7.0);
//! assert!(query.can_craft("SwordBronze", false, Some(&actor)));
//! assert!(!query.can_equip("$item_sword_bronze", true, Some(&actor)));
//! ```

pub mod tooltip;

use serde::Serialize;

use crate::attributes::AttributeSystems;
use crate::catalog::SkillSource;
use crate::requirements::{
    RequirementKind, RequirementStore, SkillDisplayNames, ValidatedItem, ValidatedRequirement,
};

pub use tooltip::{PlainTooltip, TooltipFormatter};

/// One unmet threshold, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingRequirement {
    /// Action the threshold gates
    pub kind: RequirementKind,
    /// Skill or attribute label
    pub label: String,
    /// Required level or value
    pub required: i32,
}

/// Query surface consumed by the engine hook layer.
#[derive(Debug)]
pub struct RequirementQuery {
    store: RequirementStore,
    names: SkillDisplayNames,
    attributes: AttributeSystems,
}

impl RequirementQuery {
    /// Create a query over a store and display name mapping.
    pub fn new(
        store: RequirementStore,
        names: SkillDisplayNames,
        attributes: AttributeSystems,
    ) -> Self {
        Self {
            store,
            names,
            attributes,
        }
    }

    /// Whether the actor meets every requirement of `kind` for the item.
    pub fn can(
        &self,
        kind: RequirementKind,
        key: &str,
        by_name: bool,
        actor: Option<&dyn SkillSource>,
    ) -> bool {
        match self.store.get(key, by_name) {
            Some(item) => self
                .missing_in(kind, item.requirement(kind), actor)
                .is_empty(),
            None => true,
        }
    }

    /// Whether the actor may craft the item.
    pub fn can_craft(&self, key: &str, by_name: bool, actor: Option<&dyn SkillSource>) -> bool {
        self.can(RequirementKind::Craft, key, by_name, actor)
    }

    /// Whether the actor may equip the item.
    pub fn can_equip(&self, key: &str, by_name: bool, actor: Option<&dyn SkillSource>) -> bool {
        self.can(RequirementKind::Equip, key, by_name, actor)
    }

    /// Whether the actor may consume the item.
    pub fn can_consume(&self, key: &str, by_name: bool, actor: Option<&dyn SkillSource>) -> bool {
        self.can(RequirementKind::Consume, key, by_name, actor)
    }

    /// Whether any requirement of the item is unmet.
    pub fn has_any_requirement(
        &self,
        key: &str,
        by_name: bool,
        actor: Option<&dyn SkillSource>,
    ) -> bool {
        !self.describe_missing(key, by_name, actor).is_empty()
    }

    /// Every unmet requirement of the item: craft, then equip, then
    /// consume; skills in document order, then attributes.
    pub fn describe_missing(
        &self,
        key: &str,
        by_name: bool,
        actor: Option<&dyn SkillSource>,
    ) -> Vec<MissingRequirement> {
        match self.store.get(key, by_name) {
            Some(item) => self.missing_for_item(&item, actor),
            None => Vec::new(),
        }
    }

    /// Render unmet requirements through `formatter`, or `None` if all are met.
    pub fn tooltip(
        &self,
        key: &str,
        by_name: bool,
        actor: Option<&dyn SkillSource>,
        formatter: &dyn TooltipFormatter,
    ) -> Option<String> {
        let missing = self.describe_missing(key, by_name, actor);
        if missing.is_empty() {
            None
        } else {
            Some(formatter.format(&missing))
        }
    }

    /// Prefab names of every controlled item, sorted.
    pub fn item_keys(&self) -> Vec<String> {
        self.store.item_keys()
    }

    fn missing_for_item(
        &self,
        item: &ValidatedItem,
        actor: Option<&dyn SkillSource>,
    ) -> Vec<MissingRequirement> {
        RequirementKind::ALL
            .iter()
            .flat_map(|&kind| self.missing_in(kind, item.requirement(kind), actor))
            .collect()
    }

    fn missing_in(
        &self,
        kind: RequirementKind,
        requirement: &ValidatedRequirement,
        actor: Option<&dyn SkillSource>,
    ) -> Vec<MissingRequirement> {
        let mut missing = Vec::new();

        for skill in &requirement.skills {
            let current = actor.map_or(0.0, |actor| actor.skill_level(skill.skill));
            if current < skill.level as f32 {
                missing.push(MissingRequirement {
                    kind,
                    label: self.names.label(skill),
                    required: skill.level,
                });
            }
        }

        for block in requirement.attribute_blocks() {
            // Uninstalled systems never block.
            let Some(system) = self.attributes.available(block.system()) else {
                continue;
            };
            for (name, threshold) in block.thresholds() {
                if threshold <= 0 {
                    continue;
                }
                let Some(value) = system.attribute(name) else {
                    continue;
                };
                if value < threshold {
                    missing.push(MissingRequirement {
                        kind,
                        label: format!("{} {}", block.system().label(), name),
                        required: threshold,
                    });
                }
            }
        }

        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{AttributeSystemKind, StaticAttributeSystem};
    use crate::catalog::{StaticActor, StaticCatalog};
    use crate::requirements::{example_documents, Requirement, RequirementDocument, Validator};
    use std::collections::HashMap;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new()
            .with_item("SwordBronze", "$item_sword_bronze")
            .with_item("Wood", "$item_wood")
            .with_item("MeadHealthMinor", "$item_mead_hp_minor")
            .with_skill("custom skill")
    }

    fn store_with(docs: &[RequirementDocument]) -> RequirementStore {
        let catalog = catalog();
        let validator = Validator::new(&catalog);
        let store = RequirementStore::new();
        store.replace_all(
            docs.iter()
                .map(|doc| validator.validate(doc).unwrap().item)
                .collect(),
        );
        store
    }

    fn query_with(docs: &[RequirementDocument], attributes: AttributeSystems) -> RequirementQuery {
        RequirementQuery::new(store_with(docs), SkillDisplayNames::new(), attributes)
    }

    fn sword_query() -> RequirementQuery {
        let mut docs = example_documents();
        // Class thresholds are irrelevant without the class system installed.
        docs.push(RequirementDocument::new("Wood"));
        query_with(&docs, AttributeSystems::new())
    }

    fn class_system(level: i32) -> AttributeSystems {
        let mut systems = AttributeSystems::new();
        systems.install(Box::new(StaticAttributeSystem::new(
            AttributeSystemKind::AlmanacClass,
            HashMap::from([("Level".to_string(), level)]),
        )));
        systems
    }

    #[test]
    fn sword_bronze_scenario() {
        let query = sword_query();
        let actor = StaticActor::new().with_skill("Swords", 7.0);

        assert!(query.can_craft("SwordBronze", false, Some(&actor)));
        assert!(!query.can_equip("SwordBronze", false, Some(&actor)));
        assert!(query.can_consume("SwordBronze", false, Some(&actor)));

        let missing = query.describe_missing("SwordBronze", false, Some(&actor));
        assert_eq!(
            missing,
            vec![MissingRequirement {
                kind: RequirementKind::Equip,
                label: "Swords".into(),
                required: 10,
            }]
        );
    }

    #[test]
    fn lookup_by_display_name() {
        let query = sword_query();
        let actor = StaticActor::new().with_skill("Swords", 12.0);
        assert!(query.can_equip("$item_sword_bronze", true, Some(&actor)));
        assert!(!query.has_any_requirement("$item_sword_bronze", true, Some(&actor)));
    }

    #[test]
    fn missing_actor_fails_positive_thresholds() {
        let query = sword_query();
        assert!(!query.can_craft("SwordBronze", false, None));
        assert!(!query.can_equip("SwordBronze", false, None));
        assert!(query.can_consume("SwordBronze", false, None));

        assert!(query.can_craft("Wood", false, None));
        assert!(query.can_equip("Wood", false, None));
        assert!(query.can_consume("Wood", false, None));
    }

    #[test]
    fn uncontrolled_items_are_unrestricted() {
        let query = sword_query();
        assert!(query.can_equip("AxeStone", false, None));
        assert!(!query.has_any_requirement("AxeStone", false, None));
        assert!(query.describe_missing("AxeStone", false, None).is_empty());
    }

    #[test]
    fn describe_missing_orders_by_block_then_skill() {
        let mut doc = RequirementDocument::new("MeadHealthMinor");
        doc.craft_requirements = Requirement::default().with_skill("Cooking", 10);
        doc.consume_requirements = Requirement::default()
            .with_skill("custom_skill", 5)
            .with_skill("Run", 3);
        doc.equip_requirements = Requirement::default().with_skill("Swords", 1);
        let query = query_with(&[doc], AttributeSystems::new());

        let labels: Vec<_> = query
            .describe_missing("MeadHealthMinor", false, None)
            .into_iter()
            .map(|m| (m.kind, m.label, m.required))
            .collect();
        assert_eq!(
            labels,
            vec![
                (RequirementKind::Craft, "Cooking".to_string(), 10),
                (RequirementKind::Equip, "Swords".to_string(), 1),
                (RequirementKind::Consume, "custom_skill".to_string(), 5),
                (RequirementKind::Consume, "Run".to_string(), 3),
            ]
        );
    }

    #[test]
    fn uninstalled_attribute_system_is_satisfied() {
        let query = sword_query();
        let actor = StaticActor::new().with_skill("Swords", 5.0);
        assert!(query.can_craft("SwordBronze", false, Some(&actor)));
    }

    #[test]
    fn installed_attribute_system_is_checked() {
        let docs = example_documents();
        let actor = StaticActor::new().with_skill("Swords", 5.0);

        let low = query_with(&docs, class_system(0));
        assert!(!low.can_craft("SwordBronze", false, Some(&actor)));
        assert_eq!(
            low.describe_missing("SwordBronze", false, Some(&actor))[0].label,
            "Class Level"
        );

        let high = query_with(&docs, class_system(1));
        assert!(high.can_craft("SwordBronze", false, Some(&actor)));
    }

    #[test]
    fn display_names_relabel_missing_skills() {
        let names = SkillDisplayNames::new();
        names.replace(HashMap::from([("Swords".to_string(), "Blades".to_string())]));
        let query =
            RequirementQuery::new(store_with(&example_documents()), names, AttributeSystems::new());

        let missing = query.describe_missing("SwordBronze", false, None);
        assert!(missing.iter().all(|m| m.label == "Blades"));
    }

    #[test]
    fn tooltip_only_when_something_is_missing() {
        let query = sword_query();
        let strong = StaticActor::new().with_skill("Swords", 50.0);
        assert!(query
            .tooltip("SwordBronze", false, Some(&strong), &PlainTooltip)
            .is_none());
        assert!(query
            .tooltip("SwordBronze", false, None, &PlainTooltip)
            .is_some());
    }

    #[test]
    fn item_keys_lists_controlled_items() {
        let query = sword_query();
        assert_eq!(query.item_keys(), vec!["SwordBronze", "Wood"]);
    }
}
