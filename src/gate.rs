//! Action gate for the engine hook layer.
//!
//! Each engine hook passes the engine's own verdict in and gets the final
//! verdict back. The gate can only tighten a verdict, never loosen it, and
//! passes everything through while item control is disabled.

use std::sync::Arc;

use crate::catalog::{Item, SkillSource};
use crate::config::SettingsHandle;
use crate::query::{MissingRequirement, PlainTooltip, RequirementQuery, TooltipFormatter};
use crate::requirements::RequirementKind;

/// Applies requirement checks to engine verdicts.
pub struct ItemGate {
    query: RequirementQuery,
    settings: SettingsHandle,
    formatter: Box<dyn TooltipFormatter>,
}

impl ItemGate {
    /// Create a gate over `query`. `enabled` is read from `settings` on
    /// every check, so a reloaded settings file takes effect immediately.
    pub fn new(query: RequirementQuery, settings: SettingsHandle) -> Self {
        Self {
            query,
            settings,
            formatter: Box::new(PlainTooltip),
        }
    }

    /// Use a different tooltip formatter.
    pub fn with_formatter(mut self, formatter: Box<dyn TooltipFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.enabled()
    }

    pub fn query(&self) -> &RequirementQuery {
        &self.query
    }

    /// Whether `kind` is allowed for the item under `key`. Always true while
    /// disabled.
    pub fn allow(
        &self,
        kind: RequirementKind,
        key: &str,
        by_name: bool,
        actor: Option<&dyn SkillSource>,
    ) -> bool {
        !self.is_enabled() || self.query.can(kind, key, by_name, actor)
    }

    /// Unmet requirements for the item under `key`; empty while disabled.
    pub fn missing(
        &self,
        key: &str,
        by_name: bool,
        actor: Option<&dyn SkillSource>,
    ) -> Vec<MissingRequirement> {
        if !self.is_enabled() {
            return Vec::new();
        }
        self.query.describe_missing(key, by_name, actor)
    }

    /// Crafting check, keyed by the recipe's result prefab.
    pub fn allow_craft(&self, verdict: bool, prefab: &str, actor: Option<&dyn SkillSource>) -> bool {
        verdict && self.allow(RequirementKind::Craft, prefab, false, actor)
    }

    /// Equip check, keyed by the item's shared name.
    pub fn allow_equip(&self, verdict: bool, name: &str, actor: Option<&dyn SkillSource>) -> bool {
        verdict && self.allow(RequirementKind::Equip, name, true, actor)
    }

    /// Consume check, keyed by the item's shared name.
    pub fn allow_consume(
        &self,
        verdict: bool,
        name: &str,
        actor: Option<&dyn SkillSource>,
    ) -> bool {
        verdict && self.allow(RequirementKind::Consume, name, true, actor)
    }

    /// Drop selected ammunition the actor may not equip.
    pub fn filter_ammo(
        &self,
        ammo: Option<Arc<Item>>,
        actor: Option<&dyn SkillSource>,
    ) -> Option<Arc<Item>> {
        ammo.filter(|item| self.allow_equip(true, &item.name, actor))
    }

    /// Append unmet requirements to an item tooltip, keyed by shared name.
    pub fn append_tooltip(
        &self,
        base: &str,
        name: &str,
        actor: Option<&dyn SkillSource>,
    ) -> String {
        if !self.is_enabled() {
            return base.to_string();
        }
        match self
            .query
            .tooltip(name, true, actor, self.formatter.as_ref())
        {
            Some(extra) => format!("{}\n\n{}", base, extra),
            None => base.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeSystems;
    use crate::catalog::{StaticActor, StaticCatalog};
    use crate::config::Settings;
    use crate::requirements::{
        example_documents, RequirementStore, SkillDisplayNames, Validator,
    };

    fn gate(enabled: bool) -> ItemGate {
        gate_with(SettingsHandle::new(Settings {
            enabled,
            ..Settings::default()
        }))
    }

    fn gate_with(settings: SettingsHandle) -> ItemGate {
        let catalog = StaticCatalog::new().with_item("SwordBronze", "$item_sword_bronze");
        let validator = Validator::new(&catalog);
        let store = RequirementStore::new();
        store.replace_all(vec![validator.validate(&example_documents()[0]).unwrap().item]);
        let query = RequirementQuery::new(store, SkillDisplayNames::new(), AttributeSystems::new());
        ItemGate::new(query, settings)
    }

    #[test]
    fn tightens_engine_verdicts() {
        let gate = gate(true);
        let actor = StaticActor::new().with_skill("Swords", 7.0);

        assert!(gate.allow_craft(true, "SwordBronze", Some(&actor)));
        assert!(!gate.allow_craft(false, "SwordBronze", Some(&actor)));
        assert!(!gate.allow_equip(true, "$item_sword_bronze", Some(&actor)));
        assert!(gate.allow_consume(true, "$item_sword_bronze", Some(&actor)));
    }

    #[test]
    fn disabled_gate_passes_verdicts_through() {
        let gate = gate(false);
        assert!(gate.allow_equip(true, "$item_sword_bronze", None));
        assert!(!gate.allow_equip(false, "$item_sword_bronze", None));
        assert_eq!(gate.append_tooltip("Bronze sword", "$item_sword_bronze", None), "Bronze sword");
    }

    #[test]
    fn disabled_gate_reports_nothing_missing() {
        let disabled = gate(false);
        assert!(disabled.allow(RequirementKind::Craft, "SwordBronze", false, None));
        assert!(disabled.missing("SwordBronze", false, None).is_empty());

        let enabled = gate(true);
        assert!(!enabled.allow(RequirementKind::Craft, "SwordBronze", false, None));
        assert_eq!(enabled.missing("SwordBronze", false, None).len(), 2);
    }

    #[test]
    fn follows_settings_replacement() {
        let settings = SettingsHandle::default();
        let gate = gate_with(settings.clone());
        assert!(!gate.allow_equip(true, "$item_sword_bronze", None));

        settings.store(Settings {
            enabled: false,
            ..Settings::default()
        });
        assert!(!gate.is_enabled());
        assert!(gate.allow_equip(true, "$item_sword_bronze", None));
    }

    #[test]
    fn filters_unequippable_ammo() {
        let settings = SettingsHandle::default();
        let gate = gate_with(settings.clone());
        let sword = Arc::new(Item::new("SwordBronze", "$item_sword_bronze"));
        let arrow = Arc::new(Item::new("ArrowWood", "$item_arrow_wood"));

        assert!(gate.filter_ammo(Some(sword.clone()), None).is_none());
        assert_eq!(gate.filter_ammo(Some(arrow.clone()), None), Some(arrow));
        assert!(gate.filter_ammo(None, None).is_none());

        settings.store(Settings {
            enabled: false,
            ..Settings::default()
        });
        assert!(gate.filter_ammo(Some(sword), None).is_some());
    }

    #[test]
    fn tooltip_appends_missing_requirements() {
        let gate = gate(true);
        let actor = StaticActor::new().with_skill("Swords", 7.0);

        let tooltip = gate.append_tooltip("Bronze sword", "$item_sword_bronze", Some(&actor));
        assert_eq!(tooltip, "Bronze sword\n\nEquip requirements:\n  Swords: 10");

        let unrelated = gate.append_tooltip("Wood", "$item_wood", Some(&actor));
        assert_eq!(unrelated, "Wood");
    }

    struct Compact;

    impl TooltipFormatter for Compact {
        fn format(&self, missing: &[MissingRequirement]) -> String {
            missing
                .iter()
                .map(|m| format!("{} {}", m.label, m.required))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    #[test]
    fn custom_formatter_is_used() {
        let gate = gate(true).with_formatter(Box::new(Compact));
        assert_eq!(
            gate.append_tooltip("Bronze sword", "$item_sword_bronze", None),
            "Bronze sword\n\nSwords 5, Swords 10"
        );
    }
}
