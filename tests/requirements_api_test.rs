//! Integration tests for loading, validating and querying requirements.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use item_control::attributes::{AttributeSystemKind, AttributeSystems, StaticAttributeSystem};
use item_control::catalog::{Item, StaticActor, StaticCatalog};
use item_control::config::ControlPaths;
use item_control::control::{ItemControlManager, Role};
use item_control::requirements::{parse_document, RequirementKind, Validator};
use item_control::skills::{dynamic_skill_id, SkillId};
use item_control::sync::SyncedValue;
use tempfile::TempDir;

fn catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with_craftable_item("SwordBronze", "$item_sword_bronze")
        .with_item("MeadHealthMinor", "$item_mead_hp_minor")
        .with_item("ArrowWood", "$item_arrow_wood")
        .with_skill("Mining Deep")
}

fn host_with(documents: &[(&str, &str)]) -> (TempDir, ItemControlManager) {
    let temp = TempDir::new().unwrap();
    let paths = ControlPaths::new(temp.path());
    fs::create_dir_all(&paths.folder).unwrap();
    for (name, content) in documents {
        fs::write(paths.folder.join(name), content).unwrap();
    }
    let mut manager = ItemControlManager::new(
        Role::Host,
        paths,
        Arc::new(catalog()),
        Arc::new(SyncedValue::server_item_controller()),
    );
    manager.init().unwrap();
    (temp, manager)
}

#[test]
fn dynamic_skills_resolve_by_normalized_hash() {
    let doc = parse_document(
        "PrefabName: MeadHealthMinor\nConsumeRequirements:\n  SkillRequirements:\n    Mining_Deep: 20\n    Fishing_Deep: 5\n",
        Path::new("mead.yml"),
    )
    .unwrap();
    let catalog = catalog();
    let validation = Validator::new(&catalog).validate(&doc).unwrap();

    let skills = &validation.item.consume.skills;
    assert_eq!(skills.len(), 1);
    assert_eq!(Some(skills[0].skill), dynamic_skill_id("Mining Deep"));
    assert_eq!(skills[0].skill_name, "Mining_Deep");
    assert_eq!(validation.unresolved[0].kind, RequirementKind::Consume);
    assert_eq!(validation.unresolved[0].name, "Fishing_Deep");
}

#[test]
fn actor_with_dynamic_skill_passes() {
    let (_temp, manager) = host_with(&[(
        "mead.yml",
        "PrefabName: MeadHealthMinor\nConsumeRequirements:\n  SkillRequirements:\n    Mining Deep: 20\n",
    )]);
    let query = manager.query(AttributeSystems::new());

    let novice = StaticActor::new().with_skill("Mining_Deep", 19.5);
    let expert = StaticActor::new().with_skill("Mining Deep", 20.0);
    assert!(!query.can_consume("$item_mead_hp_minor", true, Some(&novice)));
    assert!(query.can_consume("$item_mead_hp_minor", true, Some(&expert)));
}

#[test]
fn builtin_skill_names_are_case_insensitive() {
    let (_temp, manager) = host_with(&[(
        "sword.yml",
        "PrefabName: SwordBronze\nEquipRequirements:\n  SkillRequirements:\n    swords: 10\n",
    )]);
    let item = manager.store().get_by_prefab("SwordBronze").unwrap();
    assert_eq!(item.equip.skills[0].skill, SkillId(1));
}

#[test]
fn epic_mmo_thresholds_are_checked_against_installed_system() {
    let (_temp, manager) = host_with(&[(
        "sword.yml",
        "PrefabName: SwordBronze\nEquipRequirements:\n  EpicMMORequirement:\n    Level: 10\n    Strength: 5\n",
    )]);
    let actor = StaticActor::new();

    let without = manager.query(AttributeSystems::new());
    assert!(without.can_equip("SwordBronze", false, Some(&actor)));

    let mut systems = AttributeSystems::new();
    systems.install(Box::new(StaticAttributeSystem::new(
        AttributeSystemKind::EpicMmo,
        HashMap::from([("Level".to_string(), 12), ("Strength".to_string(), 4)]),
    )));
    let with = manager.query(systems);
    let missing = with.describe_missing("SwordBronze", false, Some(&actor));
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].label, "EpicMMO Strength");
    assert_eq!(missing[0].required, 5);
}

#[test]
fn display_names_file_relabels_dynamic_skills() {
    let (temp, manager) = host_with(&[(
        "mead.yml",
        "PrefabName: MeadHealthMinor\nConsumeRequirements:\n  SkillRequirements:\n    Mining_Deep: 20\n",
    )]);
    let id = dynamic_skill_id("Mining Deep").unwrap();
    fs::write(
        temp.path().join("ItemControl/SkillDisplayNames.yml"),
        format!("\"{}\": Deep Mining\n", id),
    )
    .unwrap();
    assert!(manager.reload_display_names());

    let query = manager.query(AttributeSystems::new());
    let missing = query.describe_missing("MeadHealthMinor", false, None);
    assert_eq!(missing[0].label, "Deep Mining");
}

#[test]
fn gate_blocks_ammo_and_annotates_tooltips() {
    let (_temp, manager) = host_with(&[(
        "arrow.yml",
        "PrefabName: ArrowWood\nEquipRequirements:\n  SkillRequirements:\n    Bows: 15\n",
    )]);
    let gate = manager.gate(AttributeSystems::new());
    let arrow = Arc::new(Item::new("ArrowWood", "$item_arrow_wood"));
    let archer = StaticActor::new().with_skill("Bows", 15.0);

    assert!(gate.filter_ammo(Some(arrow.clone()), None).is_none());
    assert!(gate.filter_ammo(Some(arrow), Some(&archer)).is_some());
    assert!(gate
        .append_tooltip("Wood arrow", "$item_arrow_wood", None)
        .ends_with("Bows: 15"));
}
