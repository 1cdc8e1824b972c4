//! Requirement document schema.
//!
//! This module contains the struct definitions that map to the YAML
//! requirement documents, one per controlled item:
//!
//! ```yaml
//! PrefabName: SwordBronze
//! CraftRequirements:
//!   SkillRequirements:
//!     Swords: 5
//!   AlmanacClassRequirement:
//!     Level: 1
//! EquipRequirements:
//!   SkillRequirements:
//!     Swords: 10
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attributes::{AttributeSystemKind, AttributeThresholds};

/// The three gated actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    Craft,
    Equip,
    Consume,
}

impl RequirementKind {
    /// Evaluation and display order.
    pub const ALL: [RequirementKind; 3] = [
        RequirementKind::Craft,
        RequirementKind::Equip,
        RequirementKind::Consume,
    ];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            RequirementKind::Craft => "Craft",
            RequirementKind::Equip => "Equip",
            RequirementKind::Consume => "Consume",
        }
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A raw requirement document, as authored on disk or sent by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequirementDocument {
    /// Prefab name of the controlled item
    pub prefab_name: String,

    /// Requirements to craft the item
    #[serde(default)]
    pub craft_requirements: Requirement,

    /// Requirements to equip the item
    #[serde(default)]
    pub equip_requirements: Requirement,

    /// Requirements to consume the item
    #[serde(default)]
    pub consume_requirements: Requirement,
}

impl RequirementDocument {
    /// Create a document with no requirements.
    pub fn new(prefab_name: impl Into<String>) -> Self {
        Self {
            prefab_name: prefab_name.into(),
            craft_requirements: Requirement::default(),
            equip_requirements: Requirement::default(),
            consume_requirements: Requirement::default(),
        }
    }

    /// The requirement block for one action.
    pub fn block(&self, kind: RequirementKind) -> &Requirement {
        match kind {
            RequirementKind::Craft => &self.craft_requirements,
            RequirementKind::Equip => &self.equip_requirements,
            RequirementKind::Consume => &self.consume_requirements,
        }
    }
}

/// Requirements for one action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Requirement {
    /// Skill name to minimum level, in authoring order
    pub skill_requirements: IndexMap<String, i32>,

    /// Class system thresholds
    pub almanac_class_requirement: ClassRequirement,

    /// Secondary leveling system thresholds
    #[serde(rename = "EpicMMORequirement")]
    pub epic_mmo_requirement: EpicMmoRequirement,
}

impl Requirement {
    /// Add a skill threshold.
    pub fn with_skill(mut self, skill: &str, level: i32) -> Self {
        self.skill_requirements.insert(skill.to_string(), level);
        self
    }
}

/// Class system thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ClassRequirement {
    pub level: i32,
    pub constitution: i32,
    pub dexterity: i32,
    pub strength: i32,
    pub intelligence: i32,
    pub wisdom: i32,
}

impl AttributeThresholds for ClassRequirement {
    fn system(&self) -> AttributeSystemKind {
        AttributeSystemKind::AlmanacClass
    }

    fn thresholds(&self) -> Vec<(&'static str, i32)> {
        vec![
            ("Level", self.level),
            ("Constitution", self.constitution),
            ("Dexterity", self.dexterity),
            ("Strength", self.strength),
            ("Intelligence", self.intelligence),
            ("Wisdom", self.wisdom),
        ]
    }
}

/// Secondary leveling system thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EpicMmoRequirement {
    pub level: i32,
    pub strength: i32,
    pub agility: i32,
    pub intellect: i32,
    pub body: i32,
    pub vigour: i32,
    pub special: i32,
}

impl AttributeThresholds for EpicMmoRequirement {
    fn system(&self) -> AttributeSystemKind {
        AttributeSystemKind::EpicMmo
    }

    fn thresholds(&self) -> Vec<(&'static str, i32)> {
        vec![
            ("Level", self.level),
            ("Strength", self.strength),
            ("Agility", self.agility),
            ("Intellect", self.intellect),
            ("Body", self.body),
            ("Vigour", self.vigour),
            ("Special", self.special),
        ]
    }
}

/// Documents written to an empty folder so first-run deployments have a
/// working sample.
pub fn example_documents() -> Vec<RequirementDocument> {
    let mut sword = RequirementDocument::new("SwordBronze");
    sword.craft_requirements = Requirement::default().with_skill("Swords", 5);
    sword.craft_requirements.almanac_class_requirement.level = 1;
    sword.equip_requirements = Requirement::default().with_skill("Swords", 10);
    vec![sword]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_document() {
        let doc: RequirementDocument = serde_yaml::from_str("PrefabName: Wood").unwrap();
        assert_eq!(doc.prefab_name, "Wood");
        assert!(doc.craft_requirements.skill_requirements.is_empty());
        assert_eq!(doc.equip_requirements, Requirement::default());
    }

    #[test]
    fn missing_prefab_name_is_an_error() {
        let result: Result<RequirementDocument, _> =
            serde_yaml::from_str("CraftRequirements: {}");
        assert!(result.is_err());
    }

    #[test]
    fn parses_full_document() {
        let yaml = r#"
PrefabName: SwordBronze
CraftRequirements:
  SkillRequirements:
    Swords: 5
    Crafting: 2
  AlmanacClassRequirement:
    Level: 1
    Wisdom: 4
EquipRequirements:
  SkillRequirements:
    Swords: 10
  EpicMMORequirement:
    Strength: 8
"#;
        let doc: RequirementDocument = serde_yaml::from_str(yaml).unwrap();
        let craft = &doc.craft_requirements;
        let keys: Vec<_> = craft.skill_requirements.keys().cloned().collect();
        assert_eq!(keys, vec!["Swords", "Crafting"]);
        assert_eq!(craft.almanac_class_requirement.level, 1);
        assert_eq!(craft.almanac_class_requirement.wisdom, 4);
        assert_eq!(doc.equip_requirements.epic_mmo_requirement.strength, 8);
        assert!(doc.consume_requirements.skill_requirements.is_empty());
    }

    #[test]
    fn block_selects_by_kind() {
        let doc = &example_documents()[0];
        assert_eq!(
            doc.block(RequirementKind::Equip).skill_requirements["Swords"],
            10
        );
        assert!(doc.block(RequirementKind::Consume).skill_requirements.is_empty());
    }

    #[test]
    fn empty_thresholds_report_empty() {
        assert!(ClassRequirement::default().is_empty());
        let class = ClassRequirement {
            dexterity: 2,
            ..Default::default()
        };
        assert!(!class.is_empty());
    }

    #[test]
    fn serialized_document_uses_engine_field_names() {
        let yaml = serde_yaml::to_string(&example_documents()[0]).unwrap();
        assert!(yaml.contains("PrefabName: SwordBronze"));
        assert!(yaml.contains("SkillRequirements:"));
        assert!(yaml.contains("EpicMMORequirement:"));
    }
}
