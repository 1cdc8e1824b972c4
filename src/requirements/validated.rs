//! Query-ready requirement types produced by validation.

use std::sync::Arc;

use super::schema::{ClassRequirement, EpicMmoRequirement, RequirementKind};
use crate::attributes::AttributeThresholds;
use crate::catalog::Item;
use crate::skills::SkillId;

/// A skill threshold whose name resolved to a known skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSkillRequirement {
    /// Canonical skill id
    pub skill: SkillId,
    /// Skill name as written in the document
    pub skill_name: String,
    /// Minimum level
    pub level: i32,
}

/// Validated requirements for one action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedRequirement {
    /// Resolved skill thresholds, in document order
    pub skills: Vec<ValidatedSkillRequirement>,
    /// Class system thresholds, copied verbatim
    pub class: ClassRequirement,
    /// Secondary leveling thresholds, copied verbatim
    pub epic_mmo: EpicMmoRequirement,
}

impl ValidatedRequirement {
    /// Attribute threshold blocks in evaluation order.
    pub fn attribute_blocks(&self) -> [&dyn AttributeThresholds; 2] {
        [&self.class, &self.epic_mmo]
    }

    /// Whether this block requires nothing.
    pub fn is_empty(&self) -> bool {
        self.skills.iter().all(|skill| skill.level <= 0)
            && self.attribute_blocks().iter().all(|block| block.is_empty())
    }
}

/// A controlled item with its validated requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem {
    /// The catalog item, shared with the engine
    pub item: Arc<Item>,
    pub craft: ValidatedRequirement,
    pub equip: ValidatedRequirement,
    pub consume: ValidatedRequirement,
}

impl ValidatedItem {
    /// Prefab name, the store's internal key.
    pub fn prefab(&self) -> &str {
        &self.item.prefab
    }

    /// Shared display name, the store's name key.
    pub fn name(&self) -> &str {
        &self.item.name
    }

    /// Requirements for one action.
    pub fn requirement(&self, kind: RequirementKind) -> &ValidatedRequirement {
        match kind {
            RequirementKind::Craft => &self.craft,
            RequirementKind::Equip => &self.equip,
            RequirementKind::Consume => &self.consume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_requirement_is_empty() {
        assert!(ValidatedRequirement::default().is_empty());
    }

    #[test]
    fn skill_threshold_makes_requirement_non_empty() {
        let requirement = ValidatedRequirement {
            skills: vec![ValidatedSkillRequirement {
                skill: SkillId(1),
                skill_name: "Swords".into(),
                level: 5,
            }],
            ..Default::default()
        };
        assert!(!requirement.is_empty());
    }

    #[test]
    fn attribute_threshold_makes_requirement_non_empty() {
        let mut requirement = ValidatedRequirement::default();
        requirement.epic_mmo.vigour = 3;
        assert!(!requirement.is_empty());
    }
}
