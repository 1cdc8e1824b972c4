//! Requirement document validation.
//!
//! Validation cross-references a raw document against the live catalog:
//! - The prefab must exist, otherwise the whole document is rejected
//! - Each skill name is resolved; unresolvable entries are dropped from
//!   their block (lenient) or reject the document (strict)
//! - Attribute thresholds are copied verbatim

use serde::{Deserialize, Serialize};

use super::schema::{Requirement, RequirementDocument, RequirementKind};
use super::validated::{ValidatedItem, ValidatedRequirement, ValidatedSkillRequirement};
use crate::catalog::Catalog;
use crate::error::{ItemControlError, Result};
use crate::skills::SkillResolver;

/// What to do with a document containing unresolvable skill names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Drop the offending entry, keep the rest of the document.
    #[default]
    Lenient,
    /// Reject the whole document.
    Strict,
}

/// A skill entry that did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedSkill {
    /// Block the entry was in
    pub kind: RequirementKind,
    /// Skill name as written
    pub name: String,
}

/// Successful validation result.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    /// The query-ready item
    pub item: ValidatedItem,
    /// Entries dropped under the lenient policy
    pub unresolved: Vec<UnresolvedSkill>,
}

/// Validates documents against a catalog.
pub struct Validator<'a> {
    catalog: &'a dyn Catalog,
    policy: ValidationPolicy,
}

impl<'a> Validator<'a> {
    /// Create a lenient validator.
    pub fn new(catalog: &'a dyn Catalog) -> Self {
        Self {
            catalog,
            policy: ValidationPolicy::Lenient,
        }
    }

    /// Set the validation policy.
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate one document.
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` if the prefab is not in the catalog.
    /// Returns `UnresolvedSkills` under the strict policy if any skill
    /// name does not resolve.
    pub fn validate(&self, doc: &RequirementDocument) -> Result<Validation> {
        let item =
            self.catalog
                .find_item(&doc.prefab_name)
                .ok_or_else(|| ItemControlError::UnknownItem {
                    prefab: doc.prefab_name.clone(),
                })?;

        let resolver = SkillResolver::new(self.catalog);
        let mut unresolved = Vec::new();

        let craft = validate_block(
            &resolver,
            RequirementKind::Craft,
            &doc.craft_requirements,
            &mut unresolved,
        );
        let equip = validate_block(
            &resolver,
            RequirementKind::Equip,
            &doc.equip_requirements,
            &mut unresolved,
        );
        let consume = validate_block(
            &resolver,
            RequirementKind::Consume,
            &doc.consume_requirements,
            &mut unresolved,
        );

        if self.policy == ValidationPolicy::Strict && !unresolved.is_empty() {
            return Err(ItemControlError::UnresolvedSkills {
                prefab: doc.prefab_name.clone(),
                skills: unresolved.into_iter().map(|skill| skill.name).collect(),
            });
        }

        Ok(Validation {
            item: ValidatedItem {
                item,
                craft,
                equip,
                consume,
            },
            unresolved,
        })
    }
}

fn validate_block(
    resolver: &SkillResolver<'_>,
    kind: RequirementKind,
    requirement: &Requirement,
    unresolved: &mut Vec<UnresolvedSkill>,
) -> ValidatedRequirement {
    let mut skills = Vec::with_capacity(requirement.skill_requirements.len());

    for (name, &level) in &requirement.skill_requirements {
        match resolver.resolve(name) {
            Some(skill) => skills.push(ValidatedSkillRequirement {
                skill,
                skill_name: name.clone(),
                level,
            }),
            None => unresolved.push(UnresolvedSkill {
                kind,
                name: name.clone(),
            }),
        }
    }

    ValidatedRequirement {
        skills,
        class: requirement.almanac_class_requirement,
        epic_mmo: requirement.epic_mmo_requirement,
    }
}
