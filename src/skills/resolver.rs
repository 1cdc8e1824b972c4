//! Skill name resolution.
//!
//! Resolution order (first match wins):
//! 1. Built-in skill name (case-insensitive)
//! 2. Hash-derived dynamic id, accepted only if the live registry defines it

use crate::catalog::SkillRegistry;

use super::hash::dynamic_skill_id;
use super::{SkillId, SkillType};

/// Resolves configured skill names against the live skill registry.
pub struct SkillResolver<'a> {
    registry: &'a dyn SkillRegistry,
}

impl<'a> SkillResolver<'a> {
    /// Create a resolver backed by `registry`.
    pub fn new(registry: &'a dyn SkillRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a skill name to its canonical id.
    ///
    /// Returns `None` when the name is neither built-in nor a registered
    /// dynamic skill.
    pub fn resolve(&self, name: &str) -> Option<SkillId> {
        if let Some(skill) = SkillType::from_name(name) {
            return Some(skill.into());
        }

        let candidate = dynamic_skill_id(name)?;
        if self.registry.has_skill(candidate) {
            Some(candidate)
        } else {
            tracing::debug!("Skill '{}' (id {}) is not registered", name, candidate.0);
            None
        }
    }
}
