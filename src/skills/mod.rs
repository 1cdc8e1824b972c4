//! Skill identifiers and name resolution.
//!
//! # Modules
//!
//! - [`skill_type`] - Built-in skill enumeration and [`SkillId`]
//! - [`hash`] - Engine-compatible stable string hash
//! - [`resolver`] - Name to canonical id resolution

pub mod hash;
pub mod resolver;
pub mod skill_type;

pub use hash::{dynamic_skill_id, normalize_skill_name, stable_hash};
pub use resolver::SkillResolver;
pub use skill_type::{SkillId, SkillType};
