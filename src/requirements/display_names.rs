//! Skill display name overrides.
//!
//! `SkillDisplayNames.yml` maps a canonical skill id (its string form, e.g.
//! `Swords` or `1248346664`) to the label shown to players. The mapping is
//! reloaded independently of requirement documents.

use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::validated::ValidatedSkillRequirement;
use crate::error::{ItemControlError, Result};

/// Shared handle to the current display name mapping.
#[derive(Debug, Clone, Default)]
pub struct SkillDisplayNames {
    names: Arc<ArcSwap<HashMap<String, String>>>,
}

impl SkillDisplayNames {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload the mapping from `path`.
    ///
    /// A missing file leaves the current mapping untouched and returns
    /// `Ok(false)`. A file that fails to parse also leaves it untouched.
    ///
    /// # Errors
    ///
    /// Returns `DocumentParse` if the file is not a flat string map.
    pub fn load(&self, path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        tracing::debug!("Loading skill display names from {}", path.display());

        let content = fs::read_to_string(path)?;
        let names: HashMap<String, String> = if content.trim().is_empty() {
            HashMap::new()
        } else {
            serde_yaml::from_str(&content).map_err(|e| ItemControlError::DocumentParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        self.replace(names);
        Ok(true)
    }

    /// Replace the mapping.
    pub fn replace(&self, names: HashMap<String, String>) {
        self.names.store(Arc::new(names));
    }

    /// Label for a validated skill requirement.
    ///
    /// Looks up the canonical id first, then the name as written, and falls
    /// back to the name as written.
    pub fn label(&self, skill: &ValidatedSkillRequirement) -> String {
        let names = self.names.load();
        names
            .get(&skill.skill.to_string())
            .or_else(|| names.get(&skill.skill_name))
            .cloned()
            .unwrap_or_else(|| skill.skill_name.clone())
    }

    /// Number of overrides loaded.
    pub fn len(&self) -> usize {
        self.names.load().len()
    }

    /// Whether no overrides are loaded.
    pub fn is_empty(&self) -> bool {
        self.names.load().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::{SkillId, SkillType};
    use tempfile::TempDir;

    fn swords() -> ValidatedSkillRequirement {
        ValidatedSkillRequirement {
            skill: SkillType::Swords.into(),
            skill_name: "swords".into(),
            level: 10,
        }
    }

    #[test]
    fn label_falls_back_to_written_name() {
        let names = SkillDisplayNames::new();
        assert_eq!(names.label(&swords()), "swords");
    }

    #[test]
    fn label_prefers_canonical_id() {
        let names = SkillDisplayNames::new();
        names.replace(HashMap::from([
            ("Swords".to_string(), "Swordsmanship".to_string()),
            ("swords".to_string(), "ignored".to_string()),
        ]));
        assert_eq!(names.label(&swords()), "Swordsmanship");
    }

    #[test]
    fn label_uses_numeric_id_for_dynamic_skills() {
        let names = SkillDisplayNames::new();
        names.replace(HashMap::from([("424242".to_string(), "Mining".to_string())]));
        let skill = ValidatedSkillRequirement {
            skill: SkillId(424_242),
            skill_name: "mining".into(),
            level: 1,
        };
        assert_eq!(names.label(&skill), "Mining");
    }

    #[test]
    fn load_missing_file_keeps_mapping() {
        let temp = TempDir::new().unwrap();
        let names = SkillDisplayNames::new();
        names.replace(HashMap::from([("Swords".to_string(), "Blades".to_string())]));

        let loaded = names.load(&temp.path().join("SkillDisplayNames.yml")).unwrap();
        assert!(!loaded);
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn load_reads_flat_map() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("SkillDisplayNames.yml");
        fs::write(&path, "Swords: Blades\nRun: Sprinting\n").unwrap();

        let names = SkillDisplayNames::new();
        assert!(names.load(&path).unwrap());
        assert_eq!(names.len(), 2);
        assert_eq!(names.label(&swords()), "Blades");
    }

    #[test]
    fn load_invalid_file_keeps_mapping() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("SkillDisplayNames.yml");
        fs::write(&path, "- not\n- a map\n").unwrap();

        let names = SkillDisplayNames::new();
        names.replace(HashMap::from([("Swords".to_string(), "Blades".to_string())]));

        assert!(matches!(
            names.load(&path),
            Err(ItemControlError::DocumentParse { .. })
        ));
        assert_eq!(names.label(&swords()), "Blades");
    }
}
