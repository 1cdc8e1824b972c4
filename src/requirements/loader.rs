//! Requirement document discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use super::schema::RequirementDocument;
use crate::config::ControlPaths;
use crate::error::{ItemControlError, Result};

/// Find every requirement document in the folder, sorted by path.
///
/// Only the folder itself is scanned; the display name file is skipped.
/// A missing folder yields no documents.
pub fn document_paths(paths: &ControlPaths) -> Result<Vec<PathBuf>> {
    if !paths.folder.is_dir() {
        return Ok(Vec::new());
    }

    let mut documents = Vec::new();
    for entry in fs::read_dir(&paths.folder)? {
        let path = entry?.path();
        if path.is_file() && paths.is_document(&path) {
            documents.push(path);
        }
    }
    documents.sort();
    Ok(documents)
}

/// Load and parse one document.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read.
/// Returns `DocumentParse` if the YAML is invalid.
pub fn load_document(path: &Path) -> Result<RequirementDocument> {
    let content = fs::read_to_string(path)?;
    parse_document(&content, path)
}

/// Parse YAML content into a document.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_document(content: &str, source_path: &Path) -> Result<RequirementDocument> {
    serde_yaml::from_str(content).map_err(|e| ItemControlError::DocumentParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write a document to `<folder>/<prefab>.yml`, returning its path.
pub fn write_document(paths: &ControlPaths, doc: &RequirementDocument) -> Result<PathBuf> {
    paths.ensure_folder()?;
    let path = paths.document_path(&doc.prefab_name);
    let content = serde_yaml::to_string(doc).map_err(|e| ItemControlError::Other(e.into()))?;
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::schema::example_documents;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ControlPaths) {
        let temp = TempDir::new().unwrap();
        let paths = ControlPaths::new(temp.path());
        paths.ensure_folder().unwrap();
        (temp, paths)
    }

    #[test]
    fn missing_folder_has_no_documents() {
        let temp = TempDir::new().unwrap();
        let paths = ControlPaths::new(temp.path());
        assert!(document_paths(&paths).unwrap().is_empty());
    }

    #[test]
    fn lists_only_documents_sorted() {
        let (_temp, paths) = setup();
        fs::write(paths.folder.join("Wood.yml"), "PrefabName: Wood").unwrap();
        fs::write(paths.folder.join("Axe.yml"), "PrefabName: AxeStone").unwrap();
        fs::write(paths.folder.join("readme.txt"), "notes").unwrap();
        fs::write(&paths.display_names, "Swords: Blades").unwrap();
        fs::create_dir_all(paths.folder.join("nested")).unwrap();
        fs::write(paths.folder.join("nested").join("Deep.yml"), "PrefabName: Deep").unwrap();

        let found = document_paths(&paths).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["Axe.yml", "Wood.yml"]);
    }

    #[test]
    fn load_document_parses_yaml() {
        let (_temp, paths) = setup();
        let path = paths.folder.join("Wood.yml");
        fs::write(&path, "PrefabName: Wood\nConsumeRequirements:\n  SkillRequirements:\n    Cooking: 3\n").unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.prefab_name, "Wood");
        assert_eq!(doc.consume_requirements.skill_requirements["Cooking"], 3);
    }

    #[test]
    fn parse_document_reports_path() {
        let result = parse_document("PrefabName: [", Path::new("Broken.yml"));
        match result {
            Err(ItemControlError::DocumentParse { path, .. }) => {
                assert_eq!(path, PathBuf::from("Broken.yml"))
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn write_then_load_preserves_document() {
        let (_temp, paths) = setup();
        let doc = example_documents().remove(0);

        let path = write_document(&paths, &doc).unwrap();
        assert!(path.ends_with("SwordBronze.yml"));
        assert_eq!(load_document(&path).unwrap(), doc);
    }
}
