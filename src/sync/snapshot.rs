//! Snapshot encoding.
//!
//! A snapshot is the YAML serialization of the raw document list. Peers
//! re-validate it against their own catalog rather than trusting the host's
//! validated form, since installed content can differ between processes.

use sha2::{Digest, Sha256};

use crate::error::{ItemControlError, Result};
use crate::requirements::RequirementDocument;

/// Serialize documents for publication.
pub fn encode(documents: &[RequirementDocument]) -> Result<String> {
    serde_yaml::to_string(documents).map_err(|e| ItemControlError::SnapshotEncode {
        message: e.to_string(),
    })
}

/// Deserialize a received snapshot. Blank input decodes to no documents.
///
/// # Errors
///
/// Returns `SnapshotDecode` if the value is not a document list.
pub fn decode(value: &str) -> Result<Vec<RequirementDocument>> {
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(value).map_err(|e| ItemControlError::SnapshotDecode {
        message: e.to_string(),
    })
}

/// Short content digest, used to recognize repeated deliveries.
pub fn digest(value: &str) -> String {
    let hash = Sha256::digest(value.as_bytes());
    hex::encode(&hash[..16])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::{example_documents, Requirement};

    fn documents() -> Vec<RequirementDocument> {
        let mut docs = example_documents();
        let mut wood = RequirementDocument::new("Wood");
        wood.consume_requirements = Requirement::default()
            .with_skill("custom_skill", 4)
            .with_skill("Cooking", 2);
        wood.consume_requirements.epic_mmo_requirement.body = 6;
        docs.push(wood);
        docs.push(RequirementDocument::new("AxeStone"));
        docs
    }

    #[test]
    fn round_trip_preserves_documents_and_order() {
        let docs = documents();
        let decoded = decode(&encode(&docs).unwrap()).unwrap();
        assert_eq!(decoded, docs);

        let order: Vec<_> = decoded.iter().map(|d| d.prefab_name.as_str()).collect();
        assert_eq!(order, vec!["SwordBronze", "Wood", "AxeStone"]);
    }

    #[test]
    fn round_trip_preserves_skill_order() {
        let docs = documents();
        let decoded = decode(&encode(&docs).unwrap()).unwrap();
        let keys: Vec<_> = decoded[1]
            .consume_requirements
            .skill_requirements
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, vec!["custom_skill", "Cooking"]);
    }

    #[test]
    fn blank_decodes_to_nothing() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("  \n").unwrap().is_empty());
    }

    #[test]
    fn empty_list_is_distinct_from_blank() {
        let encoded = encode(&[]).unwrap();
        assert!(!encoded.trim().is_empty());
        assert!(decode(&encoded).unwrap().is_empty());
    }

    #[test]
    fn malformed_snapshot_is_decode_error() {
        assert!(matches!(
            decode("PrefabName: NotAList"),
            Err(ItemControlError::SnapshotDecode { .. })
        ));
    }

    #[test]
    fn digest_is_stable_and_content_sensitive() {
        assert_eq!(digest("abc"), digest("abc"));
        assert_ne!(digest("abc"), digest("abd"));
        assert_eq!(digest("abc").len(), 32);
    }
}
