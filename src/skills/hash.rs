//! Stable string hashing compatible with the engine's skill registry.
//!
//! Dynamically registered skills are keyed by the hash of their display
//! name. The hash runs two interleaved djb2 accumulators over UTF-16 code
//! units and must match the engine bit for bit, so all arithmetic wraps at
//! 32 bits.

use super::SkillId;

const SEED: i32 = 5381;
const MIX: i32 = 1_566_083_941;

/// Compute the engine's stable hash of `value`.
///
/// Hashing stops at the first NUL code unit.
pub fn stable_hash(value: &str) -> i32 {
    let units: Vec<u16> = value.encode_utf16().collect();
    let mut hash1 = SEED;
    let mut hash2 = SEED;

    let mut i = 0;
    while i < units.len() && units[i] != 0 {
        hash1 = (hash1 << 5).wrapping_add(hash1) ^ i32::from(units[i]);
        if i == units.len() - 1 || units[i + 1] == 0 {
            break;
        }
        hash2 = (hash2 << 5).wrapping_add(hash2) ^ i32::from(units[i + 1]);
        i += 2;
    }

    hash1.wrapping_add(hash2.wrapping_mul(MIX))
}

/// Normalize a configured skill name the way dynamic skills are registered.
pub fn normalize_skill_name(name: &str) -> String {
    name.replace('_', " ")
}

/// Derive the candidate dynamic id for a skill name.
///
/// Returns `None` when the hash is `i32::MIN`, which has no absolute value.
pub fn dynamic_skill_id(name: &str) -> Option<SkillId> {
    stable_hash(&normalize_skill_name(name))
        .checked_abs()
        .map(SkillId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_hashes_to_seed_mix() {
        assert_eq!(stable_hash(""), 371_857_150);
    }

    #[test]
    fn known_values_match_engine() {
        assert_eq!(stable_hash("a"), 372_029_373);
        assert_eq!(stable_hash("Swords"), -1_243_458_532);
        assert_eq!(stable_hash("custom skill"), -1_248_346_664);
    }

    #[test]
    fn hashing_stops_at_nul() {
        assert_eq!(stable_hash("ab\0cd"), stable_hash("ab"));
    }

    #[test]
    fn normalize_replaces_underscores() {
        assert_eq!(normalize_skill_name("custom_skill_two"), "custom skill two");
    }

    #[test]
    fn dynamic_id_uses_absolute_normalized_hash() {
        assert_eq!(dynamic_skill_id("custom_skill"), Some(SkillId(1_248_346_664)));
        assert_eq!(dynamic_skill_id("custom skill"), dynamic_skill_id("custom_skill"));
    }

    #[test]
    fn dynamic_id_is_stable_across_calls() {
        let first = dynamic_skill_id("Mining");
        for _ in 0..10 {
            assert_eq!(dynamic_skill_id("Mining"), first);
        }
    }
}
