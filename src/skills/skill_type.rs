//! Built-in skill enumeration and canonical skill identifiers.

use std::fmt;

/// Skills the engine defines natively, with their engine-side numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillType {
    None,
    Swords,
    Knives,
    Clubs,
    Polearms,
    Spears,
    Blocking,
    Axes,
    Bows,
    ElementalMagic,
    BloodMagic,
    Unarmed,
    Pickaxes,
    WoodCutting,
    Crossbows,
    Jump,
    Sneak,
    Run,
    Swim,
    Fishing,
    Cooking,
    Farming,
    Crafting,
    Ride,
    All,
}

impl SkillType {
    /// Every built-in skill, in declaration order.
    pub const ALL: [SkillType; 25] = [
        SkillType::None,
        SkillType::Swords,
        SkillType::Knives,
        SkillType::Clubs,
        SkillType::Polearms,
        SkillType::Spears,
        SkillType::Blocking,
        SkillType::Axes,
        SkillType::Bows,
        SkillType::ElementalMagic,
        SkillType::BloodMagic,
        SkillType::Unarmed,
        SkillType::Pickaxes,
        SkillType::WoodCutting,
        SkillType::Crossbows,
        SkillType::Jump,
        SkillType::Sneak,
        SkillType::Run,
        SkillType::Swim,
        SkillType::Fishing,
        SkillType::Cooking,
        SkillType::Farming,
        SkillType::Crafting,
        SkillType::Ride,
        SkillType::All,
    ];

    /// The engine's numeric value for this skill.
    pub fn value(self) -> i32 {
        match self {
            SkillType::None => 0,
            SkillType::Swords => 1,
            SkillType::Knives => 2,
            SkillType::Clubs => 3,
            SkillType::Polearms => 4,
            SkillType::Spears => 5,
            SkillType::Blocking => 6,
            SkillType::Axes => 7,
            SkillType::Bows => 8,
            SkillType::ElementalMagic => 9,
            SkillType::BloodMagic => 10,
            SkillType::Unarmed => 11,
            SkillType::Pickaxes => 12,
            SkillType::WoodCutting => 13,
            SkillType::Crossbows => 14,
            SkillType::Jump => 100,
            SkillType::Sneak => 101,
            SkillType::Run => 102,
            SkillType::Swim => 103,
            SkillType::Fishing => 104,
            SkillType::Cooking => 105,
            SkillType::Farming => 106,
            SkillType::Crafting => 107,
            SkillType::Ride => 110,
            SkillType::All => 999,
        }
    }

    /// Canonical name, as the engine spells it.
    pub fn name(self) -> &'static str {
        match self {
            SkillType::None => "None",
            SkillType::Swords => "Swords",
            SkillType::Knives => "Knives",
            SkillType::Clubs => "Clubs",
            SkillType::Polearms => "Polearms",
            SkillType::Spears => "Spears",
            SkillType::Blocking => "Blocking",
            SkillType::Axes => "Axes",
            SkillType::Bows => "Bows",
            SkillType::ElementalMagic => "ElementalMagic",
            SkillType::BloodMagic => "BloodMagic",
            SkillType::Unarmed => "Unarmed",
            SkillType::Pickaxes => "Pickaxes",
            SkillType::WoodCutting => "WoodCutting",
            SkillType::Crossbows => "Crossbows",
            SkillType::Jump => "Jump",
            SkillType::Sneak => "Sneak",
            SkillType::Run => "Run",
            SkillType::Swim => "Swim",
            SkillType::Fishing => "Fishing",
            SkillType::Cooking => "Cooking",
            SkillType::Farming => "Farming",
            SkillType::Crafting => "Crafting",
            SkillType::Ride => "Ride",
            SkillType::All => "All",
        }
    }

    /// Case-insensitive lookup by canonical name.
    pub fn from_name(name: &str) -> Option<SkillType> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|skill| skill.name().eq_ignore_ascii_case(name))
    }

    /// Lookup by engine value.
    pub fn from_value(value: i32) -> Option<SkillType> {
        Self::ALL.iter().copied().find(|skill| skill.value() == value)
    }
}

impl fmt::Display for SkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical skill identifier.
///
/// Built-in skills use their enum value; skills registered at runtime by
/// other integrations use the absolute stable hash of their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SkillId(pub i32);

impl SkillId {
    /// The built-in skill this id names, if any.
    pub fn builtin(self) -> Option<SkillType> {
        SkillType::from_value(self.0)
    }

    /// Whether this id refers to a built-in skill.
    pub fn is_builtin(self) -> bool {
        self.builtin().is_some()
    }
}

impl From<SkillType> for SkillId {
    fn from(skill: SkillType) -> Self {
        SkillId(skill.value())
    }
}

/// Built-in ids render as their name, dynamic ids as their number.
impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builtin() {
            Some(skill) => f.write_str(skill.name()),
            None => write!(f, "{}", self.0),
        }
    }
}
