//! Optional external attribute systems.
//!
//! Requirement documents can carry thresholds for attribute systems that
//! other integrations provide (a class system, a secondary leveling
//! system). Each integration implements [`AttributeSystem`]; the engine
//! glue installs the ones present into [`AttributeSystems`] at startup.
//! A system that is not installed, or reports itself unavailable, never
//! blocks an action.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Which attribute system a threshold block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeSystemKind {
    /// Class levels and core stats
    AlmanacClass,
    /// Secondary leveling with its own stat points
    EpicMmo,
}

impl AttributeSystemKind {
    /// Prefix used when labelling unmet thresholds.
    pub fn label(self) -> &'static str {
        match self {
            AttributeSystemKind::AlmanacClass => "Class",
            AttributeSystemKind::EpicMmo => "EpicMMO",
        }
    }
}

impl fmt::Display for AttributeSystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A block of named integer thresholds for one attribute system.
pub trait AttributeThresholds {
    /// The system these thresholds are checked against.
    fn system(&self) -> AttributeSystemKind;

    /// Named thresholds in evaluation order. Zero means no requirement.
    fn thresholds(&self) -> Vec<(&'static str, i32)>;

    /// Whether any threshold is set.
    fn is_empty(&self) -> bool {
        self.thresholds().iter().all(|(_, value)| *value <= 0)
    }
}

/// An installed attribute integration.
pub trait AttributeSystem: Send + Sync {
    /// Which system this is.
    fn kind(&self) -> AttributeSystemKind;

    /// Whether the integration is loaded and answering.
    fn is_available(&self) -> bool {
        true
    }

    /// Current value of a named attribute, or `None` when unavailable.
    fn attribute(&self, name: &str) -> Option<i32>;
}

/// The attribute systems installed in this process.
#[derive(Default)]
pub struct AttributeSystems {
    systems: Vec<Box<dyn AttributeSystem>>,
}

impl AttributeSystems {
    /// No attribute systems installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a system, replacing any previous one of the same kind.
    pub fn install(&mut self, system: Box<dyn AttributeSystem>) {
        let kind = system.kind();
        self.systems.retain(|existing| existing.kind() != kind);
        self.systems.push(system);
    }

    /// Look up an installed system.
    pub fn get(&self, kind: AttributeSystemKind) -> Option<&dyn AttributeSystem> {
        self.systems
            .iter()
            .find(|system| system.kind() == kind)
            .map(|system| system.as_ref())
    }

    /// Look up a system only if it is installed and available.
    pub fn available(&self, kind: AttributeSystemKind) -> Option<&dyn AttributeSystem> {
        self.get(kind).filter(|system| system.is_available())
    }
}

impl fmt::Debug for AttributeSystems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.systems.iter().map(|system| system.kind()))
            .finish()
    }
}

/// Attribute system backed by a fixed value map.
#[derive(Debug, Clone)]
pub struct StaticAttributeSystem {
    kind: AttributeSystemKind,
    values: HashMap<String, i32>,
}

impl StaticAttributeSystem {
    /// Create a system of `kind` with the given attribute values.
    pub fn new(kind: AttributeSystemKind, values: HashMap<String, i32>) -> Self {
        Self { kind, values }
    }
}

impl AttributeSystem for StaticAttributeSystem {
    fn kind(&self) -> AttributeSystemKind {
        self.kind
    }

    fn attribute(&self, name: &str) -> Option<i32> {
        Some(self.values.get(name).copied().unwrap_or(0))
    }
}
