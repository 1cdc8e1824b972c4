//! Requirement documents, validation and the requirement store.
//!
//! # Modules
//!
//! - [`schema`] - Raw document format
//! - [`loader`] - Document discovery and parsing
//! - [`validator`] - Catalog cross-referencing
//! - [`validated`] - Query-ready types
//! - [`store`] - Dual-key index, replaced wholesale on reload
//! - [`display_names`] - Skill label overrides

pub mod display_names;
pub mod loader;
pub mod schema;
pub mod store;
pub mod validated;
pub mod validator;

pub use display_names::SkillDisplayNames;
pub use loader::{document_paths, load_document, parse_document, write_document};
pub use schema::{
    example_documents, ClassRequirement, EpicMmoRequirement, Requirement, RequirementDocument,
    RequirementKind,
};
pub use store::{RequirementStore, StoreIndex};
pub use validated::{ValidatedItem, ValidatedRequirement, ValidatedSkillRequirement};
pub use validator::{UnresolvedSkill, Validation, ValidationPolicy, Validator};
