//! TANGENT domain layer.
//!
//! Pure sheet model for the TANGENT character sheet editor: the fixed
//! attribute set, the skill roster, the live field snapshot, and the total
//! computation rule. Everything here is a pure transformation over a
//! [`SheetFields`] snapshot; no I/O, no persistence, no async.

pub mod attributes;
pub mod calc;
pub mod error;
pub mod fields;
pub mod ids;
pub mod sheet;
pub mod skills;

pub use attributes::Attribute;
pub use calc::{compute_total, linked_attribute_value, resolve_linked_attribute, skill_total};
pub use error::DomainError;
pub use fields::{parse_number, SheetFields};
pub use ids::{FieldId, SkillId};
pub use sheet::{AttributeRow, Bio, CharacterSheet, SkillRow};
pub use skills::{tangent_default_skills, SkillDefinition, SkillRoster};
