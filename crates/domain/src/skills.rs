//! Skill roster definitions.
//!
//! A skill row on the sheet has a rank, a modifier, a linked-attribute
//! selector, and a derived total. The roster declares which rows exist and
//! in what order; the values themselves live on the input surface and are
//! read through per-row field ids.

use serde::{Deserialize, Serialize};

use crate::attributes::Attribute;
use crate::error::DomainError;
use crate::ids::{FieldId, SkillId};

/// A roster entry for one skill row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub id: SkillId,
    pub label: String,
    /// Attribute the selector starts on. The live selector value wins; this
    /// only seeds fresh sheets.
    pub default_attribute: Option<Attribute>,
    /// Display order within the skill table
    pub order: u32,
}

impl SkillDefinition {
    pub fn new(id: impl Into<SkillId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            default_attribute: None,
            order: 0,
        }
    }

    pub fn with_default_attribute(mut self, attribute: Attribute) -> Self {
        self.default_attribute = Some(attribute);
        self
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Field id of this skill's rank input (`skill-<id>-rank`).
    pub fn rank_field(&self) -> FieldId {
        FieldId::new(format!("skill-{}-rank", self.id))
    }

    /// Field id of this skill's linked-attribute selector (`skill-<id>-attr`).
    pub fn attribute_field(&self) -> FieldId {
        FieldId::new(format!("skill-{}-attr", self.id))
    }

    /// Field id of this skill's modifier input (`skill-<id>-mod`).
    pub fn modifier_field(&self) -> FieldId {
        FieldId::new(format!("skill-{}-mod", self.id))
    }

    /// Field id of this skill's displayed total (`skill-<id>-total`).
    pub fn total_field(&self) -> FieldId {
        FieldId::new(format!("skill-{}-total", self.id))
    }
}

/// The declared skill rows, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRoster {
    skills: Vec<SkillDefinition>,
}

impl SkillRoster {
    /// Build a roster from definitions, sorting by declared order.
    ///
    /// Duplicate skill ids are rejected: per-row field ids are derived from
    /// the skill id, so a duplicate would alias another row's inputs.
    pub fn new(mut skills: Vec<SkillDefinition>) -> Result<Self, DomainError> {
        skills.sort_by_key(|s| s.order);
        let mut seen = std::collections::BTreeSet::new();
        for skill in &skills {
            if !seen.insert(skill.id.clone()) {
                return Err(DomainError::validation(format!(
                    "duplicate skill id: {}",
                    skill.id
                )));
            }
        }
        Ok(Self { skills })
    }

    pub fn skills(&self) -> &[SkillDefinition] {
        &self.skills
    }

    pub fn get(&self, id: &SkillId) -> Option<&SkillDefinition> {
        self.skills.iter().find(|s| &s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Default for SkillRoster {
    /// The standard TANGENT roster.
    fn default() -> Self {
        tangent_default_skills()
    }
}

/// Default TANGENT skill rows, in declared display order.
pub fn tangent_default_skills() -> SkillRoster {
    let skills = vec![
        SkillDefinition::new("athletics", "Athletics")
            .with_default_attribute(Attribute::Strength)
            .with_order(1),
        SkillDefinition::new("melee", "Melee Combat")
            .with_default_attribute(Attribute::Strength)
            .with_order(2),
        SkillDefinition::new("firearms", "Firearms")
            .with_default_attribute(Attribute::Agility)
            .with_order(3),
        SkillDefinition::new("piloting", "Piloting")
            .with_default_attribute(Attribute::Agility)
            .with_order(4),
        SkillDefinition::new("stealth", "Stealth")
            .with_default_attribute(Attribute::Agility)
            .with_order(5),
        SkillDefinition::new("tech", "Technology")
            .with_default_attribute(Attribute::Intellect)
            .with_order(6),
        SkillDefinition::new("science", "Science")
            .with_default_attribute(Attribute::Intellect)
            .with_order(7),
        SkillDefinition::new("arcana", "Arcana")
            .with_default_attribute(Attribute::Wisdom)
            .with_order(8),
        SkillDefinition::new("perception", "Perception")
            .with_default_attribute(Attribute::Wisdom)
            .with_order(9),
        SkillDefinition::new("survival", "Survival")
            .with_default_attribute(Attribute::Constitution)
            .with_order(10),
        SkillDefinition::new("persuasion", "Persuasion")
            .with_default_attribute(Attribute::Charisma)
            .with_order(11),
        SkillDefinition::new("deception", "Deception")
            .with_default_attribute(Attribute::Charisma)
            .with_order(12),
    ];

    // The declared roster is statically well formed.
    SkillRoster::new(skills).expect("default roster has unique ids")
}
