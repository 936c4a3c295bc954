//! Skill total recalculation.
//!
//! Each qualifying edit triggers an immediate, synchronous recompute of
//! exactly the affected skill rows. There is no batching, no debouncing,
//! and no failure path: missing or malformed inputs degrade to zero.

use std::str::FromStr;

use tangent_domain::{parse_number, skill_total, Attribute, SkillDefinition, SkillId, SkillRoster};

use crate::ports::FieldStore;

/// A qualifying edit of the input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetEdit {
    /// A skill's rank field was edited
    Rank(SkillId),
    /// A skill's modifier field was edited
    Modifier(SkillId),
    /// A skill's linked-attribute selector changed
    LinkedAttribute(SkillId),
    /// A primary attribute's value was edited
    AttributeValue(Attribute),
}

/// Recomputes skill totals against the live field store.
pub struct RecalcEngine {
    roster: SkillRoster,
}

impl RecalcEngine {
    pub fn new(roster: SkillRoster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &SkillRoster {
        &self.roster
    }

    /// Apply one edit, recomputing exactly the affected skills.
    ///
    /// Rank, modifier, and selector edits touch their own row. An attribute
    /// edit fans out to every skill whose selector currently resolves to
    /// that attribute, found by scanning the live selector values so a
    /// stale index can never misdirect the recompute.
    pub fn apply_edit(&self, store: &mut dyn FieldStore, edit: &SheetEdit) {
        match edit {
            SheetEdit::Rank(id) | SheetEdit::Modifier(id) | SheetEdit::LinkedAttribute(id) => {
                // Edits naming an unknown skill are ignored, like any other
                // malformed input.
                if let Some(skill) = self.roster.get(id) {
                    self.recompute_skill(store, skill);
                }
            }
            SheetEdit::AttributeValue(attribute) => {
                for skill in self.roster.iter() {
                    if self.linked_attribute(&*store, skill) == Some(*attribute) {
                        self.recompute_skill(store, skill);
                    }
                }
            }
        }
    }

    /// Recompute every skill once, e.g. on initial load.
    pub fn recompute_all(&self, store: &mut dyn FieldStore) {
        for skill in self.roster.iter() {
            self.recompute_skill(store, skill);
        }
        tracing::info!(skills = self.roster.len(), "Recomputed all skill totals");
    }

    /// Recompute one skill and write its displayed total.
    pub fn recompute_skill(&self, store: &mut dyn FieldStore, skill: &SkillDefinition) {
        let rank = self.number(store, skill.rank_field().as_str());
        let modifier = self.number(store, skill.modifier_field().as_str());
        let base = self
            .linked_attribute(store, skill)
            .map(|attribute| self.number(store, attribute.field_id()))
            .unwrap_or(0);

        let total = skill_total(rank, base, modifier);
        store.set(&skill.total_field(), total.to_string());

        tracing::debug!(skill = %skill.id, total, "Recomputed skill total");
    }

    /// Resolve a skill's linked attribute from its live selector value.
    fn linked_attribute(&self, store: &dyn FieldStore, skill: &SkillDefinition) -> Option<Attribute> {
        store
            .get(&skill.attribute_field())
            .and_then(|raw| Attribute::from_str(&raw).ok())
    }

    fn number(&self, store: &dyn FieldStore, id: &str) -> i32 {
        store
            .get(&id.into())
            .map(|raw| parse_number(&raw))
            .unwrap_or(0)
    }
}

impl Default for RecalcEngine {
    fn default() -> Self {
        Self::new(SkillRoster::default())
    }
}
