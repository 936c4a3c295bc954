//! The character sheet aggregate.
//!
//! A [`CharacterSheet`] is ephemeral: it is rebuilt from the current field
//! snapshot on every read and has no identity or persistence of its own.
//! It is the unit of export.

use serde::{Deserialize, Serialize};

use crate::attributes::Attribute;
use crate::calc;
use crate::fields::SheetFields;
use crate::skills::{SkillDefinition, SkillRoster};

/// Biographical free-text fields and their stable input ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Bio {
    pub name: String,
    pub concept: String,
    pub species: String,
    pub faction: String,
    pub motive: String,
    pub origin: String,
    pub occupation: String,
    pub age: String,
    pub gender: String,
    pub style: String,
}

impl Bio {
    pub const NAME: &'static str = "char-name";
    pub const CONCEPT: &'static str = "char-concept";
    pub const SPECIES: &'static str = "char-species";
    pub const FACTION: &'static str = "char-faction";
    pub const MOTIVE: &'static str = "char-motive";
    pub const ORIGIN: &'static str = "char-origin";
    pub const OCCUPATION: &'static str = "char-occu";
    pub const AGE: &'static str = "char-age";
    pub const GENDER: &'static str = "char-gender";
    pub const STYLE: &'static str = "char-style";

    pub fn from_fields(fields: &SheetFields) -> Self {
        Self {
            name: fields.text(Self::NAME).to_string(),
            concept: fields.text(Self::CONCEPT).to_string(),
            species: fields.text(Self::SPECIES).to_string(),
            faction: fields.text(Self::FACTION).to_string(),
            motive: fields.text(Self::MOTIVE).to_string(),
            origin: fields.text(Self::ORIGIN).to_string(),
            occupation: fields.text(Self::OCCUPATION).to_string(),
            age: fields.text(Self::AGE).to_string(),
            gender: fields.text(Self::GENDER).to_string(),
            style: fields.text(Self::STYLE).to_string(),
        }
    }
}

/// An attribute with its current value and paired sub-stat value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeRow {
    pub attribute: Attribute,
    pub value: i32,
    pub sub_stat_value: i32,
}

/// One captured skill row, totals recomputed at capture time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRow {
    pub definition: SkillDefinition,
    pub rank: i32,
    pub modifier: i32,
    pub linked_attribute: Option<Attribute>,
    /// Resolved linked attribute value (0 if unlinked)
    pub base: i32,
    pub total: i32,
}

/// Snapshot of the whole sheet at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub bio: Bio,
    pub attributes: Vec<AttributeRow>,
    pub skills: Vec<SkillRow>,
}

impl CharacterSheet {
    /// Capture the current field values as a sheet.
    ///
    /// Totals are recomputed here rather than read back from the display
    /// fields, so a snapshot always satisfies the total invariant even if
    /// the host never ran a recompute.
    pub fn from_fields(fields: &SheetFields, roster: &SkillRoster) -> Self {
        let attributes = Attribute::ALL
            .iter()
            .map(|&attribute| AttributeRow {
                attribute,
                value: fields.number(attribute.field_id()),
                sub_stat_value: fields.number(attribute.sub_stat_field_id()),
            })
            .collect();

        let skills = roster.iter().map(|skill| capture_row(fields, skill)).collect();

        Self {
            bio: Bio::from_fields(fields),
            attributes,
            skills,
        }
    }
}

fn capture_row(fields: &SheetFields, skill: &SkillDefinition) -> SkillRow {
    let rank = fields.number(skill.rank_field().as_str());
    let modifier = fields.number(skill.modifier_field().as_str());
    let linked_attribute = calc::resolve_linked_attribute(fields, skill);
    let base = calc::linked_attribute_value(fields, skill);
    SkillRow {
        definition: skill.clone(),
        rank,
        modifier,
        linked_attribute,
        base,
        total: calc::skill_total(rank, base, modifier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::tangent_default_skills;

    #[test]
    fn test_snapshot_captures_bio_and_attributes() {
        let mut fields = SheetFields::new();
        fields.set(Bio::NAME, "Jax Vex");
        fields.set(Bio::SPECIES, "Voidborn");
        fields.set("attr-strength", "5");
        fields.set("attr-might", "2");

        let sheet = CharacterSheet::from_fields(&fields, &tangent_default_skills());
        assert_eq!(sheet.bio.name, "Jax Vex");
        assert_eq!(sheet.bio.species, "Voidborn");
        assert_eq!(sheet.attributes.len(), 6);
        assert_eq!(sheet.attributes[0].attribute, Attribute::Strength);
        assert_eq!(sheet.attributes[0].value, 5);
        assert_eq!(sheet.attributes[0].sub_stat_value, 2);
    }

    #[test]
    fn test_snapshot_rows_satisfy_total_invariant() {
        let mut fields = SheetFields::new();
        fields.set("attr-agility", "3");
        fields.set("skill-piloting-rank", "2");
        fields.set("skill-piloting-attr", "attr-agility");
        fields.set("skill-piloting-mod", "-1");

        let sheet = CharacterSheet::from_fields(&fields, &tangent_default_skills());
        for row in &sheet.skills {
            assert_eq!(row.total, row.rank + row.base + row.modifier);
        }
        let piloting = sheet
            .skills
            .iter()
            .find(|row| row.definition.id.as_str() == "piloting")
            .expect("piloting is in the default roster");
        assert_eq!(piloting.linked_attribute, Some(Attribute::Agility));
        assert_eq!(piloting.total, 4);
    }

    #[test]
    fn test_empty_snapshot_defaults_everything() {
        let fields = SheetFields::new();
        let sheet = CharacterSheet::from_fields(&fields, &tangent_default_skills());
        assert_eq!(sheet.bio.name, "");
        assert!(sheet.attributes.iter().all(|a| a.value == 0));
        assert!(sheet.skills.iter().all(|s| s.total == 0));
        assert!(sheet.skills.iter().all(|s| s.linked_attribute.is_none()));
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let mut fields = SheetFields::new();
        fields.set(Bio::NAME, "Jax Vex");
        fields.set("attr-charisma", "4");
        let sheet = CharacterSheet::from_fields(&fields, &tangent_default_skills());

        let json = serde_json::to_string(&sheet).expect("sheet serializes");
        let back: CharacterSheet = serde_json::from_str(&json).expect("sheet deserializes");
        assert_eq!(back, sheet);
    }

    #[test]
    fn test_skill_rows_follow_roster_order() {
        let fields = SheetFields::new();
        let roster = tangent_default_skills();
        let sheet = CharacterSheet::from_fields(&fields, &roster);
        let captured: Vec<_> = sheet.skills.iter().map(|s| s.definition.id.clone()).collect();
        let declared: Vec<_> = roster.iter().map(|s| s.id.clone()).collect();
        assert_eq!(captured, declared);
    }
}
