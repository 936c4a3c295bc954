//! Skill total computation.
//!
//! The linked attribute is a weak reference: the selector field holds an
//! attribute identifier that is resolved against the snapshot at
//! computation time, so the total always reflects the attribute's current
//! value. An empty or unresolvable selector contributes 0.

use std::str::FromStr;

use crate::attributes::Attribute;
use crate::fields::SheetFields;
use crate::skills::SkillDefinition;

/// `total = rank + linked attribute value (or 0 if unlinked) + modifier`
pub fn skill_total(rank: i32, attribute_value: i32, modifier: i32) -> i32 {
    rank + attribute_value + modifier
}

/// Resolve a skill's linked attribute from its selector field, if any.
pub fn resolve_linked_attribute(
    fields: &SheetFields,
    skill: &SkillDefinition,
) -> Option<Attribute> {
    Attribute::from_str(fields.text(skill.attribute_field().as_str())).ok()
}

/// Current value of a skill's linked attribute; 0 when unlinked.
pub fn linked_attribute_value(fields: &SheetFields, skill: &SkillDefinition) -> i32 {
    resolve_linked_attribute(fields, skill)
        .map(|attribute| fields.number(attribute.field_id()))
        .unwrap_or(0)
}

/// Compute a skill's total from the current snapshot.
///
/// All three addends default to 0 when their source field is absent, blank,
/// or non-numeric.
pub fn compute_total(fields: &SheetFields, skill: &SkillDefinition) -> i32 {
    let rank = fields.number(skill.rank_field().as_str());
    let modifier = fields.number(skill.modifier_field().as_str());
    skill_total(rank, linked_attribute_value(fields, skill), modifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pilot() -> SkillDefinition {
        SkillDefinition::new("piloting", "Piloting")
    }

    #[test]
    fn test_total_is_sum_of_addends() {
        assert_eq!(skill_total(2, 5, 1), 8);
        assert_eq!(skill_total(-1, 0, 3), 2);
        assert_eq!(skill_total(0, 0, 0), 0);
    }

    #[test]
    fn test_compute_total_resolves_linked_attribute() {
        let mut fields = SheetFields::new();
        fields.set("attr-agility", "5");
        fields.set("skill-piloting-rank", "2");
        fields.set("skill-piloting-attr", "attr-agility");
        fields.set("skill-piloting-mod", "1");
        assert_eq!(compute_total(&fields, &pilot()), 8);
    }

    #[test]
    fn test_unlinked_skill_contributes_zero_base() {
        let mut fields = SheetFields::new();
        fields.set("skill-piloting-rank", "2");
        fields.set("skill-piloting-mod", "1");
        assert_eq!(compute_total(&fields, &pilot()), 3);
    }

    #[test]
    fn test_unresolvable_selector_behaves_as_unlinked() {
        let mut fields = SheetFields::new();
        fields.set("skill-piloting-rank", "4");
        fields.set("skill-piloting-attr", "attr-luck");
        assert_eq!(resolve_linked_attribute(&fields, &pilot()), None);
        assert_eq!(compute_total(&fields, &pilot()), 4);
    }

    #[test]
    fn test_blank_fields_behave_as_zero() {
        let mut fields = SheetFields::new();
        fields.set("attr-agility", "");
        fields.set("skill-piloting-rank", "x");
        fields.set("skill-piloting-attr", "attr-agility");
        fields.set("skill-piloting-mod", "");
        assert_eq!(compute_total(&fields, &pilot()), 0);
    }

    #[test]
    fn test_total_tracks_current_attribute_value() {
        let mut fields = SheetFields::new();
        fields.set("attr-strength", "5");
        fields.set("skill-athletics-rank", "2");
        fields.set("skill-athletics-attr", "attr-strength");
        fields.set("skill-athletics-mod", "1");
        let athletics = SkillDefinition::new("athletics", "Athletics");
        assert_eq!(compute_total(&fields, &athletics), 8);

        fields.set("attr-strength", "7");
        assert_eq!(compute_total(&fields, &athletics), 10);
    }
}
