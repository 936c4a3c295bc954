//! Flat Markdown serialization of a sheet snapshot.
//!
//! Mirrors the print document's sections as plain text: title line, info
//! block, attribute table, skill table. String composition cannot fail, so
//! this is infallible.

use std::fmt::Write;

use tangent_domain::CharacterSheet;

/// Serialize a sheet snapshot as a Markdown document.
pub fn markdown_document(sheet: &CharacterSheet) -> String {
    let mut md = String::new();
    let bio = &sheet.bio;

    let _ = writeln!(md, "# TANGENT Character: {}\n", bio.name);

    md.push_str("## Character Information\n\n");
    for (label, value) in [
        ("Concept", &bio.concept),
        ("Species", &bio.species),
        ("Faction", &bio.faction),
        ("Personality / Motive", &bio.motive),
        ("Origin", &bio.origin),
        ("Occupation", &bio.occupation),
        ("Age", &bio.age),
        ("Gender", &bio.gender),
        ("Description / Style", &bio.style),
    ] {
        let _ = writeln!(md, "**{label}:** {value}");
    }

    md.push_str("\n## Primary Attributes\n\n");
    md.push_str("| Attribute | Value | Sub-Stat | Value |\n");
    md.push_str("| --- | --- | --- | --- |\n");
    for row in &sheet.attributes {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} |",
            row.attribute.display_name(),
            row.value,
            row.attribute.sub_stat_name(),
            row.sub_stat_value
        );
    }

    md.push_str("\n## Skills\n\n");
    md.push_str("| Skill | Rank | Base | Mod | Total |\n");
    md.push_str("| --- | --- | --- | --- | --- |\n");
    for row in &sheet.skills {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} | **{}** |",
            row.definition.label, row.rank, row.base, row.modifier, row.total
        );
    }

    md
}
