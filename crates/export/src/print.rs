//! Structured print document composition.
//!
//! Builds the declarative [`DocDefinition`] for the print export: title,
//! character header, two-column info block, attribute table, and skill
//! table. The rendering service turns this into the actual PDF.

use tangent_domain::CharacterSheet;

use crate::doc::{
    Alignment, ColumnWidth, DocDefinition, DocNode, DocStyle, LabeledLine, Margin, TableCell,
};

/// Compose the print document for a sheet snapshot.
pub fn print_document(sheet: &CharacterSheet) -> DocDefinition {
    let mut doc = DocDefinition::new();

    doc.push(DocNode::text("TANGENT: Sci-Fi Fantasy RPG", "title"));
    doc.push(DocNode::text(
        format!("Character: {}", sheet.bio.name),
        "header",
    ));

    doc.push(DocNode::text("Character Information", "subheader"));
    doc.push(info_columns(sheet));

    doc.push(DocNode::text("Primary Attributes", "subheader"));
    doc.push(attribute_table(sheet));

    doc.push(DocNode::text("Skills", "subheader"));
    doc.push(skill_table(sheet));

    default_styles(&mut doc);
    doc
}

fn info_columns(sheet: &CharacterSheet) -> DocNode {
    let bio = &sheet.bio;
    DocNode::Columns {
        columns: vec![
            vec![
                LabeledLine::new("Concept", &bio.concept),
                LabeledLine::new("Species", &bio.species),
                LabeledLine::new("Faction", &bio.faction),
                LabeledLine::new("Personality / Motive", &bio.motive),
            ],
            vec![
                LabeledLine::new("Origin", &bio.origin),
                LabeledLine::new("Occupation", &bio.occupation),
                LabeledLine::new("Age", &bio.age),
                LabeledLine::new("Gender", &bio.gender),
                LabeledLine::new("Description / Style", &bio.style),
            ],
        ],
        column_gap: 20,
    }
}

fn attribute_table(sheet: &CharacterSheet) -> DocNode {
    let rows = sheet
        .attributes
        .iter()
        .map(|row| {
            vec![
                TableCell::plain(row.attribute.display_name()),
                TableCell::plain(row.value.to_string()),
                TableCell::plain(row.attribute.sub_stat_name()),
                TableCell::plain(row.sub_stat_value.to_string()),
            ]
        })
        .collect();

    DocNode::Table {
        widths: vec![
            ColumnWidth::Fill,
            ColumnWidth::Auto,
            ColumnWidth::Fill,
            ColumnWidth::Auto,
        ],
        header: vec![
            TableCell::header("Attribute"),
            TableCell::header("Value"),
            TableCell::header("Sub-Stat"),
            TableCell::header("Value"),
        ],
        rows,
        style: Some("table".to_string()),
    }
}

fn skill_table(sheet: &CharacterSheet) -> DocNode {
    let rows = sheet
        .skills
        .iter()
        .map(|row| {
            vec![
                TableCell::plain(&row.definition.label),
                TableCell::plain(row.rank.to_string()),
                TableCell::plain(row.base.to_string()),
                TableCell::plain(row.modifier.to_string()),
                TableCell::bold(row.total.to_string()),
            ]
        })
        .collect();

    DocNode::Table {
        widths: vec![
            ColumnWidth::Fill,
            ColumnWidth::Auto,
            ColumnWidth::Auto,
            ColumnWidth::Auto,
            ColumnWidth::Auto,
        ],
        header: vec![
            TableCell::header("Skill"),
            TableCell::header("Rank"),
            TableCell::header("Base"),
            TableCell::header("Mod"),
            TableCell::header("Total"),
        ],
        rows,
        style: Some("table".to_string()),
    }
}

fn default_styles(doc: &mut DocDefinition) {
    doc.style(
        "title",
        DocStyle::new()
            .font_size(22)
            .bold()
            .alignment(Alignment::Center)
            .margin(Margin::vertical(0.0, 10.0)),
    );
    doc.style(
        "header",
        DocStyle::new().font_size(18).bold().margin(Margin::vertical(0.0, 10.0)),
    );
    doc.style(
        "subheader",
        DocStyle::new().font_size(14).bold().margin(Margin::vertical(15.0, 5.0)),
    );
    doc.style("table", DocStyle::new().margin(Margin::vertical(5.0, 15.0)));
    doc.style(
        "tableHeader",
        DocStyle::new().bold().fill_color("#eeeeee"),
    );
}
