//! TANGENT export layer.
//!
//! Read-only serializers over a [`CharacterSheet`](tangent_domain::CharacterSheet)
//! snapshot: a declarative print document for the external rendering
//! service, and a flat Markdown document. Neither mutates the sheet.

pub mod doc;
pub mod filename;
pub mod markdown;
pub mod print;

pub use doc::{
    Alignment, ColumnWidth, DocDefinition, DocNode, DocStyle, LabeledLine, Margin, TableCell,
};
pub use filename::{markdown_filename, pdf_filename, sanitize_character_name};
pub use markdown::markdown_document;
pub use print::print_document;
