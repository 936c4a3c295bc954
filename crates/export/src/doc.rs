//! Declarative print document model.
//!
//! A [`DocDefinition`] is the in-memory description of a print document:
//! ordered content nodes plus a map of named styles. The rendering service
//! consumes this description (it serializes to camelCase JSON) and owns the
//! actual page layout; nothing here knows how to draw.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A complete print document description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocDefinition {
    /// Content nodes, rendered in order
    pub content: Vec<DocNode>,
    /// Named styles referenced by content nodes
    pub styles: BTreeMap<String, DocStyle>,
}

impl DocDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: DocNode) {
        self.content.push(node);
    }

    pub fn style(&mut self, name: impl Into<String>, style: DocStyle) {
        self.styles.insert(name.into(), style);
    }
}

/// A block-level element of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DocNode {
    /// A line of text with an optional named style.
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
    /// Side-by-side columns of labeled text lines.
    Columns {
        columns: Vec<Vec<LabeledLine>>,
        column_gap: u32,
    },
    /// A table with a header row and data rows.
    Table {
        /// Relative column widths (`*` = fill, `auto` = fit content)
        widths: Vec<ColumnWidth>,
        header: Vec<TableCell>,
        rows: Vec<Vec<TableCell>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
}

impl DocNode {
    pub fn text(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style: Some(style.into()),
        }
    }
}

/// A bold label followed by its value, one line in an info column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledLine {
    pub label: String,
    pub value: String,
}

impl LabeledLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Column sizing hint for tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnWidth {
    /// Take a share of the remaining width
    Fill,
    /// Fit the content
    Auto,
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl TableCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            style: None,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            style: None,
        }
    }

    pub fn header(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            style: Some("tableHeader".to_string()),
        }
    }
}

/// Margins in points: left, top, right, bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Margin(pub [f32; 4]);

impl Margin {
    pub fn vertical(top: f32, bottom: f32) -> Self {
        Self([0.0, top, 0.0, bottom])
    }
}

/// Horizontal alignment of a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A named, reusable formatting rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u8>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    /// Background fill for header cells, as a hex color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
}

impl DocStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(mut self, size: u8) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = Some(color.into());
        self
    }
}
