//! The live input surface, captured as named field values.
//!
//! Every entity in this crate is reconstructed from a [`SheetFields`] on
//! read; nothing is persisted. Missing, blank, and non-numeric values all
//! degrade to their zero defaults here, so callers never handle those cases
//! themselves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::FieldId;

/// Parse a raw field value as an integer, defaulting to 0.
///
/// Blank and non-numeric inputs are silently treated as 0; no error is
/// surfaced. This mirrors how the form treats an empty rank box.
pub fn parse_number(raw: &str) -> i32 {
    raw.trim().parse::<i32>().unwrap_or(0)
}

/// A snapshot of every named input field at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SheetFields {
    pub values: BTreeMap<FieldId, String>,
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
}

impl SheetFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Free-text value of a field; empty string when the field is absent.
    pub fn text(&self, id: &str) -> &str {
        self.get(id).unwrap_or("")
    }

    /// Numeric value of a field; 0 when absent, blank, or non-numeric.
    pub fn number(&self, id: &str) -> i32 {
        self.get(id).map(parse_number).unwrap_or(0)
    }

    pub fn set(&mut self, id: impl Into<FieldId>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
        self.last_updated = Some(chrono::Utc::now());
    }

    pub fn set_number(&mut self, id: impl Into<FieldId>, value: i32) {
        self.set(id, value.to_string());
    }
}
