//! Use cases: one module per operation family.

pub mod export;
pub mod recalc;

pub use export::{ExportError, ExportUseCases, MARKDOWN_MIME, PDF_MIME};
pub use recalc::{RecalcEngine, SheetEdit};
