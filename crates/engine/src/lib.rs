//! TANGENT engine layer.
//!
//! Orchestrates the two core operations of the sheet editor — skill total
//! recalculation and document export — over port traits that the host UI
//! implements. Everything is synchronous and single-threaded: work happens
//! on the thread that received the field-change or button-click event, and
//! no operation suspends, blocks, or spawns.

pub mod ports;
pub mod use_cases;

pub use ports::{
    DocumentRenderer, DownloadError, DownloadHandle, DownloadRequest, DownloadSink, FieldStore,
    RenderError,
};
pub use use_cases::{ExportError, ExportUseCases, RecalcEngine, SheetEdit, MARKDOWN_MIME, PDF_MIME};
