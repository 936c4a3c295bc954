//! Port traits for host UI boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist for:
//! - The live form fields (could be a DOM, a TUI, or an in-memory map)
//! - Print rendering (opaque service that turns a doc definition into bytes)
//! - File downloads (host mechanism that hands a byte blob to the user)
//!
//! All ports are synchronous: every operation in this system is a bounded
//! computation on the thread that received the triggering event.

use tangent_domain::FieldId;
use tangent_export::DocDefinition;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Render request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("Download could not be started: {0}")]
    NotStarted(String),
    #[error("Download trigger failed: {0}")]
    TriggerFailed(String),
}

// =============================================================================
// Field Store
// =============================================================================

/// The live input surface, field by field.
///
/// The host UI adapter maps this onto its real inputs; tests and headless
/// callers use [`tangent_domain::SheetFields`], which implements it.
#[cfg_attr(test, mockall::automock)]
pub trait FieldStore {
    /// Current raw value of a field, if the field exists.
    fn get(&self, id: &FieldId) -> Option<String>;

    /// Write a field's displayed value.
    fn set(&mut self, id: &FieldId, value: String);
}

impl FieldStore for tangent_domain::SheetFields {
    fn get(&self, id: &FieldId) -> Option<String> {
        // Inherent `SheetFields::get` is keyed by `&str`.
        tangent_domain::SheetFields::get(self, id.as_str()).map(str::to_string)
    }

    fn set(&mut self, id: &FieldId, value: String) {
        tangent_domain::SheetFields::set(self, id.clone(), value);
    }
}

// =============================================================================
// Print Rendering
// =============================================================================

/// Opaque print-rendering collaborator.
///
/// Accepts the declarative content/style description and produces the bytes
/// of a print-ready document. Layout is entirely its concern.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentRenderer {
    fn render(&self, doc: &DocDefinition) -> Result<Vec<u8>, RenderError>;
}

// =============================================================================
// File Downloads
// =============================================================================

/// A file download ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Host mechanism that turns a byte blob into a user-visible download.
#[cfg_attr(test, mockall::automock)]
pub trait DownloadSink {
    /// Acquire a temporary download handle for the given payload.
    fn begin(&self, request: DownloadRequest) -> Result<Box<dyn DownloadHandle>, DownloadError>;
}

/// Scoped handle to an in-flight download.
///
/// The handle is a temporary resource: after the triggering [`click`],
/// callers release it with [`revoke`]. Implementations should also revoke
/// from `Drop` as a backstop so an early return cannot leak the handle.
///
/// [`click`]: DownloadHandle::click
/// [`revoke`]: DownloadHandle::revoke
#[cfg_attr(test, mockall::automock)]
pub trait DownloadHandle {
    /// Trigger the download.
    fn click(&mut self) -> Result<(), DownloadError>;

    /// Release the temporary resource backing the download.
    fn revoke(&mut self);
}
