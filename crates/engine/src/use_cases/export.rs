//! Export use cases.
//!
//! Reads the current field snapshot, serializes it, and pushes the result
//! through the render/download ports. Both exports are read-only over the
//! sheet; the only failure modes are port failures.

use std::sync::Arc;

use tangent_domain::{CharacterSheet, SheetFields, SkillRoster};
use tangent_export::{markdown_document, markdown_filename, pdf_filename, print_document};

use crate::ports::{DocumentRenderer, DownloadError, DownloadRequest, DownloadSink, RenderError};

/// MIME type of the Markdown export.
pub const MARKDOWN_MIME: &str = "text/markdown;charset=utf-8";

/// MIME type of the print export.
pub const PDF_MIME: &str = "application/pdf";

/// Errors that can occur while exporting a sheet.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Download error: {0}")]
    Download(#[from] DownloadError),
}

/// Container for the export use cases.
pub struct ExportUseCases {
    renderer: Arc<dyn DocumentRenderer>,
    downloads: Arc<dyn DownloadSink>,
    roster: SkillRoster,
}

impl ExportUseCases {
    pub fn new(
        renderer: Arc<dyn DocumentRenderer>,
        downloads: Arc<dyn DownloadSink>,
        roster: SkillRoster,
    ) -> Self {
        Self {
            renderer,
            downloads,
            roster,
        }
    }

    /// Export the current sheet as a print document download.
    ///
    /// Snapshots the fields, composes the declarative document, renders it
    /// through the port, and triggers a download named
    /// `<sanitized name>-TANGENT-Sheet.pdf`.
    pub fn save_as_pdf(&self, fields: &SheetFields) -> Result<(), ExportError> {
        let sheet = CharacterSheet::from_fields(fields, &self.roster);
        let filename = pdf_filename(&sheet.bio.name);
        let bytes = self.renderer.render(&print_document(&sheet))?;
        self.download(DownloadRequest {
            filename: filename.clone(),
            mime_type: PDF_MIME.to_string(),
            bytes,
        })?;

        tracing::info!(filename = %filename, "Exported print document");
        Ok(())
    }

    /// Export the current sheet as a Markdown download.
    ///
    /// Snapshots the fields, serializes them to Markdown, and triggers a
    /// download named `<sanitized name>-TANGENT-Sheet.md`.
    pub fn save_as_markdown(&self, fields: &SheetFields) -> Result<(), ExportError> {
        let sheet = CharacterSheet::from_fields(fields, &self.roster);
        let filename = markdown_filename(&sheet.bio.name);
        let bytes = markdown_document(&sheet).into_bytes();
        self.download(DownloadRequest {
            filename: filename.clone(),
            mime_type: MARKDOWN_MIME.to_string(),
            bytes,
        })?;

        tracing::info!(filename = %filename, "Exported Markdown document");
        Ok(())
    }

    /// Acquire the temporary download handle, click, then release it.
    ///
    /// There is one normal exit path: the handle is revoked right after the
    /// triggering click. A failed click propagates, and the handle's own
    /// `Drop` backstop covers release on that path.
    fn download(&self, request: DownloadRequest) -> Result<(), ExportError> {
        let mut handle = self.downloads.begin(request)?;
        handle.click()?;
        handle.revoke();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockDocumentRenderer, MockDownloadHandle, MockDownloadSink};
    use mockall::predicate;
    use tangent_domain::tangent_default_skills;

    fn fields_with_name(name: &str) -> SheetFields {
        let mut fields = SheetFields::new();
        fields.set("char-name", name);
        fields
    }

    fn clicking_handle() -> Box<MockDownloadHandle> {
        let mut handle = Box::new(MockDownloadHandle::new());
        let mut seq = mockall::Sequence::new();
        handle
            .expect_click()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        handle
            .expect_revoke()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| ());
        handle
    }

    #[test]
    fn test_save_as_pdf_renders_and_downloads() {
        let mut renderer = MockDocumentRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(|_| Ok(b"%PDF-1.7".to_vec()));

        let mut sink = MockDownloadSink::new();
        sink.expect_begin()
            .times(1)
            .withf(|request| {
                request.filename == "Jax_Vex-TANGENT-Sheet.pdf"
                    && request.mime_type == PDF_MIME
                    && request.bytes == b"%PDF-1.7"
            })
            .returning(|_| Ok(clicking_handle() as Box<dyn crate::ports::DownloadHandle>));

        let export = ExportUseCases::new(
            Arc::new(renderer),
            Arc::new(sink),
            tangent_default_skills(),
        );
        export
            .save_as_pdf(&fields_with_name("Jax Vex"))
            .expect("export succeeds");
    }

    #[test]
    fn test_save_as_markdown_uses_fallback_name_and_mime() {
        let renderer = MockDocumentRenderer::new();

        let mut sink = MockDownloadSink::new();
        sink.expect_begin()
            .times(1)
            .withf(|request| {
                request.filename == "character-TANGENT-Sheet.md"
                    && request.mime_type == MARKDOWN_MIME
                    && request.bytes.starts_with(b"# TANGENT Character: ")
            })
            .returning(|_| Ok(clicking_handle() as Box<dyn crate::ports::DownloadHandle>));

        let export = ExportUseCases::new(
            Arc::new(renderer),
            Arc::new(sink),
            tangent_default_skills(),
        );
        export
            .save_as_markdown(&SheetFields::new())
            .expect("export succeeds");
    }

    #[test]
    fn test_render_failure_propagates_and_skips_download() {
        let mut renderer = MockDocumentRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(|_| Err(RenderError::RequestFailed("service down".to_string())));

        let mut sink = MockDownloadSink::new();
        sink.expect_begin().times(0);

        let export = ExportUseCases::new(
            Arc::new(renderer),
            Arc::new(sink),
            tangent_default_skills(),
        );
        let err = export
            .save_as_pdf(&fields_with_name("Jax Vex"))
            .expect_err("render failure propagates");
        assert!(matches!(err, ExportError::Render(_)));
    }

    #[test]
    fn test_failed_click_propagates_without_revoke_call() {
        let mut sink = MockDownloadSink::new();
        sink.expect_begin().times(1).returning(|_| {
            let mut handle = Box::new(MockDownloadHandle::new());
            handle
                .expect_click()
                .times(1)
                .returning(|| Err(DownloadError::TriggerFailed("blocked".to_string())));
            handle.expect_revoke().times(0);
            Ok(handle as Box<dyn crate::ports::DownloadHandle>)
        });

        let export = ExportUseCases::new(
            Arc::new(MockDocumentRenderer::new()),
            Arc::new(sink),
            tangent_default_skills(),
        );
        let err = export
            .save_as_markdown(&SheetFields::new())
            .expect_err("click failure propagates");
        assert!(matches!(err, ExportError::Download(_)));
    }

    #[test]
    fn test_exports_do_not_mutate_the_fields() {
        let mut sink = MockDownloadSink::new();
        sink.expect_begin()
            .times(1)
            .returning(|_| Ok(clicking_handle() as Box<dyn crate::ports::DownloadHandle>));

        let export = ExportUseCases::new(
            Arc::new(MockDocumentRenderer::new()),
            Arc::new(sink),
            tangent_default_skills(),
        );
        let fields = fields_with_name("Jax Vex");
        let before = fields.clone();
        export.save_as_markdown(&fields).expect("export succeeds");
        assert_eq!(fields, before);
    }

    #[test]
    fn test_pdf_filename_uses_predicate_on_empty_name() {
        let mut renderer = MockDocumentRenderer::new();
        renderer.expect_render().returning(|_| Ok(Vec::new()));

        let mut sink = MockDownloadSink::new();
        sink.expect_begin()
            .with(predicate::function(|request: &DownloadRequest| {
                request.filename == "character-TANGENT-Sheet.pdf"
            }))
            .times(1)
            .returning(|_| Ok(clicking_handle() as Box<dyn crate::ports::DownloadHandle>));

        let export = ExportUseCases::new(
            Arc::new(renderer),
            Arc::new(sink),
            tangent_default_skills(),
        );
        export
            .save_as_pdf(&SheetFields::new())
            .expect("export succeeds");
    }
}
