//! The generate dispatcher.

use colorterm_render::{Document, Palette, RenderError, Renderer};

use crate::error::DispatchError;
use crate::guides::{InstallGuides, GUIDE_FILE_NAME};
use crate::mode::Mode;
use crate::package::{Download, Packager, ZipPackager};
use crate::request::GenerateRequest;

/// Default file name of the downloaded archive.
pub const DEFAULT_ARCHIVE_NAME: &str = "colorterm.zip";

/// Routes a mode string to its target, renders it, and packages the result.
///
/// A dispatcher holds only read-only state after construction, so one
/// instance can serve concurrent requests through `&self`.
pub struct Dispatcher {
    renderer: Renderer,
    guides: InstallGuides,
    packager: Box<dyn Packager>,
    archive_name: String,
}

impl Dispatcher {
    /// Creates a dispatcher with a zip packager and the default archive name.
    pub fn new(renderer: Renderer, guides: InstallGuides) -> Self {
        Self {
            renderer,
            guides,
            packager: Box::new(ZipPackager),
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
        }
    }

    /// A dispatcher over the bundled templates and install guides.
    pub fn builtin() -> Result<Self, RenderError> {
        Ok(Self::new(Renderer::new()?, InstallGuides::embedded()))
    }

    pub fn with_archive_name(mut self, name: impl Into<String>) -> Self {
        self.archive_name = name.into();
        self
    }

    pub fn with_packager(mut self, packager: Box<dyn Packager>) -> Self {
        self.packager = packager;
        self
    }

    pub fn archive_name(&self) -> &str {
        &self.archive_name
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Renders the configuration document for `mode` without packaging it.
    pub fn render(&self, mode: &str, palette: &Palette) -> Result<Document, DispatchError> {
        let mode: Mode = mode.parse()?;
        Ok(mode.render(palette, &self.renderer)?)
    }

    /// Renders `mode` and packs the install guide plus the document into an
    /// archive. The guide is always the first entry.
    pub fn dispatch(&self, mode: &str, palette: &Palette) -> Result<Download, DispatchError> {
        let result = self.try_dispatch(mode, palette);
        match &result {
            Ok(download) => tracing::info!(
                mode,
                archive = download.filename(),
                bytes = download.content_length(),
                "theme archive generated"
            ),
            Err(err) => tracing::warn!(
                mode,
                client_error = err.is_client_error(),
                error = %err,
                "theme generation failed"
            ),
        }
        result
    }

    /// Dispatches a decoded request body.
    pub fn handle(&self, request: &GenerateRequest) -> Result<Download, DispatchError> {
        self.dispatch(&request.generate_mode, &request.colors)
    }

    fn try_dispatch(&self, mode: &str, palette: &Palette) -> Result<Download, DispatchError> {
        let mode: Mode = mode.parse()?;
        let guide = self
            .guides
            .get(mode)
            .ok_or(DispatchError::MissingGuide(mode))?;
        let document = mode.render(palette, &self.renderer)?;

        let bytes = self.packager.pack(&[
            (GUIDE_FILE_NAME, guide.as_bytes()),
            (document.file_name(), document.as_bytes()),
        ])?;

        Ok(Download::new(
            self.archive_name.clone(),
            self.packager.content_type(),
            bytes,
        ))
    }
}
