//! Presentation-format (pptx) outline renderer.
//!
//! A pptx file is a ZIP archive with a fixed internal layout. The renderer
//! draws an outline from the archive structure (slide count, media count)
//! without decoding slide content, then fires an explicit layout hook so the
//! caller can recompute any size-dependent layout after the mount.

use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use filepeek_render_api::{
    FileBuffer, RenderError, RenderHandle, RenderRequest, Renderer, SharedContainer,
};
use ratatui::text::{Line, Text};
use thiserror::Error;
use tracing::debug;
use zip::ZipArchive;

/// Callback invoked after presentation content has been mounted.
///
/// Callers that need to recompute size-dependent layout subscribe here
/// instead of listening for a process-wide resize event.
pub type LayoutHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Error)]
enum PresentationError {
    #[error("content is not a readable archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("archive does not contain ppt/presentation.xml")]
    NotPresentation,
}

/// Structural outline of a presentation archive.
#[derive(Debug, Default, PartialEq, Eq)]
struct Outline {
    slides: Vec<u32>,
    media_count: usize,
}

impl Outline {
    fn into_text(self) -> Text<'static> {
        let mut text = Text::default();
        text.push_line(Line::from(format!(
            "PowerPoint presentation: {} slides, {} media assets",
            self.slides.len(),
            self.media_count
        )));
        if !self.slides.is_empty() {
            text.push_line(Line::default());
        }
        for slide in self.slides {
            text.push_line(Line::from(format!("  slide {slide}")));
        }
        text
    }
}

/// Parse slide and media entries out of the archive's file names.
fn outline(buffer: &FileBuffer) -> Result<Outline, PresentationError> {
    let archive = ZipArchive::new(Cursor::new(buffer.as_bytes()))?;

    let mut found_manifest = false;
    let mut out = Outline::default();
    for name in archive.file_names() {
        if name == "ppt/presentation.xml" {
            found_manifest = true;
        } else if let Some(slide) = slide_number(name) {
            out.slides.push(slide);
        } else if name.starts_with("ppt/media/") {
            out.media_count += 1;
        }
    }

    if !found_manifest {
        return Err(PresentationError::NotPresentation);
    }

    out.slides.sort_unstable();
    Ok(out)
}

/// Match `ppt/slides/slide<N>.xml` and return `N`.
fn slide_number(name: &str) -> Option<u32> {
    name.strip_prefix("ppt/slides/slide")?
        .strip_suffix(".xml")?
        .parse()
        .ok()
}

/// Renders pptx buffers as a structural outline.
#[derive(Default)]
pub struct PresentationRenderer {
    layout_hook: Option<LayoutHook>,
}

impl PresentationRenderer {
    /// Renderer without a layout subscriber.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a hook fired after each successful mount.
    #[must_use]
    pub fn with_layout_hook(mut self, hook: LayoutHook) -> Self {
        self.layout_hook = Some(hook);
        self
    }
}

#[async_trait]
impl Renderer for PresentationRenderer {
    async fn render(
        &self,
        buffer: &FileBuffer,
        target: &SharedContainer,
        _request: &RenderRequest,
    ) -> Result<RenderHandle, RenderError> {
        let outline = outline(buffer).map_err(RenderError::failure)?;
        debug!(
            slides = outline.slides.len(),
            media = outline.media_count,
            "mounting presentation outline"
        );

        target.clear();
        target.mount(outline.into_text());

        if let Some(hook) = &self.layout_hook {
            hook();
        }

        // No internal resources are tracked for teardown.
        Ok(RenderHandle::new(target.clone()))
    }
}
