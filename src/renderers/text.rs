//! Plain-text viewer renderer.

use async_trait::async_trait;
use filepeek_render_api::{
    FileBuffer, RenderError, RenderHandle, RenderRequest, Renderer, SharedContainer,
};
use ratatui::text::{Line, Text};

use crate::io;

/// A text-viewer widget built from a single `content` property.
#[derive(Debug, Clone)]
pub struct TextViewer {
    content: String,
}

impl TextViewer {
    /// Build a viewer for the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The decoded text this viewer displays.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Render the content into mountable lines.
    #[must_use]
    pub fn into_text(self) -> Text<'static> {
        let lines: Vec<Line<'static>> = self
            .content
            .lines()
            .map(|line| Line::from(line.to_string()))
            .collect();
        Text::from(lines)
    }
}

/// Renders textual buffers by decoding them as UTF-8 and mounting a
/// [`TextViewer`].
pub struct TextRenderer;

#[async_trait]
impl Renderer for TextRenderer {
    async fn render(
        &self,
        buffer: &FileBuffer,
        target: &SharedContainer,
        _request: &RenderRequest,
    ) -> Result<RenderHandle, RenderError> {
        let content = io::read_text(buffer).await;
        let viewer = TextViewer::new(content);

        target.clear();
        target.mount(viewer.into_text());

        let mount = target.clone();
        Ok(RenderHandle::with_disposer(target.clone(), move || {
            mount.clear();
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mounts_decoded_content() {
        let target = SharedContainer::new();
        let buffer = FileBuffer::from(&b"line one\nline two"[..]);
        let request = RenderRequest::new("txt");

        TextRenderer
            .render(&buffer, &target, &request)
            .await
            .unwrap();

        assert_eq!(target.plain_text(), "line one\nline two\n");
    }

    #[tokio::test]
    async fn disposing_unmounts_the_viewer() {
        let target = SharedContainer::new();
        let buffer = FileBuffer::from(&b"content"[..]);
        let request = RenderRequest::new("txt");

        let mut handle = TextRenderer
            .render(&buffer, &target, &request)
            .await
            .unwrap();
        assert_eq!(target.block_count(), 1);

        handle.dispose();
        assert_eq!(target.block_count(), 0);
    }

    #[test]
    fn viewer_preserves_line_structure() {
        let text = TextViewer::new("a\nb\nc").into_text();
        assert_eq!(text.lines.len(), 3);
    }
}
