//! Fallback renderer for unrecognized formats.

use async_trait::async_trait;
use filepeek_render_api::{
    FileBuffer, RenderError, RenderHandle, RenderRequest, Renderer, SharedContainer,
};
use ratatui::text::{Line, Text};
use rust_i18n::t;

/// Writes an in-place message naming the unrecognized type and listing the
/// supported categories. The buffer is ignored; rendering never fails.
pub struct UnsupportedRenderer;

#[async_trait]
impl Renderer for UnsupportedRenderer {
    async fn render(
        &self,
        _buffer: &FileBuffer,
        target: &SharedContainer,
        request: &RenderRequest,
    ) -> Result<RenderHandle, RenderError> {
        let mut text = Text::default();
        text.push_line(
            Line::from(t!("unsupported.headline", ext = request.type_key()).into_owned())
                .centered(),
        );
        text.push_line(Line::from(t!("unsupported.supported").into_owned()).centered());

        target.clear();
        target.mount(text);

        Ok(RenderHandle::new(target.clone()))
    }
}
