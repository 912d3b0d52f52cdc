use async_trait::async_trait;

use crate::buffer::FileBuffer;
use crate::container::SharedContainer;
use crate::error::RenderError;
use crate::handle::RenderHandle;

/// Registry key of the fallback handler invoked for unrecognized types.
pub const FALLBACK_KEY: &str = "error";

/// Per-dispatch context handed to a renderer.
///
/// Carries the type key the dispatch was made with. For a fallback dispatch
/// this is the original unrecognized key, so the fallback renderer can report
/// it to the user.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    type_key: String,
}

impl RenderRequest {
    /// Build a request for the given type key.
    pub fn new(type_key: impl Into<String>) -> Self {
        Self {
            type_key: type_key.into(),
        }
    }

    /// The type key this dispatch was made with.
    #[must_use]
    pub fn type_key(&self) -> &str {
        &self.type_key
    }
}

/// A preview renderer for one category of file content.
///
/// A renderer draws visible output into `target` and returns a
/// [`RenderHandle`] wrapping the mount. Internal async failures propagate to
/// the dispatcher's caller unmodified.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Draw a preview of `buffer` into `target`.
    async fn render(
        &self,
        buffer: &FileBuffer,
        target: &SharedContainer,
        request: &RenderRequest,
    ) -> Result<RenderHandle, RenderError>;
}
