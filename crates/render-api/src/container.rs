//! Mount targets that renderers draw into.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ratatui::text::Text;

/// A mount target owning the blocks a renderer has produced.
///
/// A container is a titled, ordered list of [`Text`] blocks. Renderers
/// replace or append blocks; a front-end later draws them however it likes.
#[derive(Debug, Default, Clone)]
pub struct Container {
    title: Option<String>,
    blocks: Vec<Text<'static>>,
}

impl Container {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Title describing the mounted content, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Replace the container title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Append a block of rendered content.
    pub fn mount(&mut self, block: Text<'static>) {
        self.blocks.push(block);
    }

    /// Remove every mounted block and the title.
    pub fn clear(&mut self) {
        self.title = None;
        self.blocks.clear();
    }

    /// Mounted blocks in mount order.
    #[must_use]
    pub fn blocks(&self) -> &[Text<'static>] {
        &self.blocks
    }

    /// Number of mounted blocks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` when nothing has been mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Flatten the mounted blocks into plain text, one line per rendered line.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            for line in &block.lines {
                for span in &line.spans {
                    out.push_str(&span.content);
                }
                out.push('\n');
            }
        }
        out
    }
}

/// A shareable container handle.
///
/// Renderers receive the target by shared handle so the returned
/// [`RenderHandle`](crate::RenderHandle) can keep pointing at the mounted
/// content. Concurrent renders into the same container race by design; the
/// later writer wins.
#[derive(Debug, Default, Clone)]
pub struct SharedContainer {
    inner: Arc<Mutex<Container>>,
}

impl SharedContainer {
    /// Create a handle to a fresh empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Container> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the container title.
    pub fn set_title(&self, title: impl Into<String>) {
        self.lock().set_title(title);
    }

    /// Append a block of rendered content.
    pub fn mount(&self, block: Text<'static>) {
        self.lock().mount(block);
    }

    /// Remove every mounted block and the title.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Run `f` with shared access to the container contents.
    pub fn with<R>(&self, f: impl FnOnce(&Container) -> R) -> R {
        f(&self.lock())
    }

    /// Number of mounted blocks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.lock().block_count()
    }

    /// Flatten the mounted blocks into plain text.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.lock().plain_text()
    }
}
