use std::fmt;

use crate::container::SharedContainer;

/// Teardown action attached to a [`RenderHandle`].
pub type Disposer = Box<dyn FnOnce() + Send>;

/// Opaque result of a render call: the mounted root plus a teardown action.
///
/// Disposal is consume-once: the disposer is taken on the first
/// [`dispose`](Self::dispose) call, so calling it zero or one times is always
/// safe and further calls do nothing.
pub struct RenderHandle {
    root: SharedContainer,
    disposer: Option<Disposer>,
}

impl RenderHandle {
    /// Wrap a mounted root with a no-op disposer.
    ///
    /// This is the baseline for renderers that do not track internal
    /// resources for teardown.
    #[must_use]
    pub fn new(root: SharedContainer) -> Self {
        Self {
            root,
            disposer: None,
        }
    }

    /// Wrap a mounted root with a real teardown action.
    #[must_use]
    pub fn with_disposer(root: SharedContainer, disposer: impl FnOnce() + Send + 'static) -> Self {
        Self {
            root,
            disposer: Some(Box::new(disposer)),
        }
    }

    /// The container the renderer mounted into.
    #[must_use]
    pub fn root(&self) -> &SharedContainer {
        &self.root
    }

    /// Release whatever the renderer allocated. Subsequent calls are no-ops.
    pub fn dispose(&mut self) {
        if let Some(disposer) = self.disposer.take() {
            disposer();
        }
    }
}

impl fmt::Debug for RenderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderHandle")
            .field("blocks", &self.root.block_count())
            .field("disposable", &self.disposer.is_some())
            .finish()
    }
}
