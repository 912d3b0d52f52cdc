//! Dispatch registry mapping type keys to renderers.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::buffer::FileBuffer;
use crate::container::SharedContainer;
use crate::error::RenderError;
use crate::handle::RenderHandle;
use crate::renderer::{FALLBACK_KEY, RenderRequest, Renderer};

/// One declarative registration: a set of accepted type keys and the handler
/// servicing them.
///
/// Entries are immutable after construction. An entry with an empty accept
/// set contributes nothing to the registry.
#[derive(Clone)]
pub struct RendererEntry {
    accepts: Vec<String>,
    handler: Arc<dyn Renderer>,
}

impl RendererEntry {
    /// Pair a set of accepted type keys with a handler.
    pub fn new<I, K>(accepts: I, handler: Arc<dyn Renderer>) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            accepts: accepts.into_iter().map(Into::into).collect(),
            handler,
        }
    }

    /// The type keys this entry accepts.
    #[must_use]
    pub fn accepts(&self) -> &[String] {
        &self.accepts
    }
}

/// Read-only mapping from type key to renderer, built once before the first
/// dispatch.
pub struct RendererRegistry {
    handlers: IndexMap<String, Arc<dyn Renderer>>,
}

impl RendererRegistry {
    /// Flatten an ordered entry list into the registry.
    ///
    /// Every (entry, key) pair records key → handler, overwriting any prior
    /// mapping for that key: when two entries declare the same key, the later
    /// entry in the list wins. Matching is case-sensitive.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = RendererEntry>) -> Self {
        let mut handlers: IndexMap<String, Arc<dyn Renderer>> = IndexMap::new();
        for entry in entries {
            for key in entry.accepts {
                handlers.insert(key, Arc::clone(&entry.handler));
            }
        }
        Self { handlers }
    }

    /// Look up the handler registered for a type key.
    #[must_use]
    pub fn handler(&self, type_key: &str) -> Option<Arc<dyn Renderer>> {
        self.handlers.get(type_key).cloned()
    }

    /// Returns `true` if a handler is registered for the type key.
    #[must_use]
    pub fn contains(&self, type_key: &str) -> bool {
        self.handlers.contains_key(type_key)
    }

    /// Registered type keys, in first-registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Number of registered type keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` when no keys are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Dispatch one render.
    ///
    /// Looks up `type_key` and invokes the matching handler with the buffer
    /// and target. An unrecognized key is not a failure: it routes to the
    /// handler registered under [`FALLBACK_KEY`], with the original key
    /// carried in the request so the fallback can report it. Exactly one
    /// renderer invocation occurs per call; renderer failures propagate
    /// unmodified.
    pub async fn render(
        &self,
        buffer: &FileBuffer,
        type_key: &str,
        target: &SharedContainer,
    ) -> Result<RenderHandle, RenderError> {
        let request = RenderRequest::new(type_key);
        if let Some(handler) = self.handlers.get(type_key) {
            debug!(type_key, "dispatching renderer");
            return handler.render(buffer, target, &request).await;
        }

        debug!(type_key, "no renderer registered, using fallback");
        let fallback =
            self.handlers
                .get(FALLBACK_KEY)
                .ok_or_else(|| RenderError::MissingFallback {
                    type_key: type_key.to_string(),
                })?;
        fallback.render(buffer, target, &request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;

    /// Records every invocation along with the request's type key.
    #[derive(Default)]
    struct RecordingRenderer {
        calls: AtomicUsize,
        seen_keys: Mutex<Vec<String>>,
    }

    impl RecordingRenderer {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn seen_keys(&self) -> Vec<String> {
            self.seen_keys.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Renderer for RecordingRenderer {
        async fn render(
            &self,
            _buffer: &FileBuffer,
            target: &SharedContainer,
            request: &RenderRequest,
        ) -> Result<RenderHandle, RenderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen_keys
                .lock()
                .unwrap()
                .push(request.type_key().to_string());
            Ok(RenderHandle::new(target.clone()))
        }
    }

    fn registry_with(
        entries: Vec<(Vec<&str>, Arc<RecordingRenderer>)>,
    ) -> RendererRegistry {
        RendererRegistry::from_entries(entries.into_iter().map(|(accepts, handler)| {
            RendererEntry::new(accepts, handler as Arc<dyn Renderer>)
        }))
    }

    #[tokio::test]
    async fn registered_key_invokes_exactly_that_handler() {
        let text = Arc::new(RecordingRenderer::default());
        let fallback = Arc::new(RecordingRenderer::default());
        let registry = registry_with(vec![
            (vec!["txt", "log"], Arc::clone(&text)),
            (vec![FALLBACK_KEY], Arc::clone(&fallback)),
        ]);

        let buffer = FileBuffer::new(Vec::new());
        registry
            .render(&buffer, "log", &SharedContainer::new())
            .await
            .unwrap();

        assert_eq!(text.calls(), 1);
        assert_eq!(fallback.calls(), 0);
    }

    #[tokio::test]
    async fn unknown_key_routes_to_fallback_with_original_key() {
        let text = Arc::new(RecordingRenderer::default());
        let fallback = Arc::new(RecordingRenderer::default());
        let registry = registry_with(vec![
            (vec!["txt"], Arc::clone(&text)),
            (vec![FALLBACK_KEY], Arc::clone(&fallback)),
        ]);

        let buffer = FileBuffer::new(Vec::new());
        registry
            .render(&buffer, "exe", &SharedContainer::new())
            .await
            .unwrap();

        assert_eq!(text.calls(), 0);
        assert_eq!(fallback.calls(), 1);
        assert_eq!(fallback.seen_keys(), vec!["exe".to_string()]);
    }

    #[tokio::test]
    async fn duplicate_keys_resolve_last_write_wins() {
        let first = Arc::new(RecordingRenderer::default());
        let second = Arc::new(RecordingRenderer::default());
        let registry = registry_with(vec![
            (vec!["x"], Arc::clone(&first)),
            (vec!["x"], Arc::clone(&second)),
        ]);

        let buffer = FileBuffer::new(Vec::new());
        registry
            .render(&buffer, "x", &SharedContainer::new())
            .await
            .unwrap();

        assert_eq!(first.calls(), 0);
        assert_eq!(second.calls(), 1);
    }

    #[tokio::test]
    async fn missing_fallback_is_a_typed_error() {
        let text = Arc::new(RecordingRenderer::default());
        let registry = registry_with(vec![(vec!["txt"], Arc::clone(&text))]);

        let buffer = FileBuffer::new(Vec::new());
        let err = registry
            .render(&buffer, "exe", &SharedContainer::new())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RenderError::MissingFallback { type_key } if type_key == "exe"
        ));
        assert_eq!(text.calls(), 0);
    }

    #[test]
    fn empty_accept_set_contributes_nothing() {
        let handler = Arc::new(RecordingRenderer::default());
        let registry = registry_with(vec![(vec![], handler)]);
        assert!(registry.is_empty());
    }

    #[test]
    fn keys_report_registration() {
        let handler = Arc::new(RecordingRenderer::default());
        let registry = registry_with(vec![(vec!["txt", "json"], handler)]);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("txt"));
        assert!(!registry.contains("exe"));
        assert!(registry.handler("json").is_some());
    }
}
