use thiserror::Error;

/// Errors surfaced by the dispatcher and by renderers.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No renderer accepted the requested type key and no fallback handler
    /// was registered under [`FALLBACK_KEY`](crate::FALLBACK_KEY).
    #[error("no renderer registered for '{type_key}' and no fallback handler present")]
    MissingFallback { type_key: String },

    /// The underlying read mechanism reported an error.
    #[error("read failed")]
    Io(#[from] std::io::Error),

    /// A renderer's own work failed. Propagated to the caller unmodified;
    /// the dispatcher performs no catch or retry.
    #[error("renderer failed: {0}")]
    Failure(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RenderError {
    /// Wrap a renderer-internal failure.
    pub fn failure(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Failure(err.into())
    }
}
