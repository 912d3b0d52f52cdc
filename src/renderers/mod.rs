//! Builtin renderers and the declarative registration list.
//!
//! The ordered entry list returned by [`builtin_entries`] is the sole
//! configuration surface: supporting a new format means appending an entry
//! with its accepted extensions and a handler. Later entries overwrite
//! earlier ones for duplicate keys, which is how user-configured extra text
//! extensions take effect.

mod presentation;
mod text;
mod unsupported;

use std::sync::Arc;

use filepeek_render_api::{FALLBACK_KEY, RendererEntry, RendererRegistry};

pub use presentation::{LayoutHook, PresentationRenderer};
pub use text::{TextRenderer, TextViewer};
pub use unsupported::UnsupportedRenderer;

/// Extensions routed to the plain-text viewer.
pub const TEXT_EXTENSIONS: [&str; 12] = [
    "txt", "json", "js", "css", "java", "py", "html", "jsx", "ts", "tsx", "xml", "log",
];

/// The builtin registration list, in declaration order.
pub fn builtin_entries(layout_hook: Option<LayoutHook>) -> Vec<RendererEntry> {
    let presentation = match layout_hook {
        Some(hook) => PresentationRenderer::new().with_layout_hook(hook),
        None => PresentationRenderer::new(),
    };

    vec![
        RendererEntry::new(["pptx"], Arc::new(presentation)),
        RendererEntry::new(TEXT_EXTENSIONS, Arc::new(TextRenderer)),
        RendererEntry::new([FALLBACK_KEY], Arc::new(UnsupportedRenderer)),
    ]
}

/// Build the registry from the builtin entries plus user-configured extra
/// text extensions, which are appended last so they win over any builtin
/// mapping for the same key.
#[must_use]
pub fn registry(
    extra_text_extensions: &[String],
    layout_hook: Option<LayoutHook>,
) -> RendererRegistry {
    let mut entries = builtin_entries(layout_hook);
    if !extra_text_extensions.is_empty() {
        entries.push(RendererEntry::new(
            extra_text_extensions.iter().cloned(),
            Arc::new(TextRenderer),
        ));
    }
    RendererRegistry::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_covers_all_declared_keys() {
        let registry = registry(&[], None);
        assert!(registry.contains("pptx"));
        for ext in TEXT_EXTENSIONS {
            assert!(registry.contains(ext), "missing {ext}");
        }
        assert!(registry.contains(FALLBACK_KEY));
        assert_eq!(registry.len(), 2 + TEXT_EXTENSIONS.len());
    }

    #[test]
    fn extra_extensions_are_appended() {
        let extra = vec!["conf".to_string(), "ini".to_string()];
        let registry = registry(&extra, None);
        assert!(registry.contains("conf"));
        assert!(registry.contains("ini"));
    }
}
