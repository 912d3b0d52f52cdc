//! Extension-dispatched file preview rendering.
//!
//! The root module re-exports the rendering interfaces from
//! [`filepeek_render_api`] so embedders can read a file, derive a type key,
//! and dispatch a render without digging through the module hierarchy.

pub mod app_dirs;
pub mod extension;
pub mod io;
pub mod logging;
pub mod renderers;
pub mod viewer;

rust_i18n::i18n!("locales", fallback = "en");

pub use filepeek_render_api::{
    Container, Disposer, FALLBACK_KEY, FileBuffer, RenderError, RenderHandle, RenderRequest,
    Renderer, RendererEntry, RendererRegistry, SharedContainer,
};
