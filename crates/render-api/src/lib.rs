//! Shared rendering interfaces and the dispatch registry for `filepeek`.
//!
//! Renderers implement [`Renderer`] and are wired into a [`RendererRegistry`]
//! through an ordered list of [`RendererEntry`] values. The registry is built
//! once, before the first dispatch, and is read-only afterwards.

mod buffer;
mod container;
mod error;
mod handle;
mod registry;
mod renderer;

pub use buffer::FileBuffer;
pub use container::{Container, SharedContainer};
pub use error::RenderError;
pub use handle::{Disposer, RenderHandle};
pub use registry::{RendererEntry, RendererRegistry};
pub use renderer::{FALLBACK_KEY, RenderRequest, Renderer};
