//! fresco: an immediate-mode UI command renderer.
//!
//! A layout engine hands this crate one ordered list of draw commands per
//! frame (rectangles, borders, text runs, images, scissor regions) and
//! expects pixels before the frame is presented. The crate decomposes those
//! commands into calls against a pluggable [`Backend`] and owns the two
//! asset stores the commands reference: a bounded [`FontRegistry`] and an
//! [`ImageCache`] that invalidates textures by quantized size, so noisy
//! floating-point layout extents never cause needless re-rasterization.
//!
//! Window creation, the event loop, layout itself, and the concrete
//! rasterizer all live outside this crate.

pub mod backend;
pub mod fonts;
pub mod images;
pub mod renderer;
pub mod types;

pub use backend::Backend;
pub use fonts::{FontError, FontId, FontRegistry, RasterFont};
pub use images::{ImageCache, ImageError};
pub use renderer::{RenderCommand, Renderer};
pub use types::{BorderWidth, Color, CornerRadius, Dimensions, Rect, Vec2};

pub mod prelude {
    pub use crate::backend::Backend;
    pub use crate::fonts::{FontId, FontRegistry};
    pub use crate::images::ImageCache;
    pub use crate::renderer::{RenderCommand, Renderer};
    pub use crate::types::{BorderWidth, Color, CornerRadius, Dimensions, Rect, Vec2};
}
