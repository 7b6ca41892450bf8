//! The seam between the command renderer and the 2D graphics library.
//!
//! The renderer never talks to a window, a GPU, or a rasterizer directly; it
//! issues calls against this trait. A production backend wraps whatever
//! drawing library the application shell uses, and tests substitute a
//! recording backend.

use image::RgbaImage;

use crate::fonts::RasterFont;
use crate::types::{Color, Rect, Vec2};

/// A 2D drawing surface plus texture storage.
///
/// All drawing happens between the application shell's frame begin/end on a
/// single thread. Clip regions form a stack: `push_clip`/`pop_clip` calls
/// arrive in the order the command list pairs them, and the backend is not
/// expected to validate pairing.
pub trait Backend {
    /// Opaque handle to an uploaded texture. Ownership is strict: the image
    /// cache holds exactly one live handle per entry and passes it back to
    /// [`Backend::destroy_texture`] before requesting a replacement.
    type Texture;

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a ring segment centered at `center`, covering radii
    /// `inner_radius..outer_radius` and sweeping clockwise from
    /// `start_angle` to `end_angle` in degrees, 0° along positive x.
    /// An `inner_radius` of zero fills a solid pie slice.
    fn fill_ring(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
    );

    /// Draw a text run at `origin` (top-left) with the given pixel size and
    /// letter spacing.
    fn draw_text(
        &mut self,
        font: &RasterFont,
        text: &str,
        origin: Vec2,
        size: f32,
        spacing: f32,
        color: Color,
    );

    /// Blit a texture at `origin` (top-left), modulated by `tint`.
    fn draw_texture(&mut self, texture: &Self::Texture, origin: Vec2, tint: Color);

    /// Push a rectangular clip region; drawing outside it is suppressed
    /// until the matching [`Backend::pop_clip`].
    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);

    /// Upload decoded RGBA pixels as a new texture.
    fn create_texture(&mut self, pixels: &RgbaImage) -> Self::Texture;

    /// Release a texture. After this call the handle is gone; the cache
    /// never holds a destroyed handle.
    fn destroy_texture(&mut self, texture: Self::Texture);

    /// Map a floating-point extent from the layout engine onto this
    /// backend's rasterization grid.
    ///
    /// The texture cache keys entries on the quantized pair, so two frames
    /// whose float extents collapse to the same value here share one
    /// texture. The default truncates toward zero (negative and NaN inputs
    /// saturate to 0), matching backends that rasterize on an integer grid.
    /// A backend with a different rounding rule overrides this and the
    /// cache logic stays untouched.
    fn quantize_extent(&self, extent: f32) -> u32 {
        extent as u32
    }
}
