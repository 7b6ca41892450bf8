//! Frame rendering: walks the layout engine's command list and drives the
//! backend.
//!
//! The renderer is stateless across frames. Within a frame it processes the
//! command sequence strictly in order; the only implicit state is the
//! backend's clip stack, driven by paired scissor commands.

pub mod commands;
pub mod geometry;

pub use commands::RenderCommand;

use crate::backend::Backend;
use crate::fonts::{FontId, FontRegistry};
use crate::images::ImageCache;
use crate::types::{BorderWidth, Color, CornerRadius, Dimensions, Rect};

/// Owns the font registry and image cache and replays command lists against
/// a backend.
///
/// Lifecycle: create, load assets, render any number of frames, then
/// [`Renderer::teardown`] to release the backend textures. One renderer per
/// backend; nothing here is shared or global, so independent instances can
/// coexist (tests rely on this).
pub struct Renderer<B: Backend> {
    fonts: FontRegistry,
    images: ImageCache<B::Texture>,
}

impl<B: Backend> Renderer<B> {
    /// Renderer with the default font and image capacities.
    pub fn new() -> Self {
        Self {
            fonts: FontRegistry::default(),
            images: ImageCache::default(),
        }
    }

    /// Renderer with explicit capacity ceilings.
    pub fn with_capacities(font_capacity: usize, image_capacity: usize) -> Self {
        Self {
            fonts: FontRegistry::new(font_capacity),
            images: ImageCache::new(image_capacity),
        }
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    pub fn fonts_mut(&mut self) -> &mut FontRegistry {
        &mut self.fonts
    }

    pub fn images(&self) -> &ImageCache<B::Texture> {
        &self.images
    }

    pub fn images_mut(&mut self) -> &mut ImageCache<B::Texture> {
        &mut self.images
    }

    /// Measure a text run for the layout engine.
    ///
    /// Side-effect-free; the layout engine registers this as its measurement
    /// callback and calls it freely during layout, before rendering.
    pub fn measure_text(&self, text: &str, id: FontId, size: f32, spacing: f32) -> Dimensions {
        self.fonts.measure(text, id, size, spacing)
    }

    /// Replay one frame's command list.
    ///
    /// Failures inside a command (unknown font, missing image) log a
    /// diagnostic and skip that command; the rest of the frame continues.
    pub fn render(&mut self, backend: &mut B, frame: &[RenderCommand]) {
        for command in frame {
            match command {
                RenderCommand::None | RenderCommand::Custom { .. } => {}

                RenderCommand::Rectangle {
                    bounds,
                    color,
                    corner_radius,
                } => render_rectangle(backend, *bounds, *color, corner_radius),

                RenderCommand::Border {
                    bounds,
                    color,
                    width,
                    corner_radius,
                } => render_border(backend, *bounds, *color, width, corner_radius),

                RenderCommand::Text {
                    bounds,
                    text,
                    color,
                    font_id,
                    font_size,
                    letter_spacing,
                } => match self.fonts.get(*font_id) {
                    Some(font) => backend.draw_text(
                        font,
                        text,
                        bounds.origin(),
                        *font_size,
                        *letter_spacing,
                        *color,
                    ),
                    None => log::error!("text command references unknown font id {}", font_id.0),
                },

                RenderCommand::Image { bounds, name, .. } => {
                    // A cache miss already logged; draw nothing for this
                    // command and keep going.
                    if let Some(texture) =
                        self.images
                            .texture(backend, name, bounds.width, bounds.height)
                    {
                        backend.draw_texture(texture, bounds.origin(), Color::WHITE);
                    }
                }

                RenderCommand::ScissorStart { bounds } => backend.push_clip(*bounds),

                RenderCommand::ScissorEnd => backend.pop_clip(),
            }
        }
    }

    /// Release every backend texture and consume the renderer.
    pub fn teardown(mut self, backend: &mut B) {
        self.images.teardown(backend);
    }
}

impl<B: Backend> Default for Renderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

fn render_rectangle<B: Backend>(
    backend: &mut B,
    bounds: Rect,
    color: Color,
    corner_radius: &CornerRadius,
) {
    let radius = corner_radius.max();

    if radius == 0.0 {
        backend.fill_rect(bounds, color);
        return;
    }

    // Quarter disks at the corners, then the five fills that tile the rest.
    let centers = geometry::corner_centers(bounds, radius);
    for (index, center) in centers.iter().enumerate() {
        let start = 90.0 * index as f32;
        backend.fill_ring(*center, 0.0, radius, start, start + 90.0, color);
    }

    for rect in geometry::edge_rects(bounds, radius, radius) {
        backend.fill_rect(rect, color);
    }
}

fn render_border<B: Backend>(
    backend: &mut B,
    bounds: Rect,
    color: Color,
    width: &BorderWidth,
    corner_radius: &CornerRadius,
) {
    let thickness = width.max();
    if thickness == 0.0 {
        return;
    }

    let radius = corner_radius.max();
    // The corner arcs can absorb at most the radius; anything thicker is
    // finished by the square inner pass.
    let outer_thickness = radius.min(thickness);

    // Outer rounded pass: strips along present edges, arcs at corners with
    // at least one present neighbor. Skipped entirely at radius zero, where
    // the strips would be zero-thick and the arcs empty.
    let edges = geometry::edge_rects(bounds, radius, outer_thickness);
    let enabled = geometry::enabled_corners(width);

    if radius > 0.0 {
        fill_present_edges(backend, width, &edges, color);
        let centers = geometry::corner_centers(bounds, radius);
        for (index, center) in centers.iter().enumerate() {
            if !enabled[index] {
                continue;
            }
            let start = 90.0 * index as f32;
            backend.fill_ring(
                *center,
                radius - outer_thickness,
                radius,
                start,
                start + 90.0,
                color,
            );
        }
    }

    // Remaining-thickness inner pass, square corners: nonzero only when the
    // border is thicker than the corner radius.
    let remaining = thickness - outer_thickness;
    if remaining > 0.0 {
        let inner = edges[4];
        let inner_edges = geometry::edge_rects(inner, remaining, remaining);
        fill_present_edges(backend, width, &inner_edges, color);

        for (index, square) in geometry::corner_squares(inner, remaining).iter().enumerate() {
            if enabled[index] {
                backend.fill_rect(*square, color);
            }
        }
    }
}

/// Fill the strip for each edge with nonzero width. Draw order follows the
/// corner indexing: bottom, left, top, right.
fn fill_present_edges<B: Backend>(
    backend: &mut B,
    width: &BorderWidth,
    edges: &[Rect; 5],
    color: Color,
) {
    if width.bottom != 0.0 {
        backend.fill_rect(edges[2], color);
    }
    if width.left != 0.0 {
        backend.fill_rect(edges[3], color);
    }
    if width.top != 0.0 {
        backend.fill_rect(edges[0], color);
    }
    if width.right != 0.0 {
        backend.fill_rect(edges[1], color);
    }
}
