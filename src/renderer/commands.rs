//! Render command definitions consumed once per frame.
//!
//! The layout engine produces one ordered sequence of these per frame; the
//! renderer walks it read-only and nothing is persisted across frames.

use crate::fonts::FontId;
use crate::types::{BorderWidth, Color, CornerRadius, Rect};

/// One instruction in the per-frame command list.
#[derive(Debug, Clone)]
pub enum RenderCommand {
    /// Emitted by the layout engine for elements with nothing to draw.
    None,

    /// Application-defined payload the core renderer skips.
    Custom {
        /// Bounding box in screen space
        bounds: Rect,
    },

    /// Filled rectangle, optionally rounded.
    Rectangle {
        /// Bounding box in screen space
        bounds: Rect,
        /// Fill color
        color: Color,
        /// Per-corner radii; drawing uses their maximum uniformly
        corner_radius: CornerRadius,
    },

    /// Border strip around a box, optionally rounded.
    Border {
        /// Bounding box in screen space
        bounds: Rect,
        /// Border color
        color: Color,
        /// Per-edge widths; a zero width omits that edge
        width: BorderWidth,
        /// Per-corner radii; drawing uses their maximum uniformly
        corner_radius: CornerRadius,
    },

    /// Text run positioned at the bounding box origin.
    Text {
        /// Bounding box in screen space
        bounds: Rect,
        /// The string to render
        text: String,
        /// Text color
        color: Color,
        /// Registry ID of the font, from a successful load
        font_id: FontId,
        /// Pixel size
        font_size: f32,
        /// Extra pixels between glyphs
        letter_spacing: f32,
    },

    /// Image blit positioned at the bounding box origin.
    Image {
        /// Bounding box in screen space; its extents pick the texture size
        bounds: Rect,
        /// Cache name the image was registered under
        name: String,
        /// Accepted but not honored: the backend blits rectangles only
        corner_radius: CornerRadius,
    },

    /// Push the bounding box as a clip region.
    ScissorStart {
        /// Clip rectangle in screen space
        bounds: Rect,
    },

    /// Pop the most recent clip region. Pairing with a preceding
    /// [`RenderCommand::ScissorStart`] is the layout engine's obligation.
    ScissorEnd,
}

impl RenderCommand {
    /// A solid rectangle with a uniform corner radius.
    pub fn rectangle(bounds: Rect, color: Color, radius: f32) -> Self {
        Self::Rectangle {
            bounds,
            color,
            corner_radius: CornerRadius::uniform(radius),
        }
    }

    /// A border with uniform width and corner radius.
    pub fn border(bounds: Rect, color: Color, width: f32, radius: f32) -> Self {
        Self::Border {
            bounds,
            color,
            width: BorderWidth::uniform(width),
            corner_radius: CornerRadius::uniform(radius),
        }
    }

    /// A text run at the registry's default font ID.
    pub fn text(bounds: Rect, text: impl Into<String>, color: Color, font_size: f32) -> Self {
        Self::Text {
            bounds,
            text: text.into(),
            color,
            font_id: FontId(0),
            font_size,
            letter_spacing: 0.0,
        }
    }

    /// An image blit for a previously loaded cache entry.
    pub fn image(bounds: Rect, name: impl Into<String>) -> Self {
        Self::Image {
            bounds,
            name: name.into(),
            corner_radius: CornerRadius::default(),
        }
    }
}
