//! Bounded registry of rasterized fonts, indexed by load order.
//!
//! Font IDs travel through the layout engine inside text commands, so the
//! registry keeps them dense and stable: the ID of a font is its index at
//! the time [`FontRegistry::load`] succeeded. Measurement walks glyph
//! advances and is side-effect-free, so the layout engine may call it any
//! number of times per frame.

use std::path::Path;

use thiserror::Error;

use crate::types::Dimensions;

/// Capacity of a registry created with [`FontRegistry::default`].
pub const DEFAULT_FONT_CAPACITY: usize = 32;

const DEFAULT_FONT_PATH: &str = "fonts/OpenSans-Regular.ttf";
const DEFAULT_FONT_SIZE: u16 = 16;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("font registry is at capacity ({0})")]
    AtCapacity(usize),
    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse font: {0}")]
    Parse(&'static str),
}

/// Identifier handed back by a successful load; its value is the font's
/// index in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u16);

/// A parsed font plus the pixel size it was requested at.
pub struct RasterFont {
    font: fontdue::Font,
    base_size: u16,
}

impl RasterFont {
    /// The pixel size the font was loaded for. Text commands may still
    /// request other sizes; this is the rasterization hint.
    pub fn base_size(&self) -> u16 {
        self.base_size
    }

    pub fn font(&self) -> &fontdue::Font {
        &self.font
    }

    /// Measure a text run at `size` pixels with `spacing` extra pixels
    /// between glyphs.
    ///
    /// Newlines split the run: width is the widest line, height is the line
    /// count times `size`. Matches what an integer-grid backend reports for
    /// the same run, so layout and rendering agree.
    pub fn measure(&self, text: &str, size: f32, spacing: f32) -> Dimensions {
        let mut width = 0.0f32;
        let mut lines = 0u32;

        for line in text.split('\n') {
            lines += 1;
            let mut line_width = 0.0f32;
            let mut glyphs = 0usize;
            for ch in line.chars() {
                line_width += self.font.metrics(ch, size).advance_width;
                glyphs += 1;
            }
            if glyphs > 1 {
                line_width += spacing * (glyphs - 1) as f32;
            }
            width = width.max(line_width);
        }

        Dimensions::new(width, lines as f32 * size)
    }
}

/// Owns every loaded font for the renderer's lifetime.
pub struct FontRegistry {
    fonts: Vec<RasterFont>,
    capacity: usize,
}

impl FontRegistry {
    /// Empty registry with an explicit capacity ceiling.
    pub fn new(capacity: usize) -> Self {
        Self {
            fonts: Vec::new(),
            capacity,
        }
    }

    /// Read and parse a font file, rasterization-hinted at `size` pixels.
    ///
    /// The capacity check happens before any I/O, so a full registry rejects
    /// without touching the filesystem. On success the new font's ID is its
    /// index; on failure the registry is unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>, size: u16) -> Result<FontId, FontError> {
        let path = path.as_ref();

        if self.fonts.len() == self.capacity {
            log::error!(
                "cannot load font {}: registry at capacity ({})",
                path.display(),
                self.capacity
            );
            return Err(FontError::AtCapacity(self.capacity));
        }

        let bytes = std::fs::read(path).map_err(|err| {
            log::error!("cannot read font {}: {err}", path.display());
            err
        })?;

        let settings = fontdue::FontSettings {
            scale: f32::from(size),
            ..fontdue::FontSettings::default()
        };
        let font = fontdue::Font::from_bytes(bytes, settings).map_err(|err| {
            log::error!("cannot parse font {}: {err}", path.display());
            FontError::Parse(err)
        })?;

        let id = FontId(self.fonts.len() as u16);
        self.fonts.push(RasterFont {
            font,
            base_size: size,
        });
        Ok(id)
    }

    /// Load the bundled regular-weight font as ID 0.
    ///
    /// Called once at startup. If the bundled file is missing the registry
    /// stays empty and callers assuming ID 0 will draw nothing; that is a
    /// static configuration error, surfaced in the log and not recovered.
    pub fn load_default(&mut self) {
        if let Err(err) = self.load(DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE) {
            log::error!("default font unavailable: {err}");
        }
    }

    pub fn get(&self, id: FontId) -> Option<&RasterFont> {
        self.fonts.get(usize::from(id.0))
    }

    /// Measure `text` with the font at `id`.
    ///
    /// An unknown ID measures as a zero-width single line so layout
    /// degrades instead of panicking; the matching draw is skipped by the
    /// renderer with a diagnostic.
    pub fn measure(&self, text: &str, id: FontId, size: f32, spacing: f32) -> Dimensions {
        match self.get(id) {
            Some(font) => font.measure(text, size, spacing),
            None => Dimensions::new(0.0, size),
        }
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_CAPACITY)
    }
}
