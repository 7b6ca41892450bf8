//! Image cache with float-quantized texture invalidation.
//!
//! Source images are decoded once and owned for the cache's lifetime. The
//! layout engine sizes image elements in floating point and those extents
//! are noisy frame-to-frame, while the backend rasterizes on its own grid;
//! quantizing both extents through [`Backend::quantize_extent`] before
//! comparing collapses every float pair with the same rasterized footprint
//! into one cached texture. A texture is only re-uploaded when the
//! quantized pair changes, and the superseded texture is destroyed before
//! its replacement is created, so each entry holds at most one live handle.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use thiserror::Error;

use crate::backend::Backend;
use crate::types::Dimensions;

/// Capacity of a cache created with [`ImageCache::default`].
pub const DEFAULT_IMAGE_CAPACITY: usize = 128;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image cache is at capacity ({0})")]
    AtCapacity(usize),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// djb2 string hash, xor variant. Wrapping arithmetic keeps the u32
/// overflow well-defined.
fn hash_name(name: &str) -> u32 {
    let mut hash: u32 = 5381;
    for byte in name.bytes() {
        hash = hash.wrapping_shl(5).wrapping_add(hash) ^ u32::from(byte);
    }
    hash
}

struct ImageEntry<T> {
    /// Decoded pixels, kept as the resize source for every re-upload.
    source: RgbaImage,
    /// The one live backend texture, absent until the first request.
    texture: Option<T>,
    /// Quantized extents of the last upload; `(0, 0)` until then. Real
    /// requests are at least one pixel, so the initial state never matches.
    quantized: (u32, u32),
    key: u32,
}

/// Bounded store of decoded images and their cached textures.
///
/// Generic over the backend's texture handle so replacement is enforced by
/// moves: destroying consumes the old handle before a new one exists.
pub struct ImageCache<T> {
    entries: Vec<ImageEntry<T>>,
    capacity: usize,
}

impl<T> ImageCache<T> {
    /// Empty cache with an explicit capacity ceiling.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Decode an image file and register it under `name`.
    ///
    /// Returns the image's natural size for the layout engine; no texture
    /// is uploaded until the first [`ImageCache::texture`] request. Name
    /// uniqueness is the caller's invariant: a duplicate is not rejected,
    /// but lookups resolve to whichever entry registered first. On any
    /// failure the cache is unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>, name: &str) -> Result<Dimensions, ImageError> {
        let path = path.as_ref();

        if self.entries.len() == self.capacity {
            log::error!(
                "cannot load image {}: cache at capacity ({})",
                path.display(),
                self.capacity
            );
            return Err(ImageError::AtCapacity(self.capacity));
        }

        let decoded = image::open(path).map_err(|err| {
            log::error!("cannot decode image {}: {err}", path.display());
            err
        })?;

        let source = decoded.to_rgba8();
        let size = Dimensions::new(source.width() as f32, source.height() as f32);

        self.entries.push(ImageEntry {
            source,
            texture: None,
            quantized: (0, 0),
            key: hash_name(name),
        });

        Ok(size)
    }

    /// Fetch the texture for `name` at the given floating-point extents,
    /// re-uploading only when the quantized extents changed.
    ///
    /// An unregistered name logs a diagnostic and returns `None`; the frame
    /// continues and the caller draws nothing for that command.
    pub fn texture<B>(
        &mut self,
        backend: &mut B,
        name: &str,
        width: f32,
        height: f32,
    ) -> Option<&B::Texture>
    where
        B: Backend<Texture = T>,
    {
        let key = hash_name(name);
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) else {
            log::error!("image {name} not found in cache");
            return None;
        };

        let quantized = (
            backend.quantize_extent(width),
            backend.quantize_extent(height),
        );

        if quantized == entry.quantized {
            return entry.texture.as_ref();
        }

        entry.quantized = quantized;
        // Release the superseded texture before its replacement exists.
        if let Some(old) = entry.texture.take() {
            backend.destroy_texture(old);
        }

        let resized = imageops::resize(&entry.source, quantized.0, quantized.1, FilterType::Triangle);
        entry.texture = Some(backend.create_texture(&resized));
        entry.texture.as_ref()
    }

    /// Destroy every live texture and forget all entries.
    ///
    /// The end of the cache's lifecycle; `Drop` cannot reach the backend,
    /// so skipping this leaks the textures to the backend's own teardown.
    pub fn teardown<B>(&mut self, backend: &mut B)
    where
        B: Backend<Texture = T>,
    {
        for entry in self.entries.drain(..) {
            if let Some(texture) = entry.texture {
                backend.destroy_texture(texture);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for ImageCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_CAPACITY)
    }
}
