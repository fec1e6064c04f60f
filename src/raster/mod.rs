//! Rasterizer for the badge artwork
//!
//! Drawing happens as a stack of sequential passes over one owned buffer:
//! background silhouette, then the bar+arc glyph, then (at larger sizes) the
//! crescent accent. Each pass takes exclusive `&mut` access and only touches
//! pixels it owns, so the layer order fully determines the result.

pub mod badge;
pub mod geometry;

use crate::BadgeConfig;
use log::debug;

/// A simple 2D RGBA image buffer.
///
/// `data` is row-major, top-to-bottom, left-to-right, four bytes per pixel
/// (red, green, blue, alpha). Its length is always `width * height * 4`.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a fully transparent buffer with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Write one pixel if (x, y) is inside bounds; out-of-range writes are
    /// silently skipped.
    #[inline]
    pub(crate) fn put(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Read one pixel. Callers stay within bounds; the raster passes iterate
    /// the buffer's own extent.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}

/// Render the badge artwork at `size` x `size` pixels.
///
/// Deterministic: the same size and config always produce the same bytes.
/// The crescent layer is only drawn when `size >= config.crescent_min_size`;
/// below that the resolution is too coarse for the shape to read.
pub fn render(size: u32, config: &BadgeConfig) -> PixelBuffer {
    debug_assert!(size > 0, "icon size must be positive");

    let mut buffer = PixelBuffer::new(size, size);
    badge::paint_background(&mut buffer, config);
    badge::paint_glyph(&mut buffer, config);
    if size >= config.crescent_min_size {
        badge::paint_crescent(&mut buffer, config);
    }

    debug!("rendered {}x{} badge", size, size);
    buffer
}
