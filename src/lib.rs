//! Badgeforge
//!
//! A procedural renderer for branded square icons. Badgeforge rasterizes a
//! rounded-square badge with a letter glyph and a crescent accent into a raw
//! RGBA buffer, then encodes that buffer into a standalone PNG file using its
//! own minimal container encoder — no image or compression libraries involved.
//!
//! # Features
//!
//! - **Pure Rasterizer**: per-pixel geometric membership tests, deterministic
//!   output for any positive size
//! - **From-Scratch PNG Encoder**: signature, IHDR/IDAT/IEND chunks, CRC32,
//!   and a zlib-wrapped DEFLATE stream built by hand
//! - **Tunable Proportions**: all geometry ratios and palette values live in
//!   [`BadgeConfig`] rather than scattered magic numbers
//!
//! # Example
//!
//! ```
//! use badgeforge::{render, png, BadgeConfig};
//!
//! let config = BadgeConfig::default();
//! let icon = render(48, &config);
//! let bytes = png::encode(icon.width, icon.height, &icon.data);
//!
//! // Any PNG decoder can read `bytes` back losslessly.
//! assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod png;
pub mod raster;

// Re-export the core entry points at the crate root for ergonomic use
pub use raster::{render, PixelBuffer};

/// Geometry proportions and palette for the badge artwork
///
/// Every ratio is a fraction of the icon size N, so one table describes the
/// badge at all sizes. The defaults reproduce the reference brand artwork:
/// a celestine-blue rounded square, a white "D" built from a vertical bar and
/// a swept arc, and a white crescent in the upper-right quadrant.
///
/// # Examples
///
/// ```
/// let cfg = badgeforge::BadgeConfig::default();
/// assert_eq!(cfg.background, (77, 159, 255));
/// ```
#[derive(Debug, Clone)]
pub struct BadgeConfig {
    /// Fill color of the rounded-square silhouette
    pub background: (u8, u8, u8),
    /// Color of the glyph and the crescent accent
    pub foreground: (u8, u8, u8),
    /// Corner radius of the silhouette, as a fraction of N
    pub corner_radius: f64,
    /// Left edge of the glyph bar, as a fraction of N
    pub bar_x: f64,
    /// Top edge of the glyph bar, as a fraction of N
    pub bar_y: f64,
    /// Width of the glyph bar (and the arc band), as a fraction of N
    pub bar_width: f64,
    /// Height of the glyph bar, as a fraction of N
    pub glyph_height: f64,
    /// Crescent main-circle center X, as a fraction of N
    pub moon_x: f64,
    /// Crescent main-circle center Y, as a fraction of N
    pub moon_y: f64,
    /// Crescent main-circle radius, as a fraction of N
    pub moon_radius: f64,
    /// Diagonal offset of the cutout circle from the main center, as a fraction of N
    pub cutout_offset: f64,
    /// Cutout exclusion radius as a multiple of `moon_radius`
    pub cutout_scale: f64,
    /// Smallest icon size that still gets the crescent layer
    pub crescent_min_size: u32,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            background: (77, 159, 255), // #4d9fff
            foreground: (255, 255, 255),
            corner_radius: 0.15,
            bar_x: 0.28,
            bar_y: 0.25,
            bar_width: 0.12,
            glyph_height: 0.50,
            moon_x: 0.78,
            moon_y: 0.22,
            moon_radius: 0.10,
            cutout_offset: 0.04,
            cutout_scale: 0.7,
            crescent_min_size: 48,
        }
    }
}
