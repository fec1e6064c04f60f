//! Shared geometry predicates for the raster passes
//!
//! All tests operate on pixel centers (x + 0.5, y + 0.5) in image
//! coordinates. Nothing here is materialized; each predicate is recomputed
//! per pixel by the drawing passes.

/// Euclidean distance between two points.
#[inline]
pub fn dist(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Anti-aliased alpha ramp around a distance threshold.
///
/// Returns 255 up to `threshold - SMOOTHING`, 0 from `threshold + SMOOTHING`,
/// and a linear falloff in between. The silhouette pass intentionally does
/// not use this (hard edge); it is kept for alternative edge treatments and
/// is exercised in isolation by the tests below.
pub fn smooth_alpha(d: f64, threshold: f64) -> u8 {
    const SMOOTHING: f64 = 1.5;
    if d <= threshold - SMOOTHING {
        255
    } else if d >= threshold + SMOOTHING {
        0
    } else {
        let ratio = (d - (threshold - SMOOTHING)) / (2.0 * SMOOTHING);
        (255.0 * (1.0 - ratio)) as u8
    }
}

/// Membership test for a rounded rectangle spanning (0, 0)..(width, height).
///
/// Points outside the four corner boxes are inside the plain rectangle;
/// points within a corner box are inside iff they fall within that corner's
/// inset circle of radius `radius`.
pub fn in_rounded_rect(x: f64, y: f64, width: f64, height: f64, radius: f64) -> bool {
    if x < radius {
        if y < radius {
            // Top-left corner
            return dist(x, y, radius, radius) <= radius;
        }
        if y > height - radius {
            // Bottom-left corner
            return dist(x, y, radius, height - radius) <= radius;
        }
    } else if x > width - radius {
        if y < radius {
            // Top-right corner
            return dist(x, y, width - radius, radius) <= radius;
        }
        if y > height - radius {
            // Bottom-right corner
            return dist(x, y, width - radius, height - radius) <= radius;
        }
    }
    true
}

/// Membership test for a crescent: inside the main circle, but clear of the
/// scaled exclusion zone around the offset cutout center.
#[inline]
pub fn in_crescent(
    x: f64,
    y: f64,
    cx: f64,
    cy: f64,
    radius: f64,
    cutout_cx: f64,
    cutout_cy: f64,
    cutout_scale: f64,
) -> bool {
    dist(x, y, cx, cy) <= radius && dist(x, y, cutout_cx, cutout_cy) > radius * cutout_scale
}
