//! The badge drawing passes, back to front
//!
//! Pass order matters: the silhouette claims the whole canvas, the glyph
//! overwrites whatever it covers, and the crescent only ever repaints pixels
//! still holding the untouched background fill.

use super::geometry::{in_crescent, in_rounded_rect};
use super::PixelBuffer;
use crate::BadgeConfig;

/// Angular step of the arc sweep, in degrees. Two degrees keeps the gap
/// between consecutive samples under one pixel at the outer radius for all
/// supported icon sizes.
const ARC_STEP_DEG: i32 = 2;

/// Layer 1: rounded-square silhouette.
///
/// Hard-edged membership per pixel center; the boundary is not antialiased
/// (see `geometry::smooth_alpha` for the unused alternative). Pixels outside
/// the silhouette keep their zeroed, fully transparent state.
pub(crate) fn paint_background(buffer: &mut PixelBuffer, config: &BadgeConfig) {
    let n = f64::from(buffer.width);
    let radius = n * config.corner_radius;
    let (r, g, b) = config.background;

    for y in 0..buffer.height {
        for x in 0..buffer.width {
            let fx = f64::from(x) + 0.5;
            let fy = f64::from(y) + 0.5;
            if in_rounded_rect(fx, fy, n, n, radius) {
                buffer.put(x as i32, y as i32, [r, g, b, 255]);
            }
        }
    }
}

/// Layer 2: stylized "D" glyph, a vertical bar plus a swept arc band.
pub(crate) fn paint_glyph(buffer: &mut PixelBuffer, config: &BadgeConfig) {
    let n = f64::from(buffer.width);
    let (r, g, b) = config.foreground;
    let ink = [r, g, b, 255];

    let bar_x = (n * config.bar_x) as i32;
    let bar_y = (n * config.bar_y) as i32;
    let bar_w = ((n * config.bar_width) as i32).max(2);
    let bar_h = (n * config.glyph_height) as i32;

    for y in bar_y..bar_y + bar_h {
        for x in bar_x..bar_x + bar_w {
            buffer.put(x, y, ink);
        }
    }

    // Arc band closing the "D", centered on the bar's right edge. Samples
    // landing outside the buffer are dropped by `put`.
    let center_x = f64::from(bar_x + bar_w);
    let center_y = f64::from(bar_y + bar_h / 2);
    let outer = bar_h / 2;
    let inner = (outer - bar_w).max(0);

    let mut angle_deg = -90;
    while angle_deg <= 90 {
        let angle = f64::from(angle_deg).to_radians();
        for radius in inner..outer {
            let px = (center_x + f64::from(radius) * angle.cos()) as i32;
            let py = (center_y + f64::from(radius) * angle.sin()) as i32;
            buffer.put(px, py, ink);
        }
        angle_deg += ARC_STEP_DEG;
    }
}

/// Layer 3: crescent accent in the upper-right quadrant.
pub(crate) fn paint_crescent(buffer: &mut PixelBuffer, config: &BadgeConfig) {
    let n = f64::from(buffer.width);
    let background = config.background;
    let (r, g, b) = config.foreground;

    let moon_cx = n * config.moon_x;
    let moon_cy = n * config.moon_y;
    let moon_r = n * config.moon_radius;
    let offset = n * config.cutout_offset;
    let cutout_cx = moon_cx + offset;
    let cutout_cy = moon_cy - offset * 0.5;

    for y in 0..buffer.height {
        for x in 0..buffer.width {
            // Repaint only pixels still carrying the plain background fill.
            // Exact color equality is what keeps glyph pixels safe here; a
            // second background-colored layer would defeat the guard.
            let [pr, pg, pb, pa] = buffer.pixel(x, y);
            if pa != 255 || (pr, pg, pb) != background {
                continue;
            }
            let fx = f64::from(x) + 0.5;
            let fy = f64::from(y) + 0.5;
            if in_crescent(
                fx,
                fy,
                moon_cx,
                moon_cy,
                moon_r,
                cutout_cx,
                cutout_cy,
                config.cutout_scale,
            ) {
                buffer.put(x as i32, y as i32, [r, g, b, 255]);
            }
        }
    }
}
