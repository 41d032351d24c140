//! Primitive rasterization functions.
//!
//! Disks are filled with horizontal scan lines; every span is clipped to the
//! mask, so shapes crossing the edge are drawn partially and never wrap.

use crate::geometry::PixelPoint;
use crate::mask::{Mask, OPAQUE, OPEN};

/// Trait for shapes that can be stamped into a mask.
pub trait Drawable {
    /// Mark the pixels covered by this shape opaque.
    fn draw(&self, mask: &mut Mask);
}

/// A filled circular dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    /// Center pixel.
    pub center: PixelPoint,
    /// Radius in pixels.
    pub radius: u32,
}

impl Dot {
    /// Create a new dot.
    #[must_use]
    pub const fn new(center: PixelPoint, radius: u32) -> Self {
        Self { center, radius }
    }
}

impl Drawable for Dot {
    fn draw(&self, mask: &mut Mask) {
        stamp_disk(mask, self.center.x, self.center.y, self.radius);
    }
}

/// Fill every pixel with `dx² + dy² <= radius²` around `(cx, cy)`.
///
/// # Arguments
///
/// * `mask` - Target mask
/// * `cx`, `cy` - Center coordinates, may lie outside the mask
/// * `radius` - Disk radius in pixels; zero fills the center pixel only
pub fn stamp_disk(mask: &mut Mask, cx: i64, cy: i64, radius: u32) {
    let r = i64::from(radius);
    let r2 = r * r;
    let size = i64::from(mask.size());

    let y_min = (cy - r).max(0);
    let y_max = (cy + r).min(size - 1);

    for y in y_min..=y_max {
        let dy = y - cy;
        let half = isqrt(r2 - dy * dy);
        mask.fill_span(y, cx - half, cx + half, OPAQUE);
    }
}

/// Open every pixel whose distance from `center` is strictly below `radius`.
pub fn clear_disk(mask: &mut Mask, center: PixelPoint, radius: f64) {
    if radius <= 0.0 {
        return;
    }

    let size = i64::from(mask.size());
    let reach = radius.ceil() as i64;
    let y_min = (center.y - reach).max(0);
    let y_max = (center.y + reach).min(size - 1);

    let x_min = (center.x - reach).max(0);
    let x_max = (center.x + reach).min(size - 1);

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            if center.distance(PixelPoint::new(x, y)) < radius {
                mask.fill_span(y, x, x, OPEN);
            }
        }
    }
}

/// Largest `w` with `w * w <= n`.
#[inline]
fn isqrt(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    let mut w = (n as f64).sqrt() as i64;
    while w * w > n {
        w -= 1;
    }
    while (w + 1) * (w + 1) <= n {
        w += 1;
    }
    w
}
