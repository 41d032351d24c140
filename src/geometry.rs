//! Pixel-space geometry.

/// A pixel position with integer coordinates.
///
/// Coordinates are signed so that positions just outside a canvas can be
/// represented and clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPoint {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
}

impl PixelPoint {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` and `angle` (radians) from `center`.
    ///
    /// Offsets are truncated toward zero, so points on a circle snap toward
    /// the center rather than to the nearest pixel.
    #[must_use]
    pub fn from_polar(center: Self, radius: f64, angle: f64) -> Self {
        Self::new(
            center.x + (radius * angle.cos()) as i64,
            center.y + (radius * angle.sin()) as i64,
        )
    }

    /// True if the point lies inside a square canvas of side `size`.
    #[must_use]
    pub const fn in_bounds(self, size: u32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < size as i64 && self.y < size as i64
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_from_polar_axes() {
        let c = PixelPoint::new(50, 50);
        assert_eq!(PixelPoint::from_polar(c, 10.0, 0.0), PixelPoint::new(60, 50));
        assert_eq!(PixelPoint::from_polar(c, 10.0, FRAC_PI_2), PixelPoint::new(50, 60));
        assert_eq!(PixelPoint::from_polar(c, 10.0, PI), PixelPoint::new(40, 50));
    }

    #[test]
    fn test_from_polar_truncates_toward_center() {
        let c = PixelPoint::new(0, 0);
        // 7.07.. on both axes truncates to 7, -7.07.. to -7
        assert_eq!(PixelPoint::from_polar(c, 10.0, PI / 4.0), PixelPoint::new(7, 7));
        assert_eq!(PixelPoint::from_polar(c, 10.0, 5.0 * PI / 4.0), PixelPoint::new(-7, -7));
    }

    #[test]
    fn test_in_bounds() {
        assert!(PixelPoint::new(0, 0).in_bounds(10));
        assert!(PixelPoint::new(9, 9).in_bounds(10));
        assert!(!PixelPoint::new(10, 0).in_bounds(10));
        assert!(!PixelPoint::new(-1, 5).in_bounds(10));
    }

    #[test]
    fn test_distance() {
        let a = PixelPoint::new(0, 0);
        let b = PixelPoint::new(3, 4);
        assert!((a.distance(b) - 5.0).abs() < f64::EPSILON);
    }
}
