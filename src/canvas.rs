//! Canvas sizing: from physical ring radii to pixel space.

use crate::config::MaskConfig;
use crate::error::{Error, Result};
use crate::geometry::PixelPoint;
use crate::optics::RadiusSequence;

/// Pixel-space geometry shared by all rasterizers.
///
/// The side length is the smallest one that keeps the thinnest physical ring
/// at least `min_ring_px` wide. Radii are rescaled so the outermost one ends
/// exactly at half the side length.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    size_px: u32,
    scaled_radii: Vec<f64>,
}

impl Canvas {
    /// Size the canvas for a radius sequence.
    ///
    /// # Errors
    ///
    /// - [`Error::DegenerateGeometry`] if fewer than two radii are given or the
    ///   minimum gap between radii is not a positive finite number
    /// - [`Error::CanvasTooLarge`] if the side exceeds `config.max_canvas_px`
    /// - [`Error::ConfigInvalid`] if `config` fails [`MaskConfig::validate`]
    /// - [`Error::InvalidDimensions`] if the clamped side is zero
    ///
    /// # Example
    ///
    /// ```
    /// use fresnel_sieve::canvas::Canvas;
    /// use fresnel_sieve::config::MaskConfig;
    /// use fresnel_sieve::optics::{PhysicalParameters, RadiusSequence};
    ///
    /// let params = PhysicalParameters::new(500e-9, 0.1, 10).unwrap();
    /// let radii = RadiusSequence::from_parameters(&params);
    /// let canvas = Canvas::from_radii(&radii, &MaskConfig::default()).unwrap();
    ///
    /// assert_eq!(canvas.size_px(), 311);
    /// assert_eq!(canvas.scaled_radii()[9], 155.0);
    /// ```
    pub fn from_radii(radii: &RadiusSequence, config: &MaskConfig) -> Result<Self> {
        config.validate()?;
        let min_gap = radii
            .min_gap()
            .ok_or_else(|| Error::DegenerateGeometry(format!("need at least 2 radii, got {}", radii.len())))?;
        if !(min_gap.is_finite() && min_gap > 0.0) {
            return Err(Error::DegenerateGeometry(format!("minimum ring gap is {min_gap}")));
        }

        let outer = radii.outer();
        let raw = (f64::from(config.min_ring_px) / min_gap * outer * 2.0).floor();
        if !raw.is_finite() || raw > f64::from(config.max_canvas_px) {
            return Err(Error::CanvasTooLarge {
                size_px: if raw.is_finite() { raw as u64 } else { u64::MAX },
                max_px: config.max_canvas_px,
            });
        }

        let mut size_px = raw as u32;
        if size_px < config.min_canvas_px {
            log::debug!("clamping canvas from {size_px}px to {}px", config.min_canvas_px);
            size_px = config.min_canvas_px;
        }
        if size_px == 0 {
            return Err(Error::InvalidDimensions { width: 0, height: 0 });
        }

        let half = f64::from(size_px / 2);
        let scaled_radii = radii.iter().map(|r| r / outer * half).collect();

        log::debug!(
            "canvas {size_px}px for {} rings (min gap {min_gap:.3e} m, outer radius {outer:.3e} m)",
            radii.len()
        );

        Ok(Self { size_px, scaled_radii })
    }

    /// Side length in pixels.
    #[must_use]
    pub const fn size_px(&self) -> u32 {
        self.size_px
    }

    /// Center coordinate on both axes (`size_px / 2`).
    #[must_use]
    pub const fn center_px(&self) -> u32 {
        self.size_px / 2
    }

    /// Center as a pixel point.
    #[must_use]
    pub fn center(&self) -> PixelPoint {
        let c = i64::from(self.center_px());
        PixelPoint::new(c, c)
    }

    /// Ring boundary radii in pixels, innermost first.
    #[must_use]
    pub fn scaled_radii(&self) -> &[f64] {
        &self.scaled_radii
    }

    /// Number of rings.
    #[must_use]
    pub fn num_rings(&self) -> usize {
        self.scaled_radii.len()
    }

    /// Inner and outer radius of ring `k`; ring 0 starts at the center.
    #[must_use]
    pub fn ring_bounds(&self, k: usize) -> Option<(f64, f64)> {
        let outer = *self.scaled_radii.get(k)?;
        let inner = if k == 0 { 0.0 } else { self.scaled_radii[k - 1] };
        Some((inner, outer))
    }

    /// Indices of the opaque rings: 1, 3, 5, ...
    pub fn dark_rings(&self) -> impl Iterator<Item = usize> {
        (1..self.num_rings()).step_by(2)
    }

    /// Index of the ring containing distance `d` from the center.
    ///
    /// Ring `k` spans `[scaled[k-1], scaled[k])`; distances at or beyond the
    /// outermost radius return `num_rings()`.
    #[must_use]
    pub fn ring_at(&self, d: f64) -> usize {
        self.scaled_radii.partition_point(|&r| r <= d)
    }
}
