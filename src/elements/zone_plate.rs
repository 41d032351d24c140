//! Fresnel zone plate rasterizer.

use crate::canvas::Canvas;
use crate::mask::{Mask, OPAQUE};

/// Zone plate with solid alternating rings.
///
/// Ring 0 (the central disk) is open, ring 1 opaque, and so on. A pixel at
/// distance `d` from the center belongs to ring `k` when
/// `scaled[k-1] <= d < scaled[k]`.
#[derive(Debug, Clone, Copy)]
pub struct ZonePlate<'a> {
    canvas: &'a Canvas,
}

impl<'a> ZonePlate<'a> {
    /// Create a zone plate over a sized canvas.
    #[must_use]
    pub const fn new(canvas: &'a Canvas) -> Self {
        Self { canvas }
    }

    /// Rasterize the zone plate. Deterministic.
    ///
    /// # Example
    ///
    /// ```
    /// use fresnel_sieve::canvas::Canvas;
    /// use fresnel_sieve::config::MaskConfig;
    /// use fresnel_sieve::elements::ZonePlate;
    /// use fresnel_sieve::optics::{PhysicalParameters, RadiusSequence};
    ///
    /// let params = PhysicalParameters::new(500e-9, 0.1, 4).unwrap();
    /// let radii = RadiusSequence::from_parameters(&params);
    /// let canvas = Canvas::from_radii(&radii, &MaskConfig::default()).unwrap();
    ///
    /// let mask = ZonePlate::new(&canvas).render();
    /// let c = canvas.center_px();
    /// assert!(!mask.is_opaque(c, c));
    /// ```
    #[must_use]
    pub fn render(&self) -> Mask {
        let size = self.canvas.size_px();
        let num_rings = self.canvas.num_rings();
        let center = f64::from(self.canvas.center_px());

        let mut mask = Mask::blank(self.canvas);

        for y in 0..size {
            let dy = f64::from(y) - center;
            // Consecutive pixels in the same ring share one span write
            let mut span_start: Option<u32> = None;

            for x in 0..size {
                let dx = f64::from(x) - center;
                let k = self.canvas.ring_at((dx * dx + dy * dy).sqrt());
                let dark = k % 2 == 1 && k < num_rings;

                match (dark, span_start) {
                    (true, None) => span_start = Some(x),
                    (false, Some(start)) => {
                        mask.fill_span(i64::from(y), i64::from(start), i64::from(x) - 1, OPAQUE);
                        span_start = None;
                    }
                    _ => {}
                }
            }

            if let Some(start) = span_start {
                mask.fill_span(i64::from(y), i64::from(start), i64::from(size) - 1, OPAQUE);
            }
        }

        mask.clear_border();

        log::debug!(
            "zone plate: {size}px, {} rings, {} opaque pixels",
            num_rings,
            mask.opaque_count()
        );

        mask
    }
}
