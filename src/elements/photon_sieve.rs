//! Photon sieve rasterizer.
//!
//! Each opaque zone of the zone plate is replaced by a ring of filled dots
//! centered on the middle of the zone. Dot radius tracks the zone thickness
//! but never drops below half the minimum ring thickness.
//!
//! # Spacing
//!
//! - [`DotSpacing::Regular`]: dots at evenly spaced angles starting at 0.
//!   Deterministic.
//! - [`DotSpacing::Random`]: the dot count of each ring is scaled by a random
//!   density factor and every dot is jittered forward in angle. A dot whose
//!   center lands on an already opaque pixel is pushed further until it finds
//!   an open pixel, up to a bounded number of attempts.

use crate::canvas::Canvas;
use crate::config::MaskConfig;
use crate::error::Result;
use crate::geometry::PixelPoint;
use crate::mask::Mask;
use crate::render::{clear_disk, Dot, Drawable};
use rand::Rng;
use std::f64::consts::{PI, TAU};

/// Angular placement strategy for sieve dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DotSpacing {
    /// Evenly spaced, no randomness.
    #[default]
    Regular,
    /// Random density per ring and random angular jitter per dot.
    Random,
}

/// Dot placement summary for one opaque ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingPlacement {
    /// Ring index (always odd).
    pub ring: usize,
    /// Radius of every dot in this ring, in pixels.
    pub dot_radius: u32,
    /// Number of candidate angles.
    pub planned: usize,
    /// Dots actually stamped.
    pub placed: usize,
    /// Candidates dropped (off canvas or no open position found).
    pub skipped: usize,
}

/// Photon sieve over a sized canvas.
#[derive(Debug, Clone)]
pub struct PhotonSieve<'a> {
    canvas: &'a Canvas,
    spacing: DotSpacing,
    config: MaskConfig,
}

impl<'a> PhotonSieve<'a> {
    /// Create a regular-spacing sieve with default settings.
    #[must_use]
    pub fn new(canvas: &'a Canvas) -> Self {
        Self { canvas, spacing: DotSpacing::Regular, config: MaskConfig::default() }
    }

    /// Set the dot spacing strategy.
    #[must_use]
    pub fn spacing(mut self, spacing: DotSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Use the spacing ranges and retry limit from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`](crate::Error::ConfigInvalid) if
    /// `config` fails [`MaskConfig::validate`].
    pub fn config(mut self, config: &MaskConfig) -> Result<Self> {
        config.validate()?;
        self.config = config.clone();
        Ok(self)
    }

    /// Sieve over a canvas with a config that has already been validated.
    pub(super) fn with_validated(canvas: &'a Canvas, spacing: DotSpacing, config: &MaskConfig) -> Self {
        Self { canvas, spacing, config: config.clone() }
    }

    /// Rasterize a regular sieve. Deterministic.
    ///
    /// With random spacing configured this still places dots regularly; use
    /// [`PhotonSieve::render_with`] to supply a random source.
    #[must_use]
    pub fn render(&self) -> Mask {
        let (mask, _) = self.rasterize(DotSpacing::Regular, &mut NoJitter);
        mask
    }

    /// Rasterize with the configured spacing, drawing jitter from `rng`.
    ///
    /// Regular spacing never touches `rng`. With a seeded generator the
    /// random sieve is reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use fresnel_sieve::canvas::Canvas;
    /// use fresnel_sieve::config::MaskConfig;
    /// use fresnel_sieve::elements::{DotSpacing, PhotonSieve};
    /// use fresnel_sieve::optics::{PhysicalParameters, RadiusSequence};
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let params = PhysicalParameters::new(500e-9, 0.1, 6).unwrap();
    /// let radii = RadiusSequence::from_parameters(&params);
    /// let canvas = Canvas::from_radii(&radii, &MaskConfig::default()).unwrap();
    ///
    /// let sieve = PhotonSieve::new(&canvas).spacing(DotSpacing::Random);
    /// let (mask, rings) = sieve.render_with(&mut StdRng::seed_from_u64(7));
    ///
    /// assert_eq!(rings.len(), 3);
    /// assert!(rings.iter().all(|r| r.placed <= r.planned));
    /// assert_eq!(mask.size(), canvas.size_px());
    /// ```
    pub fn render_with<R: Rng + ?Sized>(&self, rng: &mut R) -> (Mask, Vec<RingPlacement>) {
        match self.spacing {
            DotSpacing::Regular => self.rasterize(DotSpacing::Regular, &mut NoJitter),
            DotSpacing::Random => self.rasterize(DotSpacing::Random, &mut RngJitter(rng)),
        }
    }

    fn rasterize<J: Jitter>(&self, spacing: DotSpacing, jitter: &mut J) -> (Mask, Vec<RingPlacement>) {
        let mut mask = Mask::blank(self.canvas);
        let center = self.canvas.center();

        let placements: Vec<RingPlacement> = self
            .canvas
            .dark_rings()
            .map(|k| self.place_ring(&mut mask, k, spacing, jitter))
            .collect();

        // Dots of the first dark ring may be wider than the ring itself
        if let Some((_, first)) = self.canvas.ring_bounds(0) {
            clear_disk(&mut mask, center, first);
        }
        mask.clear_border();

        log::debug!(
            "photon sieve ({spacing:?}): {}px, {} dots in {} rings",
            self.canvas.size_px(),
            placements.iter().map(|p| p.placed).sum::<usize>(),
            placements.len()
        );

        (mask, placements)
    }

    fn place_ring<J: Jitter>(
        &self,
        mask: &mut Mask,
        ring: usize,
        spacing: DotSpacing,
        jitter: &mut J,
    ) -> RingPlacement {
        let center = self.canvas.center();
        let (inner, outer) = self.canvas.ring_bounds(ring).unwrap_or((0.0, 0.0));
        let thickness = outer - inner;
        let dot_radius = ((thickness / 2.0).floor() as u32).max(self.config.min_dot_radius()).max(1);
        let planned = self.dot_count(outer, dot_radius, spacing, jitter);
        let mid_radius = inner + thickness / 2.0;
        let step = TAU / planned as f64;

        let mut placement = RingPlacement { ring, dot_radius, planned, placed: 0, skipped: 0 };

        for i in 0..planned {
            let angle = i as f64 * step;
            let position = match spacing {
                DotSpacing::Regular => {
                    let p = PixelPoint::from_polar(center, mid_radius, angle);
                    p.in_bounds(mask.size()).then_some(p)
                }
                DotSpacing::Random => self.find_open_position(mask, center, mid_radius, angle, planned, jitter),
            };

            match position {
                Some(p) => {
                    Dot::new(p, dot_radius).draw(mask);
                    placement.placed += 1;
                }
                None => placement.skipped += 1,
            }
        }

        log::debug!(
            "ring {ring}: dot radius {dot_radius}px, {}/{planned} dots placed",
            placement.placed
        );
        if placement.placed == 0 {
            log::warn!("ring {ring} of the photon sieve received no dots");
        }

        placement
    }

    /// Number of candidate dots on a ring of outer radius `outer`.
    fn dot_count<J: Jitter>(&self, outer: f64, dot_radius: u32, spacing: DotSpacing, jitter: &mut J) -> usize {
        let circumference = TAU * outer;
        let r = f64::from(dot_radius);

        let average_spacing = match spacing {
            DotSpacing::Regular => {
                let [low, high] = self.config.regular_spacing;
                (low + high) / 2.0 * r
            }
            DotSpacing::Random => {
                let [low, high] = self.config.random_spacing;
                let [d_low, d_high] = self.config.random_density;
                (low + high) / 2.0 * r * jitter.uniform(d_low, d_high)
            }
        };

        ((circumference / average_spacing).floor() as usize).max(1)
    }

    /// Jitter `angle` forward until the dot center lands on an open pixel.
    ///
    /// Returns `None` when the position leaves the canvas or no open pixel is
    /// found within `max_placement_attempts` perturbations.
    fn find_open_position<J: Jitter>(
        &self,
        mask: &Mask,
        center: PixelPoint,
        radius: f64,
        angle: f64,
        planned: usize,
        jitter: &mut J,
    ) -> Option<PixelPoint> {
        let bound = PI / planned as f64;
        let mut angle = angle + jitter.uniform(0.0, bound);

        for _ in 0..self.config.max_placement_attempts.max(1) {
            let p = PixelPoint::from_polar(center, radius, angle);
            if !p.in_bounds(mask.size()) {
                return None;
            }
            if !mask.is_opaque_at(p) {
                return Some(p);
            }
            angle += jitter.uniform(0.0, bound);
        }

        log::trace!("no open position near angle {angle:.4} after {} attempts", self.config.max_placement_attempts);
        None
    }
}

/// Source of uniform samples for dot placement.
trait Jitter {
    /// Sample from `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Regular spacing: always the lower bound.
struct NoJitter;

impl Jitter for NoJitter {
    fn uniform(&mut self, low: f64, _high: f64) -> f64 {
        low
    }
}

struct RngJitter<'r, R: Rng + ?Sized>(&'r mut R);

impl<R: Rng + ?Sized> Jitter for RngJitter<'_, R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high > low {
            self.0.gen_range(low..high)
        } else {
            low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{PhysicalParameters, RadiusSequence};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn canvas(n: usize) -> Canvas {
        let params = PhysicalParameters::new(500e-9, 0.1, n).unwrap();
        Canvas::from_radii(&RadiusSequence::from_parameters(&params), &MaskConfig::default()).unwrap()
    }

    fn assert_open_core_and_border(canvas: &Canvas, mask: &Mask) {
        let c = f64::from(canvas.center_px());
        let first = canvas.scaled_radii()[0];
        let last = canvas.size_px() - 1;

        for y in 0..canvas.size_px() {
            for x in 0..canvas.size_px() {
                let d = ((f64::from(x) - c).powi(2) + (f64::from(y) - c).powi(2)).sqrt();
                if d < first || x == 0 || y == 0 || x == last || y == last {
                    assert!(!mask.is_opaque(x, y), "pixel ({x}, {y}) should be open");
                }
            }
        }
    }

    #[test]
    fn test_two_rings_regular() {
        let canvas = canvas(2);
        let (mask, rings) = PhotonSieve::new(&canvas).render_with(&mut StdRng::seed_from_u64(0));

        assert_eq!(rings.len(), 1);
        let ring = rings[0];
        assert_eq!(ring.ring, 1);
        // Ring thickness ~7.9px, so the 4px floor applies
        assert_eq!(ring.dot_radius, 4);
        // 2π·27 / (3.5·4) = 12.1
        assert_eq!(ring.planned, 12);
        assert_eq!(ring.placed, 12);

        let s = canvas.scaled_radii();
        let mid = s[0] + (s[1] - s[0]) / 2.0;
        for i in 0..ring.planned {
            let angle = i as f64 * TAU / ring.planned as f64;
            let p = PixelPoint::from_polar(canvas.center(), mid, angle);
            assert!(mask.is_opaque_at(p), "dot {i} missing at {p:?}");
        }
        assert_open_core_and_border(&canvas, &mask);
    }

    #[test]
    fn test_regular_ignores_rng() {
        let canvas = canvas(7);
        let sieve = PhotonSieve::new(&canvas);

        let (a, _) = sieve.render_with(&mut StdRng::seed_from_u64(1));
        let (b, _) = sieve.render_with(&mut StdRng::seed_from_u64(2));

        assert_eq!(a, b);
        assert_eq!(a, sieve.render());
    }

    #[test]
    fn test_dot_radius_tracks_thickness() {
        let canvas = canvas(8);
        let (_, rings) = PhotonSieve::new(&canvas).render_with(&mut StdRng::seed_from_u64(0));

        for ring in rings {
            let (inner, outer) = canvas.ring_bounds(ring.ring).unwrap();
            let expected = (((outer - inner) / 2.0).floor() as u32).max(4);
            assert_eq!(ring.dot_radius, expected);
        }
    }

    #[test]
    fn test_random_invariants() {
        let canvas = canvas(9);
        let sieve = PhotonSieve::new(&canvas).spacing(DotSpacing::Random);

        for seed in 0..5 {
            let (mask, rings) = sieve.render_with(&mut StdRng::seed_from_u64(seed));

            assert_eq!(rings.iter().map(|r| r.ring).collect::<Vec<_>>(), vec![1, 3, 5, 7]);
            for ring in &rings {
                assert!(ring.planned >= 1);
                assert_eq!(ring.placed + ring.skipped, ring.planned);
            }
            assert!(mask.opaque_count() > 0);
            assert_open_core_and_border(&canvas, &mask);
        }
    }

    #[test]
    fn test_random_density_within_bounds() {
        let canvas = canvas(9);
        let sieve = PhotonSieve::new(&canvas).spacing(DotSpacing::Random);
        let (_, rings) = sieve.render_with(&mut StdRng::seed_from_u64(42));

        for ring in rings {
            let (_, outer) = canvas.ring_bounds(ring.ring).unwrap();
            let r = f64::from(ring.dot_radius);
            let circumference = TAU * outer;
            // Density factor in [1.3, 1.5) on a 2.55·r midpoint
            let most = (circumference / (2.55 * r * 1.3)).floor() as usize;
            let least = ((circumference / (2.55 * r * 1.5)).floor() as usize).max(1);
            assert!(ring.planned <= most && ring.planned >= least, "ring {}: {}", ring.ring, ring.planned);
        }
    }

    #[test]
    fn test_random_seed_reproducible() {
        let canvas = canvas(6);
        let sieve = PhotonSieve::new(&canvas).spacing(DotSpacing::Random);

        let a = sieve.render_with(&mut StdRng::seed_from_u64(99));
        let b = sieve.render_with(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_attempts_still_tries_once() {
        let canvas = canvas(4);
        let config = MaskConfig { max_placement_attempts: 0, ..MaskConfig::default() };
        let sieve = PhotonSieve::new(&canvas).spacing(DotSpacing::Random).config(&config).unwrap();

        let (_, rings) = sieve.render_with(&mut StdRng::seed_from_u64(3));
        assert!(rings.iter().all(|r| r.placed >= 1));
    }

    #[test]
    fn test_collision_retry_exhaustion_skips() {
        // A fully opaque mask forces every candidate to exhaust its retries
        let canvas = canvas(3);
        let sieve = PhotonSieve::new(&canvas).spacing(DotSpacing::Random);
        let mut mask = Mask::blank(&canvas);
        for y in 0..i64::from(canvas.size_px()) {
            mask.fill_span(y, 0, i64::from(canvas.size_px()), crate::mask::OPAQUE);
        }

        let mut rng = StdRng::seed_from_u64(5);
        let mut jitter = RngJitter(&mut rng);
        let found = sieve.find_open_position(&mask, canvas.center(), 30.0, 0.0, 8, &mut jitter);
        assert_eq!(found, None);
    }

    #[test]
    fn test_collision_moves_to_open_pixel() {
        let canvas = canvas(12);
        let sieve = PhotonSieve::new(&canvas).spacing(DotSpacing::Random);
        let center = canvas.center();
        let mut mask = Mask::blank(&canvas);
        let blocked = PixelPoint::from_polar(center, 40.0, 0.0);
        Dot::new(blocked, 6).draw(&mut mask);
        assert!(mask.is_opaque_at(blocked));

        let mut rng = StdRng::seed_from_u64(1);
        let mut jitter = RngJitter(&mut rng);
        let found = sieve.find_open_position(&mask, center, 40.0, 0.0, 30, &mut jitter).unwrap();

        assert!(!mask.is_opaque_at(found));
        assert_ne!(found, blocked);
    }

    #[test]
    fn test_config_rejects_zero_spacing() {
        let canvas = canvas(4);
        let config = MaskConfig { regular_spacing: [0.0, 0.0], ..MaskConfig::default() };

        let err = PhotonSieve::new(&canvas).config(&config).unwrap_err();
        assert!(matches!(err, crate::Error::ConfigInvalid { key: "regular_spacing", .. }), "got {err}");
    }

    #[test]
    fn test_config_accepts_valid_override() {
        let canvas = canvas(4);
        let config = MaskConfig { regular_spacing: [6.0, 8.0], ..MaskConfig::default() };

        let sparse = PhotonSieve::new(&canvas).config(&config).unwrap();
        let (_, dense_rings) = PhotonSieve::new(&canvas).render_with(&mut StdRng::seed_from_u64(0));
        let (_, sparse_rings) = sparse.render_with(&mut StdRng::seed_from_u64(0));

        assert!(sparse_rings[0].planned < dense_rings[0].planned);
    }
}
