//! Ring boundary radii.

use super::PhysicalParameters;

/// Outer boundary radius of each Fresnel zone, in meters.
///
/// Stored 0-based: `radii[i]` is the boundary of zone `n = i + 1`, given by
/// `sqrt(n·λ·f + n²·λ²/4)`. Strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusSequence {
    radii: Vec<f64>,
}

impl RadiusSequence {
    /// Evaluate the ring-radius law for every ring.
    ///
    /// # Example
    ///
    /// ```
    /// use fresnel_sieve::optics::{PhysicalParameters, RadiusSequence};
    ///
    /// let params = PhysicalParameters::new(500e-9, 0.1, 10).unwrap();
    /// let radii = RadiusSequence::from_parameters(&params);
    /// assert_eq!(radii.len(), 10);
    /// assert!((radii.get(0).unwrap() - 2.236e-4).abs() < 1e-7);
    /// ```
    #[must_use]
    pub fn from_parameters(params: &PhysicalParameters) -> Self {
        let wl = params.wavelength();
        let fl = params.focal_length();

        let radii = (1..=params.num_rings())
            .map(|n| {
                let n = n as f64;
                (n * wl * fl + n * n * wl * wl / 4.0).sqrt()
            })
            .collect();

        Self { radii }
    }

    /// Number of radii.
    #[must_use]
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    /// True if the sequence is empty (never for validated parameters).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Radius at 0-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.radii.get(index).copied()
    }

    /// All radii as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.radii
    }

    /// Iterate over radii from the innermost outward.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.radii.iter().copied()
    }

    /// Outermost radius.
    #[must_use]
    pub fn outer(&self) -> f64 {
        self.radii.last().copied().unwrap_or(0.0)
    }

    /// Diameter of the outermost ring, i.e. the element's lens diameter.
    #[must_use]
    pub fn outer_diameter(&self) -> f64 {
        2.0 * self.outer()
    }

    /// Smallest difference between consecutive radii.
    ///
    /// Returns `None` for fewer than two radii.
    #[must_use]
    pub fn min_gap(&self) -> Option<f64> {
        self.radii.windows(2).map(|w| w[1] - w[0]).reduce(f64::min)
    }
}
