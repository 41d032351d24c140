//! Validated physical parameters.

use crate::error::{Error, Result};

/// Wavelength, focal length and ring count of an element.
///
/// Lengths are in meters. Constructed only through [`PhysicalParameters::new`],
/// so every instance satisfies the positivity and ring-count constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    wavelength: f64,
    focal_length: f64,
    num_rings: usize,
}

impl PhysicalParameters {
    /// Smallest supported ring count (one open and one opaque zone).
    pub const MIN_RINGS: usize = 2;

    /// Validate and build parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if a length is not a positive finite
    /// number or if `num_rings` is below [`Self::MIN_RINGS`].
    ///
    /// # Example
    ///
    /// ```
    /// use fresnel_sieve::optics::PhysicalParameters;
    ///
    /// let params = PhysicalParameters::new(500e-9, 0.1, 10).unwrap();
    /// assert_eq!(params.num_rings(), 10);
    /// assert!(PhysicalParameters::new(500e-9, 0.1, 1).is_err());
    /// ```
    pub fn new(wavelength: f64, focal_length: f64, num_rings: usize) -> Result<Self> {
        check_length("wavelength", wavelength)?;
        check_length("focal_length", focal_length)?;
        if num_rings < Self::MIN_RINGS {
            return Err(Error::InvalidParameter {
                name: "num_rings",
                reason: format!("must be at least {}, got {num_rings}", Self::MIN_RINGS),
            });
        }

        Ok(Self { wavelength, focal_length, num_rings })
    }

    /// Wavelength in meters.
    #[must_use]
    pub const fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// Focal length in meters.
    #[must_use]
    pub const fn focal_length(&self) -> f64 {
        self.focal_length
    }

    /// Number of ring boundaries.
    #[must_use]
    pub const fn num_rings(&self) -> usize {
        self.num_rings
    }
}

fn check_length(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter { name, reason: format!("must be a positive length, got {value}") })
    }
}
