//! Diffractive elements and the generator that renders them.

mod photon_sieve;
mod zone_plate;

pub use photon_sieve::{DotSpacing, PhotonSieve, RingPlacement};
pub use zone_plate::ZonePlate;

use crate::canvas::Canvas;
use crate::config::MaskConfig;
use crate::error::{Error, Result};
use crate::mask::Mask;
use crate::optics::{PhysicalParameters, RadiusSequence};
use rand::Rng;
use std::fmt;

/// A requested output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Solid alternating rings.
    ZonePlate,
    /// Dots at regular angles.
    PhotonSieve,
    /// Dots with random density and jitter.
    RandomPhotonSieve,
}

impl Element {
    /// Map a selection string of letters `f`, `p`, `r` to elements.
    ///
    /// Order of first appearance is kept and repeated letters are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelection`] for an empty selection or an
    /// unknown letter.
    ///
    /// # Example
    ///
    /// ```
    /// use fresnel_sieve::elements::Element;
    ///
    /// let elements = Element::parse_selection("rf").unwrap();
    /// assert_eq!(elements, vec![Element::RandomPhotonSieve, Element::ZonePlate]);
    /// ```
    pub fn parse_selection(selection: &str) -> Result<Vec<Self>> {
        let mut elements = Vec::new();

        for letter in selection.chars() {
            let element = match letter {
                'f' => Self::ZonePlate,
                'p' => Self::PhotonSieve,
                'r' => Self::RandomPhotonSieve,
                other => {
                    return Err(Error::InvalidSelection(format!(
                        "unknown element '{other}' (expected f, p or r)"
                    )))
                }
            };
            if !elements.contains(&element) {
                elements.push(element);
            }
        }

        if elements.is_empty() {
            return Err(Error::InvalidSelection("nothing selected".to_string()));
        }
        Ok(elements)
    }

    /// Snake-case name used in file names.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ZonePlate => "fresnel_zone_plate",
            Self::PhotonSieve => "photon_sieve",
            Self::RandomPhotonSieve => "random_photon_sieve",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ZonePlate => "Fresnel Zone Plate",
            Self::PhotonSieve => "Photon Sieve",
            Self::RandomPhotonSieve => "Random Photon Sieve",
        };
        f.write_str(name)
    }
}

/// Renders elements for one set of physical parameters.
///
/// Radii and canvas are computed once and shared by every element.
#[derive(Debug, Clone)]
pub struct Generator {
    params: PhysicalParameters,
    radii: RadiusSequence,
    canvas: Canvas,
    config: MaskConfig,
}

impl Generator {
    /// Size the canvas for `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid or the canvas cannot be sized.
    ///
    /// # Example
    ///
    /// ```
    /// use fresnel_sieve::config::MaskConfig;
    /// use fresnel_sieve::elements::{Element, Generator};
    /// use fresnel_sieve::optics::PhysicalParameters;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let params = PhysicalParameters::new(500e-9, 0.1, 10).unwrap();
    /// let generator = Generator::new(params, MaskConfig::default()).unwrap();
    ///
    /// let mask = generator.render(Element::ZonePlate, &mut StdRng::seed_from_u64(0));
    /// assert_eq!(mask.size(), 311);
    /// ```
    pub fn new(params: PhysicalParameters, config: MaskConfig) -> Result<Self> {
        config.validate()?;
        let radii = RadiusSequence::from_parameters(&params);
        let canvas = Canvas::from_radii(&radii, &config)?;
        Ok(Self { params, radii, canvas, config })
    }

    /// The parameters this generator was built from.
    #[must_use]
    pub const fn params(&self) -> &PhysicalParameters {
        &self.params
    }

    /// Physical ring radii.
    #[must_use]
    pub const fn radii(&self) -> &RadiusSequence {
        &self.radii
    }

    /// Shared pixel-space canvas.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Render one element. Only [`Element::RandomPhotonSieve`] draws from `rng`.
    pub fn render<R: Rng + ?Sized>(&self, element: Element, rng: &mut R) -> Mask {
        match element {
            Element::ZonePlate => ZonePlate::new(&self.canvas).render(),
            Element::PhotonSieve => self.sieve(DotSpacing::Regular).render(),
            Element::RandomPhotonSieve => self.sieve(DotSpacing::Random).render_with(rng).0,
        }
    }

    /// Photon sieve builder preconfigured with this generator's settings.
    #[must_use]
    pub fn sieve(&self, spacing: DotSpacing) -> PhotonSieve<'_> {
        PhotonSieve::with_validated(&self.canvas, spacing, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_selection() {
        assert_eq!(
            Element::parse_selection("fpr").unwrap(),
            vec![Element::ZonePlate, Element::PhotonSieve, Element::RandomPhotonSieve]
        );
        assert_eq!(Element::parse_selection("ppf").unwrap(), vec![Element::PhotonSieve, Element::ZonePlate]);
    }

    #[test]
    fn test_parse_selection_errors() {
        assert!(matches!(Element::parse_selection(""), Err(Error::InvalidSelection(_))));
        let err = Element::parse_selection("fx").unwrap_err();
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_titles() {
        assert_eq!(Element::ZonePlate.title(), "fresnel_zone_plate");
        assert_eq!(Element::RandomPhotonSieve.to_string(), "Random Photon Sieve");
    }

    #[test]
    fn test_generator_rejects_invalid_config() {
        let params = PhysicalParameters::new(500e-9, 0.1, 10).unwrap();
        let config = MaskConfig { min_ring_px: 0, ..MaskConfig::default() };
        assert!(Generator::new(params, config).is_err());
    }

    #[test]
    fn test_two_rings_all_elements() {
        let params = PhysicalParameters::new(500e-9, 0.1, 2).unwrap();
        let generator = Generator::new(params, MaskConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        for element in [Element::ZonePlate, Element::PhotonSieve, Element::RandomPhotonSieve] {
            let mask = generator.render(element, &mut rng);
            assert_eq!(mask.size(), generator.canvas().size_px());
            assert!(mask.opaque_count() > 0, "{element} is empty");
        }
    }

    #[test]
    fn test_masks_are_independent() {
        let params = PhysicalParameters::new(500e-9, 0.1, 6).unwrap();
        let generator = Generator::new(params, MaskConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let plate = generator.render(Element::ZonePlate, &mut rng);
        let sieve = generator.render(Element::PhotonSieve, &mut rng);
        assert_ne!(plate, sieve);
        assert_eq!(plate, generator.render(Element::ZonePlate, &mut rng));
    }
}
