//! # Fresnel-Sieve
//!
//! Binary raster masks for two diffractive optical elements: the Fresnel zone
//! plate and the photon sieve.
//!
//! Ring radii follow the Fresnel zone law `r(n) = sqrt(n·λ·f + n²·λ²/4)`. The
//! canvas is sized so the thinnest ring spans a fixed number of pixels, then
//! each element is rasterized without anti-aliasing:
//!
//! - **Zone plate**: alternating open and opaque rings, center open
//! - **Photon sieve**: every opaque ring replaced by a ring of filled dots
//! - **Random photon sieve**: dot density and angles jittered from an injected
//!   random source, with collision avoidance
//!
//! ## Quick Start
//!
//! ```rust
//! use fresnel_sieve::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let params = PhysicalParameters::new(500e-9, 0.1, 10)?;
//! let generator = Generator::new(params, MaskConfig::default())?;
//!
//! let mask = generator.render(Element::PhotonSieve, &mut StdRng::seed_from_u64(0));
//! let png = PngEncoder::to_bytes(&mask)?;
//! assert!(!png.is_empty());
//! # Ok::<(), fresnel_sieve::Error>(())
//! ```
//!
//! The output is an amplitude mask, not a diffraction simulation.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in raster code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Validated physical inputs and ring radii.
pub mod optics;

/// Canvas sizing and pixel-space radii.
pub mod canvas;

/// Binary raster mask.
pub mod mask;

/// Pixel-space geometry.
pub mod geometry;

/// Rasterization settings.
pub mod config;

/// Length units for inputs and reports.
pub mod units;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Zone plate and photon sieve rasterizers.
pub mod elements;

/// Rasterization primitives.
pub mod render;

/// Output encoders (PNG, terminal).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for fresnel-sieve operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use fresnel_sieve::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::config::MaskConfig;
    pub use crate::elements::{DotSpacing, Element, Generator, PhotonSieve, RingPlacement, ZonePlate};
    pub use crate::error::{Error, Result};
    pub use crate::mask::Mask;
    pub use crate::optics::{PhysicalParameters, RadiusSequence};
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::units::{format_length, LengthUnit};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
