//! Physical inputs and the Fresnel ring-radius law.

mod params;
mod radii;

pub use params::PhysicalParameters;
pub use radii::RadiusSequence;
