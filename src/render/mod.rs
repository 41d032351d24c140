//! Rasterization primitives.
//!
//! # Algorithms
//!
//! - **Scan-line disk**: filled circles from the exact integer circle equation
//! - **Strict disk clear**: reopens pixels strictly inside a real radius

mod primitives;

pub use primitives::{clear_disk, stamp_disk, Dot, Drawable};
