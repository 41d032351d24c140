//! Rasterization settings.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Minimum ring thickness in pixels used when sizing the canvas.
pub const MIN_RING_PX: u32 = 8;

/// Tunable constants for canvas sizing and dot placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Thinnest ring width in pixels after scaling.
    #[serde(default = "default_min_ring_px")]
    pub min_ring_px: u32,

    /// Lower bound on the canvas side length.
    #[serde(default = "default_min_canvas_px")]
    pub min_canvas_px: u32,

    /// Upper bound on the canvas side length; larger canvases are rejected.
    #[serde(default = "default_max_canvas_px")]
    pub max_canvas_px: u32,

    /// Collision retries per dot in a random sieve before the dot is skipped.
    #[serde(default = "default_max_placement_attempts")]
    pub max_placement_attempts: u32,

    /// Dot spacing range for the regular sieve, in multiples of the dot radius.
    #[serde(default = "default_regular_spacing")]
    pub regular_spacing: [f64; 2],

    /// Dot spacing range for the random sieve, in multiples of the dot radius.
    #[serde(default = "default_random_spacing")]
    pub random_spacing: [f64; 2],

    /// Per-ring density factor range for the random sieve.
    #[serde(default = "default_random_density")]
    pub random_density: [f64; 2],
}

fn default_min_ring_px() -> u32 {
    MIN_RING_PX
}
fn default_min_canvas_px() -> u32 {
    2 * MIN_RING_PX
}
fn default_max_canvas_px() -> u32 {
    32_768
}
fn default_max_placement_attempts() -> u32 {
    64
}
fn default_regular_spacing() -> [f64; 2] {
    [3.0, 4.0]
}
fn default_random_spacing() -> [f64; 2] {
    [1.1, 4.0]
}
fn default_random_density() -> [f64; 2] {
    [1.3, 1.5]
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            min_ring_px: default_min_ring_px(),
            min_canvas_px: default_min_canvas_px(),
            max_canvas_px: default_max_canvas_px(),
            max_placement_attempts: default_max_placement_attempts(),
            regular_spacing: default_regular_spacing(),
            random_spacing: default_random_spacing(),
            random_density: default_random_density(),
        }
    }
}

impl MaskConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Checks that every value is usable for sizing and placement.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        if self.min_ring_px == 0 {
            return Err(invalid("min_ring_px", "must be at least 1".to_string()));
        }
        if self.max_canvas_px < self.min_canvas_px {
            return Err(invalid(
                "max_canvas_px",
                format!("{} is below min_canvas_px {}", self.max_canvas_px, self.min_canvas_px),
            ));
        }
        check_range("regular_spacing", self.regular_spacing)?;
        check_range("random_spacing", self.random_spacing)?;
        check_range("random_density", self.random_density)?;
        // gen_range panics on an empty range
        if self.random_density[0] >= self.random_density[1] {
            return Err(invalid("random_density", "lower bound must be below upper bound".to_string()));
        }
        Ok(())
    }

    /// Dot radius floor: half the minimum ring thickness.
    #[must_use]
    pub const fn min_dot_radius(&self) -> u32 {
        self.min_ring_px / 2
    }
}

fn check_range(key: &'static str, [low, high]: [f64; 2]) -> Result<()> {
    if !(low.is_finite() && high.is_finite()) || low <= 0.0 || low > high {
        return Err(invalid(key, format!("expected 0 < low <= high, got [{low}, {high}]")));
    }
    Ok(())
}

fn invalid(key: &'static str, message: String) -> Error {
    Error::ConfigInvalid { key, message }
}
