//! Length units for physical inputs and reports.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Length unit accepted for wavelength and focal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    /// Meters.
    M,
    /// Centimeters.
    Cm,
    /// Millimeters.
    Mm,
    /// Micrometers.
    Um,
    /// Nanometers.
    Nm,
}

impl LengthUnit {
    /// All units, largest first.
    pub const ALL: [Self; 5] = [Self::M, Self::Cm, Self::Mm, Self::Um, Self::Nm];

    /// Convert a value in this unit to meters.
    #[must_use]
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            Self::M => value,
            Self::Cm => value / 100.0,
            Self::Mm => value / 1000.0,
            Self::Um => value / 1e6,
            Self::Nm => value / 1e9,
        }
    }

    /// Short token used on the command line and in file names.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::M => "m",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::Um => "um",
            Self::Nm => "nm",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.token() == s)
            .ok_or_else(|| Error::UnknownUnit(s.to_string()))
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Format a length in meters with two decimals in the largest fitting unit.
///
/// ```
/// use fresnel_sieve::units::format_length;
///
/// assert_eq!(format_length(0.001_414), "1.41mm");
/// assert_eq!(format_length(2.5), "2.50m");
/// ```
#[must_use]
pub fn format_length(meters: f64) -> String {
    if meters >= 1.0 {
        format!("{meters:.2}m")
    } else if meters >= 1e-2 {
        format!("{:.2}cm", meters * 1e2)
    } else if meters >= 1e-3 {
        format!("{:.2}mm", meters * 1e3)
    } else if meters >= 1e-6 {
        format!("{:.2}µm", meters * 1e6)
    } else if meters >= 1e-9 {
        format!("{:.2}nm", meters * 1e9)
    } else {
        format!("{:.2}pm", meters * 1e12)
    }
}
