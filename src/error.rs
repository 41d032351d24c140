//! Error types for fresnel-sieve operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or exporting masks.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// A physical parameter violates its constraint.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Violated constraint.
        reason: String,
    },

    /// Unrecognized length unit token.
    #[error("unknown unit '{0}' (expected one of m, cm, mm, um, nm)")]
    UnknownUnit(String),

    /// Empty or unrecognized element selection.
    #[error("invalid element selection: {0}")]
    InvalidSelection(String),

    /// Invalid dimensions for a mask.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Ring geometry collapsed under floating-point precision.
    #[error("degenerate ring geometry: {0}")]
    DegenerateGeometry(String),

    /// Derived canvas exceeds the configured maximum side length.
    #[error("canvas of {size_px}px exceeds the maximum of {max_px}px; reduce the ring count")]
    CanvasTooLarge {
        /// Requested side length in pixels.
        size_px: u64,
        /// Configured maximum side length.
        max_px: u32,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: &'static str,
        /// Error message describing why the value is invalid.
        message: String,
    },
}
