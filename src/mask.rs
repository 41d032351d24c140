//! Binary raster mask.
//!
//! A square grid of open (0) and opaque (1) pixels in row-major order. Uses
//! trueno for SIMD-accelerated coverage statistics.

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::geometry::PixelPoint;
use trueno::Vector;

/// Pixel value for an open (transparent) pixel.
pub const OPEN: u8 = 0;

/// Pixel value for an opaque pixel.
pub const OPAQUE: u8 = 1;

/// Square binary mask.
///
/// Rasterizers build a mask through the crate-internal mutators and hand it
/// out read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    /// Side length in pixels.
    size: u32,
    /// One byte per pixel, [`OPEN`] or [`OPAQUE`].
    pixels: Vec<u8>,
}

impl Mask {
    /// Create an all-open mask with the given side length.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use fresnel_sieve::mask::Mask;
    ///
    /// let mask = Mask::new(64).unwrap();
    /// assert_eq!(mask.size(), 64);
    /// assert_eq!(mask.opaque_count(), 0);
    /// ```
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidDimensions { width: size, height: size });
        }

        let len = (size as usize) * (size as usize);
        Ok(Self { size, pixels: vec![OPEN; len] })
    }

    /// All-open mask covering a canvas.
    pub(crate) fn blank(canvas: &Canvas) -> Self {
        let size = canvas.size_px();
        let len = (size as usize) * (size as usize);
        Self { size, pixels: vec![OPEN; len] }
    }

    /// Side length in pixels.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Raw pixel values in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// A row of pixel values.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.size {
            return None;
        }
        let start = (y as usize) * (self.size as usize);
        Some(&self.pixels[start..start + self.size as usize])
    }

    /// Iterate over all rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(self.size as usize)
    }

    /// Pixel value at a coordinate, `None` if out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.pixels[self.pixel_index(x, y)])
    }

    /// True if the pixel exists and is opaque.
    #[must_use]
    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        self.get(x, y) == Some(OPAQUE)
    }

    /// True if the point is inside the mask and opaque.
    #[must_use]
    pub fn is_opaque_at(&self, point: PixelPoint) -> bool {
        point.in_bounds(self.size) && self.is_opaque(point.x as u32, point.y as u32)
    }

    /// Number of opaque pixels.
    #[must_use]
    pub fn opaque_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p == OPAQUE).count()
    }

    /// Coverage statistics over rows using SIMD-accelerated reduction.
    ///
    /// Returns (min, max, mean) of the per-row opaque fraction.
    #[must_use]
    pub fn coverage_stats(&self) -> (f32, f32, f32) {
        let per_row: Vec<f32> = self
            .rows()
            .map(|row| row.iter().filter(|&&p| p == OPAQUE).count() as f32 / row.len() as f32)
            .collect();

        let vec = Vector::from_vec(per_row);

        let min = vec.min().unwrap_or(0.0);
        let max = vec.max().unwrap_or(0.0);
        let mean = vec.mean().unwrap_or(0.0);

        (min, max, mean)
    }

    /// Pixel data as 8-bit grayscale, opaque as 255 and open as 0.
    #[must_use]
    pub fn to_grayscale(&self) -> Vec<u8> {
        self.pixels.iter().map(|&p| if p == OPAQUE { 255 } else { 0 }).collect()
    }

    /// Set the pixel to `value`. Does nothing if out of bounds.
    pub(crate) fn set(&mut self, x: u32, y: u32, value: u8) {
        if x >= self.size || y >= self.size {
            return;
        }
        let idx = self.pixel_index(x, y);
        self.pixels[idx] = value;
    }

    /// Set the inclusive column span `x0..=x1` of row `y` to `value`.
    ///
    /// Coordinates are clamped to the mask bounds.
    pub(crate) fn fill_span(&mut self, y: i64, x0: i64, x1: i64, value: u8) {
        if y < 0 || y >= i64::from(self.size) {
            return;
        }

        let x_start = x0.max(0);
        let x_end = (x1 + 1).min(i64::from(self.size));
        if x_start >= x_end {
            return;
        }

        let row_start = (y as usize) * (self.size as usize);
        self.pixels[row_start + x_start as usize..row_start + x_end as usize].fill(value);
    }

    /// Force the outermost rows and columns open.
    pub(crate) fn clear_border(&mut self) {
        let last = self.size - 1;
        let size = i64::from(self.size);

        self.fill_span(0, 0, size - 1, OPEN);
        self.fill_span(i64::from(last), 0, size - 1, OPEN);
        for y in 0..self.size {
            self.set(0, y, OPEN);
            self.set(last, y, OPEN);
        }
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.size as usize) + (x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mask() {
        let mask = Mask::new(100).unwrap();
        assert_eq!(mask.size(), 100);
        assert_eq!(mask.pixel_count(), 10_000);
        assert!(mask.pixels().iter().all(|&p| p == OPEN));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(Mask::new(0), Err(Error::InvalidDimensions { width: 0, height: 0 })));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut mask = Mask::new(10).unwrap();

        mask.set(5, 5, OPAQUE);
        assert_eq!(mask.get(5, 5), Some(OPAQUE));
        assert!(mask.is_opaque(5, 5));
        assert!(mask.is_opaque_at(PixelPoint::new(5, 5)));

        // Out of bounds
        mask.set(100, 100, OPAQUE);
        assert_eq!(mask.get(100, 100), None);
        assert!(!mask.is_opaque_at(PixelPoint::new(-1, 5)));
    }

    #[test]
    fn test_fill_span_clamps() {
        let mut mask = Mask::new(10).unwrap();

        mask.fill_span(3, -5, 4, OPAQUE);
        assert_eq!(mask.row(3).unwrap(), &[1, 1, 1, 1, 1, 0, 0, 0, 0, 0]);

        mask.fill_span(4, 7, 20, OPAQUE);
        assert_eq!(mask.row(4).unwrap(), &[0, 0, 0, 0, 0, 0, 0, 1, 1, 1]);

        // Rows outside the mask are ignored
        mask.fill_span(-1, 0, 9, OPAQUE);
        mask.fill_span(10, 0, 9, OPAQUE);
        assert_eq!(mask.opaque_count(), 8);
    }

    #[test]
    fn test_clear_border() {
        let mut mask = Mask::new(6).unwrap();
        for y in 0..6 {
            mask.fill_span(y, 0, 5, OPAQUE);
        }

        mask.clear_border();

        assert_eq!(mask.opaque_count(), 16);
        for i in 0..6 {
            assert!(!mask.is_opaque(i, 0));
            assert!(!mask.is_opaque(i, 5));
            assert!(!mask.is_opaque(0, i));
            assert!(!mask.is_opaque(5, i));
        }
    }

    #[test]
    fn test_clear_border_single_pixel() {
        let mut mask = Mask::new(1).unwrap();
        mask.set(0, 0, OPAQUE);
        mask.clear_border();
        assert_eq!(mask.opaque_count(), 0);
    }

    #[test]
    fn test_coverage_stats() {
        let mut mask = Mask::new(4).unwrap();
        mask.fill_span(0, 0, 3, OPAQUE);
        mask.fill_span(1, 0, 1, OPAQUE);

        let (min, max, mean) = mask.coverage_stats();

        assert!((min - 0.0).abs() < 1e-6);
        assert!((max - 1.0).abs() < 1e-6);
        assert!((mean - 0.375).abs() < 1e-6);
    }

    #[test]
    fn test_to_grayscale() {
        let mut mask = Mask::new(2).unwrap();
        mask.set(1, 0, OPAQUE);
        assert_eq!(mask.to_grayscale(), vec![0, 255, 0, 0]);
    }

    #[test]
    fn test_rows() {
        let mask = Mask::new(3).unwrap();
        assert_eq!(mask.rows().count(), 3);
        assert!(mask.row(3).is_none());
    }
}
