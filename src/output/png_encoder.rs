//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. Masks are written as 8-bit
//! grayscale with opaque pixels white and open pixels black.

use crate::error::Result;
use crate::mask::Mask;
use std::path::Path;

/// PNG encoder for mask output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a mask to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(mask: &Mask, path: P) -> Result<()> {
        std::fs::write(path, Self::to_bytes(mask)?)?;
        Ok(())
    }

    /// Encode a mask to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(mask: &Mask) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();

        {
            let mut encoder = png::Encoder::new(&mut buffer, mask.size(), mask.size());
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&mask.to_grayscale())?;
        }

        Ok(buffer)
    }
}
