//! Terminal output encoder (ASCII/Unicode).
//!
//! Renders masks to terminal-compatible text for a quick preview.
//! Supports two rendering modes:
//! - ASCII: Uses characters like ` .:-=+*#%@` by cell coverage
//! - Unicode: Uses half-block characters (▀ ▄ █) for 2x vertical resolution

use crate::mask::Mask;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII coverage ramp (widest compatibility)
    Ascii,
    /// Unicode half-block characters (2x vertical resolution)
    #[default]
    UnicodeHalfBlock,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: Option<u32>,
    invert: bool,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// ASCII ramp from open to opaque (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Cells at or above this coverage count as filled in half-block mode.
    const HALF_BLOCK_THRESHOLD: f32 = 0.5;

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), width: None, invert: false }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target width in characters.
    /// If not set, uses up to 80 characters.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width.max(1));
        self
    }

    /// Draw open pixels instead of opaque ones.
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Render a mask to a string.
    #[must_use]
    pub fn render(&self, mask: &Mask) -> String {
        match self.mode {
            TerminalMode::Ascii => self.render_ascii(mask),
            TerminalMode::UnicodeHalfBlock => self.render_unicode_half_block(mask),
        }
    }

    /// Render using the ASCII coverage ramp.
    fn render_ascii(&self, mask: &Mask) -> String {
        // Characters are roughly twice as tall as wide
        let cols = self.target_width(mask);
        let lines = (cols / 2).max(1);
        let mut output = String::with_capacity((cols + 1) as usize * lines as usize);

        for line in 0..lines {
            for col in 0..cols {
                let coverage = self.cell_coverage(mask, col, line, cols, lines);
                let idx = (coverage * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize;
                output.push(Self::ASCII_RAMP[idx.min(Self::ASCII_RAMP.len() - 1)]);
            }
            output.push('\n');
        }

        output
    }

    /// Render using Unicode half-block characters.
    /// Each character represents 2 vertical cells using ▀ (upper half) or ▄ (lower half).
    fn render_unicode_half_block(&self, mask: &Mask) -> String {
        let cols = self.target_width(mask);
        // Half-blocks give square cells, rounded up to an even count
        let rows = (cols + 1) & !1;
        let mut output = String::with_capacity((cols * 3 + 1) as usize * (rows / 2) as usize);

        for row in (0..rows).step_by(2) {
            for col in 0..cols {
                let top = self.cell_coverage(mask, col, row, cols, rows) >= Self::HALF_BLOCK_THRESHOLD;
                let bottom = self.cell_coverage(mask, col, row + 1, cols, rows) >= Self::HALF_BLOCK_THRESHOLD;
                output.push(match (top, bottom) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                });
            }
            output.push('\n');
        }

        output
    }

    fn target_width(&self, mask: &Mask) -> u32 {
        self.width.unwrap_or_else(|| 80u32.min(mask.size()))
    }

    /// Fraction of drawn pixels in grid cell (`col`, `row`) of a `cols` x `rows` grid.
    fn cell_coverage(&self, mask: &Mask, col: u32, row: u32, cols: u32, rows: u32) -> f32 {
        let size = u64::from(mask.size());
        let x0 = (u64::from(col) * size / u64::from(cols)) as u32;
        let x1 = ((u64::from(col + 1) * size / u64::from(cols)) as u32).max(x0 + 1);
        let y0 = (u64::from(row) * size / u64::from(rows)) as u32;
        let y1 = ((u64::from(row + 1) * size / u64::from(rows)) as u32).max(y0 + 1);

        let mut drawn = 0u32;
        let mut total = 0u32;
        for y in y0..y1.min(mask.size()) {
            for x in x0..x1.min(mask.size()) {
                total += 1;
                if mask.is_opaque(x, y) != self.invert {
                    drawn += 1;
                }
            }
        }

        if total == 0 {
            0.0
        } else {
            drawn as f32 / total as f32
        }
    }

    /// Write output directly to stdout.
    pub fn print(&self, mask: &Mask) {
        print!("{}", self.render(mask));
    }
}
