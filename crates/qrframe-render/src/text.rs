//! Caption text rendering with the built-in bitmap font.

use qrframe_core::Color;

use crate::font::{glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::surface::Surface;

/// Measured extent of a line of text, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextMetrics {
    pub width: u32,
    pub height: u32,
    /// Distance from the top of the glyph box to the baseline
    pub ascent: u32,
}

/// Renders single-line text by scaling the bitmap font to a pixel size.
///
/// The font is scaled by whole pixels, so glyphs are `7 * round(font_size / 7)`
/// pixels tall (never less than 7). A 22px caption renders 21px glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRenderer {
    pub font_size: f32,
    pub bold: bool,
}

impl TextRenderer {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Integer scale applied to the 7-row font.
    fn scale(&self) -> u32 {
        ((self.font_size / GLYPH_HEIGHT as f32).round() as u32).max(1)
    }

    fn advance(&self) -> u32 {
        (GLYPH_WIDTH + 1) * self.scale() + u32::from(self.bold)
    }

    pub fn measure(&self, text: &str) -> TextMetrics {
        let scale = self.scale();
        let height = GLYPH_HEIGHT * scale;
        let count = text.chars().count() as u32;
        let width = if count == 0 {
            0
        } else {
            // The last glyph has no trailing gap.
            count * self.advance() - scale
        };
        TextMetrics {
            width,
            height,
            ascent: height,
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn draw(&self, surface: &mut Surface, text: &str, x: i32, y: i32, color: Color) {
        let scale = self.scale() as i32;
        let advance = self.advance() as i32;
        let extra = i32::from(self.bold);

        for (i, c) in text.chars().enumerate() {
            let gx = x + i as i32 * advance;
            for (col, bits) in glyph(c).iter().enumerate() {
                for row in 0..GLYPH_HEIGHT as i32 {
                    if bits & (1 << row) == 0 {
                        continue;
                    }
                    let px = gx + col as i32 * scale;
                    let py = y + row * scale;
                    fill_block(surface, px, py, scale + extra, scale, color);
                }
            }
        }
    }
}

fn fill_block(surface: &mut Surface, x: i32, y: i32, width: i32, height: i32, color: Color) {
    for py in y.max(0)..y + height {
        for px in x.max(0)..x + width {
            surface.blend_pixel(px as u32, py as u32, color);
        }
    }
}
