//! 8x8 bitmap glyphs for raster titles
//!
//! Rows come from the `font8x8` tables; bit 0 of a row is the leftmost
//! column.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};

/// Glyph width, height and advance in pixels
pub const GLYPH_SIZE: u32 = 8;

/// Hollow box for characters with no glyph
const UNKNOWN: [u8; 8] = [0x7E, 0x42, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];

/// Bitmap rows for `c`
pub fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .unwrap_or(UNKNOWN)
}

/// Width in pixels of a string at scale 1
pub fn text_width(text: &str) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE
}
