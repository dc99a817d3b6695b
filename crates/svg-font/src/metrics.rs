//! Font-wide metrics read from `<font>` and `<font-face>`.

use crate::{Error, Result};

/// Canvas size of a standalone glyph file, and the default for any metric a
/// font document leaves out.
pub const DEFAULT_SIZE: u32 = 2048;

/// The coordinate system a font's glyph outlines are drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Default advance width (`horiz-adv-x` on `<font>`)
    pub advance_width: u32,
    /// Em-square size (`units-per-em`)
    pub units_per_em: u32,
    /// Extent above the baseline
    pub ascent: i32,
    /// Extent below the baseline
    pub descent: i32,
}

impl FontMetrics {
    /// Metrics of a document that declares none of its own.
    pub const DEFAULT: Self = Self {
        advance_width: DEFAULT_SIZE,
        units_per_em: DEFAULT_SIZE,
        ascent: DEFAULT_SIZE as i32,
        descent: 0,
    };

    pub fn new(advance_width: u32, units_per_em: u32, ascent: i32, descent: i32) -> Self {
        Self { advance_width, units_per_em, ascent, descent }
    }

    /// Em-square size to divide by, never zero.
    pub fn em_square(&self) -> u32 {
        if self.units_per_em == 0 { DEFAULT_SIZE } else { self.units_per_em }
    }

    /// Advance width of one glyph, honouring its own `horiz-adv-x`.
    ///
    /// Zero-width glyphs (combining marks) fall back to the em-square so the
    /// result can always be divided by.
    pub fn glyph_advance(&self, own: Option<u32>) -> u32 {
        match own.unwrap_or(self.advance_width) {
            0 => self.em_square(),
            width => width,
        }
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parse a numeric attribute, rounding fractional design units.
pub(crate) fn parse_units(attribute: &'static str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.round() as i64)
        .ok_or_else(|| Error::InvalidMetric { attribute, value: value.to_string() })
}

/// Parse an attribute that must not be negative.
pub(crate) fn parse_extent(attribute: &'static str, value: &str) -> Result<u32> {
    let units = parse_units(attribute, value)?;
    u32::try_from(units).map_err(|_| Error::InvalidMetric { attribute, value: value.to_string() })
}
