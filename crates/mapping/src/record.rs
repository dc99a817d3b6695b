//! Mapping records.

use glyphsplit_svg_font::{Codepoint, normalize_hex};

/// One row of a mapping table.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingRecord {
    /// Name given to the output glyph
    pub glyph_name: Option<String>,
    /// Font document the glyph is taken from (batch mode only)
    pub source_file: Option<String>,
    /// Code point of the glyph in the source font
    pub source: Codepoint,
    /// Code point the glyph is written under; `None` means the record is ignored
    pub destination: Option<String>,
    /// Absent or zero: fit to the canvas. Negative: no resize. Positive: fit
    /// the glyph bounds, with the scale clamped to this value.
    pub max_scale: Option<f64>,
}

impl MappingRecord {
    pub fn new(source: Codepoint) -> Self {
        Self { glyph_name: None, source_file: None, source, destination: None, max_scale: None }
    }

    pub fn with_destination(mut self, destination: &str) -> Self {
        self.destination = normalize_destination(destination);
        self
    }

    pub fn with_glyph_name(mut self, name: impl Into<String>) -> Self {
        self.glyph_name = Some(name.into());
        self
    }

    pub fn with_source_file(mut self, file: impl Into<String>) -> Self {
        self.source_file = Some(file.into());
        self
    }

    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = Some(max_scale);
        self
    }

    /// Whether this record can produce output at all.
    pub fn is_active(&self) -> bool {
        self.destination.is_some()
    }

    /// Glyph name, unless empty.
    pub fn name(&self) -> Option<&str> {
        self.glyph_name.as_deref().filter(|n| !n.is_empty())
    }
}

/// Canonical form of a destination code point string.
///
/// Valid hex is rewritten as uppercase without prefix or leading zeros;
/// anything else is kept (trimmed) so it can still name an output file.
/// Empty values mean "no destination".
pub fn normalize_destination(value: &str) -> Option<String> {
    let digits = normalize_hex(value);
    if digits.is_empty() {
        return None;
    }
    Some(match Codepoint::from_hex(digits) {
        Ok(cp) => cp.to_hex(),
        Err(_) => digits.to_string(),
    })
}
