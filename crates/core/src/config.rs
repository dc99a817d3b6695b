//! Configuration constants for glyph extraction.

/// Width and height of the canvas glyphs are placed on.
pub use glyphsplit_svg_font::DEFAULT_SIZE;

/// Output file name of `compose` when none is given.
pub const DEFAULT_FONT_FILENAME: &str = "font.svg";

/// Font id used when the output file name has no usable stem.
pub const DEFAULT_FONT_ID: &str = "font";

/// Prefix of glyph names synthesized from a code point (`uniE001`).
pub const SYNTHESIZED_NAME_PREFIX: &str = "uni";
