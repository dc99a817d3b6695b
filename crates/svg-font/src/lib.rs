//! # SVG font documents
//!
//! Reading side: the metrics and glyph nodes of an SVG font (`<font>`,
//! `<font-face>`, `<glyph>`). Writing side: the markup for standalone glyph
//! files and for an SVG font assembled glyph by glyph.
//!
//! ## Example
//!
//! ```
//! use glyphsplit_svg_font::{Codepoint, FontDocument};
//!
//! let svg = r#"<svg><defs><font horiz-adv-x="1000">
//!     <font-face units-per-em="1000" ascent="800" descent="200"/>
//!     <glyph unicode="A" glyph-name="A" d="M0 0L500 800L1000 0Z"/>
//! </font></defs></svg>"#;
//!
//! let document = FontDocument::parse(svg).unwrap();
//! assert_eq!(document.metrics().units_per_em, 1000);
//! assert_eq!(document.glyphs()[0].codepoint(), Some(Codepoint::new(0x41)));
//! ```

mod codepoint;
mod document;
mod error;
pub mod markup;
mod metrics;

pub use codepoint::{Codepoint, normalize_hex};
pub use document::{FontDocument, GlyphNode};
pub use error::{Error, Result};
pub use metrics::{DEFAULT_SIZE, FontMetrics};
