//! Glyphsplit Core - glyph extraction from SVG fonts and SVG font assembly.

pub mod cancel;
pub mod config;
pub mod extract;
pub mod io;
pub mod pipeline;
pub mod sink;

pub use cancel::CancellationToken;
pub use extract::{ExtractOptions, ExtractReport, MissingGlyph, extract};
pub use pipeline::{compose_font, extract_to_files, run_batch};
pub use sink::{FileSink, FontStreamSink, GlyphRecord, GlyphSink};

pub use glyphsplit_mapping::MappingRecord;
pub use glyphsplit_svg_font::{Codepoint, FontDocument, FontMetrics};
