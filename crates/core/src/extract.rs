//! Extracting glyphs from one font document.

use std::collections::HashSet;

use anyhow::Result;
use glyphsplit_glyph_transform::transform;
use glyphsplit_mapping::{MappingRecord, Resolver};
use glyphsplit_svg_font::{Codepoint, FontDocument, GlyphNode};
use log::{debug, info, warn};

use crate::{
    CancellationToken,
    config::SYNTHESIZED_NAME_PREFIX,
    sink::{GlyphRecord, GlyphSink},
};

/// Options for a single extraction run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Log per-glyph progress and missing mappings
    pub verbose: bool,
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// A mapping record whose destination was never produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingGlyph {
    pub source: Codepoint,
    pub destination: String,
}

/// Outcome of an extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Number of glyphs handed to the sink
    pub extracted: usize,
    /// Mapping records that matched no glyph
    pub missing: Vec<MissingGlyph>,
}

impl ExtractReport {
    /// Accumulate another document's report into this one.
    pub fn merge(&mut self, other: ExtractReport) {
        self.extracted += other.extracted;
        self.missing.extend(other.missing);
    }
}

/// Extract the glyphs of `document` into `sink`.
///
/// Without `mappings` every glyph is written under its own code point. With
/// them, each glyph is written once per record matching its code point, and
/// records that matched nothing are reported as missing. Glyphs without an
/// outline or without a code point are skipped.
pub fn extract<S: GlyphSink + ?Sized>(
    document: &FontDocument,
    mappings: Option<&[MappingRecord]>,
    sink: &mut S,
    options: &ExtractOptions,
    cancel: &CancellationToken,
) -> Result<ExtractReport> {
    let metrics = document.metrics();
    let resolver = Resolver::new(mappings);
    let flip = sink.flip();

    let mut produced = HashSet::new();
    let mut extracted = 0;

    'glyphs: for glyph in document.glyphs() {
        if cancel.is_cancelled() {
            break;
        }
        let (Some(path_data), Some(source)) = (glyph.outline(), glyph.codepoint()) else {
            continue;
        };
        let advance_width = metrics.glyph_advance(glyph.advance_width);

        for output in resolver.resolve(source) {
            if cancel.is_cancelled() {
                break 'glyphs;
            }

            let glyph_name = output_name(output.glyph_name, glyph, source);
            let path_data =
                match transform(path_data, advance_width, metrics, flip, output.max_scale) {
                    Ok(d) => d.into_owned(),
                    Err(e) => {
                        warn!("Skipping glyph {glyph_name} (U+{source}): {e}");
                        continue;
                    }
                };

            if options.verbose {
                info!("Save {glyph_name}");
            } else {
                debug!("Save {glyph_name}");
            }

            produced.insert(output.destination.clone());
            sink.emit(GlyphRecord { glyph_name, destination: output.destination, path_data })?;
            extracted += 1;
        }
    }

    // Unreached records are not known to be missing.
    if cancel.is_cancelled() {
        return Ok(ExtractReport { extracted, missing: Vec::new() });
    }

    let missing: Vec<_> = resolver
        .unmatched(&produced)
        .into_iter()
        .filter_map(|record| {
            Some(MissingGlyph { source: record.source, destination: record.destination.clone()? })
        })
        .collect();

    if options.verbose {
        for glyph in &missing {
            warn!("Glyph not found: U+{} (destination {})", glyph.source, glyph.destination);
        }
    }

    Ok(ExtractReport { extracted, missing })
}

/// Mapping name, then the font's own name, then `uni<source>`.
fn output_name(mapped: Option<&str>, glyph: &GlyphNode, source: Codepoint) -> String {
    mapped
        .or_else(|| glyph.declared_name())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{SYNTHESIZED_NAME_PREFIX}{source}"))
}
