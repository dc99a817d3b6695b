//! Which output glyphs a source glyph produces.

use std::collections::{HashMap, HashSet};

use glyphsplit_svg_font::Codepoint;

use crate::MappingRecord;

/// One output glyph to produce from a source glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    /// Destination code point (canonical hex when valid)
    pub destination: String,
    /// Name requested by the mapping record
    pub glyph_name: Option<&'a str>,
    pub max_scale: Option<f64>,
}

/// Resolves source code points against a mapping table.
///
/// Without a table every glyph maps to itself. With one, a source code point
/// may match any number of records; records without a destination never
/// match.
#[derive(Debug)]
pub struct Resolver<'a> {
    records: &'a [MappingRecord],
    by_source: Option<HashMap<Codepoint, Vec<&'a MappingRecord>>>,
}

impl<'a> Resolver<'a> {
    pub fn new(records: Option<&'a [MappingRecord]>) -> Self {
        let Some(records) = records else {
            return Self::identity();
        };

        let mut by_source: HashMap<Codepoint, Vec<&MappingRecord>> = HashMap::new();
        for record in records.iter().filter(|r| r.is_active()) {
            by_source.entry(record.source).or_default().push(record);
        }
        Self { records, by_source: Some(by_source) }
    }

    /// A resolver mapping every glyph to its own code point.
    pub fn identity() -> Self {
        Self { records: &[], by_source: None }
    }

    /// Output glyphs for a source code point, in table order.
    pub fn resolve(&self, source: Codepoint) -> Vec<Resolved<'a>> {
        let Some(by_source) = &self.by_source else {
            return vec![Resolved { destination: source.to_hex(), glyph_name: None, max_scale: None }];
        };

        by_source
            .get(&source)
            .into_iter()
            .flatten()
            .filter_map(|&record| {
                Some(Resolved {
                    destination: record.destination.clone()?,
                    glyph_name: record.name(),
                    max_scale: record.max_scale,
                })
            })
            .collect()
    }

    /// Records whose destination never appears in `produced`.
    pub fn unmatched(&self, produced: &HashSet<String>) -> Vec<&'a MappingRecord> {
        self.records
            .iter()
            .filter(|r| r.destination.as_ref().is_some_and(|d| !produced.contains(d)))
            .collect()
    }
}
