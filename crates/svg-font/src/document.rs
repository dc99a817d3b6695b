//! Reading an SVG font document.

use roxmltree::{Document, Node, ParsingOptions};

use crate::{
    Codepoint, Error, FontMetrics, Result,
    metrics::{parse_extent, parse_units},
};

const FONT_TAG: &str = "font";
const FONT_FACE_TAG: &str = "font-face";
const GLYPH_TAG: &str = "glyph";
const HORIZ_ADV_X: &str = "horiz-adv-x";
const UNITS_PER_EM: &str = "units-per-em";
const ASCENT: &str = "ascent";
const DESCENT: &str = "descent";
const PATH_DATA: &str = "d";
const UNICODE: &str = "unicode";
const GLYPH_NAME: &str = "glyph-name";

/// One `<glyph>` element, attributes as written (entities already decoded).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphNode {
    pub unicode: Option<String>,
    pub glyph_name: Option<String>,
    pub advance_width: Option<u32>,
    pub path_data: Option<String>,
}

impl GlyphNode {
    /// Source code point of this glyph, if it declares one.
    pub fn codepoint(&self) -> Option<Codepoint> {
        self.unicode.as_deref().and_then(Codepoint::from_glyph_unicode)
    }

    /// Path data, unless the glyph has no outline (e.g. a space).
    pub fn outline(&self) -> Option<&str> {
        self.path_data.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Glyph name declared by the font, if any.
    pub fn declared_name(&self) -> Option<&str> {
        self.glyph_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// An SVG font: its metrics and glyph nodes in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDocument {
    metrics: FontMetrics,
    glyphs: Vec<GlyphNode>,
}

impl FontDocument {
    pub fn new(metrics: FontMetrics, glyphs: Vec<GlyphNode>) -> Self {
        Self { metrics, glyphs }
    }

    /// Parse an SVG font from markup.
    ///
    /// The first `<font>` and `<font-face>` elements provide the metrics;
    /// every `<glyph>` element in the document is collected.
    pub fn parse(text: &str) -> Result<Self> {
        let options = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
        let document = Document::parse_with_options(text, options)?;

        let font = document.descendants().find(|n| n.has_tag_name(FONT_TAG));
        let face = document.descendants().find(|n| n.has_tag_name(FONT_FACE_TAG));

        let default = FontMetrics::DEFAULT;
        let metrics = FontMetrics {
            advance_width: extent(font, HORIZ_ADV_X)?.unwrap_or(default.advance_width),
            units_per_em: extent(face, UNITS_PER_EM)?.unwrap_or(default.units_per_em),
            ascent: units(face, ASCENT)?.unwrap_or(default.ascent),
            descent: units(face, DESCENT)?.unwrap_or(default.descent),
        };

        let glyphs = document
            .descendants()
            .filter(|n| n.has_tag_name(GLYPH_TAG))
            .map(glyph_node)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { metrics, glyphs })
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    pub fn glyphs(&self) -> &[GlyphNode] {
        &self.glyphs
    }
}

fn attribute<'a>(node: Option<Node<'a, '_>>, name: &str) -> Option<&'a str> {
    node?.attribute(name).filter(|v| !v.is_empty())
}

fn extent(node: Option<Node>, name: &'static str) -> Result<Option<u32>> {
    attribute(node, name).map(|v| parse_extent(name, v)).transpose()
}

fn units(node: Option<Node>, name: &'static str) -> Result<Option<i32>> {
    attribute(node, name)
        .map(|v| {
            let units = parse_units(name, v)?;
            i32::try_from(units)
                .map_err(|_| Error::InvalidMetric { attribute: name, value: v.to_string() })
        })
        .transpose()
}

fn glyph_node(node: Node) -> Result<GlyphNode> {
    Ok(GlyphNode {
        unicode: attribute(Some(node), UNICODE).map(str::to_string),
        glyph_name: attribute(Some(node), GLYPH_NAME).map(str::to_string),
        advance_width: extent(Some(node), HORIZ_ADV_X)?,
        path_data: attribute(Some(node), PATH_DATA).map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT: &str = r#"<?xml version="1.0" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg">
<defs>
<font id="icons" horiz-adv-x="1000">
<font-face units-per-em="1000" ascent="850" descent="-150" />
<missing-glyph horiz-adv-x="1000" />
<glyph glyph-name="home" unicode="&#xe001;" d="M0 0L1000 0L500 850Z" />
<glyph unicode=" " horiz-adv-x="250" />
<glyph glyph-name="narrow" unicode="&#x41;" horiz-adv-x="500" d="M0 0H500V500Z" />
</font>
</defs>
</svg>"#;

    #[test]
    fn parses_metrics() {
        let document = FontDocument::parse(FONT).unwrap();
        assert_eq!(document.metrics(), &FontMetrics::new(1000, 1000, 850, -150));
    }

    #[test]
    fn collects_glyphs_in_order_without_missing_glyph() {
        let document = FontDocument::parse(FONT).unwrap();
        let glyphs = document.glyphs();
        assert_eq!(glyphs.len(), 3);
        assert_eq!(glyphs[0].declared_name(), Some("home"));
        assert_eq!(glyphs[0].codepoint(), Some(Codepoint::new(0xE001)));
        assert_eq!(glyphs[1].outline(), None);
        assert_eq!(glyphs[2].advance_width, Some(500));
        assert_eq!(glyphs[2].codepoint(), Some(Codepoint::new(0x41)));
    }

    #[test]
    fn missing_attributes_use_defaults() {
        let document = FontDocument::parse(r#"<svg><glyph unicode="a" d="M0 0"/></svg>"#).unwrap();
        assert_eq!(document.metrics(), &FontMetrics::DEFAULT);
        assert_eq!(document.glyphs()[0].declared_name(), None);
    }

    #[test]
    fn rejects_malformed_markup() {
        assert!(matches!(FontDocument::parse("<svg><font>"), Err(Error::Xml(_))));
    }

    #[test]
    fn rejects_non_numeric_metric() {
        let result = FontDocument::parse(r#"<svg><font-face units-per-em="big"/></svg>"#);
        assert!(matches!(result, Err(Error::InvalidMetric { attribute: "units-per-em", .. })));
    }
}
