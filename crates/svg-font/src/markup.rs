//! Markup written for extracted glyphs: standalone glyph files and the
//! pieces of an assembled SVG font.

use std::borrow::Cow;

use crate::{Codepoint, DEFAULT_SIZE};

/// Closing tags of an assembled SVG font.
pub const FONT_FOOTER: &str = "</font>\n</defs>\n</svg>\n";

/// A standalone SVG document holding one outline on a square canvas.
pub fn standalone_svg(path_data: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {DEFAULT_SIZE} {DEFAULT_SIZE}\">\
         <path d=\"{}\"/></svg>",
        escape_attribute(path_data)
    )
}

/// Preamble of an assembled SVG font, up to and including `<missing-glyph>`.
///
/// Every metric is the canvas size, matching the coordinate system glyphs
/// are extracted into.
pub fn font_header(id: &str) -> String {
    let id = escape_attribute(id);
    let size = DEFAULT_SIZE;
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.0//EN\" \"http://www.w3.org/TR/2001/REC-SVG-20010904/DTD/svg10.dtd\">\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\">\n\
         <defs>\n\
         <font id=\"{id}\" horiz-adv-x=\"{size}\">\n\
         <font-face units-per-em=\"{size}\" ascent=\"{size}\" descent=\"0\" />\n\
         <missing-glyph horiz-adv-x=\"{size}\" />\n"
    )
}

/// One `<glyph>` element of an assembled SVG font, newline terminated.
pub fn glyph_element(glyph_name: &str, codepoint: Codepoint, path_data: &str) -> String {
    format!(
        "<glyph glyph-name=\"{}\" unicode=\"&#x{codepoint};\" d=\"{}\" />\n",
        escape_attribute(glyph_name),
        escape_attribute(path_data)
    )
}

/// Escape a value for a double-quoted attribute.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FontDocument;

    #[test]
    fn standalone_svg_uses_fixed_canvas() {
        assert_eq!(
            standalone_svg("M0 0L10 10Z"),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 2048 2048\"><path d=\"M0 0L10 10Z\"/></svg>"
        );
    }

    #[test]
    fn glyph_element_formats_unicode_as_entity() {
        assert_eq!(
            glyph_element("home", Codepoint::new(0xe001), "M0 0Z"),
            "<glyph glyph-name=\"home\" unicode=\"&#xE001;\" d=\"M0 0Z\" />\n"
        );
    }

    #[test]
    fn escapes_attribute_values() {
        assert_eq!(escape_attribute("a&b\"c"), "a&amp;b&quot;c");
        assert!(matches!(escape_attribute("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn assembled_font_reads_back() {
        let mut text = font_header("icons");
        text.push_str(&glyph_element("a&b", Codepoint::new(0x41), "M0 0L1 1Z"));
        text.push_str(FONT_FOOTER);

        let document = FontDocument::parse(&text).unwrap();
        assert_eq!(document.metrics(), &crate::FontMetrics::new(2048, 2048, 2048, 0));
        assert_eq!(document.glyphs()[0].declared_name(), Some("a&b"));
        assert_eq!(document.glyphs()[0].unicode.as_deref(), Some("A"));
    }
}
