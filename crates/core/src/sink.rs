//! Where extracted glyphs go.

use std::{
    fs::write,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glyphsplit_svg_font::{
    Codepoint,
    markup::{glyph_element, standalone_svg},
};

use crate::io::ensure_dir;

/// An extracted glyph, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRecord {
    pub glyph_name: String,
    /// Output code point, canonical hex when valid
    pub destination: String,
    pub path_data: String,
}

impl GlyphRecord {
    pub fn codepoint(&self) -> Option<Codepoint> {
        Codepoint::from_hex(&self.destination).ok()
    }

    /// `<name>-U0x<HEX>.svg`, or `<name>.svg` when the destination is not hex.
    pub fn file_name(&self) -> String {
        match self.codepoint() {
            Some(cp) => format!("{}-U0x{cp}.svg", self.glyph_name),
            None => format!("{}.svg", self.glyph_name),
        }
    }
}

/// Destination of extracted glyphs.
///
/// The sink decides whether outlines are flipped into a Y-down canvas; the
/// choice is fixed for a whole run.
pub trait GlyphSink {
    /// Whether glyphs must be flipped from font (Y-up) to image (Y-down)
    /// coordinates.
    fn flip(&self) -> bool;

    /// Write one glyph.
    fn emit(&mut self, record: GlyphRecord) -> Result<()>;
}

/// Writes every glyph as a standalone SVG file into a directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Create the sink, creating `dir` if needed.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl GlyphSink for FileSink {
    fn flip(&self) -> bool {
        true
    }

    fn emit(&mut self, record: GlyphRecord) -> Result<()> {
        let path = self.dir.join(record.file_name());
        write(&path, standalone_svg(&record.path_data))
            .with_context(|| format!("Failed to write glyph: {}", path.display()))
    }
}

/// Appends `<glyph>` elements to an SVG font being written.
///
/// The caller writes the font header before and the footer after.
#[derive(Debug)]
pub struct FontStreamSink<W: Write> {
    writer: W,
}

impl<W: Write> FontStreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GlyphSink for FontStreamSink<W> {
    fn flip(&self) -> bool {
        false
    }

    fn emit(&mut self, record: GlyphRecord) -> Result<()> {
        let Some(codepoint) = record.codepoint() else {
            bail!(
                "Glyph {}: destination {:?} is not a hexadecimal code point",
                record.glyph_name,
                record.destination
            );
        };
        self.writer
            .write_all(glyph_element(&record.glyph_name, codepoint, &record.path_data).as_bytes())
            .with_context(|| format!("Failed to write glyph {}", record.glyph_name))
    }
}
