//! Shared file I/O utilities.

use std::{
    fs::{create_dir_all, read_to_string},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glyphsplit_mapping::MappingRecord;
use glyphsplit_svg_font::FontDocument;

/// An SVG font file handle.
#[derive(Debug, Clone)]
pub struct SvgFontFile {
    path: PathBuf,
}

impl SvgFontFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse the font document.
    pub fn load(&self) -> Result<FontDocument> {
        let text = read_to_string(&self.path)
            .with_context(|| format!("Failed to read font: {}", self.path.display()))?;
        FontDocument::parse(&text)
            .with_context(|| format!("Failed to parse font: {}", self.path.display()))
    }
}

pub fn read_document(path: impl AsRef<Path>) -> Result<FontDocument> {
    SvgFontFile::new(path.as_ref()).load()
}

pub fn read_mapping(path: impl AsRef<Path>) -> Result<Vec<MappingRecord>> {
    let path = path.as_ref();
    glyphsplit_mapping::load(path)
        .with_context(|| format!("Failed to load mapping table: {}", path.display()))
}

/// Create a directory and its parents. An empty path is the current directory.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.as_os_str().is_empty() {
        create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) => ensure_dir(parent),
        None => Ok(()),
    }
}
