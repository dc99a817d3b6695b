//! Error types for mapping table operations.

use std::{io, path::PathBuf, result};

use glyphsplit_svg_font::Codepoint;

/// Errors that can occur while loading or grouping a mapping table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read mapping table: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse mapping records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("spreadsheet has no worksheet")]
    EmptyWorkbook,

    #[error("record {row}: {source}")]
    InvalidCodepoint { row: usize, source: glyphsplit_svg_font::Error },

    #[error("record {row}: invalid maximum scale {value:?}")]
    InvalidScale { row: usize, value: String },

    #[error("record {row}: missing source code point")]
    MissingSource { row: usize },

    #[error("mapping for U+{codepoint} has no source file")]
    MissingSourceFile { codepoint: Codepoint },

    #[error("unsupported mapping table format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = result::Result<T, Error>;
