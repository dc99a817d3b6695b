use std::result;

use kurbo::SvgParseError;

/// Error types for glyph-transform.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse path data: {0}")]
    PathData(#[from] SvgParseError),
}

pub type Result<T> = result::Result<T, Error>;
