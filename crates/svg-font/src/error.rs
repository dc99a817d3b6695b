//! Error types for SVG font reading.

use std::result;

/// Errors that can occur while reading an SVG font document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse font document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("invalid hexadecimal code point: {0:?}")]
    InvalidCodepoint(String),

    #[error("invalid value {value:?} for attribute '{attribute}'")]
    InvalidMetric { attribute: &'static str, value: String },
}

pub type Result<T> = result::Result<T, Error>;
