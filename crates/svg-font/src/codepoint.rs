//! Code points carried as hexadecimal strings.

use std::{
    fmt,
    fmt::{Display, Formatter},
};

use crate::{Error, Result};

/// Prefixes accepted in front of a hexadecimal code point, compared
/// case-insensitively.
const HEX_PREFIXES: &[&str] = &["0x", "&#x", "u+"];

/// A Unicode code point.
///
/// Equality is numeric, so `"0041"`, `"0x41"` and `"&#x41;"` all name the
/// same code point.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codepoint(pub u32);

impl Codepoint {
    pub const fn new(cp: u32) -> Self {
        Self(cp)
    }

    /// Parse a hexadecimal code point, tolerating the `0x`, `&#x` and `U+`
    /// prefixes and a trailing `;`.
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = normalize_hex(value);
        // from_str_radix accepts a leading sign, which is not a hex digit.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidCodepoint(value.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| Error::InvalidCodepoint(value.to_string()))
    }

    /// Interpret the `unicode` attribute of a glyph element.
    ///
    /// A single character is taken as is. A longer value is read as a hex
    /// code when it carries a hex prefix (`&#x41;`, `0x41`), otherwise as a
    /// ligature whose first character identifies the glyph. Returns `None`
    /// for an empty attribute.
    pub fn from_glyph_unicode(value: &str) -> Option<Self> {
        let mut chars = value.chars();
        let first = chars.next()?;
        if chars.next().is_none() {
            return Some(first.into());
        }
        let prefixed = normalize_hex(value).len() < value.trim().len();
        prefixed
            .then(|| Self::from_hex(value).ok())
            .flatten()
            .or(Some(first.into()))
    }

    /// Uppercase hexadecimal form without leading zeros, e.g. `"E001"`.
    pub fn to_hex(self) -> String {
        format!("{:X}", self.0)
    }
}

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl Display for Codepoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

/// Strip whitespace, a hex prefix and a trailing `;` from a code point string.
pub fn normalize_hex(value: &str) -> &str {
    let value = value.trim();
    let value = value.strip_suffix(';').unwrap_or(value);
    HEX_PREFIXES
        .iter()
        .find_map(|prefix| strip_prefix_ignore_case(value, prefix))
        .unwrap_or(value)
        .trim()
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &value[prefix.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_prefixes_and_semicolon() {
        assert_eq!(normalize_hex("0x41"), "41");
        assert_eq!(normalize_hex("0X41"), "41");
        assert_eq!(normalize_hex("&#x41;"), "41");
        assert_eq!(normalize_hex(" U+e001 "), "e001");
        assert_eq!(normalize_hex("41"), "41");
    }

    #[test]
    fn hex_is_case_insensitive_and_ignores_leading_zeros() {
        assert_eq!(Codepoint::from_hex("0041").unwrap(), Codepoint::new(0x41));
        assert_eq!(Codepoint::from_hex("&#x41;").unwrap(), Codepoint::new(0x41));
        assert_eq!(Codepoint::from_hex("e001").unwrap(), Codepoint::from_hex("0xE001").unwrap());
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(Codepoint::from_hex("").is_err());
        assert!(Codepoint::from_hex("0x").is_err());
        assert!(Codepoint::from_hex("zz").is_err());
        assert!(Codepoint::from_hex("+41").is_err());
    }

    #[test]
    fn glyph_unicode_single_character() {
        assert_eq!(Codepoint::from_glyph_unicode("A"), Some(Codepoint::new(0x41)));
        assert_eq!(Codepoint::from_glyph_unicode("\u{e001}"), Some(Codepoint::new(0xE001)));
        assert_eq!(Codepoint::from_glyph_unicode(""), None);
    }

    #[test]
    fn glyph_unicode_hex_or_ligature() {
        assert_eq!(Codepoint::from_glyph_unicode("&#x41;"), Some(Codepoint::new(0x41)));
        assert_eq!(Codepoint::from_glyph_unicode("0xE001"), Some(Codepoint::new(0xE001)));
        assert_eq!(Codepoint::from_glyph_unicode("fi"), Some(Codepoint::new('f' as u32)));
        assert_eq!(Codepoint::from_glyph_unicode("ff"), Some(Codepoint::new('f' as u32)));
    }

    #[test]
    fn display_is_uppercase_without_leading_zeros() {
        assert_eq!(Codepoint::new(0xe001).to_string(), "E001");
        assert_eq!(Codepoint::new(0x41).to_hex(), "41");
    }
}
