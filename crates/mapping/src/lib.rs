//! # Glyph mapping tables
//!
//! A mapping table says which glyphs of a source SVG font to keep, and under
//! which name and code point each one is written. It is read from a JSON
//! list of records or from the first worksheet of a spreadsheet.
//!
//! ## Example
//!
//! ```
//! use glyphsplit_mapping::{Resolver, load_json};
//! use glyphsplit_svg_font::Codepoint;
//!
//! let records = load_json(br#"[
//!     {"glyphName": "first", "sourceUnicode": "41", "destinationUnicode": "E001"},
//!     {"glyphName": "second", "sourceUnicode": "0x41", "destinationUnicode": "E002"}
//! ]"#).unwrap();
//!
//! let resolver = Resolver::new(Some(&records));
//! let outputs = resolver.resolve(Codepoint::new(0x41));
//! assert_eq!(outputs.len(), 2);
//! assert_eq!(outputs[1].destination, "E002");
//! ```

mod batch;
mod error;
mod load;
mod record;
mod resolver;

pub use batch::group_by_source_file;
pub use error::{Error, Result};
pub use load::{load, load_json, load_sheet, records_from_rows};
pub use record::{MappingRecord, normalize_destination};
pub use resolver::{Resolved, Resolver};
