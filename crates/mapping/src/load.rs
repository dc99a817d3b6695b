//! Loading mapping tables from JSON and spreadsheets.

use std::{fs, iter, path::Path};

use calamine::{Reader, open_workbook_auto};
use glyphsplit_svg_font::{Codepoint, normalize_hex};
use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{Error, MappingRecord, Result, normalize_destination};

/// Spreadsheet extensions read through calamine.
const SHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Spreadsheet column order.
const NAME_COLUMN: usize = 0;
const SOURCE_FILE_COLUMN: usize = 1;
const SOURCE_COLUMN: usize = 2;
const DESTINATION_COLUMN: usize = 3;
const MAX_SCALE_COLUMN: usize = 4;

/// Load a mapping table, choosing the format from the file extension.
pub fn load(path: &Path) -> Result<Vec<MappingRecord>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let records = if extension == "json" {
        load_json(&fs::read(path)?)?
    } else if SHEET_EXTENSIONS.contains(&extension.as_str()) {
        load_sheet(path)?
    } else {
        return Err(Error::UnsupportedFormat(path.to_path_buf()));
    };

    debug!("Loaded {} mapping records from {}", records.len(), path.display());
    Ok(records)
}

/// A code point written either as a JSON number or as a hex string.
#[derive(Deserialize)]
#[serde(untagged)]
enum CodeValue {
    Number(u32),
    Text(String),
}

/// Field names are lowercased before deserialising.
#[derive(Deserialize)]
struct JsonRecord {
    #[serde(rename = "glyphname")]
    glyph_name: Option<String>,
    #[serde(rename = "sourcefile")]
    source_file: Option<String>,
    #[serde(rename = "sourceunicode", alias = "source")]
    source: Option<CodeValue>,
    #[serde(rename = "destinationunicode", alias = "destination")]
    destination: Option<CodeValue>,
    #[serde(rename = "maxscale")]
    max_scale: Option<f64>,
}

/// Parse a JSON list of mapping records. Field names are case-insensitive.
pub fn load_json(data: &[u8]) -> Result<Vec<MappingRecord>> {
    let entries: Vec<Map<String, Value>> = serde_json::from_slice(data)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let lowered: Map<String, Value> =
                entry.into_iter().map(|(k, v)| (k.to_ascii_lowercase(), v)).collect();
            let raw: JsonRecord = serde_json::from_value(Value::Object(lowered))?;
            json_record(i + 1, raw)
        })
        .collect()
}

fn json_record(row: usize, raw: JsonRecord) -> Result<MappingRecord> {
    let source = match raw.source {
        Some(CodeValue::Number(n)) => Codepoint::new(n),
        Some(CodeValue::Text(text)) if !normalize_hex(&text).is_empty() => parse_source(row, &text)?,
        _ => return Err(Error::MissingSource { row }),
    };
    let destination = match raw.destination {
        Some(CodeValue::Number(n)) => Some(Codepoint::new(n).to_hex()),
        Some(CodeValue::Text(text)) => normalize_destination(&text),
        None => None,
    };

    Ok(MappingRecord {
        glyph_name: raw.glyph_name.filter(|n| !n.is_empty()),
        source_file: raw.source_file.filter(|f| !f.is_empty()),
        source,
        destination,
        max_scale: raw.max_scale,
    })
}

/// Read the first worksheet of a spreadsheet.
///
/// Columns are `[name, sourceFile, sourceUnicode, destinationUnicode,
/// maxScale]`; the first row is a header.
pub fn load_sheet(path: &Path) -> Result<Vec<MappingRecord>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or(Error::EmptyWorkbook)??;

    // A range starts at its first used cell, not necessarily at A1.
    let (first_row, first_column) = range.start().unwrap_or((0, 0));
    let padding = first_column as usize;
    let rows = range.rows().map(|cells| {
        iter::repeat_n(String::new(), padding)
            .chain(cells.iter().map(ToString::to_string))
            .collect::<Vec<_>>()
    });

    // Row 1 is the header; when it is blank the range starts below it.
    let header = (first_row > 0).then(Vec::new);
    records_from_rows(header.into_iter().chain(rows))
}

/// Build records from spreadsheet rows of cell text.
///
/// The first row is discarded as a header. Rows without a destination are
/// dropped, blank rows skipped.
pub fn records_from_rows<I>(rows: I) -> Result<Vec<MappingRecord>>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut records = Vec::new();
    for (index, cells) in rows.into_iter().enumerate().skip(1) {
        let row = index + 1;
        let cell = |column: usize| cells.get(column).map(|c| c.trim()).unwrap_or_default();

        let Some(destination) = normalize_destination(cell(DESTINATION_COLUMN)) else {
            continue;
        };

        let source = normalize_hex(cell(SOURCE_COLUMN));
        if source.is_empty() {
            return Err(Error::MissingSource { row });
        }

        let max_scale = match cell(MAX_SCALE_COLUMN) {
            "" => None,
            value => Some(
                value
                    .parse::<f64>()
                    .map_err(|_| Error::InvalidScale { row, value: value.to_string() })?,
            ),
        };

        records.push(MappingRecord {
            glyph_name: Some(cell(NAME_COLUMN)).filter(|n| !n.is_empty()).map(str::to_string),
            source_file: Some(cell(SOURCE_FILE_COLUMN))
                .filter(|f| !f.is_empty())
                .map(str::to_string),
            source: parse_source(row, source)?,
            destination: Some(destination),
            max_scale,
        });
    }
    Ok(records)
}

fn parse_source(row: usize, value: &str) -> Result<Codepoint> {
    Codepoint::from_hex(value).map_err(|source| Error::InvalidCodepoint { row, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn json_field_names_are_case_insensitive() {
        let records = load_json(
            br#"[{"GLYPHNAME": "home", "SourceFile": "a.svg", "sourceunicode": "0x41",
                  "DestinationUnicode": "&#xE001;", "MaxScale": 0.5}]"#,
        )
        .unwrap();
        assert_eq!(
            records,
            vec![
                MappingRecord::new(Codepoint::new(0x41))
                    .with_glyph_name("home")
                    .with_source_file("a.svg")
                    .with_destination("E001")
                    .with_max_scale(0.5)
            ]
        );
    }

    #[test]
    fn json_accepts_numbers_and_short_aliases() {
        let records = load_json(br#"[{"source": 65, "destination": 57345}]"#).unwrap();
        assert_eq!(records[0].source, Codepoint::new(0x41));
        assert_eq!(records[0].destination.as_deref(), Some("E001"));
    }

    #[test]
    fn json_null_destination_is_kept_inactive() {
        let records = load_json(br#"[{"sourceUnicode": "41", "destinationUnicode": null}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_active());
    }

    #[test]
    fn json_requires_valid_source() {
        assert!(matches!(
            load_json(br#"[{"destinationUnicode": "E001"}]"#),
            Err(Error::MissingSource { row: 1 })
        ));
        assert!(matches!(
            load_json(br#"[{"sourceUnicode": "41"}, {"sourceUnicode": "xyz"}]"#),
            Err(Error::InvalidCodepoint { row: 2, .. })
        ));
    }

    #[test]
    fn rows_skip_header_and_strip_prefixes() {
        let records = records_from_rows([
            row(&["name", "file", "source", "destination", "scale"]),
            row(&[" home ", "icons.svg", "&#x41;", "0xe001;", ""]),
            row(&["", "", "42", "E002", "-1"]),
        ])
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].glyph_name.as_deref(), Some("home"));
        assert_eq!(records[0].source_file.as_deref(), Some("icons.svg"));
        assert_eq!(records[0].source, Codepoint::new(0x41));
        assert_eq!(records[0].destination.as_deref(), Some("E001"));
        assert_eq!(records[0].max_scale, None);
        assert_eq!(records[1].glyph_name, None);
        assert_eq!(records[1].max_scale, Some(-1.0));
    }

    #[test]
    fn rows_without_destination_are_dropped() {
        let records = records_from_rows([
            row(&["header"]),
            row(&["a", "", "41"]),
            row(&[]),
            row(&["b", "", "42", " "]),
        ])
        .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn rows_report_bad_cells() {
        let header = row(&["header"]);
        assert!(matches!(
            records_from_rows([header.clone(), row(&["a", "", "", "E001"])]),
            Err(Error::MissingSource { row: 2 })
        ));
        assert!(matches!(
            records_from_rows([header.clone(), row(&["a", "", "41", "E001", "big"])]),
            Err(Error::InvalidScale { row: 2, .. })
        ));
        assert!(matches!(
            records_from_rows([header, row(&["a", "", "4G", "E001"])]),
            Err(Error::InvalidCodepoint { row: 2, .. })
        ));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(matches!(load(Path::new("map.txt")), Err(Error::UnsupportedFormat(_))));
    }
}
