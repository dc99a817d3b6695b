//! Splitting a mapping table by source document.

use indexmap::IndexMap;

use crate::{Error, MappingRecord, Result};

/// Group active records by their source file, in order of first appearance.
///
/// Records without a destination are dropped first; any remaining record
/// without a source file is an error.
pub fn group_by_source_file(
    records: impl IntoIterator<Item = MappingRecord>,
) -> Result<IndexMap<String, Vec<MappingRecord>>> {
    let mut groups: IndexMap<String, Vec<MappingRecord>> = IndexMap::new();
    for record in records.into_iter().filter(MappingRecord::is_active) {
        let Some(file) = record.source_file.clone().filter(|f| !f.is_empty()) else {
            return Err(Error::MissingSourceFile { codepoint: record.source });
        };
        groups.entry(file).or_default().push(record);
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use glyphsplit_svg_font::Codepoint;

    use super::*;

    fn record(source: u32, file: &str) -> MappingRecord {
        MappingRecord::new(Codepoint::new(source)).with_destination("E001").with_source_file(file)
    }

    #[test]
    fn groups_in_first_seen_order() {
        let groups =
            group_by_source_file([record(1, "b.svg"), record(2, "a.svg"), record(3, "b.svg")])
                .unwrap();
        let keys: Vec<_> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b.svg", "a.svg"]);
        assert_eq!(groups["b.svg"].len(), 2);
        assert_eq!(groups["a.svg"][0].source, Codepoint::new(2));
    }

    #[test]
    fn missing_source_file_is_fatal() {
        let orphan = MappingRecord::new(Codepoint::new(0x41)).with_destination("E001");
        assert!(matches!(
            group_by_source_file([record(1, "a.svg"), orphan]),
            Err(Error::MissingSourceFile { codepoint }) if codepoint == Codepoint::new(0x41)
        ));
    }

    #[test]
    fn inactive_records_are_ignored() {
        let inactive = MappingRecord::new(Codepoint::new(0x41));
        assert!(group_by_source_file([inactive]).unwrap().is_empty());
    }
}
