//! The two top-level operations: extracting glyphs to files and composing
//! an SVG font.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, bail};
use glyphsplit_mapping::{MappingRecord, group_by_source_file};
use glyphsplit_svg_font::markup::{FONT_FOOTER, font_header};
use indexmap::IndexMap;
use log::info;

use crate::{
    CancellationToken, ExtractOptions, ExtractReport,
    config::{DEFAULT_FONT_FILENAME, DEFAULT_FONT_ID},
    extract,
    io::{ensure_parent_dir, read_document, read_mapping},
    sink::{FileSink, FontStreamSink, GlyphSink},
};

/// Extract glyphs into standalone SVG files.
///
/// With an `input` font, its glyphs are extracted, filtered and renamed by
/// the optional mapping table. Without one, the mapping table is required
/// and names the source font of every record (batch mode).
pub fn extract_to_files(
    input: Option<&Path>,
    output_dir: Option<&Path>,
    config: Option<&Path>,
    options: &ExtractOptions,
    cancel: &CancellationToken,
) -> Result<ExtractReport> {
    let Some(input) = input else {
        let Some(config) = config else {
            bail!("A mapping table is required when no input font is given");
        };
        let mut sink = FileSink::create(output_dir.unwrap_or(Path::new("")))?;
        return run_batch(config, &mut sink, options, cancel);
    };

    let mappings = config.map(read_mapping).transpose()?;
    if cancel.is_cancelled() {
        return Ok(ExtractReport::default());
    }

    let document = read_document(input)?;
    let mut sink = FileSink::create(output_dir.unwrap_or(Path::new("")))?;
    info!("Extracting glyphs from {} into {}", input.display(), sink.dir().display());
    extract(&document, mappings.as_deref(), &mut sink, options, cancel)
}

/// Gather the glyphs named by a mapping table into one SVG font.
///
/// Writes to `output`, or `font.svg` in the current directory; the font id
/// is the output file's stem.
pub fn compose_font(
    config: &Path,
    output: Option<&Path>,
    options: &ExtractOptions,
    cancel: &CancellationToken,
) -> Result<ExtractReport> {
    // The table is validated before an existing font is truncated.
    let groups = load_groups(config)?;

    let output = output.unwrap_or(Path::new(DEFAULT_FONT_FILENAME));
    ensure_parent_dir(output)?;

    let file = File::create(output)
        .with_context(|| format!("Failed to create font: {}", output.display()))?;
    let id = output.file_stem().and_then(|s| s.to_str()).unwrap_or(DEFAULT_FONT_ID);

    let mut writer = BufWriter::new(file);
    writer
        .write_all(font_header(id).as_bytes())
        .with_context(|| format!("Failed to write font: {}", output.display()))?;

    let mut sink = FontStreamSink::new(writer);
    let report = extract_groups(config, &groups, &mut sink, options, cancel)?;

    let mut writer = sink.into_inner();
    writer
        .write_all(FONT_FOOTER.as_bytes())
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write font: {}", output.display()))?;

    info!("Composed {} glyphs into {}", report.extracted, output.display());
    Ok(report)
}

/// Extract glyphs from every font a mapping table references.
///
/// Records are grouped by source file, resolved against the table's own
/// directory, and each font is extracted with its own metrics.
pub fn run_batch<S: GlyphSink + ?Sized>(
    config: &Path,
    sink: &mut S,
    options: &ExtractOptions,
    cancel: &CancellationToken,
) -> Result<ExtractReport> {
    let groups = load_groups(config)?;
    extract_groups(config, &groups, sink, options, cancel)
}

fn load_groups(config: &Path) -> Result<IndexMap<String, Vec<MappingRecord>>> {
    let records = read_mapping(config)?;
    group_by_source_file(records)
        .with_context(|| format!("Invalid mapping table: {}", config.display()))
}

fn extract_groups<S: GlyphSink + ?Sized>(
    config: &Path,
    groups: &IndexMap<String, Vec<MappingRecord>>,
    sink: &mut S,
    options: &ExtractOptions,
    cancel: &CancellationToken,
) -> Result<ExtractReport> {
    let base = config.parent().unwrap_or(Path::new(""));
    let mut report = ExtractReport::default();

    for (file, records) in groups {
        if cancel.is_cancelled() {
            break;
        }
        let path = base.join(file);
        info!("Extracting {} mapped glyphs from {}", records.len(), path.display());

        let document = read_document(&path)?;
        report.merge(extract(&document, Some(records), sink, options, cancel)?);
    }

    Ok(report)
}
