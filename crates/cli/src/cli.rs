//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use glyphsplit_core::{
    CancellationToken, ExtractOptions, compose_font, config::DEFAULT_FONT_FILENAME,
    extract_to_files,
};
use log::info;

#[derive(Parser)]
#[command(name = "glyphsplit", version)]
#[command(about = "Split SVG fonts into glyph files, or gather glyphs into an SVG font")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract glyphs into standalone SVG files
    Extract {
        /// SVG font to extract from (default: fonts named by the mapping table)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output folder
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Mapping table (.json, .xlsx, .ods)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log every glyph and unmatched mappings
        #[arg(short, long)]
        verbose: bool,
    },
    /// Gather the glyphs named by a mapping table into one SVG font
    Compose {
        /// Mapping table (.json, .xlsx, .ods)
        #[arg(short, long)]
        config: PathBuf,

        /// Output SVG font
        #[arg(short, long, default_value = DEFAULT_FONT_FILENAME)]
        output: PathBuf,

        /// Log every glyph and unmatched mappings
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Commands {
    pub fn verbose(&self) -> bool {
        match self {
            Commands::Extract { verbose, .. } | Commands::Compose { verbose, .. } => *verbose,
        }
    }

    pub fn run(self) -> Result<()> {
        let options = ExtractOptions::new().verbose(self.verbose());
        let cancel = CancellationToken::new();

        match self {
            Commands::Extract { input, output, config, .. } => {
                let report = extract_to_files(
                    input.as_deref(),
                    output.as_deref(),
                    config.as_deref(),
                    &options,
                    &cancel,
                )?;
                if !report.missing.is_empty() {
                    info!("{} mapped glyphs were not found", report.missing.len());
                }
                println!("Extracted {} glyphs", report.extracted);
            }
            Commands::Compose { config, output, .. } => {
                let report = compose_font(&config, Some(&output), &options, &cancel)?;
                if !report.missing.is_empty() {
                    info!("{} mapped glyphs were not found", report.missing.len());
                }
                println!("Composed {} glyphs into {}", report.extracted, output.display());
            }
        }
        Ok(())
    }
}
