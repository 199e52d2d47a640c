//! Batch command implementation.
//!
//! Generates a full document of index-named automata.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use autos_core::{render_json, DocumentSerializer, RandomSource};
use tracing::info;

use super::{random_source, serializer};
use crate::config::{Config, OutputFormat};

/// Resolved options for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub count: usize,
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Generate a batch and write it to the output file or stdout.
pub fn execute(config: &Config, options: &BatchOptions) -> Result<()> {
    info!(
        count = options.count,
        seed = ?options.seed,
        format = ?options.format,
        "Generating batch"
    );

    let serializer = serializer(config)?;
    let mut rng = random_source(options.seed);

    match &options.output {
        Some(path) => {
            write_to_file(&serializer, options, &mut rng, path)?;
            eprintln!("Output written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_document(&serializer, options, &mut rng, &mut out)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Nothing is written to `path` unless the whole document rendered.
fn write_to_file(
    serializer: &DocumentSerializer,
    options: &BatchOptions,
    rng: &mut impl RandomSource,
    path: &Path,
) -> Result<()> {
    let mut buffer = Vec::new();
    write_document(serializer, options, rng, &mut buffer)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    std::fs::write(path, buffer)
        .with_context(|| format!("Failed to write output to: {}", path.display()))
}

/// Render the batch in the requested format into `writer`.
pub fn write_document<W: Write>(
    serializer: &DocumentSerializer,
    options: &BatchOptions,
    rng: &mut impl RandomSource,
    writer: &mut W,
) -> Result<()> {
    match options.format {
        OutputFormat::Xml => serializer.write_batch(options.count, rng, writer)?,
        OutputFormat::Json => {
            let automata = serializer.generate_batch(options.count, rng)?;
            writer.write_all(render_json(&automata)?.as_bytes())?;
            writer.flush()?;
        }
    }
    Ok(())
}
