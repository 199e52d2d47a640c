//! Sample command implementation.
//!
//! Prints standalone `<auto>` elements, each with a random three-letter name.

use std::io::Write;

use anyhow::Result;
use autos_core::{gen_name, DocumentSerializer, RandomSource};
use tracing::info;

use super::{random_source, serializer};
use crate::config::Config;

pub fn execute(config: &Config, count: usize, seed: Option<u64>) -> Result<()> {
    info!(count, seed = ?seed, "Generating samples");

    let serializer = serializer(config)?;
    let mut rng = random_source(seed);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_samples(&serializer, count, &mut rng, &mut out)
}

/// Write `count` named fragments, each followed by a blank line.
pub fn write_samples<W: Write>(
    serializer: &DocumentSerializer,
    count: usize,
    rng: &mut impl RandomSource,
    writer: &mut W,
) -> Result<()> {
    for _ in 0..count {
        let name = gen_name(rng);
        let fragment = serializer.serialize_one(&name, rng)?;
        writeln!(writer, "{fragment}")?;
    }
    writer.flush()?;
    Ok(())
}
