//! CLI command implementations.

pub mod batch;
pub mod sample;

use autos_core::{AutomatonGenerator, DocumentSerializer, RandomSource, RngSource};

use crate::config::Config;

/// Seeded source when a seed is configured, entropy-backed otherwise.
pub fn random_source(seed: Option<u64>) -> impl RandomSource {
    match seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    }
}

/// Serializer built from the configured generator tunables.
pub fn serializer(config: &Config) -> anyhow::Result<DocumentSerializer> {
    let generator = AutomatonGenerator::with_config(config.generator.clone())?;
    Ok(DocumentSerializer::with_generator(generator))
}
