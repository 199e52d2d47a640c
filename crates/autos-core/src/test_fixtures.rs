//! Stub randomness sources for deterministic tests.

use std::collections::VecDeque;

use crate::error::GenerationResult;
use crate::random::RandomSource;

/// Always returns the largest value: `bound - 1` for integers, `0.99` for
/// units, and the first element for picks.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxSource;

impl RandomSource for MaxSource {
    fn next_int(&mut self, bound: usize) -> usize {
        bound.saturating_sub(1)
    }

    fn next_unit(&mut self) -> f64 {
        0.99
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> GenerationResult<&'a T> {
        items.first().ok_or(crate::GenerationError::EmptySequence)
    }
}

/// Replays a fixed script of integer and unit draws.
///
/// Integer draws are reduced modulo the requested bound. Once a script runs
/// dry it yields zeros.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    ints: VecDeque<usize>,
    units: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new(ints: impl IntoIterator<Item = usize>, units: impl IntoIterator<Item = f64>) -> Self {
        Self {
            ints: ints.into_iter().collect(),
            units: units.into_iter().collect(),
        }
    }

    pub fn ints(ints: impl IntoIterator<Item = usize>) -> Self {
        Self::new(ints, [])
    }
}

impl RandomSource for ScriptedSource {
    fn next_int(&mut self, bound: usize) -> usize {
        self.ints.pop_front().unwrap_or(0) % bound.max(1)
    }

    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }
}

/// Always returns zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroSource;

impl RandomSource for ZeroSource {
    fn next_int(&mut self, _bound: usize) -> usize {
        0
    }

    fn next_unit(&mut self) -> f64 {
        0.0
    }
}
