//! Neighborhood topologies and their weighted selection.
//!
//! Each kind carries a fixed neighbor-count bound. Selection weights live only
//! in [`NEIGHBORHOOD_WEIGHTS`] and never reach the rendered document.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GenerationResult;
use crate::random::RandomSource;

/// The shape defining which cells count as neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeighborhoodKind {
    Moore,
    Neuman,
    Plus,
    Diag,
    BigX,
    Hat,
}

impl NeighborhoodKind {
    /// Every kind, in table order.
    pub const ALL: [NeighborhoodKind; 6] = [
        NeighborhoodKind::Moore,
        NeighborhoodKind::Neuman,
        NeighborhoodKind::Plus,
        NeighborhoodKind::Diag,
        NeighborhoodKind::BigX,
        NeighborhoodKind::Hat,
    ];

    /// Maximum number of live neighbors a cell can have.
    pub fn max_neighbors(self) -> usize {
        match self {
            NeighborhoodKind::Moore | NeighborhoodKind::Neuman | NeighborhoodKind::BigX => 8,
            NeighborhoodKind::Plus | NeighborhoodKind::Diag => 4,
            NeighborhoodKind::Hat => 3,
        }
    }

    /// Name as written in the `neighborhood` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            NeighborhoodKind::Moore => "Moore",
            NeighborhoodKind::Neuman => "Neuman",
            NeighborhoodKind::Plus => "Plus",
            NeighborhoodKind::Diag => "Diag",
            NeighborhoodKind::BigX => "BigX",
            NeighborhoodKind::Hat => "Hat",
        }
    }

    /// Relative selection weight.
    pub fn weight(self) -> usize {
        NEIGHBORHOOD_WEIGHTS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, weight)| *weight)
            .unwrap_or(0)
    }
}

impl fmt::Display for NeighborhoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative selection weight per kind.
pub const NEIGHBORHOOD_WEIGHTS: [(NeighborhoodKind, usize); 6] = [
    (NeighborhoodKind::Moore, 5),
    (NeighborhoodKind::Neuman, 5),
    (NeighborhoodKind::Plus, 3),
    (NeighborhoodKind::Diag, 2),
    (NeighborhoodKind::BigX, 2),
    (NeighborhoodKind::Hat, 1),
];

/// Weighted picker over [`NEIGHBORHOOD_WEIGHTS`].
///
/// The table is expanded so each kind appears once per unit of weight; a
/// uniform pick over the expansion is then proportional to weight.
#[derive(Debug, Clone)]
pub struct NeighborhoodSelector {
    table: Vec<NeighborhoodKind>,
}

impl NeighborhoodSelector {
    pub fn new() -> Self {
        Self::from_weights(&NEIGHBORHOOD_WEIGHTS)
    }

    /// Build a selector from an arbitrary weight table.
    pub fn from_weights(weights: &[(NeighborhoodKind, usize)]) -> Self {
        let table = weights
            .iter()
            .flat_map(|&(kind, weight)| std::iter::repeat_n(kind, weight))
            .collect();
        Self { table }
    }

    /// Total weight of the table.
    pub fn total_weight(&self) -> usize {
        self.table.len()
    }

    /// Pick a kind with probability proportional to its weight, paired with
    /// its neighbor bound.
    pub fn select(
        &self,
        rng: &mut impl RandomSource,
    ) -> GenerationResult<(NeighborhoodKind, usize)> {
        let kind = *rng.pick(&self.table)?;
        Ok((kind, kind.max_neighbors()))
    }
}

impl Default for NeighborhoodSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::GenerationError;
    use crate::random::RngSource;
    use crate::test_fixtures::{MaxSource, ScriptedSource};

    #[test]
    fn test_bounds_match_table() {
        assert_eq!(NeighborhoodKind::Moore.max_neighbors(), 8);
        assert_eq!(NeighborhoodKind::Neuman.max_neighbors(), 8);
        assert_eq!(NeighborhoodKind::Plus.max_neighbors(), 4);
        assert_eq!(NeighborhoodKind::Diag.max_neighbors(), 4);
        assert_eq!(NeighborhoodKind::BigX.max_neighbors(), 8);
        assert_eq!(NeighborhoodKind::Hat.max_neighbors(), 3);
    }

    #[test]
    fn test_expanded_table() {
        let selector = NeighborhoodSelector::new();
        assert_eq!(selector.total_weight(), 18);
        assert_eq!(NeighborhoodKind::Plus.weight(), 3);
        assert_eq!(NeighborhoodKind::Hat.weight(), 1);
    }

    #[test]
    fn test_select_follows_table_order() {
        let selector = NeighborhoodSelector::new();
        assert_eq!(
            selector.select(&mut MaxSource).unwrap(),
            (NeighborhoodKind::Moore, 8)
        );

        // Index 17 is the single Hat row; 10 is the first Plus row.
        let mut scripted = ScriptedSource::ints([17, 10, 15]);
        assert_eq!(selector.select(&mut scripted).unwrap().0, NeighborhoodKind::Hat);
        assert_eq!(selector.select(&mut scripted).unwrap().0, NeighborhoodKind::Plus);
        assert_eq!(selector.select(&mut scripted).unwrap().0, NeighborhoodKind::BigX);
    }

    #[test]
    fn test_select_roughly_proportional() {
        let selector = NeighborhoodSelector::new();
        let mut rng = RngSource::seeded(42);
        let mut counts: HashMap<NeighborhoodKind, usize> = HashMap::new();
        let draws = 18_000;
        for _ in 0..draws {
            let (kind, bound) = selector.select(&mut rng).unwrap();
            assert_eq!(bound, kind.max_neighbors());
            *counts.entry(kind).or_insert(0) += 1;
        }
        for kind in NeighborhoodKind::ALL {
            let expected = draws * kind.weight() / 18;
            let actual = counts.get(&kind).copied().unwrap_or(0);
            assert!(
                actual.abs_diff(expected) < expected / 5 + 50,
                "{kind}: expected ~{expected}, got {actual}"
            );
        }
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let selector = NeighborhoodSelector::from_weights(&[]);
        assert!(matches!(
            selector.select(&mut MaxSource),
            Err(GenerationError::EmptySequence)
        ));
    }
}
