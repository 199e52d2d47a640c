//! The immutable automaton model.
//!
//! ```text
//! Automaton = { name, neighborhood, states: [State; 2..=6] }
//! State     = { index, color, default_target, transitions: [Transition; 0..=3] }
//! Transition = { target, rule }
//! ```
//!
//! Values are fully built by the generator and only read afterwards.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::neighborhood::NeighborhoodKind;
use crate::rule::Rule;

/// A 24-bit RGB color rendered as six lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u32);

impl Color {
    const MASK: u32 = 0x00ff_ffff;

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
    }

    /// Build from a packed `0xRRGGBB` value; higher bits are dropped.
    pub fn from_packed(value: u32) -> Self {
        Self(value & Self::MASK)
    }

    pub fn packed(self) -> u32 {
        self.0
    }

    /// The following color, wrapping from `ffffff` to `000000`.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1) & Self::MASK)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06x}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A guarded transition to a state other than the owner's default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Destination state index.
    pub target: usize,
    /// Neighbor-count match expression.
    pub rule: Rule,
}

/// One automaton state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State {
    /// Position within the owning automaton.
    pub index: usize,
    pub color: Color,
    /// Fallback target when no transition matches.
    pub default_target: usize,
    pub transitions: Vec<Transition>,
}

/// A complete cellular-automaton definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Automaton {
    pub name: String,
    pub neighborhood: NeighborhoodKind,
    pub states: Vec<State>,
}

impl Automaton {
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Neighbor-count bound of this automaton's neighborhood.
    pub fn max_neighbors(&self) -> usize {
        self.neighborhood.max_neighbors()
    }

    /// Total number of guarded transitions across all states.
    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|s| s.transitions.len()).sum()
    }
}
