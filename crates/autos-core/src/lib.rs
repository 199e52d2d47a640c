//! Random cellular-automaton definitions for fixture documents.
//!
//! Produces well-formed `autos` documents describing randomly generated
//! automata, meant as input for simulators and visualizers under test.
//!
//! ## Core Concepts
//!
//! - **Neighborhood**: topology (Moore, Neuman, Plus, Diag, BigX, Hat) and its
//!   maximum live-neighbor count
//! - **State**: a color, a default target, and zero or more guarded transitions
//! - **Transition**: a target state different from the default, plus a rule
//! - **Rule**: one token per state, each a wildcard, a literal count, or a set
//!
//! ## Generation
//!
//! ```text
//! DocumentSerializer
//!   └─ AutomatonGenerator (per automaton)
//!        ├─ NeighborhoodSelector
//!        ├─ gen_colors
//!        └─ State (per index)
//!             └─ Transition (per draw)
//!                  └─ RuleGenerator
//! ```
//!
//! All randomness flows through an explicit [`RandomSource`]; use
//! [`RngSource::seeded`] for reproducible output.

pub mod config;
pub mod document;
mod error;
mod generator;
mod model;
pub mod naming;
pub mod neighborhood;
pub mod random;
mod rule;
pub mod test_fixtures;

pub use config::{GeneratorConfig, MAX_STATES_LIMIT, MAX_TRANSITIONS_LIMIT};
pub use document::{
    render_automaton, render_document, render_json, AutoXml, DocumentSerializer, DOCUMENT_FOOTER,
    DOCUMENT_HEADER,
};
pub use error::{GenerationError, GenerationResult};
pub use generator::{AutomatonGenerator, MAX_TARGET_REDRAWS};
pub use model::{Automaton, Color, State, Transition};
pub use naming::{gen_color, gen_colors, gen_name};
pub use neighborhood::{NeighborhoodKind, NeighborhoodSelector, NEIGHBORHOOD_WEIGHTS};
pub use random::{RandomSource, RngSource};
pub use rule::{Rule, RuleGenerator, Token, MAX_NEIGHBOR_BOUND};
