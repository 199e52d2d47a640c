//! Generator configuration.
//!
//! Defaults reproduce the reference fixture distribution: two to six states,
//! up to three transitions per state, and a 40/35/25 split between wildcard,
//! literal and set tokens.

use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, GenerationResult};
use crate::rule::RuleGenerator;

/// Largest accepted `max_states`.
pub const MAX_STATES_LIMIT: usize = 64;

/// Largest accepted `max_transitions`.
pub const MAX_TRANSITIONS_LIMIT: usize = 64;

/// Tunables for [`crate::AutomatonGenerator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fewest states per automaton (inclusive).
    pub min_states: usize,
    /// Most states per automaton (inclusive).
    pub max_states: usize,
    /// Most guarded transitions per state (inclusive).
    pub max_transitions: usize,
    /// Probability of a wildcard rule token.
    pub wildcard_probability: f64,
    /// Probability of a single-literal rule token.
    pub literal_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_states: 2,
            max_states: 6,
            max_transitions: 3,
            wildcard_probability: 0.40,
            literal_probability: 0.35,
        }
    }
}

impl GeneratorConfig {
    /// Check the configuration for values that would break model invariants.
    pub fn validate(&self) -> GenerationResult<()> {
        if self.min_states < 2 {
            return Err(invalid(format!(
                "min_states must be >= 2, got {}",
                self.min_states
            )));
        }
        if self.max_states < self.min_states {
            return Err(invalid(format!(
                "max_states ({}) must be >= min_states ({})",
                self.max_states, self.min_states
            )));
        }
        if self.max_states > MAX_STATES_LIMIT {
            return Err(invalid(format!(
                "max_states must be <= {MAX_STATES_LIMIT}, got {}",
                self.max_states
            )));
        }
        if self.max_transitions > MAX_TRANSITIONS_LIMIT {
            return Err(invalid(format!(
                "max_transitions must be <= {MAX_TRANSITIONS_LIMIT}, got {}",
                self.max_transitions
            )));
        }
        for (name, p) in [
            ("wildcard_probability", self.wildcard_probability),
            ("literal_probability", self.literal_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(invalid(format!("{name} must be within [0, 1], got {p}")));
            }
        }
        if self.wildcard_probability + self.literal_probability > 1.0 {
            return Err(invalid(
                "wildcard_probability + literal_probability must not exceed 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Rule generator using this configuration's token split.
    pub fn rule_generator(&self) -> RuleGenerator {
        RuleGenerator::new(self.wildcard_probability, self.literal_probability)
    }

    /// Number of distinct state counts the generator can draw.
    pub fn state_span(&self) -> usize {
        self.max_states - self.min_states + 1
    }
}

fn invalid(message: String) -> GenerationError {
    GenerationError::InvalidConfig { message }
}
