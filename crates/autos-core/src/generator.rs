//! Random automaton generation.
//!
//! One automaton is built top-down: a weighted neighborhood pick, a state
//! count, a set of unique colors, then each state in index order together with
//! its guarded transitions and their rules.

use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::error::{GenerationError, GenerationResult};
use crate::model::{Automaton, Color, State, Transition};
use crate::naming::gen_colors;
use crate::neighborhood::NeighborhoodSelector;
use crate::random::RandomSource;
use crate::rule::RuleGenerator;

/// Redraws attempted before a transition target is chosen directly among the
/// non-default states.
pub const MAX_TARGET_REDRAWS: usize = 64;

/// Builds [`Automaton`] values from a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct AutomatonGenerator {
    config: GeneratorConfig,
    selector: NeighborhoodSelector,
    rules: RuleGenerator,
}

impl AutomatonGenerator {
    /// Create a generator with the default configuration.
    pub fn new() -> Self {
        let config = GeneratorConfig::default();
        Self {
            rules: config.rule_generator(),
            selector: NeighborhoodSelector::new(),
            config,
        }
    }

    /// Create a generator with a custom configuration.
    pub fn with_config(config: GeneratorConfig) -> GenerationResult<Self> {
        config.validate()?;
        Ok(Self {
            rules: config.rule_generator(),
            selector: NeighborhoodSelector::new(),
            config,
        })
    }

    /// Replace the neighborhood selector.
    pub fn with_selector(mut self, selector: NeighborhoodSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one complete automaton named `name`.
    pub fn generate(
        &self,
        name: impl Into<String>,
        rng: &mut impl RandomSource,
    ) -> GenerationResult<Automaton> {
        let name = name.into();
        let (neighborhood, max_neighbors) = self.selector.select(rng)?;
        let num_states = self.config.min_states + rng.next_int(self.config.state_span());
        let colors = gen_colors(num_states, rng);

        let states = colors
            .into_iter()
            .enumerate()
            .map(|(index, color)| self.generate_state(index, color, num_states, max_neighbors, rng))
            .collect::<GenerationResult<Vec<_>>>()?;

        let automaton = Automaton {
            name,
            neighborhood,
            states,
        };

        debug!(
            name = %automaton.name,
            neighborhood = %automaton.neighborhood,
            states = automaton.num_states(),
            transitions = automaton.transition_count(),
            "automaton_generated"
        );

        Ok(automaton)
    }

    /// Generate the state at `index`.
    ///
    /// State 0 always defaults to itself; any other state defaults to a
    /// uniformly drawn index. The transition count is drawn from
    /// `[0, max_transitions]`, and a zero draw is re-rolled once over `[0, 1]`.
    pub fn generate_state(
        &self,
        index: usize,
        color: Color,
        num_states: usize,
        max_neighbors: usize,
        rng: &mut impl RandomSource,
    ) -> GenerationResult<State> {
        let default_target = if index == 0 {
            0
        } else {
            rng.next_int(num_states)
        };

        let mut count = rng.next_int(self.config.max_transitions.saturating_add(1));
        if count == 0 {
            count = rng.next_int(2).min(self.config.max_transitions);
        }

        let transitions = (0..count)
            .map(|_| self.generate_transition(num_states, max_neighbors, default_target, rng))
            .collect::<GenerationResult<Vec<_>>>()?;

        trace!(
            index,
            default_target,
            transitions = transitions.len(),
            "state_generated"
        );

        Ok(State {
            index,
            color,
            default_target,
            transitions,
        })
    }

    /// Generate a transition whose target differs from `default_target`.
    ///
    /// Requires `num_states >= 2`. The target is redrawn while it equals the
    /// default, up to [`MAX_TARGET_REDRAWS`] times; past that it is drawn
    /// directly from the `num_states - 1` remaining indices.
    pub fn generate_transition(
        &self,
        num_states: usize,
        max_neighbors: usize,
        default_target: usize,
        rng: &mut impl RandomSource,
    ) -> GenerationResult<Transition> {
        if num_states < 2 {
            return Err(GenerationError::TooFewStates { num_states });
        }

        let mut target = rng.next_int(num_states);
        let mut redraws = 0;
        while target == default_target && redraws < MAX_TARGET_REDRAWS {
            target = rng.next_int(num_states);
            redraws += 1;
        }
        if target == default_target {
            trace!(default_target, "target_redraws_exhausted");
            target = (default_target + 1 + rng.next_int(num_states - 1)) % num_states;
        }

        let rule = self.rules.generate(num_states, max_neighbors, rng)?;
        Ok(Transition { target, rule })
    }
}

impl Default for AutomatonGenerator {
    fn default() -> Self {
        Self::new()
    }
}
