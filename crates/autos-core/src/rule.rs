//! Neighbor-count match rules.
//!
//! A rule is a sequence of tokens, one per state of the owning automaton:
//!
//! ```text
//! .      any neighbor count
//! 3      exactly three live neighbors
//! [025]  zero, two or five live neighbors
//! ```
//!
//! Tokens are concatenated without delimiters. Literals are always below the
//! neighborhood's bound, which never exceeds 8, so each is a single digit.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::error::{GenerationError, GenerationResult};
use crate::random::RandomSource;

/// Largest neighbor bound whose literals all render as one digit.
pub const MAX_NEIGHBOR_BOUND: usize = 10;

/// One position of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Matches any neighbor count.
    Any,
    /// Matches exactly this neighbor count.
    Exact(u8),
    /// Matches any of these counts; unique and ascending.
    Set(Vec<u8>),
}

impl Token {
    /// Largest literal in the token, if any.
    pub fn max_literal(&self) -> Option<u8> {
        match self {
            Token::Any => None,
            Token::Exact(n) => Some(*n),
            Token::Set(values) => values.last().copied(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Any => f.write_str("."),
            Token::Exact(n) => write!(f, "{n}"),
            Token::Set(values) => {
                f.write_str("[")?;
                for value in values {
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// An ordered sequence of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    tokens: Vec<Token>,
}

impl Rule {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Draws rules with a three-way split between wildcard, single literal and
/// bracketed set tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleGenerator {
    /// Probability of a wildcard token.
    pub wildcard_probability: f64,
    /// Probability of a single literal token.
    pub literal_probability: f64,
}

impl Default for RuleGenerator {
    fn default() -> Self {
        Self {
            wildcard_probability: 0.40,
            literal_probability: 0.35,
        }
    }
}

impl RuleGenerator {
    pub fn new(wildcard_probability: f64, literal_probability: f64) -> Self {
        Self {
            wildcard_probability,
            literal_probability,
        }
    }

    /// Generate a rule of `num_states` tokens over counts in `[0, max_neighbors)`.
    pub fn generate(
        &self,
        num_states: usize,
        max_neighbors: usize,
        rng: &mut impl RandomSource,
    ) -> GenerationResult<Rule> {
        if !(2..=MAX_NEIGHBOR_BOUND).contains(&max_neighbors) {
            return Err(GenerationError::InvalidNeighborBound { max_neighbors });
        }

        let tokens = (0..num_states)
            .map(|_| self.generate_token(max_neighbors, rng))
            .collect();
        let rule = Rule::new(tokens);
        trace!(rule = %rule, "rule_generated");
        Ok(rule)
    }

    fn generate_token(&self, max_neighbors: usize, rng: &mut impl RandomSource) -> Token {
        let chance = rng.next_unit();
        if chance < self.wildcard_probability {
            Token::Any
        } else if chance < self.wildcard_probability + self.literal_probability {
            Token::Exact(rng.next_int(max_neighbors) as u8)
        } else {
            let size = rng.next_int(max_neighbors - 1) + 1;
            Token::Set(distinct_counts(size, max_neighbors, rng))
        }
    }
}

/// `size` distinct values from `[0, max)`, sorted ascending.
///
/// Drawn without replacement by a partial Fisher-Yates shuffle.
fn distinct_counts(size: usize, max: usize, rng: &mut impl RandomSource) -> Vec<u8> {
    let mut pool: Vec<u8> = (0..max).map(|n| n as u8).collect();
    let size = size.min(max);
    for i in 0..size {
        let j = i + rng.next_int(max - i);
        pool.swap(i, j);
    }
    pool.truncate(size);
    pool.sort_unstable();
    pool
}
