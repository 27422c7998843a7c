//! Rule extraction for interpretability.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Automaton;

/// # Overview
///
/// A human-readable rule extracted from a clause.
///
/// Represents a conjunction: `(x[i1] AND x[i2] AND NOT x[j1] AND NOT x[j2])`.
///
/// # Examples
///
/// ```
/// use tsetlin_graph::{Clause, Linear, utils::rng_from_seed};
///
/// let mut clause = Clause::new(4, 50, Linear, rng_from_seed(0)).unwrap();
/// clause.positive_mut()[0].increment(10);
/// clause.negative_mut()[2].increment(10);
///
/// let rule = clause.rule();
/// assert_eq!(rule.included, vec![0]);
/// assert_eq!(rule.negated, vec![2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    pub included: Vec<usize>,
    pub negated:  Vec<usize>
}

impl Rule {
    /// # Overview
    ///
    /// Extracts rule from the two polarity arrays of a clause.
    pub fn from_automata(negative: &[Automaton], positive: &[Automaton]) -> Self {
        let pick = |automata: &[Automaton]| -> Vec<usize> {
            automata
                .iter()
                .enumerate()
                .filter(|(_, a)| a.is_include())
                .map(|(k, _)| k)
                .collect()
        };

        Self {
            included: pick(positive),
            negated:  pick(negative)
        }
    }

    /// # Overview
    ///
    /// Returns true if rule has no active literals (matches everything).
    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.negated.is_empty()
    }

    /// # Overview
    ///
    /// Returns number of active literals.
    pub fn complexity(&self) -> usize {
        self.included.len() + self.negated.len()
    }
}

#[cfg(feature = "std")]
impl core::fmt::Display for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            return write!(f, "TRUE");
        }

        let mut parts = Vec::new();
        for &i in &self.included {
            parts.push(format!("x[{i}]"));
        }
        for &i in &self.negated {
            parts.push(format!("NOT x[{i}]"));
        }

        write!(f, "{}", parts.join(" AND "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rule() {
        let automata = [Automaton::new(10); 3];
        let rule = Rule::from_automata(&automata, &automata);

        assert!(rule.is_empty());
        assert_eq!(rule.complexity(), 0);
        assert_eq!(rule.to_string(), "TRUE");
    }

    #[test]
    fn rule_with_literals() {
        let negative = [
            Automaton::with_position(-3, 10),
            Automaton::with_position(4, 10)
        ];
        let positive = [
            Automaton::with_position(2, 10),
            Automaton::with_position(0, 10)
        ];

        let rule = Rule::from_automata(&negative, &positive);

        assert_eq!(rule.included, vec![0]);
        assert_eq!(rule.negated, vec![1]);
        assert_eq!(rule.complexity(), 2);
        assert_eq!(rule.to_string(), "x[0] AND NOT x[1]");
    }
}
