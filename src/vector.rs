//! Input literals paired with their true labels.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// # Overview
///
/// One training or inference round: the input bits and the true label bits.
///
/// Every input bit `x[i]` provides two literals, the complemented projection
/// `neg(i) = !x[i]` and the plain projection `pos(i) = x[i]`.
///
/// # Examples
///
/// ```
/// use tsetlin_graph::Vector;
///
/// let v = Vector::from_bits(&[1, 0, 1], &[1]);
/// assert!(v.pos(0));
/// assert!(v.neg(1));
/// assert_eq!(v.truth(), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector {
    input:  Vec<bool>,
    output: Vec<bool>
}

impl Vector {
    pub fn new(input: Vec<bool>, output: Vec<bool>) -> Self {
        Self {
            input,
            output
        }
    }

    /// # Overview
    ///
    /// Builds a vector from `0`/`1` bytes. Any non-zero byte reads as true.
    pub fn from_bits(input: &[u8], output: &[u8]) -> Self {
        Self {
            input:  input.iter().map(|&b| b != 0).collect(),
            output: output.iter().map(|&b| b != 0).collect()
        }
    }

    /// # Overview
    ///
    /// Vector without labels, for inference only.
    pub fn unlabeled(input: Vec<bool>) -> Self {
        Self {
            input,
            output: Vec::new()
        }
    }

    #[inline(always)]
    pub fn input(&self) -> &[bool] {
        &self.input
    }

    #[inline(always)]
    pub fn output(&self) -> &[bool] {
        &self.output
    }

    /// # Overview
    ///
    /// Complemented literal of input `i`.
    #[inline(always)]
    pub fn neg(&self, i: usize) -> bool {
        !self.input[i]
    }

    /// # Overview
    ///
    /// Plain literal of input `i`.
    #[inline(always)]
    pub fn pos(&self, i: usize) -> bool {
        self.input[i]
    }

    /// # Overview
    ///
    /// First label bit, the target of a single clause.
    #[inline]
    pub fn truth(&self) -> Option<bool> {
        self.output.first().copied()
    }
}
