//! Persistable automaton state of a module.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// # Overview
///
/// Module shape plus one position sequence per clause, each laid out as
/// negative positions followed by positive positions. Any encoding that
/// reproduces these values restores a module with identical predictions.
///
/// With the `serde` feature the snapshot can be written with any serde format.
///
/// # Examples
///
/// ```
/// use tsetlin_graph::{Config, Linear, Module};
///
/// let config = Config::builder().inputs(2).outputs(1).states(5).seed(1).build().unwrap();
/// let module = Module::new(config).unwrap();
///
/// let snapshot = module.snapshot();
/// let restored = Module::restore(&snapshot, Linear, Some(1)).unwrap();
/// assert_eq!(restored.states(), module.states());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub inputs:  usize,
    pub outputs: usize,
    pub states:  i16,
    pub clauses: Vec<Vec<i16>>
}

impl Snapshot {
    /// # Overview
    ///
    /// Total number of automata recorded.
    pub fn automata(&self) -> usize {
        self.clauses.iter().map(Vec::len).sum()
    }
}
