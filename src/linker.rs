//! Placement of a module inside a layered graph.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// # Overview
///
/// Read-only routing record of one module. Modules are referenced by their
/// index in the graph arena, never owned.
///
/// - `above`: modules of the previous layer feeding this module
/// - `below`: modules of the next layer reading this module's output
/// - `index`: position of this module in the graph
/// - `layer`: layer this module resides in
/// - `truth`: half-open range of label bits this module is trained against
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Linker {
    pub above: Vec<usize>,
    pub below: Vec<usize>,
    pub index: usize,
    pub layer: usize,
    pub truth: Range<usize>
}

impl Linker {
    /// # Overview
    ///
    /// Modules of the first layer read the graph input directly.
    #[inline]
    pub fn is_input(&self) -> bool {
        self.above.is_empty()
    }

    /// # Overview
    ///
    /// Modules of the last layer produce the graph output.
    #[inline]
    pub fn is_output(&self) -> bool {
        self.below.is_empty()
    }
}
