//! Configuration and builder for clause modules.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// # Overview
///
/// Shape and randomness of a clause module.
///
/// - `inputs`: input bits per vector, i.e. automaton pairs per clause
/// - `outputs`: clauses in the module, one predicted bit each
/// - `states`: positions on each side of an automaton's boundary
/// - `seed`: seed of the module's generator; entropy-seeded when absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use]
pub struct Config {
    pub inputs:  usize,
    pub outputs: usize,
    pub states:  i16,
    pub seed:    Option<u64>
}

impl Config {
    /// # Overview
    ///
    /// Creates a new ConfigBuilder.
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// # Overview
    ///
    /// Validates configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.inputs == 0 {
            return Err(Error::MissingInputs);
        }
        if self.outputs == 0 {
            return Err(Error::MissingOutputs);
        }
        if self.states <= 0 {
            return Err(Error::InvalidStates(self.states));
        }
        #[cfg(not(feature = "std"))]
        if self.seed.is_none() {
            return Err(Error::MissingRandom);
        }
        Ok(())
    }

    /// # Overview
    ///
    /// Number of automata in one clause.
    #[inline]
    #[must_use]
    pub fn automata_per_clause(&self) -> usize {
        2 * self.inputs
    }
}

/// # Overview
///
/// Builder for Config with validation.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    inputs:  Option<usize>,
    outputs: Option<usize>,
    states:  Option<i16>,
    seed:    Option<u64>
}

impl ConfigBuilder {
    /// # Overview
    ///
    /// Sets the input width.
    pub fn inputs(mut self, n: usize) -> Self {
        self.inputs = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets the number of clauses.
    pub fn outputs(mut self, n: usize) -> Self {
        self.outputs = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets the state width on each side of the boundary.
    pub fn states(mut self, n: i16) -> Self {
        self.states = Some(n);
        self
    }

    /// # Overview
    ///
    /// Seeds the module generator for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Overview
    ///
    /// Builds and validates the Config.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            inputs:  self.inputs.ok_or(Error::MissingInputs)?,
            outputs: self.outputs.ok_or(Error::MissingOutputs)?,
            states:  self.states.ok_or(Error::MissingStates)?,
            seed:    self.seed
        };
        config.validate()?;
        Ok(config)
    }
}
