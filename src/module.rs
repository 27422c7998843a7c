//! Module - a fixed set of clauses sharing input and state width.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use tracing::debug;

use crate::{
    Activation, Clause, Config, Linear, Metric, Rule, Snapshot, Vector,
    error::{Error, Result},
    utils::{FastRng, rng_from_option, rng_split}
};

/// # Overview
///
/// Owns `outputs` clauses over `inputs` literals. Clause `j` predicts output
/// bit `j` and is trained against label bit `j`.
///
/// Every clause gets its own generator, split from the module generator, so
/// clause trajectories are reproducible from the module seed and independent
/// of each other.
///
/// # Examples
///
/// ```
/// use tsetlin_graph::{Config, Module, Vector};
///
/// let config = Config::builder().inputs(3).outputs(2).states(10).seed(42).build().unwrap();
/// let mut module = Module::new(config).unwrap();
///
/// let v = Vector::from_bits(&[1, 0, 1], &[1, 0]);
/// module.update(&v).unwrap();
/// assert_eq!(module.search(&v).unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Module<A = Linear> {
    clauses: Vec<Clause<A, FastRng>>,
    config:  Config
}

impl Module<Linear> {
    /// # Overview
    ///
    /// Creates module with the default [`Linear`] activation.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_activation(config, Linear)
    }
}

impl<A: Activation + Clone> Module<A> {
    /// # Overview
    ///
    /// Creates module with all automata neutral. Fails on an invalid config.
    pub fn with_activation(config: Config, activation: A) -> Result<Self> {
        config.validate()?;
        let mut master = rng_from_option(config.seed)?;
        let clauses = (0..config.outputs)
            .map(|_| {
                Clause::new(
                    config.inputs,
                    config.states,
                    activation.clone(),
                    rng_split(&mut master)
                )
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            inputs = config.inputs,
            outputs = config.outputs,
            states = config.states,
            "created clause module"
        );
        Ok(Self {
            clauses,
            config
        })
    }

    /// # Overview
    ///
    /// Restores module from per-clause [`Clause::states`] sequences.
    pub fn from_states(config: Config, activation: A, states: &[Vec<i16>]) -> Result<Self> {
        config.validate()?;
        if states.len() != config.outputs {
            return Err(Error::DimensionMismatch {
                expected: config.outputs,
                got:      states.len()
            });
        }

        let mut master = rng_from_option(config.seed)?;
        let clauses = states
            .iter()
            .map(|positions| {
                Clause::from_states(
                    config.inputs,
                    positions,
                    config.states,
                    activation.clone(),
                    rng_split(&mut master)
                )
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(outputs = config.outputs, "restored clause module");
        Ok(Self {
            clauses,
            config
        })
    }

    /// # Overview
    ///
    /// Restores module from a [`Snapshot`]. The generator is seeded from
    /// `seed`, or from entropy when absent.
    pub fn restore(snapshot: &Snapshot, activation: A, seed: Option<u64>) -> Result<Self> {
        let config = Config {
            inputs: snapshot.inputs,
            outputs: snapshot.outputs,
            states: snapshot.states,
            seed
        };
        Self::from_states(config, activation, &snapshot.clauses)
    }

    #[inline(always)]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline(always)]
    pub fn inputs(&self) -> usize {
        self.config.inputs
    }

    #[inline(always)]
    pub fn outputs(&self) -> usize {
        self.config.outputs
    }

    #[inline(always)]
    pub fn clauses(&self) -> &[Clause<A, FastRng>] {
        &self.clauses
    }

    #[inline(always)]
    pub fn clauses_mut(&mut self) -> &mut [Clause<A, FastRng>] {
        &mut self.clauses
    }

    /// # Overview
    ///
    /// Trains every clause on the vector's input against its own label bit.
    pub fn update(&mut self, vector: &Vector) -> Result<()> {
        self.train(vector.input(), vector.output())
    }

    /// # Overview
    ///
    /// Trains clause `j` on `input` against `truth[j]`. Nothing is modified
    /// when either width is off.
    pub fn train(&mut self, input: &[bool], truth: &[bool]) -> Result<()> {
        self.check(input, truth)?;
        for (clause, &t) in self.clauses.iter_mut().zip(truth) {
            clause.learn(input, t);
        }
        Ok(())
    }

    /// # Overview
    ///
    /// One predicted bit per clause.
    pub fn search(&self, vector: &Vector) -> Result<Vec<bool>> {
        self.predict(vector.input())
    }

    pub fn predict(&self, input: &[bool]) -> Result<Vec<bool>> {
        self.check_input(input)?;
        Ok(self.clauses.iter().map(|c| c.evaluate(input)).collect())
    }

    /// # Overview
    ///
    /// Per-clause automaton positions, in clause order.
    pub fn states(&self) -> Vec<Vec<i16>> {
        self.clauses.iter().map(Clause::states).collect()
    }

    /// # Overview
    ///
    /// Serializable copy of the automaton state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            inputs:  self.config.inputs,
            outputs: self.config.outputs,
            states:  self.config.states,
            clauses: self.states()
        }
    }

    /// # Overview
    ///
    /// Metrics of all clauses merged into one.
    pub fn metric(&self) -> Metric {
        let mut total = Metric::default();
        for clause in &self.clauses {
            total.merge(clause.metric());
        }
        total
    }

    pub fn reset_metrics(&mut self) {
        self.clauses.iter_mut().for_each(|c| c.metric_mut().reset());
    }

    pub fn rules(&self) -> Vec<Rule> {
        self.clauses.iter().map(Clause::rule).collect()
    }

    pub(crate) fn check(&self, input: &[bool], truth: &[bool]) -> Result<()> {
        self.check_input(input)?;
        if truth.len() != self.outputs() {
            return Err(Error::DimensionMismatch {
                expected: self.outputs(),
                got:      truth.len()
            });
        }
        Ok(())
    }

    fn check_input(&self, input: &[bool]) -> Result<()> {
        if input.len() != self.inputs() {
            return Err(Error::DimensionMismatch {
                expected: self.inputs(),
                got:      input.len()
            });
        }
        Ok(())
    }
}
