//! Clause - a conjunction of literals learned by paired automata.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;
use tracing::trace;

use crate::{
    Activation, Automaton, Linear, Metric, Outcome, Rule, Vector, Zone,
    error::{Error, Result},
    metric::SAMPLE_RATE,
    utils::{FastRng, random_f32}
};

/// # Overview
///
/// A clause over `inputs` literals. Each input bit owns two automata:
///
/// - `negative[i]` governs the complemented literal `NOT x[i]`
/// - `positive[i]` governs the plain literal `x[i]`
///
/// The clause owns its random generator and its [`Metric`], so distinct
/// clauses can be trained on separate threads without synchronization.
///
/// # Examples
///
/// ```
/// use tsetlin_graph::{Always, Clause, Vector, utils::rng_from_seed};
///
/// let mut clause = Clause::new(3, 10, Always, rng_from_seed(42)).unwrap();
/// let v = Vector::from_bits(&[0, 1, 0], &[1]);
///
/// for _ in 0..50 {
///     clause.update(&v).unwrap();
/// }
/// assert!(clause.search(&v).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Clause<A = Linear, R = FastRng> {
    negative:   Vec<Automaton>,
    positive:   Vec<Automaton>,
    metric:     Metric,
    activation: A,
    rng:        R
}

impl<A: Activation, R: Rng> Clause<A, R> {
    /// # Overview
    ///
    /// Creates clause with all automata at the neutral boundary. Fails when
    /// `inputs` is zero or `states` is not positive.
    pub fn new(inputs: usize, states: i16, activation: A, rng: R) -> Result<Self> {
        if inputs == 0 {
            return Err(Error::MissingInputs);
        }
        if states <= 0 {
            return Err(Error::InvalidStates(states));
        }
        Ok(Self {
            negative: (0..inputs).map(|_| Automaton::new(states)).collect(),
            positive: (0..inputs).map(|_| Automaton::new(states)).collect(),
            metric: Metric::default(),
            activation,
            rng
        })
    }

    /// # Overview
    ///
    /// Restores a clause from the sequence produced by [`Clause::states`]:
    /// `inputs` negative positions followed by `inputs` positive positions.
    pub fn from_states(
        inputs: usize,
        positions: &[i16],
        states: i16,
        activation: A,
        rng: R
    ) -> Result<Self> {
        if states <= 0 {
            return Err(Error::InvalidStates(states));
        }
        if positions.len() != 2 * inputs {
            return Err(Error::DimensionMismatch {
                expected: 2 * inputs,
                got:      positions.len()
            });
        }
        if let Some(&position) = positions.iter().find(|&&p| !(-states..=states).contains(&p)) {
            return Err(Error::PositionOutOfRange {
                position,
                states
            });
        }

        let (neg, pos) = positions.split_at(inputs);
        Ok(Self {
            negative: neg.iter().map(|&p| Automaton::with_position(p, states)).collect(),
            positive: pos.iter().map(|&p| Automaton::with_position(p, states)).collect(),
            metric: Metric::default(),
            activation,
            rng
        })
    }

    #[inline(always)]
    pub fn inputs(&self) -> usize {
        self.negative.len()
    }

    #[inline(always)]
    pub fn negative(&self) -> &[Automaton] {
        &self.negative
    }

    #[inline(always)]
    pub fn positive(&self) -> &[Automaton] {
        &self.positive
    }

    #[inline(always)]
    pub fn negative_mut(&mut self) -> &mut [Automaton] {
        &mut self.negative
    }

    #[inline(always)]
    pub fn positive_mut(&mut self) -> &mut [Automaton] {
        &mut self.positive
    }

    #[inline(always)]
    pub fn metric(&self) -> &Metric {
        &self.metric
    }

    #[inline(always)]
    pub fn metric_mut(&mut self) -> &mut Metric {
        &mut self.metric
    }

    #[inline(always)]
    pub fn activation(&self) -> &A {
        &self.activation
    }

    /// # Overview
    ///
    /// Predicted bit for the vector's input.
    pub fn search(&self, vector: &Vector) -> Result<bool> {
        self.check_input(vector.input())?;
        Ok(self.evaluate(vector.input()))
    }

    /// # Overview
    ///
    /// Conjunction of every included literal. A clause that includes nothing
    /// fires on any input. Early exit on violation; the caller guarantees the
    /// input width.
    #[inline]
    pub fn evaluate(&self, input: &[bool]) -> bool {
        debug_assert_eq!(input.len(), self.inputs());
        for ((neg, pos), &x) in self.negative.iter().zip(&self.positive).zip(input) {
            if neg.is_include() && x {
                return false;
            }
            if pos.is_include() && !x {
                return false;
            }
        }
        true
    }

    /// # Overview
    ///
    /// One learning round against the vector's first label bit.
    pub fn update(&mut self, vector: &Vector) -> Result<()> {
        self.check_input(vector.input())?;
        let truth = vector.truth().ok_or(Error::MissingLabel)?;
        self.learn(vector.input(), truth);
        Ok(())
    }

    /// # Overview
    ///
    /// Feedback round over every literal. One draw per literal feeds both
    /// polarity gates and the metric sampling check.
    pub(crate) fn learn(&mut self, input: &[bool], truth: bool) {
        debug_assert_eq!(input.len(), self.inputs());
        let mut touched = 0usize;
        let mut sampled = 0usize;

        for (i, &x) in input.iter().enumerate() {
            let draw = random_f32(&mut self.rng);
            let neg = &mut self.negative[i];
            let pos = &mut self.positive[i];

            let neg_fires = self.activation.activate(neg.ratio(), draw);
            let pos_fires = self.activation.activate(pos.ratio(), draw);
            if !neg_fires && !pos_fires {
                continue;
            }
            touched += 1;

            let (neg_literal, pos_literal) = (!x, x);
            let (neg_zone, pos_zone) = (neg.zone(), pos.zone());

            // A true label pulls the complemented literal toward exclusion and
            // the plain literal toward inclusion, a false label the reverse.
            if neg_zone == Zone::Neutral {
                neg.reinitialize(if truth { -1 } else { 1 }, &mut self.rng);
            }
            if pos_zone == Zone::Neutral {
                pos.reinitialize(if truth { 1 } else { -1 }, &mut self.rng);
            }

            feedback(neg, neg_zone, neg_literal == truth);
            feedback(pos, pos_zone, pos_literal == truth);

            // Ratios are read after feedback was applied.
            if draw <= SAMPLE_RATE {
                sampled += 1;
                self.metric.record(Outcome::classify(truth, neg_literal), 1);
                self.metric.record(Outcome::classify(truth, pos_literal), 1);
                self.metric.observe(neg.signed_ratio(), 1);
                self.metric.observe(pos.signed_ratio(), 1);
            }
        }

        trace!(touched, sampled, "clause update");
    }

    /// # Overview
    ///
    /// Automaton positions: all negative automata in literal order, then all
    /// positive automata. [`Clause::from_states`] reads the same layout.
    pub fn states(&self) -> Vec<i16> {
        self.negative
            .iter()
            .chain(&self.positive)
            .map(Automaton::position)
            .collect()
    }

    /// # Overview
    ///
    /// Human-readable form of the current inclusion set.
    pub fn rule(&self) -> Rule {
        Rule::from_automata(&self.negative, &self.positive)
    }

    #[inline]
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

/// Zone-dependent reward or penalty. `zone` is the zone observed before the
/// boundary was resolved, so freshly reinitialized automata are left alone.
#[inline(always)]
fn feedback(automaton: &mut Automaton, zone: Zone, matched: bool) {
    match (zone, matched) {
        (Zone::Include, false) => automaton.decrement(1),
        (Zone::Include, true) | (Zone::Exclude, true) => automaton.increment(1),
        _ => {}
    }
}
