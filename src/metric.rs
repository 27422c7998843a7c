//! Runtime statistics sampled during clause updates.
//!
//! A [`Metric`] collects two things: confusion-matrix counts comparing each
//! literal against the true label, and a histogram of signed automaton ratios
//! describing how the automata are spread over the exclude and include sides.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fraction of literal-rounds that write a metric sample.
pub const SAMPLE_RATE: f32 = 0.05;

/// Default number of histogram buckets over `[-1, 1]`.
pub const DEFAULT_BUCKETS: usize = 21;

/// # Overview
///
/// Confusion-matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    TruePositive,
    TrueNegative,
    FalseNegative,
    FalsePositive
}

impl Outcome {
    pub const ALL: [Outcome; 4] = [
        Outcome::TruePositive,
        Outcome::TrueNegative,
        Outcome::FalseNegative,
        Outcome::FalsePositive
    ];

    /// # Overview
    ///
    /// Classifies a literal bit against the true label.
    #[inline]
    pub fn classify(truth: bool, literal: bool) -> Self {
        match (truth, literal) {
            (true, true) => Self::TruePositive,
            (false, false) => Self::TrueNegative,
            (true, false) => Self::FalseNegative,
            (false, true) => Self::FalsePositive
        }
    }

    #[inline(always)]
    fn slot(self) -> usize {
        self as usize
    }
}

/// # Overview
///
/// Equal-width histogram over `[-1, 1]`. The middle bucket holds neutral
/// automata when the bucket count is odd.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Histogram {
    buckets: Vec<u64>
}

impl Histogram {
    /// Creates a histogram with `n_buckets` buckets, raised to at least two
    /// so both ends of `[-1, 1]` have a bucket.
    pub fn new(n_buckets: usize) -> Self {
        Self {
            buckets: vec![0; n_buckets.max(2)]
        }
    }

    /// # Overview
    ///
    /// Bucket index for a signed ratio. Values outside `[-1, 1]` land in the
    /// outermost buckets.
    #[inline]
    pub fn index(&self, value: f32) -> usize {
        let last = self.buckets.len() - 1;
        let scaled = (value.clamp(-1.0, 1.0) + 1.0) * 0.5 * last as f32;
        ((scaled + 0.5) as usize).min(last)
    }

    /// # Overview
    ///
    /// Signed ratio at the center of bucket `index`.
    #[inline]
    pub fn center(&self, index: usize) -> f32 {
        let last = (self.buckets.len() - 1) as f32;
        index as f32 / last * 2.0 - 1.0
    }

    #[inline]
    pub fn add(&mut self, value: f32, n: u64) {
        let i = self.index(value);
        self.buckets[i] += n;
    }

    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    pub fn total(&self) -> u64 {
        self.buckets.iter().sum()
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS)
    }
}

/// # Overview
///
/// Per-clause sink for confusion counts and automaton state samples.
///
/// # Examples
///
/// ```
/// use tsetlin_graph::{Metric, Outcome};
///
/// let mut metric = Metric::default();
/// metric.record(Outcome::classify(true, true), 1);
/// metric.observe(-0.5, 1);
///
/// assert_eq!(metric.count(Outcome::TruePositive), 1);
/// assert_eq!(metric.histogram().total(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metric {
    confusion: [u64; 4],
    histogram: Histogram
}

impl Metric {
    pub fn with_buckets(n_buckets: usize) -> Self {
        Self {
            confusion: [0; 4],
            histogram: Histogram::new(n_buckets)
        }
    }

    /// # Overview
    ///
    /// Adds `n` to a confusion-matrix cell.
    #[inline]
    pub fn record(&mut self, outcome: Outcome, n: u64) {
        self.confusion[outcome.slot()] += n;
    }

    /// # Overview
    ///
    /// Adds `n` samples of a signed automaton ratio to the histogram.
    #[inline]
    pub fn observe(&mut self, signed_ratio: f32, n: u64) {
        self.histogram.add(signed_ratio, n);
    }

    #[inline]
    pub fn count(&self, outcome: Outcome) -> u64 {
        self.confusion[outcome.slot()]
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Total confusion-matrix entries recorded.
    pub fn total(&self) -> u64 {
        self.confusion.iter().sum()
    }

    /// # Overview
    ///
    /// Fraction of recorded literals agreeing with the label, `None` before
    /// the first sample.
    pub fn accuracy(&self) -> Option<f32> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let agree = self.count(Outcome::TruePositive) + self.count(Outcome::TrueNegative);
        Some(agree as f32 / total as f32)
    }

    pub fn precision(&self) -> Option<f32> {
        let tp = self.count(Outcome::TruePositive);
        let denom = tp + self.count(Outcome::FalsePositive);
        (denom > 0).then(|| tp as f32 / denom as f32)
    }

    pub fn recall(&self) -> Option<f32> {
        let tp = self.count(Outcome::TruePositive);
        let denom = tp + self.count(Outcome::FalseNegative);
        (denom > 0).then(|| tp as f32 / denom as f32)
    }

    /// # Overview
    ///
    /// Adds another metric's counts into this one. Histograms of different
    /// widths are merged by bucket center.
    pub fn merge(&mut self, other: &Metric) {
        for outcome in Outcome::ALL {
            self.record(outcome, other.count(outcome));
        }
        if self.histogram.buckets.len() == other.histogram.buckets.len() {
            for (a, b) in self.histogram.buckets.iter_mut().zip(&other.histogram.buckets) {
                *a += b;
            }
        } else {
            for (i, &n) in other.histogram.buckets.iter().enumerate() {
                self.histogram.add(other.histogram.center(i), n);
            }
        }
    }

    pub fn reset(&mut self) {
        self.confusion = [0; 4];
        self.histogram.buckets.iter_mut().for_each(|b| *b = 0);
    }
}
