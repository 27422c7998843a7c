//! Stochastic feedback gates.
//!
//! An activation function decides, per literal and round, whether feedback
//! reaches an automaton. It receives the automaton's confidence ratio and a
//! uniform draw in `[0, 1)`; the same draw is handed to both polarity gates of
//! a literal, so their decisions are correlated.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// # Overview
///
/// Maps a confidence ratio and a uniform draw to a feedback decision.
///
/// Implemented for [`Linear`], [`Always`] and any `Fn(f32, f32) -> bool`.
///
/// # Examples
///
/// ```
/// use tsetlin_graph::{Activation, Linear};
///
/// assert!(Linear.activate(0.0, 0.0));
/// assert!(!Linear.activate(1.0, 0.99));
///
/// let strict = |ratio: f32, draw: f32| draw > 0.5 && draw >= ratio;
/// assert!(!strict.activate(0.1, 0.3));
/// ```
pub trait Activation {
    fn activate(&self, ratio: f32, draw: f32) -> bool;
}

/// # Overview
///
/// Default gate: fires when `draw < 1 - ratio`, so an automaton fires with
/// probability `1 - ratio`. Low draws fire, so the metric sampling draws
/// (`draw <= 0.05`) fire for any automaton with `ratio < 0.95`. Saturated
/// automata receive no feedback of their own; neutral automata always do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Linear;

impl Activation for Linear {
    #[inline(always)]
    fn activate(&self, ratio: f32, draw: f32) -> bool {
        draw < 1.0 - ratio
    }
}

/// # Overview
///
/// Gate that fires every round. Makes learning trajectories independent of
/// the draw, apart from reinitialization and metric sampling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Always;

impl Activation for Always {
    #[inline(always)]
    fn activate(&self, _ratio: f32, _draw: f32) -> bool {
        true
    }
}

impl<F> Activation for F
where
    F: Fn(f32, f32) -> bool
{
    #[inline(always)]
    fn activate(&self, ratio: f32, draw: f32) -> bool {
        self(ratio, draw)
    }
}
