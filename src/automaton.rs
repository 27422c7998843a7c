//! Tsetlin Automaton - the fundamental building block.

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// # Overview
///
/// Classification of an automaton position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Zone {
    Exclude,
    Neutral,
    Include
}

/// # Overview
///
/// A single Tsetlin Automaton with a signed position in `[-states, states]`.
/// Negative positions exclude the literal, positive positions include it and
/// position 0 is the undefined boundary that the first update resolves.
/// Shifts across the boundary skip position 0.
///
/// Uses i16 for memory efficiency (50% less than i32).
///
/// # Examples
///
/// ```
/// use tsetlin_graph::{Automaton, Zone};
///
/// let mut automaton = Automaton::new(10);
/// assert_eq!(automaton.zone(), Zone::Neutral);
///
/// automaton.increment(3);
/// assert_eq!(automaton.zone(), Zone::Include);
/// assert!((automaton.ratio() - 0.3).abs() < 1e-6);
///
/// automaton.decrement(100);
/// assert_eq!(automaton.position(), -10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Automaton {
    position: i16,
    states:   i16
}

impl Automaton {
    /// # Overview
    ///
    /// Creates automaton at the neutral boundary.
    ///
    /// # Panics
    ///
    /// Panics if `states` is not positive.
    #[inline]
    pub fn new(states: i16) -> Self {
        assert!(states > 0, "automaton needs a positive state count");
        Self {
            position: 0,
            states
        }
    }

    /// # Overview
    ///
    /// Creates automaton with specific initial position.
    ///
    /// # Panics
    ///
    /// Panics if `states` is not positive or `position` lies outside
    /// `[-states, states]`.
    #[inline]
    pub fn with_position(position: i16, states: i16) -> Self {
        assert!(states > 0, "automaton needs a positive state count");
        assert!(
            (-states..=states).contains(&position),
            "position {position} outside [-{states}, {states}]"
        );
        Self {
            position,
            states
        }
    }

    #[inline(always)]
    pub fn position(&self) -> i16 {
        self.position
    }

    #[inline(always)]
    pub fn states(&self) -> i16 {
        self.states
    }

    /// # Overview
    ///
    /// Classifies the current position.
    #[inline]
    pub fn zone(&self) -> Zone {
        match self.position {
            p if p < 0 => Zone::Exclude,
            0 => Zone::Neutral,
            _ => Zone::Include
        }
    }

    #[inline(always)]
    pub fn is_include(&self) -> bool {
        self.position > 0
    }

    #[inline(always)]
    pub fn is_exclude(&self) -> bool {
        self.position < 0
    }

    #[inline(always)]
    pub fn is_neutral(&self) -> bool {
        self.position == 0
    }

    /// # Overview
    ///
    /// Confidence ratio `|position| / states` in `[0, 1]`.
    #[inline]
    pub fn ratio(&self) -> f32 {
        f32::from(self.position.unsigned_abs()) / f32::from(self.states)
    }

    /// # Overview
    ///
    /// Ratio carrying the zone as its sign: negative while excluding, zero at
    /// the boundary, positive while including.
    #[inline]
    pub fn signed_ratio(&self) -> f32 {
        f32::from(self.position) / f32::from(self.states)
    }

    /// # Overview
    ///
    /// Moves a neutral automaton to a random position in `1..=states` on the
    /// side given by `direction` (`+1` include, `-1` exclude). Automata that
    /// already left the boundary are not touched.
    pub fn reinitialize<R: Rng>(&mut self, direction: i8, rng: &mut R) {
        debug_assert!(direction == 1 || direction == -1);
        if !self.is_neutral() {
            return;
        }
        let magnitude = rng.random_range(1..=self.states);
        self.position = if direction > 0 { magnitude } else { -magnitude };
    }

    /// # Overview
    ///
    /// Shifts toward include. Capped at `states`. Crossing from the exclude
    /// side steps over 0, so a resolved automaton never turns neutral again.
    #[inline]
    pub fn increment(&mut self, n: u16) {
        let n = i16::try_from(n).unwrap_or(i16::MAX);
        let mut next = self.position.saturating_add(n);
        if self.position < 0 && next >= 0 {
            next = next.saturating_add(1);
        }
        self.position = next.min(self.states);
    }

    /// # Overview
    ///
    /// Shifts toward exclude. Floored at `-states`. Crossing from the include
    /// side steps over 0.
    #[inline]
    pub fn decrement(&mut self, n: u16) {
        let n = i16::try_from(n).unwrap_or(i16::MAX);
        let mut next = self.position.saturating_sub(n);
        if self.position > 0 && next <= 0 {
            next = next.saturating_sub(1);
        }
        self.position = next.max(-self.states);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::rng_from_seed;

    #[test]
    fn new_is_neutral() {
        let a = Automaton::new(100);
        assert_eq!(a.position(), 0);
        assert_eq!(a.zone(), Zone::Neutral);
        assert_eq!(a.ratio(), 0.0);
    }

    #[test]
    fn zone_changes() {
        let mut a = Automaton::new(100);
        a.increment(1);
        assert!(a.is_include());
        a.decrement(1);
        assert_eq!(a.position(), -1);
        a.increment(1);
        assert_eq!(a.position(), 1);
    }

    #[test]
    fn crossing_skips_boundary() {
        let mut a = Automaton::with_position(-2, 10);
        a.increment(2);
        assert_eq!(a.position(), 1);
        a.decrement(3);
        assert_eq!(a.position(), -3);

        let mut a = Automaton::with_position(1, 1);
        a.decrement(1);
        assert_eq!(a.position(), -1);
    }

    #[test]
    fn respects_bounds() {
        let mut a = Automaton::new(3);
        for _ in 0..10 {
            a.decrement(1);
        }
        assert_eq!(a.position(), -3);
        for _ in 0..10 {
            a.increment(2);
        }
        assert_eq!(a.position(), 3);

        let mut a = Automaton::with_position(i16::MAX - 1, i16::MAX);
        a.increment(u16::MAX);
        assert_eq!(a.position(), i16::MAX);
        a.decrement(u16::MAX);
        a.decrement(u16::MAX);
        assert_eq!(a.position(), -i16::MAX);
    }

    #[test]
    fn large_shifts_stay_in_range() {
        let mut a = Automaton::new(10);
        a.increment(100);
        assert_eq!(a.position(), 10);
        a.decrement(u16::MAX);
        assert_eq!(a.position(), -10);
        a.increment(u16::MAX);
        assert_eq!(a.position(), 10);
    }

    #[test]
    #[should_panic(expected = "positive state count")]
    fn zero_states_rejected() {
        let _ = Automaton::new(0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn position_outside_bounds_rejected() {
        let _ = Automaton::with_position(11, 10);
    }

    #[test]
    fn ratio_is_normalized() {
        let a = Automaton::with_position(-5, 10);
        assert!((a.ratio() - 0.5).abs() < 1e-6);
        assert!((a.signed_ratio() + 0.5).abs() < 1e-6);

        let a = Automaton::with_position(10, 10);
        assert!((a.ratio() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn reinitialize_leaves_boundary() {
        let mut rng = rng_from_seed(42);
        for _ in 0..100 {
            let mut up = Automaton::new(10);
            up.reinitialize(1, &mut rng);
            assert!((1..=10).contains(&up.position()));

            let mut down = Automaton::new(10);
            down.reinitialize(-1, &mut rng);
            assert!((-10..=-1).contains(&down.position()));
        }
    }

    #[test]
    fn reinitialize_ignores_resolved() {
        let mut rng = rng_from_seed(7);
        let mut a = Automaton::with_position(-4, 10);
        a.reinitialize(1, &mut rng);
        assert_eq!(a.position(), -4);
    }
}
