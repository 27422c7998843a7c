//! Property-based tests for automata, clauses and configuration.

use proptest::prelude::*;
use tsetlin_graph::{
    Always, Automaton, Clause, Config, Linear, Vector, Zone, utils::rng_from_seed
};

fn vectors(inputs: usize) -> impl Strategy<Value = Vec<Vector>> {
    prop::collection::vec(
        (prop::collection::vec(any::<bool>(), inputs), any::<bool>())
            .prop_map(|(input, truth)| Vector::new(input, vec![truth])),
        1..60
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Automaton position stays within bounds after any sequence of shifts.
    #[test]
    fn automaton_position_bounds(
        states in 1i16..200,
        shifts in prop::collection::vec((any::<bool>(), 1u16..500), 0..300)
    ) {
        let mut a = Automaton::new(states);

        for (up, n) in shifts {
            if up { a.increment(n) } else { a.decrement(n) }
            prop_assert!((-states..=states).contains(&a.position()));
            prop_assert!(!a.is_neutral());
        }
    }

    /// Clause updates never push an automaton out of range.
    #[test]
    fn clause_update_bounds(
        states in 1i16..30,
        seed in any::<u64>(),
        rounds in (1usize..8).prop_flat_map(vectors)
    ) {
        let inputs = rounds[0].input().len();
        let mut clause = Clause::new(inputs, states, Linear, rng_from_seed(seed)).unwrap();

        for v in &rounds {
            clause.update(v).unwrap();
            prop_assert!(clause.states().iter().all(|p| (-states..=states).contains(p)));
        }
    }

    /// A neutral automaton touched by an update leaves the boundary.
    #[test]
    fn neutral_is_resolved(
        seed in any::<u64>(),
        positions in prop::collection::vec(-3i16..=3, 12),
        input in prop::collection::vec(any::<bool>(), 6),
        truth in any::<bool>()
    ) {
        let mut clause = Clause::from_states(6, &positions, 3, Linear, rng_from_seed(seed)).unwrap();
        let before = clause.states();

        clause.update(&Vector::new(input, vec![truth])).unwrap();

        for (b, a) in before.iter().zip(clause.states()) {
            if *b == 0 {
                prop_assert_ne!(a, 0);
            }
        }
    }

    /// A clause without included literals fires on any input.
    #[test]
    fn search_is_vacuous_without_inclusions(
        positions in prop::collection::vec(-20i16..=0, 16),
        input in prop::collection::vec(any::<bool>(), 8)
    ) {
        let clause = Clause::from_states(8, &positions, 20, Always, rng_from_seed(0)).unwrap();
        prop_assert!(clause.search(&Vector::unlabeled(input)).unwrap());
    }

    /// Identical seeds and inputs give identical automaton states.
    #[test]
    fn deterministic_training(
        seed in any::<u64>(),
        rounds in vectors(5)
    ) {
        let mut a = Clause::new(5, 10, Linear, rng_from_seed(seed)).unwrap();
        let mut b = Clause::new(5, 10, Linear, rng_from_seed(seed)).unwrap();

        for v in &rounds {
            a.update(v).unwrap();
            b.update(v).unwrap();
        }

        prop_assert_eq!(a.states(), b.states());
    }

    /// Restoring from states reproduces every prediction.
    #[test]
    fn restore_preserves_search(
        seed in any::<u64>(),
        rounds in vectors(4),
        query in prop::collection::vec(any::<bool>(), 4)
    ) {
        let mut clause = Clause::new(4, 6, Linear, rng_from_seed(seed)).unwrap();
        for v in &rounds {
            clause.update(v).unwrap();
        }

        let restored = Clause::from_states(4, &clause.states(), 6, Linear, rng_from_seed(1)).unwrap();
        let query = Vector::unlabeled(query);
        prop_assert_eq!(restored.search(&query).unwrap(), clause.search(&query).unwrap());
    }

    /// Zones agree with the sign of the position.
    #[test]
    fn zone_matches_sign(position in -50i16..=50) {
        let a = Automaton::with_position(position, 50);
        let expected = match position.signum() {
            -1 => Zone::Exclude,
            0 => Zone::Neutral,
            _ => Zone::Include
        };
        prop_assert_eq!(a.zone(), expected);
        prop_assert!((0.0..=1.0).contains(&a.ratio()));
    }

    /// Config validation works correctly.
    #[test]
    fn config_validation(
        inputs in 0usize..50,
        outputs in 0usize..50,
        states in -5i16..50
    ) {
        let result = Config::builder()
            .inputs(inputs)
            .outputs(outputs)
            .states(states)
            .build();

        if inputs == 0 || outputs == 0 || states <= 0 {
            prop_assert!(result.is_err());
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
