//! Three-literal clause learning a single pattern.

use tsetlin_graph::{Clause, Linear, Vector, utils::rng_from_seed};

fn main() {
    let mut clause =
        Clause::new(3, 10, Linear, rng_from_seed(42)).expect("positive inputs and states");
    let v = Vector::from_bits(&[0, 1, 0], &[1]);

    println!("Training on x = [0, 1, 0], label = 1...");
    for round in 1..=50 {
        clause.update(&v).expect("vector matches clause width");
        if round % 10 == 0 {
            println!("  round {round:>2}: states {:?}", clause.states());
        }
    }

    println!("\nLearned rule: {}", clause.rule());
    println!("Prediction: {}", clause.search(&v).expect("vector matches clause width"));

    let m = clause.metric();
    println!(
        "\nSampled literals: {} (accuracy {:.2})",
        m.total() / 2,
        m.accuracy().unwrap_or(0.0)
    );
}
