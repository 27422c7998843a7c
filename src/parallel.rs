//! Parallel training and evaluation using rayon.
//!
//! Clauses share no mutable state and each owns its generator, so clauses of
//! one module train on separate workers without locking. Results match the
//! sequential [`Module::update`] exactly.

use rayon::prelude::*;

use crate::{Activation, Graph, Module, Vector, error::Result};

/// # Overview
///
/// Trains all clauses of a module on `vector` in parallel.
pub fn update<A>(module: &mut Module<A>, vector: &Vector) -> Result<()>
where
    A: Activation + Clone + Send
{
    let input = vector.input();
    let truth = vector.output();
    module.check(input, truth)?;

    module
        .clauses_mut()
        .par_iter_mut()
        .zip(truth.par_iter())
        .for_each(|(clause, &t)| clause.learn(input, t));
    Ok(())
}

/// # Overview
///
/// Parallel prediction for many vectors.
pub fn search_batch<A>(module: &Module<A>, vectors: &[Vector]) -> Result<Vec<Vec<bool>>>
where
    A: Activation + Clone + Sync
{
    vectors.par_iter().map(|v| module.search(v)).collect()
}

/// # Overview
///
/// Parallel graph inference for many vectors.
pub fn search_graph<A>(graph: &Graph<A>, vectors: &[Vector]) -> Result<Vec<Vec<bool>>>
where
    A: Activation + Clone + Sync
{
    vectors.par_iter().map(|v| graph.search(v)).collect()
}

/// # Overview
///
/// Fraction of vectors whose module output equals their label vector.
pub fn evaluate<A>(module: &Module<A>, vectors: &[Vector]) -> Result<f32>
where
    A: Activation + Clone + Sync
{
    if vectors.is_empty() {
        return Ok(0.0);
    }
    let correct = vectors
        .par_iter()
        .map(|v| module.search(v).map(|out| usize::from(out == v.output())))
        .sum::<Result<usize>>()?;
    Ok(correct as f32 / vectors.len() as f32)
}
