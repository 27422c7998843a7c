//! Layered graph of clause modules.
//!
//! Modules live in an arena and are addressed by index. Consecutive layers are
//! fully connected: the input of a module in layer `L > 0` is the
//! concatenated output of every module in layer `L - 1`, in module order.
//! Each module is trained against its own slice of the label vector.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::ops::Range;

use tracing::debug;

use crate::{
    Activation, Config, Linear, Linker, Module, Snapshot, Vector,
    error::{Error, Result}
};

/// # Overview
///
/// Modules arranged in layers, each with a [`Linker`] describing its place.
///
/// # Examples
///
/// ```
/// use tsetlin_graph::{Config, Graph, Vector};
///
/// let first = Config::builder().inputs(4).outputs(3).states(10).seed(1).build().unwrap();
/// let last = Config::builder().inputs(3).outputs(1).states(10).seed(2).build().unwrap();
///
/// let mut graph = Graph::builder()
///     .layer([(first, 0..3)])
///     .layer([(last, 3..4)])
///     .build()
///     .unwrap();
///
/// let v = Vector::from_bits(&[1, 0, 0, 1], &[1, 0, 1, 1]);
/// graph.update(&v).unwrap();
/// assert_eq!(graph.search(&v).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<A = Linear> {
    modules: Vec<Module<A>>,
    linkers: Vec<Linker>,
    layers:  Vec<Vec<usize>>
}

impl Graph<Linear> {
    /// # Overview
    ///
    /// Builder for graphs using the default [`Linear`] activation.
    #[must_use]
    pub fn builder() -> GraphBuilder<Linear> {
        GraphBuilder::new(Linear)
    }
}

impl<A: Activation + Clone> Graph<A> {
    #[inline]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module indices per layer.
    #[inline]
    pub fn layers(&self) -> &[Vec<usize>] {
        &self.layers
    }

    #[inline]
    pub fn modules(&self) -> &[Module<A>] {
        &self.modules
    }

    pub fn module(&self, index: usize) -> Option<&Module<A>> {
        self.modules.get(index)
    }

    pub fn module_mut(&mut self, index: usize) -> Option<&mut Module<A>> {
        self.modules.get_mut(index)
    }

    pub fn linker(&self, index: usize) -> Option<&Linker> {
        self.linkers.get(index)
    }

    /// Width of the graph input.
    pub fn inputs(&self) -> usize {
        self.modules[self.layers[0][0]].inputs()
    }

    /// Width of the graph output.
    pub fn outputs(&self) -> usize {
        self.layer_width(self.layers.len() - 1)
    }

    /// Smallest label vector covering every module's label range.
    pub fn labels(&self) -> usize {
        self.linkers.iter().map(|l| l.truth.end).max().unwrap_or(0)
    }

    /// # Overview
    ///
    /// Concatenated output of every layer for `input`.
    pub fn forward(&self, input: &[bool]) -> Result<Vec<Vec<bool>>> {
        let mut outputs: Vec<Vec<bool>> = Vec::with_capacity(self.layers.len());
        for (l, layer) in self.layers.iter().enumerate() {
            let current = if l == 0 { input } else { outputs[l - 1].as_slice() };
            let mut next = Vec::with_capacity(self.layer_width(l));
            for &id in layer {
                next.extend(self.modules[id].predict(current)?);
            }
            outputs.push(next);
        }
        Ok(outputs)
    }

    /// # Overview
    ///
    /// Output of the last layer.
    pub fn search(&self, vector: &Vector) -> Result<Vec<bool>> {
        let mut outputs = self.forward(vector.input())?;
        Ok(outputs.pop().unwrap_or_default())
    }

    /// # Overview
    ///
    /// One training step. Layer inputs come from the forward pass taken
    /// before any module changes; every module then trains on its layer input
    /// against the label bits in its `truth` range. Nothing changes when the
    /// vector does not fit.
    pub fn update(&mut self, vector: &Vector) -> Result<()> {
        let labels = vector.output();
        if let Some(linker) = self.linkers.iter().find(|l| l.truth.end > labels.len()) {
            return Err(Error::LabelRange {
                start: linker.truth.start,
                end:   linker.truth.end,
                len:   labels.len()
            });
        }
        let outputs = self.forward(vector.input())?;

        for (l, layer) in self.layers.iter().enumerate() {
            let input = if l == 0 { vector.input() } else { outputs[l - 1].as_slice() };
            for &id in layer {
                let truth = &labels[self.linkers[id].truth.clone()];
                self.modules[id].train(input, truth)?;
            }
        }
        Ok(())
    }

    /// # Overview
    ///
    /// Snapshot of every module, in arena order.
    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.modules.iter().map(Module::snapshot).collect()
    }

    fn layer_width(&self, layer: usize) -> usize {
        self.layers[layer]
            .iter()
            .map(|&id| self.modules[id].outputs())
            .sum()
    }
}

/// # Overview
///
/// Collects layers of `(Config, truth range)` pairs and links them.
#[derive(Debug, Clone)]
pub struct GraphBuilder<A = Linear> {
    layers:     Vec<Vec<(Config, Range<usize>)>>,
    activation: A
}

impl<A: Activation + Clone> GraphBuilder<A> {
    pub fn new(activation: A) -> Self {
        Self {
            layers: Vec::new(),
            activation
        }
    }

    /// # Overview
    ///
    /// Appends a layer. Give every module its own seed. Modules sharing a
    /// seed draw identical random streams.
    pub fn layer<I>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = (Config, Range<usize>)>
    {
        self.layers.push(modules.into_iter().collect());
        self
    }

    /// # Overview
    ///
    /// Validates layer widths and label ranges, builds every module and
    /// records its linker.
    pub fn build(self) -> Result<Graph<A>> {
        if self.layers.is_empty() {
            return Err(Error::EmptyGraph);
        }

        let mut modules = Vec::new();
        let mut layers: Vec<Vec<usize>> = Vec::with_capacity(self.layers.len());
        let mut truths = Vec::new();
        let mut width = None;

        for (l, layer) in self.layers.iter().enumerate() {
            if layer.is_empty() {
                return Err(Error::EmptyLayer(l));
            }
            let expected = width.unwrap_or(layer[0].0.inputs);
            let mut ids = Vec::with_capacity(layer.len());

            for (config, truth) in layer {
                if config.inputs != expected {
                    return Err(Error::DimensionMismatch {
                        expected,
                        got: config.inputs
                    });
                }
                if truth.start > truth.end || truth.len() != config.outputs {
                    return Err(Error::DimensionMismatch {
                        expected: config.outputs,
                        got:      truth.end.saturating_sub(truth.start)
                    });
                }
                ids.push(modules.len());
                modules.push(Module::with_activation(*config, self.activation.clone())?);
                truths.push(truth.clone());
            }

            width = Some(layer.iter().map(|(c, _)| c.outputs).sum());
            layers.push(ids);
        }

        let linkers = layers
            .iter()
            .enumerate()
            .flat_map(|(l, ids)| {
                let above = if l == 0 { Vec::new() } else { layers[l - 1].clone() };
                let below = layers.get(l + 1).cloned().unwrap_or_default();
                ids.iter().map(move |&index| (index, l, above.clone(), below.clone()))
            })
            .map(|(index, layer, above, below)| Linker {
                above,
                below,
                index,
                layer,
                truth: truths[index].clone()
            })
            .collect();

        debug!(
            layers = layers.len(),
            modules = modules.len(),
            "linked module graph"
        );
        Ok(Graph {
            modules,
            linkers,
            layers
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Always;

    fn config(inputs: usize, outputs: usize, seed: u64) -> Config {
        Config::builder()
            .inputs(inputs)
            .outputs(outputs)
            .states(10)
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn links_layers() {
        let graph = Graph::builder()
            .layer([(config(4, 2, 1), 0..2), (config(4, 3, 2), 2..5)])
            .layer([(config(5, 1, 3), 5..6)])
            .build()
            .unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.layers(), &[vec![0, 1], vec![2]]);
        assert_eq!(graph.inputs(), 4);
        assert_eq!(graph.outputs(), 1);
        assert_eq!(graph.labels(), 6);

        let first = graph.linker(1).unwrap();
        assert_eq!(first.layer, 0);
        assert!(first.is_input());
        assert_eq!(first.below, vec![2]);
        assert_eq!(first.truth, 2..5);

        let last = graph.linker(2).unwrap();
        assert_eq!(last.above, vec![0, 1]);
        assert!(last.is_output());
        assert_eq!(last.index, 2);
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(Graph::builder().build().unwrap_err(), Error::EmptyGraph);

        let err = Graph::builder()
            .layer([(config(4, 2, 1), 0..2)])
            .layer(Vec::new())
            .build()
            .unwrap_err();
        assert_eq!(err, Error::EmptyLayer(1));

        let err = Graph::builder()
            .layer([(config(4, 2, 1), 0..2)])
            .layer([(config(3, 1, 2), 2..3)])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                got:      3
            }
        );

        let err = Graph::builder()
            .layer([(config(4, 2, 1), 0..3)])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                got:      3
            }
        );

        let err = Graph::builder()
            .layer([(config(4, 2, 1), 0..2), (config(3, 2, 1), 2..4)])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 4,
                got:      3
            }
        );
    }

    #[test]
    fn two_layers_learn() {
        let mut graph = GraphBuilder::new(Always)
            .layer([(config(2, 2, 7), 0..2)])
            .layer([(config(2, 1, 8), 2..3)])
            .build()
            .unwrap();

        let v = Vector::from_bits(&[1, 0], &[1, 0, 1]);
        for _ in 0..40 {
            graph.update(&v).unwrap();
        }

        assert_eq!(graph.forward(v.input()).unwrap(), vec![
            vec![true, false],
            vec![true]
        ]);
        assert_eq!(graph.search(&v).unwrap(), vec![true]);
    }

    #[test]
    fn update_checks_labels() {
        let mut graph = Graph::builder()
            .layer([(config(2, 2, 1), 0..2)])
            .layer([(config(2, 1, 2), 2..3)])
            .build()
            .unwrap();

        let err = graph.update(&Vector::from_bits(&[1, 0], &[1, 0])).unwrap_err();
        assert_eq!(err, Error::LabelRange {
            start: 2,
            end:   3,
            len:   2
        });
        assert!(graph.snapshots().iter().all(|s| s.clauses.iter().flatten().all(|&p| p == 0)));

        let err = graph.update(&Vector::from_bits(&[1], &[1, 0, 1])).unwrap_err();
        assert_eq!(err, Error::DimensionMismatch {
            expected: 2,
            got:      1
        });
    }
}
