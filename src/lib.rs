//! # Tsetlin Graph
//!
//! Tsetlin automaton clauses that learn binary patterns through stochastic
//! reward and penalty feedback, composed into layered module graphs.
//!
//! - [`Automaton`]: bounded signed position split into exclude, neutral and
//!   include zones
//! - [`Clause`]: two automata per input bit, learns one conjunction
//! - [`Module`]: fixed set of clauses over the same input
//! - [`Graph`]: modules in layers, wired by [`Linker`] records
//!
//! # Features
//!
//! - `std` (default): Standard library support and entropy-seeded generators
//! - `parallel`: Parallel clause training and batch search via rayon
//! - `serde`: Serialization support
//!
//! # Examples
//!
//! ```
//! use tsetlin_graph::{Config, Module, Vector};
//!
//! let config = Config::builder().inputs(3).outputs(1).states(10).seed(42).build().unwrap();
//!
//! let mut module = Module::new(config).unwrap();
//!
//! let v = Vector::from_bits(&[0, 1, 0], &[1]);
//! for _ in 0..200 {
//!     module.update(&v).unwrap();
//! }
//!
//! let restored = Module::from_states(config, tsetlin_graph::Linear, &module.states()).unwrap();
//! assert_eq!(restored.search(&v).unwrap(), module.search(&v).unwrap());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod activation;
mod automaton;
mod clause;
mod config;
pub mod error;
mod graph;
mod linker;
pub mod metric;
mod module;
mod rule;
mod snapshot;
pub mod utils;
mod vector;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use activation::{Activation, Always, Linear};
pub use automaton::{Automaton, Zone};
pub use clause::Clause;
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use graph::{Graph, GraphBuilder};
pub use linker::Linker;
pub use metric::{Histogram, Metric, Outcome};
pub use module::Module;
pub use rule::Rule;
pub use snapshot::Snapshot;
pub use vector::Vector;
