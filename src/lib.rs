//! # `misgraph` - Graph Container and Exact Maximum Independent Set
//!
//! A small in-memory graph library: a generic directed/undirected container
//! with weighted arcs, and an exact solver for the maximum independent set
//! problem built on top of it.
//!
//! ## Key Features
//!
//! - **Id-keyed storage**: nodes are addressed by [`NodeId`]; adjacency is kept
//!   as id-keyed maps on both endpoints, so there are no dangling references
//!   after a removal.
//! - **Thread-safe container**: each [`Graph`] sits behind its own reader/writer
//!   lock; concurrent readers proceed in parallel, writers are exclusive.
//! - **Exact solver**: [`IndependentSetSolver`] branches on
//!   `MIS(G) = max(1 + MIS(G - N[v]), MIS(G - v))` over freshly built induced
//!   subgraphs and never touches the caller's graph.
//! - **Formats**: graph6 decoding/encoding and Graphviz DOT export in [`io`].
//!
//! ## Operational limits
//!
//! The solver is exponential. It is intended for graphs of a few dozen nodes;
//! beyond that, memory and time spent on subgraph copies dominate. There is no
//! cancellation, so callers should bound the input size themselves.
//!
//! ## Example
//!
//! ```rust
//! use misgraph::{io::graph6, is_independent_set};
//!
//! let g = graph6::parse::<u32>("DQc").unwrap();
//! let mis = g.maximum_independent_set();
//!
//! assert_eq!(mis.len(), 3);
//! assert!(is_independent_set(&g, &mis));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod io;

pub use algorithms::{is_independent_set, maximum_independent_set, Branching, IndependentSetSolver};
pub use error::{Graph6Error, GraphError, Result};
pub use graph::{Graph, Node, NodeId, Weight};

// Compile-time checks on the public types.
const _: () = {
    use core::mem;

    // `NodeId` is a transparent wrapper.
    assert!(mem::size_of::<NodeId>() == mem::size_of::<u64>());
};
