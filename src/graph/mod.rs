//! The graph container.
//!
//! - `node`: node ids and per-node adjacency maps
//! - `weight`: the numeric bound on arc weights
//! - `container`: the lock-guarded [`Graph`] and its mutation/query API
//! - `subgraph`: induced-subgraph construction used by the solvers

mod container;
pub mod node;
mod subgraph;
pub mod weight;

pub use container::Graph;
pub use node::{Node, NodeId};
pub use weight::Weight;
