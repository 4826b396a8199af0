//! Algorithms over [`Graph`](crate::Graph).

pub mod independent_set;

pub use independent_set::{
    is_independent_set, maximum_independent_set, Branching, IndependentSetSolver,
};
