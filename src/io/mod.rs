//! Text formats at the boundary of the crate.
//!
//! - `graph6`: decoding (and re-encoding) of the compact graph6 format
//! - `dot`: Graphviz DOT export of the outgoing arcs

pub mod dot;
pub mod graph6;
