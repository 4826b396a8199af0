//! Graphviz DOT export.
//!
//! Every outgoing arc becomes one `from -> to [label=weight];` line inside a
//! `digraph` block, so an undirected edge stored in both directions shows up
//! twice. Node values are not exported.

use core::fmt::Display;
use std::io::{self, Write};

use crate::graph::Graph;

/// Writes the DOT rendering of `graph` to `out`.
///
/// # Errors
/// Propagates any error from `out`.
pub fn write_dot<T, N, W>(graph: &Graph<T, N>, mut out: W) -> io::Result<()>
where
    N: Clone + Display,
    W: Write,
{
    writeln!(out, "digraph {{")?;
    for (from, to, weight) in graph.edges() {
        writeln!(out, "\t{from} -> {to} [label={weight}];")?;
    }
    writeln!(out, "}}")
}

/// Returns the DOT rendering of `graph` as a string.
///
/// ### Example
/// ```rust
/// use misgraph::{io::dot, Graph};
///
/// let g: Graph<(), u32> = Graph::directed();
/// let a = g.add_node(());
/// let b = g.add_node(());
/// g.add_edge(a, b, 7).unwrap();
///
/// assert_eq!(dot::to_dot(&g), "digraph {\n\t0 -> 1 [label=7];\n}\n");
/// ```
pub fn to_dot<T, N>(graph: &Graph<T, N>) -> String
where
    N: Clone + Display,
{
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_dot(graph, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
