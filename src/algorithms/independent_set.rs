//! Exact maximum independent set by branch and bound over induced subgraphs.
//!
//! The search rests on the identity
//!
//! ```text
//! MIS(G) = max(1 + MIS(G - N[v]), MIS(G - v))
//! ```
//!
//! Every independent set either contains `v`, which rules out its whole
//! neighbourhood, or it does not, which leaves `G - v`. Both branches shrink
//! the node count by at least one, so the recursion terminates on any finite
//! graph.
//!
//! Each recursive call works on its own freshly built [`Graph`]; the caller's
//! graph is only ever read. Running time is exponential: the solver is meant
//! for graphs of a few dozen nodes, and callers who need a bound should check
//! the node count before calling.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::graph::{Graph, NodeId};

/// How the solver picks the node to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Branching {
    /// Branch once per call, on a node of maximum degree (smallest id on
    /// ties). Graphs with no edges are answered directly with every node.
    #[default]
    MaxDegree,
    /// Branch on every node in turn and keep the best result. Correct but
    /// factorial; only usable on very small graphs.
    EveryNode,
}

/// Exact maximum independent set solver.
///
/// ### Example
/// ```rust
/// use misgraph::{Graph, IndependentSetSolver, NodeId};
///
/// // path 0 - 1 - 2
/// let g: Graph<(), u8> = Graph::undirected();
/// let ids: Vec<NodeId> = (0..3).map(|_| g.add_node(())).collect();
/// g.add_undirected_edge(ids[0], ids[1], 1).unwrap();
/// g.add_undirected_edge(ids[1], ids[2], 1).unwrap();
///
/// let mis = IndependentSetSolver::new().solve(&g);
/// assert_eq!(mis.into_iter().collect::<Vec<_>>(), vec![ids[0], ids[2]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IndependentSetSolver {
    branching: Branching,
}

impl IndependentSetSolver {
    /// Creates a solver using [`Branching::MaxDegree`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the branching strategy.
    pub fn with_branching(mut self, branching: Branching) -> Self {
        self.branching = branching;
        self
    }

    /// The configured branching strategy.
    pub fn branching(&self) -> Branching {
        self.branching
    }

    /// Returns a maximum-cardinality set of pairwise non-adjacent nodes.
    ///
    /// Adjacency is [`Graph::has_neighbor`], so arc direction is ignored and a
    /// self-loop never excludes its node. When several maximum sets exist,
    /// which one is returned is unspecified.
    pub fn solve<T: Clone, N: Clone>(&self, graph: &Graph<T, N>) -> BTreeSet<NodeId> {
        let mut search = Search {
            branching: self.branching,
            subgraphs: 0,
        };
        let found = search.run(graph, 0);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = graph.node_count(),
            size = found.len(),
            subgraphs = search.subgraphs,
            branching = ?self.branching,
            "maximum independent set found"
        );
        found
    }
}

struct Search {
    branching: Branching,
    /// Induced subgraphs built so far.
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    subgraphs: usize,
}

impl Search {
    fn run<T: Clone, N: Clone>(&mut self, graph: &Graph<T, N>, depth: usize) -> BTreeSet<NodeId> {
        let degrees = graph.degrees();

        #[cfg(feature = "tracing")]
        tracing::trace!(depth, nodes = degrees.len(), "search");

        match degrees.as_slice() {
            [] => return BTreeSet::new(),
            [(only, _)] => return BTreeSet::from([*only]),
            _ => {}
        }

        match self.branching {
            Branching::MaxDegree => {
                let pivot = degrees
                    .iter()
                    .copied()
                    .max_by_key(|&(id, degree)| (degree, Reverse(id)));
                match pivot {
                    Some((v, degree)) if degree > 0 => self.branch(graph, v, depth),
                    // No edges left: every node is independent.
                    _ => degrees.into_iter().map(|(id, _)| id).collect(),
                }
            }
            Branching::EveryNode => {
                let mut best = BTreeSet::new();
                for (v, _) in degrees {
                    let candidate = self.branch(graph, v, depth);
                    if candidate.len() > best.len() {
                        best = candidate;
                    }
                }
                best
            }
        }
    }

    fn branch<T: Clone, N: Clone>(
        &mut self,
        graph: &Graph<T, N>,
        v: NodeId,
        depth: usize,
    ) -> BTreeSet<NodeId> {
        self.subgraphs += 2;

        let mut with_v = self.run(&graph.without_closed_neighborhood(v), depth + 1);
        with_v.insert(v);
        let without_v = self.run(&graph.without_node(v), depth + 1);

        if with_v.len() > without_v.len() {
            with_v
        } else {
            without_v
        }
    }
}

/// Returns a maximum independent set of `graph` using the default solver.
pub fn maximum_independent_set<T: Clone, N: Clone>(graph: &Graph<T, N>) -> BTreeSet<NodeId> {
    IndependentSetSolver::new().solve(graph)
}

/// Whether every id in `set` is a node of `graph` and no two distinct ids are
/// adjacent.
pub fn is_independent_set<T, N>(graph: &Graph<T, N>, set: &BTreeSet<NodeId>) -> bool {
    let g = graph.read();
    set.iter().all(|id| {
        g.nodes.get(id).is_some_and(|node| {
            set.iter()
                .filter(|&&other| other != *id)
                .all(|&other| !node.is_adjacent_to(other))
        })
    })
}

impl<T: Clone, N: Clone> Graph<T, N> {
    /// Returns a maximum independent set of this graph.
    ///
    /// See [`IndependentSetSolver`] for the algorithm and its cost.
    pub fn maximum_independent_set(&self) -> BTreeSet<NodeId> {
        maximum_independent_set(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(n: u64, edges: &[(u64, u64)]) -> Graph<u64, i32> {
        let g = Graph::undirected();
        for i in 0..n {
            g.add_node_with_id(NodeId::new(i), i).unwrap();
        }
        for &(u, v) in edges {
            g.add_undirected_edge(NodeId::new(u), NodeId::new(v), 1).unwrap();
        }
        g
    }

    fn solvers() -> [IndependentSetSolver; 2] {
        [
            IndependentSetSolver::new(),
            IndependentSetSolver::new().with_branching(Branching::EveryNode),
        ]
    }

    #[test]
    fn test_empty_graph() {
        let g = build(0, &[]);
        for solver in solvers() {
            assert!(solver.solve(&g).is_empty());
        }
    }

    #[test]
    fn test_single_node() {
        let g: Graph<(), u8> = Graph::directed();
        g.add_node_with_id(NodeId::new(17), ()).unwrap();
        for solver in solvers() {
            assert_eq!(solver.solve(&g), BTreeSet::from([NodeId::new(17)]));
        }
    }

    #[test]
    fn test_cliques() {
        for k in 2..6 {
            let edges: Vec<_> = (0..k).flat_map(|u| (u + 1..k).map(move |v| (u, v))).collect();
            let g = build(k, &edges);
            for solver in solvers() {
                let mis = solver.solve(&g);
                assert_eq!(mis.len(), 1, "clique of {k}");
                assert!(is_independent_set(&g, &mis));
            }
        }
    }

    #[test]
    fn test_one_directional_arc_still_conflicts() {
        let g: Graph<(), i32> = Graph::directed();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(a, b, 1).unwrap();
        for solver in solvers() {
            assert_eq!(solver.solve(&g).len(), 1);
        }
    }

    #[test]
    fn test_self_loop_does_not_exclude() {
        let g = build(2, &[]);
        g.add_edge(NodeId::new(0), NodeId::new(0), 1).unwrap();
        for solver in solvers() {
            assert_eq!(solver.solve(&g).len(), 2);
        }
    }

    #[test]
    fn test_star_prefers_leaves() {
        let g = build(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let want: BTreeSet<_> = (1..5).map(NodeId::new).collect();
        assert_eq!(g.maximum_independent_set(), want);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let g = build(4, &[(0, 1), (1, 2), (2, 3)]);
        let before = g.clone();
        let _ = g.maximum_independent_set();
        assert_eq!(g, before);
    }

    #[test]
    fn test_is_independent_set() {
        let g = build(3, &[(0, 1)]);
        let set = |ids: &[u64]| ids.iter().copied().map(NodeId::new).collect::<BTreeSet<_>>();
        assert!(is_independent_set(&g, &set(&[0, 2])));
        assert!(!is_independent_set(&g, &set(&[0, 1])));
        assert!(!is_independent_set(&g, &set(&[0, 9])), "unknown ids are rejected");
        assert!(is_independent_set(&g, &set(&[])));
    }
}
