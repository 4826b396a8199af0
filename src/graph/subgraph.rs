//! Induced subgraphs.
//!
//! Each result is a fresh [`Graph`] with its own storage and its own lock; it
//! shares nothing with the parent and may outlive it. The parent's lock is held
//! only while its nodes are copied.

use crate::graph::container::Graph;
use crate::graph::node::NodeId;

impl<T: Clone, N: Clone> Graph<T, N> {
    /// Returns the subgraph induced by the nodes accepted by `keep`: those
    /// nodes plus every arc whose endpoints are both accepted, weights
    /// unchanged.
    pub fn induced_subgraph<F>(&self, keep: F) -> Self
    where
        F: Fn(NodeId) -> bool,
    {
        let inner = self.read().induced(keep);
        Self::from_inner(inner)
    }

    /// Returns `G - id`: every node except `id`, with the arcs among them.
    ///
    /// An unknown `id` yields a full copy.
    pub fn without_node(&self, id: NodeId) -> Self {
        self.induced_subgraph(|n| n != id)
    }

    /// Returns `G - N[id]`: every node that is neither `id` nor adjacent to it
    /// (in either direction), with the arcs among them.
    ///
    /// An unknown `id` yields a full copy.
    pub fn without_closed_neighborhood(&self, id: NodeId) -> Self {
        let g = self.read();
        let inner = match g.nodes.get(&id) {
            Some(center) => g.induced(|n| n != id && !center.is_adjacent_to(n)),
            None => (*g).clone(),
        };
        drop(g);
        Self::from_inner(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    fn build(n: u64, edges: &[(u64, u64)]) -> Graph<u64, i32> {
        let g = Graph::undirected();
        for i in 0..n {
            g.add_node_with_id(id(i), i).unwrap();
        }
        for &(u, v) in edges {
            g.add_edge(id(u), id(v), 1).unwrap();
        }
        g
    }

    #[test]
    fn test_without_node_on_clique() {
        // 0 -> 1 -> 2 -> 0
        let g = build(3, &[(0, 1), (1, 2), (2, 0)]);
        let want = build(0, &[]);
        want.add_node_with_id(id(1), 1).unwrap();
        want.add_node_with_id(id(2), 2).unwrap();
        want.add_edge(id(1), id(2), 1).unwrap();

        assert_eq!(g.without_node(id(0)), want);
        assert_eq!(g.node_count(), 3, "parent is untouched");
    }

    #[test]
    fn test_without_closed_neighborhood() {
        // 0 -> 1 -> 2
        let g = build(3, &[(0, 1), (1, 2)]);

        let want = build(0, &[]);
        want.add_node_with_id(id(2), 2).unwrap();
        assert_eq!(g.without_closed_neighborhood(id(0)), want);

        let want = build(0, &[]);
        want.add_node_with_id(id(0), 0).unwrap();
        assert_eq!(g.without_closed_neighborhood(id(2)), want, "incoming arcs count");

        assert!(g.without_closed_neighborhood(id(1)).is_empty());
    }

    #[test]
    fn test_weights_survive() {
        let g: Graph<(), f64> = Graph::directed();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, 0.5).unwrap();
        g.add_edge(b, c, 2.5).unwrap();

        let sub = g.without_node(a);
        assert!(sub.is_directed());
        assert_eq!(sub.edge_weight(b, c), Some(2.5));
        assert_eq!(sub.edge_count(), 1);
    }

    #[test]
    fn test_unknown_id_copies() {
        let g = build(3, &[(0, 1)]);
        assert_eq!(g.without_node(id(9)), g);
        assert_eq!(g.without_closed_neighborhood(id(9)), g);
    }

    #[test]
    fn test_subgraph_mints_fresh_ids() {
        let g = build(3, &[]);
        let sub = g.without_node(id(2));
        assert_eq!(sub.add_node(7), id(3), "id counter carries over");
    }
}
