//! The lock-guarded, id-keyed graph of weighted arcs.
//!
//! Nodes live in an ordered map keyed by [`NodeId`]; every node carries its own
//! outgoing and incoming adjacency maps keyed by the id at the other end of the
//! arc. Nothing holds a pointer to another node, so removing a node is a map
//! edit on the node itself and on the nodes it was joined to.
//!
//! The whole container sits behind one `RwLock`. Every public method takes the
//! lock exactly once and releases it before returning, so readers run in
//! parallel, writers are exclusive, and no call ever holds two graph locks.
//!
//! # Performance
//! - `add_node`: O(log n)
//! - `remove_node`: O(d log n) (scrubs the adjacency maps of the d neighbours)
//! - `add_edge` / `remove_edge`: O(log n + log d)
//! - `has_neighbor`: O(log n + log d)
//! - `node_ids` / `edges`: O(n) / O(n + m)

use core::fmt;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{GraphError, Result};
use crate::graph::node::{Node, NodeId};

/// Unlocked graph state.
#[derive(Debug, Clone)]
pub(crate) struct GraphInner<T, N> {
    pub(crate) nodes: BTreeMap<NodeId, Node<T, N>>,
    pub(crate) directed: bool,
    /// Lower bound for the next minted id.
    pub(crate) next_id: u64,
}

impl<T, N> GraphInner<T, N> {
    fn new(directed: bool) -> Self {
        Self {
            nodes: BTreeMap::new(),
            directed,
            next_id: 0,
        }
    }

    fn ensure_present(&self, id: NodeId) -> Result<()> {
        if self.nodes.contains_key(&id) {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    /// Inserts `from -> to` into both adjacency maps.
    ///
    /// Both endpoints must already be checked.
    fn link(&mut self, from: NodeId, to: NodeId, weight: N)
    where
        N: Clone,
    {
        if let Some(node) = self.nodes.get_mut(&from) {
            node.edges_out.insert(to, weight.clone());
        }
        if let Some(node) = self.nodes.get_mut(&to) {
            node.edges_in.insert(from, weight);
        }
    }

    /// Builds a new state holding the nodes accepted by `keep` and exactly the
    /// arcs whose endpoints are both kept.
    pub(crate) fn induced<F>(&self, keep: F) -> Self
    where
        F: Fn(NodeId) -> bool,
        T: Clone,
        N: Clone,
    {
        let nodes = self
            .nodes
            .iter()
            .filter(|&(&id, _)| keep(id))
            .map(|(&id, node)| {
                let edges_out = node
                    .edges_out
                    .iter()
                    .filter(|&(&target, _)| keep(target))
                    .map(|(&target, w)| (target, w.clone()))
                    .collect();
                let edges_in = node
                    .edges_in
                    .iter()
                    .filter(|&(&source, _)| keep(source))
                    .map(|(&source, w)| (source, w.clone()))
                    .collect();
                let copy = Node {
                    value: node.value.clone(),
                    id,
                    edges_out,
                    edges_in,
                };
                (id, copy)
            })
            .collect();

        Self {
            nodes,
            directed: self.directed,
            next_id: self.next_id,
        }
    }
}

fn not_found(id: NodeId) -> GraphError {
    #[cfg(feature = "tracing")]
    tracing::debug!(%id, "node not found");
    GraphError::NotFound(id)
}

/// A directed or undirected graph with node values of type `T` and arc
/// weights of type `N`.
///
/// Undirected graphs are modelled by inserting each edge in both directions
/// (see [`add_undirected_edge`](Self::add_undirected_edge)); the container
/// never symmetrises on its own, and the directedness flag is informational.
///
/// ### Example
/// ```rust
/// use misgraph::{Graph, NodeId};
///
/// let g: Graph<&str, u32> = Graph::undirected();
/// let a = g.add_node("a");
/// let b = g.add_node("b");
/// g.add_undirected_edge(a, b, 1).unwrap();
///
/// assert!(g.has_neighbor(a, b));
/// assert_eq!(g.neighbors(b), vec![a]);
/// assert_eq!(g.node(NodeId::new(1)).unwrap(), "b");
/// ```
pub struct Graph<T, N> {
    inner: RwLock<GraphInner<T, N>>,
}

impl<T, N> Graph<T, N> {
    /// Creates an empty graph.
    pub fn new(directed: bool) -> Self {
        Self::from_inner(GraphInner::new(directed))
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub(crate) fn from_inner(inner: GraphInner<T, N>) -> Self {
        Self {
            inner: RwLock::new(inner),
        }
    }

    // Every mutation leaves the maps consistent before anything can panic,
    // so a poisoned lock still guards valid state.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, GraphInner<T, N>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GraphInner<T, N>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether the graph was created as directed.
    pub fn is_directed(&self) -> bool {
        self.read().directed
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.read().nodes.len()
    }

    /// Number of directed arcs. An undirected edge stored in both directions
    /// counts twice.
    pub fn edge_count(&self) -> usize {
        self.read().nodes.values().map(|n| n.edges_out.len()).sum()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.read().nodes.is_empty()
    }

    /// Whether `id` names a node of this graph.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.read().nodes.contains_key(&id)
    }

    /// Adds a node under a freshly minted id and returns that id.
    ///
    /// Minted ids are strictly greater than every id previously minted or
    /// inserted explicitly, so they are never reused.
    pub fn add_node(&self, value: T) -> NodeId {
        let mut g = self.write();
        while g.nodes.contains_key(&NodeId::new(g.next_id)) {
            g.next_id = g.next_id.wrapping_add(1);
        }
        let id = NodeId::new(g.next_id);
        g.next_id = g.next_id.wrapping_add(1);
        g.nodes.insert(id, Node::new(id, value));

        #[cfg(feature = "tracing")]
        tracing::trace!(%id, "node added");
        id
    }

    /// Adds a node under a caller-chosen id.
    ///
    /// # Errors
    /// Returns [`GraphError::AlreadyExists`] if `id` is taken; the existing
    /// node and its arcs are left untouched.
    pub fn add_node_with_id(&self, id: NodeId, value: T) -> Result<NodeId> {
        let mut g = self.write();
        if g.nodes.contains_key(&id) {
            #[cfg(feature = "tracing")]
            tracing::debug!(%id, "node already exists");
            return Err(GraphError::AlreadyExists(id));
        }
        g.nodes.insert(id, Node::new(id, value));
        g.next_id = g.next_id.max(id.get().saturating_add(1));

        #[cfg(feature = "tracing")]
        tracing::trace!(%id, "node added");
        Ok(id)
    }

    /// Removes a node and every arc touching it, returning its value.
    ///
    /// # Errors
    /// Returns [`GraphError::NotFound`] if `id` is absent.
    pub fn remove_node(&self, id: NodeId) -> Result<T> {
        let mut g = self.write();
        let node = g.nodes.remove(&id).ok_or_else(|| not_found(id))?;

        for target in node.edges_out.keys() {
            if let Some(other) = g.nodes.get_mut(target) {
                other.edges_in.remove(&id);
            }
        }
        for source in node.edges_in.keys() {
            if let Some(other) = g.nodes.get_mut(source) {
                other.edges_out.remove(&id);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(%id, degree = node.degree(), "node removed");
        Ok(node.value)
    }

    /// Adds the arc `from -> to`, overwriting the weight if it already exists.
    ///
    /// # Errors
    /// Returns [`GraphError::NotFound`] naming `from` if it is absent,
    /// otherwise naming `to` if that is absent. Nothing is modified on error.
    pub fn add_edge(&self, from: NodeId, to: NodeId, weight: N) -> Result<()>
    where
        N: Clone,
    {
        let mut g = self.write();
        g.ensure_present(from)?;
        g.ensure_present(to)?;
        g.link(from, to, weight);

        #[cfg(feature = "tracing")]
        tracing::trace!(%from, %to, "edge added");
        Ok(())
    }

    /// Adds `u -> v` and `v -> u` with the same weight.
    ///
    /// # Errors
    /// Returns [`GraphError::NotFound`] naming the first missing endpoint;
    /// neither direction is inserted in that case.
    pub fn add_undirected_edge(&self, u: NodeId, v: NodeId, weight: N) -> Result<()>
    where
        N: Clone,
    {
        let mut g = self.write();
        g.ensure_present(u)?;
        g.ensure_present(v)?;
        g.link(u, v, weight.clone());
        g.link(v, u, weight);

        #[cfg(feature = "tracing")]
        tracing::trace!(%u, %v, "undirected edge added");
        Ok(())
    }

    /// Removes the arc `from -> to`, returning its weight if it existed.
    ///
    /// Only this direction is removed; for an undirected edge call it again
    /// with the endpoints swapped.
    ///
    /// # Errors
    /// Returns [`GraphError::NotFound`] if either endpoint is absent.
    pub fn remove_edge(&self, from: NodeId, to: NodeId) -> Result<Option<N>> {
        let mut g = self.write();
        g.ensure_present(from)?;
        g.ensure_present(to)?;

        let removed = g
            .nodes
            .get_mut(&from)
            .and_then(|node| node.edges_out.remove(&to));
        if let Some(node) = g.nodes.get_mut(&to) {
            node.edges_in.remove(&from);
        }
        Ok(removed)
    }

    /// Returns a copy of the value stored at `id`.
    ///
    /// # Errors
    /// Returns [`GraphError::NotFound`] if `id` is absent.
    pub fn node(&self, id: NodeId) -> Result<T>
    where
        T: Clone,
    {
        self.read()
            .nodes
            .get(&id)
            .map(|node| node.value.clone())
            .ok_or_else(|| not_found(id))
    }

    /// Returns a snapshot of the node at `id`, adjacency included.
    ///
    /// # Errors
    /// Returns [`GraphError::NotFound`] if `id` is absent.
    pub fn node_entry(&self, id: NodeId) -> Result<Node<T, N>>
    where
        T: Clone,
        N: Clone,
    {
        self.read().nodes.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    /// All node ids, in ascending order. Callers should treat the result as a
    /// set.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.read().nodes.keys().copied().collect()
    }

    /// Targets of the outgoing arcs of `id`.
    ///
    /// An unknown `id` has no neighbours and yields an empty vector.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.read()
            .nodes
            .get(&id)
            .map(|node| node.neighbors().collect())
            .unwrap_or_default()
    }

    /// Whether `other` is joined to `id` by an arc in either direction.
    ///
    /// Adjacency is tested symmetrically regardless of
    /// [`is_directed`](Self::is_directed). An unknown `id` has no neighbours.
    pub fn has_neighbor(&self, id: NodeId, other: NodeId) -> bool {
        self.read()
            .nodes
            .get(&id)
            .is_some_and(|node| node.is_adjacent_to(other))
    }

    /// Number of distinct nodes adjacent to `id` in either direction, not
    /// counting `id` itself. Unknown ids have degree zero.
    pub fn degree(&self, id: NodeId) -> usize {
        self.read().nodes.get(&id).map_or(0, Node::degree)
    }

    /// `(id, degree)` for every node, read under a single lock.
    pub fn degrees(&self) -> Vec<(NodeId, usize)> {
        self.read()
            .nodes
            .iter()
            .map(|(&id, node)| (id, node.degree()))
            .collect()
    }

    /// Weight of the arc `from -> to`, if present.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<N>
    where
        N: Clone,
    {
        self.read()
            .nodes
            .get(&from)
            .and_then(|node| node.edges_out.get(&to).cloned())
    }

    /// Every arc as `(from, to, weight)`, ordered by `from` then `to`.
    pub fn edges(&self) -> Vec<(NodeId, NodeId, N)>
    where
        N: Clone,
    {
        self.read()
            .nodes
            .values()
            .flat_map(|node| {
                node.edges_out
                    .iter()
                    .map(move |(&to, w)| (node.id, to, w.clone()))
            })
            .collect()
    }
}

impl<T, N> Default for Graph<T, N> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<T: Clone, N: Clone> Clone for Graph<T, N> {
    fn clone(&self) -> Self {
        let inner = self.read().clone();
        Self::from_inner(inner)
    }
}

impl<T: fmt::Debug, N: fmt::Debug> fmt::Debug for Graph<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.read();
        f.debug_struct("Graph")
            .field("directed", &g.directed)
            .field("nodes", &g.nodes)
            .finish()
    }
}

/// Structural equality: directedness, node values and both adjacency maps.
/// The id counter is not compared.
impl<T, N> PartialEq for Graph<T, N>
where
    T: Clone + PartialEq,
    N: Clone + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        // Snapshot one side so only one lock is held at a time.
        let (directed, nodes) = {
            let g = self.read();
            (g.directed, g.nodes.clone())
        };
        let o = other.read();
        o.directed == directed && o.nodes == nodes
    }
}
