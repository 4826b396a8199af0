//! Node identifiers and per-node adjacency storage.

use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier of a node within one [`Graph`](super::Graph).
///
/// Ids are unique per graph and are never reused once minted by
/// [`Graph::add_node`](super::Graph::add_node).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a raw id.
    #[inline(always)]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[inline(always)]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<usize> for NodeId {
    fn from(raw: usize) -> Self {
        Self(raw as u64)
    }
}

impl From<NodeId> for u64 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A node together with both of its adjacency maps.
///
/// `edges_out` is keyed by the target of each outgoing arc and `edges_in` by
/// the source of each incoming arc. The owning graph keeps the two sides of
/// every arc in sync, so a key here always names a live node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T, N> {
    pub(crate) value: T,
    pub(crate) id: NodeId,
    pub(crate) edges_out: BTreeMap<NodeId, N>,
    pub(crate) edges_in: BTreeMap<NodeId, N>,
}

impl<T, N> Node<T, N> {
    pub(crate) fn new(id: NodeId, value: T) -> Self {
        Self {
            value,
            id,
            edges_out: BTreeMap::new(),
            edges_in: BTreeMap::new(),
        }
    }

    /// The user value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// This node's id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Outgoing arcs as `(target, weight)` pairs.
    pub fn outgoing(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.edges_out.iter().map(|(&id, w)| (id, w))
    }

    /// Incoming arcs as `(source, weight)` pairs.
    pub fn incoming(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.edges_in.iter().map(|(&id, w)| (id, w))
    }

    /// Targets of the outgoing arcs.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.edges_out.keys().copied()
    }

    /// Whether `other` is joined to this node in either direction.
    pub fn is_adjacent_to(&self, other: NodeId) -> bool {
        self.edges_out.contains_key(&other) || self.edges_in.contains_key(&other)
    }

    /// Number of distinct nodes joined to this one in either direction,
    /// not counting a self-loop.
    pub fn degree(&self) -> usize {
        let out = self.edges_out.keys().filter(|&&k| k != self.id).count();
        let in_only = self
            .edges_in
            .keys()
            .filter(|&&k| k != self.id && !self.edges_out.contains_key(&k))
            .count();
        out + in_only
    }
}
