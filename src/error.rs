//! Error types shared by the graph container and the text-format codecs.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors returned by [`Graph`](crate::Graph) operations and the format decoders.
///
/// The solver never fails: every finite graph has a well-defined maximum
/// independent set, so only the container and the codecs produce errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The referenced node is not part of the graph.
    ///
    /// For edge operations this names the first missing endpoint, checking
    /// the source before the target.
    #[error("node not found: {0}")]
    NotFound(NodeId),

    /// A node with this id is already present.
    #[error("node already exists: {0}")]
    AlreadyExists(NodeId),

    /// Malformed graph6 input.
    #[error("invalid graph6 input: {0}")]
    Graph6(#[from] Graph6Error),
}

/// Failures while decoding graph6 text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Graph6Error {
    /// A byte outside the printable graph6 range `63..=126`.
    #[error("byte {byte:#04x} at offset {offset} is outside the graph6 range")]
    InvalidByte {
        /// Offset of the byte in the input, after any header was stripped.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },

    /// The node count header ended early.
    #[error("node count header is truncated")]
    TruncatedHeader,

    /// The adjacency body does not have the length implied by the node count.
    #[error("adjacency body has {actual} bytes, expected {expected}")]
    BodyLength {
        /// Bytes required for the upper triangle of an `n`-node matrix.
        expected: usize,
        /// Bytes actually present.
        actual: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
