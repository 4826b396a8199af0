//! graph6, the compact printable encoding for undirected simple graphs.
//!
//! Layout of an encoded graph:
//! - an optional `>>graph6<<` header;
//! - the node count `n`: one byte `n + 63` when `n <= 62`, otherwise `126`
//!   and three 6-bit groups, or `126 126` and six 6-bit groups;
//! - the upper triangle of the adjacency matrix, column by column
//!   (`(0,1), (0,2), (1,2), (0,3), ...`), six bits per byte, most significant
//!   bit first, each byte offset by 63. Unused bits of the last byte are zero.
//!
//! Collections of interesting graphs in this format are published at
//! <https://houseofgraphs.org/>.

use crate::error::{Graph6Error, Result};
use crate::graph::{Graph, NodeId, Weight};

const HEADER: &[u8] = b">>graph6<<";
const OFFSET: u8 = 63;
const MAX_PRINTABLE: u8 = 126;
const SHORT_LIMIT: usize = 62;
const MEDIUM_LIMIT: usize = 258_047;

/// Decodes graph6 text into an undirected graph.
///
/// Node `i` gets id `i` and value `i`. Every adjacent pair is stored in both
/// directions with weight `N::one()`. Empty input yields an empty graph.
///
/// ### Example
/// ```rust
/// use misgraph::{io::graph6, NodeId};
///
/// let g = graph6::decode::<u32>(b"DQc").unwrap();
/// assert_eq!(g.node_count(), 5);
/// assert_eq!(g.neighbors(NodeId::new(0)), vec![NodeId::new(2), NodeId::new(4)]);
/// ```
///
/// # Errors
/// Returns [`GraphError::Graph6`](crate::GraphError::Graph6) if a byte lies
/// outside the graph6 range, the size header is cut short, or the body
/// length does not match the node count.
pub fn decode<N: Weight>(input: &[u8]) -> Result<Graph<usize, N>> {
    let input = input.strip_prefix(HEADER).unwrap_or(input);
    let end = input
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |last| last + 1);
    let data = &input[..end];

    if let Some(offset) = data.iter().position(|&b| !(OFFSET..=MAX_PRINTABLE).contains(&b)) {
        return Err(Graph6Error::InvalidByte {
            offset,
            byte: data[offset],
        }
        .into());
    }

    let graph = Graph::undirected();
    if data.is_empty() {
        return Ok(graph);
    }

    let (n, header_len) = read_size(data)?;
    let body = &data[header_len..];
    let expected = body_len(n);
    if body.len() != expected {
        return Err(Graph6Error::BodyLength {
            expected,
            actual: body.len(),
        }
        .into());
    }

    for i in 0..n {
        graph.add_node_with_id(NodeId::from(i), i)?;
    }

    let mut bits = body
        .iter()
        .flat_map(|&byte| (0..6).rev().map(move |shift| ((byte - OFFSET) >> shift) & 1 == 1));
    for j in 1..n {
        for i in 0..j {
            if bits.next() == Some(true) {
                graph.add_undirected_edge(NodeId::from(i), NodeId::from(j), N::one())?;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(nodes = n, edges = graph.edge_count() / 2, "decoded graph6");
    Ok(graph)
}

/// Decodes graph6 text from a string. See [`decode`].
///
/// # Errors
/// Same as [`decode`].
pub fn parse<N: Weight>(text: &str) -> Result<Graph<usize, N>> {
    decode(text.as_bytes())
}

/// Encodes the adjacency of `graph` as graph6 text.
///
/// Nodes are numbered by ascending id, and two nodes are adjacent when
/// [`Graph::has_neighbor`] holds, so arc direction, weights and self-loops
/// are dropped. The result carries no header and no trailing newline.
pub fn encode<T, N>(graph: &Graph<T, N>) -> String {
    let g = graph.read();
    let nodes: Vec<_> = g.nodes.values().collect();
    let n = nodes.len();

    let mut out = size_header(n);
    let mut group = 0u8;
    let mut filled = 0;
    for j in 1..n {
        for i in 0..j {
            group <<= 1;
            if nodes[i].is_adjacent_to(nodes[j].id()) {
                group |= 1;
            }
            filled += 1;
            if filled == 6 {
                out.push(group + OFFSET);
                group = 0;
                filled = 0;
            }
        }
    }
    if filled > 0 {
        out.push((group << (6 - filled)) + OFFSET);
    }

    // Every byte is in 63..=126.
    out.into_iter().map(char::from).collect()
}

fn read_size(data: &[u8]) -> Result<(usize, usize), Graph6Error> {
    let (groups, header_len) = match data {
        [MAX_PRINTABLE, MAX_PRINTABLE, rest @ ..] => (rest.get(..6), 8),
        [MAX_PRINTABLE, rest @ ..] => (rest.get(..3), 4),
        [first, ..] => return Ok((usize::from(first - OFFSET), 1)),
        [] => return Err(Graph6Error::TruncatedHeader),
    };
    let groups = groups.ok_or(Graph6Error::TruncatedHeader)?;
    let n = groups
        .iter()
        .fold(0usize, |acc, &b| (acc << 6) | usize::from(b - OFFSET));
    Ok((n, header_len))
}

fn size_header(n: usize) -> Vec<u8> {
    let groups = |count: usize| {
        (0..count)
            .rev()
            .map(move |k| ((n >> (6 * k)) & 0x3f) as u8 + OFFSET)
    };
    if n <= SHORT_LIMIT {
        groups(1).collect()
    } else if n <= MEDIUM_LIMIT {
        std::iter::once(MAX_PRINTABLE).chain(groups(3)).collect()
    } else {
        [MAX_PRINTABLE, MAX_PRINTABLE].into_iter().chain(groups(6)).collect()
    }
}

/// Bytes needed for the upper triangle of an `n`-node adjacency matrix.
fn body_len(n: usize) -> usize {
    let pairs = n.checked_mul(n.saturating_sub(1)).map(|p| p / 2);
    pairs.map_or(usize::MAX, |p| p.div_ceil(6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphError;

    fn id(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    #[test]
    fn test_decode_empty() {
        let g = decode::<i32>(b"").unwrap();
        assert!(g.is_empty());
        assert!(!g.is_directed());
        assert!(decode::<i32>(b"?").unwrap().is_empty());
        assert_eq!(encode(&g), "?");
    }

    #[test]
    fn test_decode_simple() {
        let g = decode::<i32>(b"DQc").unwrap();
        assert_eq!(g.node_ids(), (0..5).map(id).collect::<Vec<_>>());
        assert_eq!(g.neighbors(id(0)), vec![id(2), id(4)]);
        assert_eq!(g.neighbors(id(3)), vec![id(1), id(4)]);
        assert_eq!(g.edge_count(), 8);
        assert_eq!(g.edge_weight(id(4), id(0)), Some(1));
        assert_eq!(g.node(id(3)).unwrap(), 3);
    }

    #[test]
    fn test_header_and_newline_are_ignored() {
        let plain = decode::<i32>(b"DQc").unwrap();
        let framed = parse::<i32>(">>graph6<<DQc\n").unwrap();
        assert_eq!(plain, framed);
    }

    #[test]
    fn test_single_and_edgeless() {
        assert_eq!(decode::<i32>(b"@").unwrap().node_count(), 1);
        let g = decode::<i32>(b"C?").unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_invalid_byte() {
        let err = decode::<i32>(b"D Qc").unwrap_err();
        assert_eq!(
            err,
            GraphError::Graph6(Graph6Error::InvalidByte { offset: 1, byte: b' ' })
        );
    }

    #[test]
    fn test_body_length_mismatch() {
        let err = decode::<i32>(b"DQ").unwrap_err();
        assert_eq!(
            err,
            GraphError::Graph6(Graph6Error::BodyLength { expected: 2, actual: 1 })
        );
        assert!(decode::<i32>(b"DQcc").is_err());
    }

    #[test]
    fn test_truncated_long_header() {
        assert_eq!(
            decode::<i32>(b"~??").unwrap_err(),
            GraphError::Graph6(Graph6Error::TruncatedHeader)
        );
    }

    #[test]
    fn test_encode_round_trip() {
        for text in ["?", "@", "A_", "DQc", "C~", "Ftw`W"] {
            let g = parse::<u8>(text).unwrap();
            assert_eq!(encode(&g), text);
        }
    }

    #[test]
    fn test_medium_size_header() {
        let g: Graph<(), i32> = Graph::undirected();
        for _ in 0..63 {
            g.add_node(());
        }
        let text = encode(&g);
        assert_eq!(&text.as_bytes()[..4], &[126, 63, 63, 126]);

        let back = parse::<i32>(&text).unwrap();
        assert_eq!(back.node_count(), 63);
        assert_eq!(back.edge_count(), 0);
    }
}
