//! Plain-text edge lists.
//!
//! ```text
//! # comment
//! 4          <- node count
//! 0 1
//! 1 2
//! ```
//!
//! Blank lines and everything after `#` are ignored. The first remaining
//! line is the node count; every later line is one undirected edge.

use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::types::{NodeId, SweepError, SweepResult, DEFAULT_MAX_LOAD_NODES};

/// Parse an edge list into a graph of at most [`DEFAULT_MAX_LOAD_NODES`] nodes.
pub fn parse_edge_list(text: &str) -> SweepResult<Graph> {
    parse_edge_list_limited(text, DEFAULT_MAX_LOAD_NODES)
}

/// Parse an edge list, failing with [`SweepError::TooLarge`] when the
/// declared node count exceeds `max_nodes`.
pub fn parse_edge_list_limited(text: &str, max_nodes: usize) -> SweepResult<Graph> {
    let mut node_count: Option<usize> = None;
    let mut edges: Vec<(NodeId, NodeId)> = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match node_count {
            None => {
                if tokens.len() != 1 {
                    return Err(parse_error(line_no, "expected a single node count"));
                }
                let n = tokens[0]
                    .parse::<usize>()
                    .map_err(|e| parse_error(line_no, &format!("bad node count: {}", e)))?;
                if n > max_nodes {
                    return Err(SweepError::TooLarge {
                        node_count: n as u64,
                        limit: max_nodes as u64,
                    });
                }
                node_count = Some(n);
            }
            Some(n) => {
                if tokens.len() != 2 {
                    return Err(parse_error(line_no, "expected two node ids"));
                }
                let u = parse_endpoint(tokens[0], n, line_no)?;
                let v = parse_endpoint(tokens[1], n, line_no)?;
                edges.push((u, v));
            }
        }
    }

    let n = node_count.ok_or_else(|| parse_error(0, "missing node count"))?;
    Graph::from_edges(n, &edges)
}

/// Read and parse an edge-list file.
pub fn read_edge_list(path: &Path) -> SweepResult<Graph> {
    read_edge_list_limited(path, DEFAULT_MAX_LOAD_NODES)
}

/// Read and parse an edge-list file of at most `max_nodes` nodes.
pub fn read_edge_list_limited(path: &Path, max_nodes: usize) -> SweepResult<Graph> {
    let text = std::fs::read_to_string(path)?;
    parse_edge_list_limited(&text, max_nodes)
}

/// Write a graph as an edge list, preserving edge order.
pub fn write_edge_list(graph: &Graph, writer: &mut impl Write) -> SweepResult<()> {
    writeln!(writer, "{}", graph.size())?;
    for &(u, v) in graph.edges() {
        writeln!(writer, "{} {}", u, v)?;
    }
    Ok(())
}

fn parse_endpoint(token: &str, node_count: usize, line: usize) -> SweepResult<NodeId> {
    let id = token
        .parse::<u64>()
        .map_err(|e| parse_error(line, &format!("bad node id {:?}: {}", token, e)))?;
    if id >= node_count as u64 {
        return Err(SweepError::OutOfRange {
            node: id,
            node_count,
        });
    }
    Ok(id as NodeId)
}

fn parse_error(line: usize, message: &str) -> SweepError {
    SweepError::Parse {
        line,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_comments() {
        let text = "# sample\n4\n0 1 # first\n\n1 2\n0 2\n2 3\n";
        let g = parse_edge_list(text).unwrap();
        assert_eq!(g.size(), 4);
        assert_eq!(g.edges(), &[(0, 1), (1, 2), (0, 2), (2, 3)]);
    }

    #[test]
    fn test_out_of_range() {
        let err = parse_edge_list("2\n0 2\n").unwrap_err();
        assert!(matches!(
            err,
            SweepError::OutOfRange {
                node: 2,
                node_count: 2
            }
        ));
    }

    #[test]
    fn test_huge_node_count_is_refused() {
        assert!(matches!(
            parse_edge_list("4000000000\n0 1\n"),
            Err(SweepError::TooLarge {
                node_count: 4_000_000_000,
                ..
            })
        ));
        assert!(matches!(
            parse_edge_list_limited("10\n0 1\n", 8),
            Err(SweepError::TooLarge { limit: 8, .. })
        ));
        assert_eq!(parse_edge_list_limited("8\n0 7\n", 8).unwrap().size(), 8);
    }

    #[test]
    fn test_negative_id_is_parse_error() {
        let err = parse_edge_list("3\n0 -1\n").unwrap_err();
        assert!(matches!(err, SweepError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(
            parse_edge_list("3\n0 1 2\n"),
            Err(SweepError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_edge_list("3 4\n"),
            Err(SweepError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_edge_list("# nothing\n"),
            Err(SweepError::Parse { line: 0, .. })
        ));
    }

    #[test]
    fn test_write_then_parse() {
        let g = Graph::from_edges(3, &[(2, 0), (1, 1)]).unwrap();
        let mut buf = Vec::new();
        write_edge_list(&g, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "3\n2 0\n1 1\n");
        assert_eq!(parse_edge_list(&text).unwrap(), g);
    }
}
