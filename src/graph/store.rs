//! Core graph structure: immutable undirected adjacency in CSR layout.

use crate::types::{NodeId, SweepError, SweepResult, MAX_NODES};

/// An immutable undirected graph over nodes `[0, N)`.
///
/// Adjacency is stored in compressed-sparse-row form: the neighbors of node
/// `u` are `targets[offsets[u]..offsets[u + 1]]`. There are no mutation
/// methods, so a `&Graph` can be shared freely across worker threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Row offsets, `node_count + 1` entries.
    offsets: Vec<usize>,
    /// Concatenated neighbor lists.
    targets: Vec<NodeId>,
    /// Undirected edges in the order they were supplied.
    edges: Vec<(NodeId, NodeId)>,
}

impl Graph {
    /// Build a graph with `node_count` nodes from an undirected edge list.
    ///
    /// For an edge `(u, v)`, `v` is appended to `u`'s neighbors and `u` to
    /// `v`'s, in edge-list order. A self-loop appears once in its node's list.
    /// Fails with [`SweepError::OutOfRange`] if any endpoint is `>= node_count`,
    /// with [`SweepError::TooLarge`] if `node_count` exceeds [`MAX_NODES`], and
    /// with [`SweepError::Allocation`] if the adjacency arrays cannot be allocated.
    pub fn from_edges(node_count: usize, edges: &[(NodeId, NodeId)]) -> SweepResult<Self> {
        if node_count > MAX_NODES {
            return Err(SweepError::TooLarge {
                node_count: node_count as u64,
                limit: MAX_NODES as u64,
            });
        }

        for &(u, v) in edges {
            for endpoint in [u, v] {
                if endpoint as usize >= node_count {
                    return Err(SweepError::OutOfRange {
                        node: endpoint as u64,
                        node_count,
                    });
                }
            }
        }

        let mut degree = filled(node_count, 0usize)?;
        for &(u, v) in edges {
            degree[u as usize] += 1;
            if u != v {
                degree[v as usize] += 1;
            }
        }

        let mut offsets: Vec<usize> = Vec::new();
        offsets
            .try_reserve_exact(node_count + 1)
            .map_err(|e| SweepError::Allocation(e.to_string()))?;
        offsets.push(0);
        for d in &degree {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + d);
        }

        // Fill rows front to back so each list keeps edge-list order
        let mut cursor = degree;
        cursor.copy_from_slice(&offsets[..node_count]);
        let mut targets = filled(offsets[node_count], 0 as NodeId)?;
        for &(u, v) in edges {
            targets[cursor[u as usize]] = v;
            cursor[u as usize] += 1;
            if u != v {
                targets[cursor[v as usize]] = u;
                cursor[v as usize] += 1;
            }
        }

        Ok(Self {
            offsets,
            targets,
            edges: edges.to_vec(),
        })
    }

    /// A graph with `node_count` nodes and no edges.
    pub fn empty(node_count: usize) -> SweepResult<Self> {
        Self::from_edges(node_count, &[])
    }

    /// Number of nodes `N`.
    pub fn size(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of undirected edges as supplied (self-loops and duplicates included).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Neighbors of `node`, in adjacency order.
    ///
    /// Callers are expected to pass a node that passed [`Graph::validate`];
    /// an out-of-range id yields an empty slice.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let idx = node as usize;
        if idx >= self.size() {
            return &[];
        }
        &self.targets[self.offsets[idx]..self.offsets[idx + 1]]
    }

    /// Number of adjacency entries for `node`.
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// Whether `node` lies in `[0, N)`.
    pub fn contains(&self, node: NodeId) -> bool {
        (node as usize) < self.size()
    }

    /// Reject a node id outside `[0, N)` with [`SweepError::InvalidNode`].
    pub fn validate(&self, node: NodeId) -> SweepResult<NodeId> {
        if self.contains(node) {
            Ok(node)
        } else {
            Err(SweepError::InvalidNode(node as i64))
        }
    }

    /// Convert a signed, caller-supplied id into a [`NodeId`].
    ///
    /// Negative ids and ids `>= N` fail with [`SweepError::InvalidNode`].
    pub fn check_node(&self, raw: i64) -> SweepResult<NodeId> {
        if raw < 0 || raw as u64 >= self.size() as u64 {
            return Err(SweepError::InvalidNode(raw));
        }
        Ok(raw as NodeId)
    }

    /// The undirected edge list the graph was built from.
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Largest adjacency list length, 0 for an edgeless graph.
    pub fn max_degree(&self) -> usize {
        (0..self.size())
            .map(|u| self.offsets[u + 1] - self.offsets[u])
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes with an empty adjacency list.
    pub fn isolated_count(&self) -> usize {
        (0..self.size())
            .filter(|&u| self.offsets[u + 1] == self.offsets[u])
            .count()
    }
}

/// A `len`-element vector of `value`, failing instead of aborting when the
/// allocation cannot be satisfied.
fn filled<T: Clone>(len: usize, value: T) -> SweepResult<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|e| SweepError::Allocation(e.to_string()))?;
    v.resize(len, value);
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_is_symmetric_and_ordered() {
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
        assert_eq!(g.size(), 4);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.neighbors(0), &[1, 2]);
        assert_eq!(g.neighbors(1), &[0, 2]);
        assert_eq!(g.neighbors(2), &[1, 0, 3]);
        assert_eq!(g.neighbors(3), &[2]);
    }

    #[test]
    fn test_node_count_beyond_id_space() {
        assert!(matches!(
            Graph::empty(MAX_NODES + 1),
            Err(SweepError::TooLarge { limit, .. }) if limit == MAX_NODES as u64
        ));
    }

    #[test]
    fn test_unbackable_allocation_is_an_error() {
        assert!(matches!(
            filled(usize::MAX / 2, 0usize),
            Err(SweepError::Allocation(_))
        ));
    }

    #[test]
    fn test_self_loop_and_duplicates_kept() {
        let g = Graph::from_edges(2, &[(0, 0), (0, 1), (0, 1)]).unwrap();
        assert_eq!(g.neighbors(0), &[0, 1, 1]);
        assert_eq!(g.neighbors(1), &[0, 0]);
        assert_eq!(g.max_degree(), 3);
    }

    #[test]
    fn test_out_of_range_edge() {
        let err = Graph::from_edges(3, &[(0, 1), (1, 3)]).unwrap_err();
        assert!(matches!(
            err,
            SweepError::OutOfRange {
                node: 3,
                node_count: 3
            }
        ));
    }

    #[test]
    fn test_check_node() {
        let g = Graph::empty(3).unwrap();
        assert_eq!(g.check_node(2).unwrap(), 2);
        assert!(matches!(g.check_node(3), Err(SweepError::InvalidNode(3))));
        assert!(matches!(g.check_node(-1), Err(SweepError::InvalidNode(-1))));
        assert!(matches!(g.validate(7), Err(SweepError::InvalidNode(7))));
        assert_eq!(g.isolated_count(), 3);
    }

    #[test]
    fn test_empty_graph_has_no_valid_nodes() {
        let g = Graph::empty(0).unwrap();
        assert_eq!(g.size(), 0);
        assert!(g.neighbors(0).is_empty());
        assert!(g.validate(0).is_err());
    }
}
