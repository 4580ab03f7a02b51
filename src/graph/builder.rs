//! Fluent API for building Graph instances.

use crate::types::{NodeId, SweepResult};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Edges are validated when [`GraphBuilder::build`] runs, not when added.
pub struct GraphBuilder {
    node_count: usize,
    edges: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Create a new builder with no nodes.
    pub fn new() -> Self {
        Self {
            node_count: 0,
            edges: Vec::new(),
        }
    }

    /// Create a new builder with `node_count` nodes already allocated.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
        }
    }

    /// Allocate one more node, returns its ID.
    pub fn add_node(&mut self) -> NodeId {
        let id = self.node_count as NodeId;
        self.node_count += 1;
        id
    }

    /// Add an undirected edge.
    pub fn link(&mut self, u: NodeId, v: NodeId) -> &mut Self {
        self.edges.push((u, v));
        self
    }

    /// Add many undirected edges.
    pub fn link_all(&mut self, edges: &[(NodeId, NodeId)]) -> &mut Self {
        self.edges.extend_from_slice(edges);
        self
    }

    /// Number of nodes allocated so far.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Build the final Graph.
    pub fn build(self) -> SweepResult<Graph> {
        Graph::from_edges(self.node_count, &self.edges)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
