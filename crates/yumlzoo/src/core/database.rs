//! Storage seam between parsers and statistics
//!
//! A parser only appends: it records class names and relations in the order
//! it meets them. Nodes behave as a set, edges as a list, and an edge may name
//! endpoints that were never recorded as nodes.

use anyhow::Result;

/// Append-only store for one parsed diagram
pub trait Database: Send + Sync {
    /// Node record, keyed by its name
    type Node: Clone + Send + Sync;

    /// Edge record
    type Edge: Clone + Send + Sync;

    /// Record a node; `Ok(false)` when a node with the same name is already known
    fn add_node(&mut self, node: Self::Node) -> Result<bool>;

    /// Append an edge after all previously added edges
    fn add_edge(&mut self, edge: Self::Edge) -> Result<()>;

    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// Edges in insertion order
    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    fn node_count(&self) -> usize {
        self.nodes().count()
    }

    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
