//! Inheritance tree depth
//!
//! Depth is the longest directed path, counted in edges, through the graph of
//! child-to-parent inheritance edges.

use crate::plugins::yuml::InheritanceEdge;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use serde::Serialize;
use std::collections::HashMap;

/// Depth of an inheritance hierarchy
///
/// `Empty` and `Cyclic` both count as zero levels in numeric statistics, but
/// stay distinguishable so a cycle is never mistaken for "no inheritance".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "levels", rename_all = "lowercase")]
pub enum TreeDepth {
    /// No inheritance edges
    Empty,
    /// The inheritance edges contain a cycle (self-inheritance included)
    Cyclic,
    /// Acyclic hierarchy with the given longest path length
    Depth(usize),
}

impl TreeDepth {
    /// Compute the depth of the hierarchy formed by `edges`.
    ///
    /// Repeated edges collapse into one.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'a InheritanceEdge>,
    {
        let mut graph: DiGraphMap<&'a str, ()> = DiGraphMap::new();
        for edge in edges {
            graph.add_edge(edge.child.as_str(), edge.parent.as_str(), ());
        }

        if graph.node_count() == 0 {
            return TreeDepth::Empty;
        }

        let Ok(order) = toposort(&graph, None) else {
            return TreeDepth::Cyclic;
        };

        // longest[n] = longest path ending at n; settled once n is reached in
        // topological order
        let mut longest: HashMap<&str, usize> = HashMap::with_capacity(order.len());
        let mut depth = 0;
        for node in order {
            let here = longest.get(node).copied().unwrap_or(0);
            depth = depth.max(here);
            for next in graph.neighbors_directed(node, Direction::Outgoing) {
                let entry = longest.entry(next).or_insert(0);
                *entry = (*entry).max(here + 1);
            }
        }

        TreeDepth::Depth(depth)
    }

    /// Numeric depth; `Empty` and `Cyclic` report 0
    pub fn levels(self) -> usize {
        match self {
            TreeDepth::Depth(levels) => levels,
            TreeDepth::Empty | TreeDepth::Cyclic => 0,
        }
    }

    pub fn is_cyclic(self) -> bool {
        matches!(self, TreeDepth::Cyclic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(&str, &str)]) -> Vec<InheritanceEdge> {
        pairs
            .iter()
            .map(|(child, parent)| InheritanceEdge::new(*child, *parent))
            .collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(TreeDepth::from_edges(&edges(&[])), TreeDepth::Empty);
        assert_eq!(TreeDepth::Empty.levels(), 0);
    }

    #[test]
    fn test_single_edge() {
        assert_eq!(TreeDepth::from_edges(&edges(&[("B", "A")])), TreeDepth::Depth(1));
    }

    #[test]
    fn test_chain() {
        let depth = TreeDepth::from_edges(&edges(&[("B", "A"), ("C", "B")]));
        assert_eq!(depth, TreeDepth::Depth(2));
        assert_eq!(depth.levels(), 2);
    }

    #[test]
    fn test_chain_in_any_edge_order() {
        let depth = TreeDepth::from_edges(&edges(&[("D", "C"), ("B", "A"), ("C", "B")]));
        assert_eq!(depth, TreeDepth::Depth(3));
    }

    #[test]
    fn test_two_cycle() {
        let depth = TreeDepth::from_edges(&edges(&[("A", "B"), ("B", "A")]));
        assert_eq!(depth, TreeDepth::Cyclic);
        assert_eq!(depth.levels(), 0);
        assert!(depth.is_cyclic());
    }

    #[test]
    fn test_self_inheritance_is_cyclic() {
        assert_eq!(TreeDepth::from_edges(&edges(&[("A", "A")])), TreeDepth::Cyclic);
    }

    #[test]
    fn test_longest_branch_wins() {
        // Diamond plus a longer side branch
        let depth = TreeDepth::from_edges(&edges(&[
            ("B", "A"),
            ("C", "A"),
            ("D", "B"),
            ("D", "C"),
            ("E", "D"),
            ("X", "Y"),
        ]));
        assert_eq!(depth, TreeDepth::Depth(3));
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let depth = TreeDepth::from_edges(&edges(&[("B", "A"), ("B", "A")]));
        assert_eq!(depth, TreeDepth::Depth(1));
    }
}
