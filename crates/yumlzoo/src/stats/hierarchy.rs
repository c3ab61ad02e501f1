//! Inheritance hierarchy as a forest of parent-to-child trees

use crate::plugins::yuml::InheritanceEdge;
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use std::collections::HashSet;

/// One class in a depth-first walk of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyEntry<'a> {
    /// Distance from the root of its tree
    pub depth: usize,
    pub class: &'a str,
    /// The class is already an ancestor on this path; its subtree is not repeated
    pub cycle: bool,
}

/// Parent-to-child view of the inheritance edges of one diagram
///
/// Classes keep the order in which they first appear on an edge (child before
/// parent), and children keep the order of their edges.
#[derive(Debug, Clone)]
pub struct Hierarchy<'a> {
    graph: DiGraphMap<&'a str, ()>,
}

impl<'a> Hierarchy<'a> {
    /// Repeated edges collapse into one.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'a InheritanceEdge>,
    {
        let mut graph = DiGraphMap::new();
        for edge in edges {
            graph.add_node(edge.child.as_str());
            graph.add_node(edge.parent.as_str());
            graph.add_edge(edge.parent.as_str(), edge.child.as_str(), ());
        }
        Self { graph }
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Classes without a parent
    pub fn roots(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.graph.nodes().filter(|class| {
            self.graph
                .neighbors_directed(*class, Direction::Incoming)
                .next()
                .is_none()
        })
    }

    pub fn children(&self, class: &'a str) -> impl Iterator<Item = &'a str> + '_ {
        self.graph.neighbors_directed(class, Direction::Outgoing)
    }

    /// Pre-order walk of every tree, roots in first-seen order
    ///
    /// A class with several parents appears once under each of them.
    pub fn walk(&self) -> Vec<HierarchyEntry<'a>> {
        let mut entries = Vec::new();
        let mut path = Vec::new();
        for root in self.roots() {
            self.visit(root, 0, &mut path, &mut entries);
        }
        entries
    }

    fn visit(
        &self,
        class: &'a str,
        depth: usize,
        path: &mut Vec<&'a str>,
        entries: &mut Vec<HierarchyEntry<'a>>,
    ) {
        let cycle = path.contains(&class);
        entries.push(HierarchyEntry { depth, class, cycle });
        if cycle {
            return;
        }
        path.push(class);
        for child in self.children(class) {
            self.visit(child, depth + 1, path, entries);
        }
        path.pop();
    }

    /// Classes no root reaches, i.e. members of parentless cycles, in first-seen order
    pub fn unrooted(&self) -> Vec<&'a str> {
        let reached: HashSet<&str> = self.walk().into_iter().map(|entry| entry.class).collect();
        self.graph
            .nodes()
            .filter(|class| !reached.contains(class))
            .collect()
    }
}
