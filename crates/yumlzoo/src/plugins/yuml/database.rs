//! yUML diagram graph
//!
//! Stores the class set and the relations of one parsed diagram.

use crate::core::{Database, RelationKind};
use anyhow::Result;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::BTreeSet;

/// Directed inheritance edge, child to parent
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct InheritanceEdge {
    pub child: String,
    pub parent: String,
}

impl InheritanceEdge {
    pub fn new(child: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            child: child.into(),
            parent: parent.into(),
        }
    }
}

/// Typed association edge, endpoints in source order
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct AssociationEdge {
    pub source: String,
    pub target: String,
    pub kind: RelationKind,
}

impl AssociationEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: RelationKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }
}

/// Any edge stored in a [`DiagramGraph`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relation {
    Inheritance(InheritanceEdge),
    Association(AssociationEdge),
}

/// Parse result for one diagram
///
/// Classes form a set; relations keep the order of the lines they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramGraph {
    classes: BTreeSet<String>,
    relations: Vec<Relation>,
}

impl DiagramGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a class name; returns false if it was already present
    pub fn insert_class(&mut self, name: impl Into<String>) -> bool {
        self.classes.insert(name.into())
    }

    pub fn push_inheritance(&mut self, child: impl Into<String>, parent: impl Into<String>) {
        self.relations
            .push(Relation::Inheritance(InheritanceEdge::new(child, parent)));
    }

    pub fn push_association(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        kind: RelationKind,
    ) {
        self.relations
            .push(Relation::Association(AssociationEdge::new(source, target, kind)));
    }

    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// All relations in line order
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn inheritance(&self) -> impl Iterator<Item = &InheritanceEdge> {
        self.relations.iter().filter_map(|relation| match relation {
            Relation::Inheritance(edge) => Some(edge),
            Relation::Association(_) => None,
        })
    }

    pub fn associations(&self) -> impl Iterator<Item = &AssociationEdge> {
        self.relations.iter().filter_map(|relation| match relation {
            Relation::Association(edge) => Some(edge),
            Relation::Inheritance(_) => None,
        })
    }

    pub fn inheritance_count(&self) -> usize {
        self.inheritance().count()
    }

    pub fn association_count(&self) -> usize {
        self.associations().count()
    }
}

impl Database for DiagramGraph {
    type Node = String;
    type Edge = Relation;

    fn add_node(&mut self, node: Self::Node) -> Result<bool> {
        Ok(self.insert_class(node))
    }

    fn add_edge(&mut self, edge: Self::Edge) -> Result<()> {
        self.relations.push(edge);
        Ok(())
    }

    fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
        self.classes.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &Self::Edge> {
        self.relations.iter()
    }

    fn node_count(&self) -> usize {
        self.classes.len()
    }

    fn edge_count(&self) -> usize {
        self.relations.len()
    }
}

impl Serialize for DiagramGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DiagramGraph", 3)?;
        state.serialize_field("classes", &self.classes)?;
        state.serialize_field("inheritance", &self.inheritance().collect::<Vec<_>>())?;
        state.serialize_field("associations", &self.associations().collect::<Vec<_>>())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_collapse_duplicates() {
        let mut graph = DiagramGraph::new();
        assert!(graph.insert_class("A"));
        assert!(!graph.insert_class("A"));
        assert!(graph.insert_class("B"));
        assert_eq!(graph.class_count(), 2);
        assert!(graph.contains_class("A"));
    }

    #[test]
    fn test_relations_split_by_type() {
        let mut graph = DiagramGraph::new();
        graph.push_inheritance("B", "A");
        graph.push_association("B", "C", RelationKind::Composition);
        graph.push_inheritance("C", "B");

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.inheritance_count(), 2);
        assert_eq!(graph.association_count(), 1);

        let parents: Vec<_> = graph.inheritance().map(|e| e.parent.as_str()).collect();
        assert_eq!(parents, vec!["A", "B"]);
    }

    #[test]
    fn test_database_trait_roundtrip() {
        let mut graph = DiagramGraph::new();
        assert!(graph.add_node("A".to_string()).unwrap());
        assert!(!graph.add_node("A".to_string()).unwrap());
        graph
            .add_edge(Relation::Association(AssociationEdge::new(
                "A",
                "A",
                RelationKind::Unknown,
            )))
            .unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edges().count(), 1);
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn test_multiple_inheritance_allowed() {
        let mut graph = DiagramGraph::new();
        graph.push_inheritance("C", "A");
        graph.push_inheritance("C", "B");
        assert_eq!(graph.inheritance_count(), 2);
    }
}
