//! yUML class diagram plugin
//!
//! Parses the bracketed yUML notation (`[Parent]^[Child]`, `[A]++[B]`, ...)
//! into a [`DiagramGraph`] of classes, inheritance edges and typed
//! association edges.

mod chumsky_parser;
mod database;
mod parser;

pub use chumsky_parser::{normalize_class_name, ChumskyYumlParser, RelationMarker, Statement};
pub use database::{AssociationEdge, DiagramGraph, InheritanceEdge, Relation};
pub use parser::{split_lines, YumlParser};
