//! yUML diagram parser
//!
//! Walks the input line by line, delegating each line to the chumsky-based
//! statement parser and writing the result into a [`Database`].

use super::chumsky_parser::{ChumskyYumlParser, Statement};
use super::database::{AssociationEdge, DiagramGraph, InheritanceEdge, Relation};
use crate::core::{Database, Parser};
use anyhow::Result;
use tracing::{debug, error, span, trace, Level};

/// Split text into lines on `\n`, `\r\n` or a lone `\r`
///
/// A `\r\n` pair leaves an empty piece between the two breaks, which the
/// statement parser skips as a blank line.
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    input.split(['\r', '\n'])
}

/// yUML parser implementation
pub struct YumlParser;

impl YumlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse input into a fresh graph. Never fails: lines that are not
    /// relations only contribute their class tokens.
    pub fn parse_graph(&self, input: &str) -> DiagramGraph {
        let mut graph = DiagramGraph::new();
        // Writes into a DiagramGraph cannot fail; keep whatever was stored
        if let Err(e) = self.parse(input, &mut graph) {
            error!(error = %e, "Failed to store parsed diagram");
        }
        graph
    }

    fn apply<D>(&self, input: &str, database: &mut D) -> Result<()>
    where
        D: Database<Node = String, Edge = Relation>,
    {
        let parse_span = span!(Level::DEBUG, "parse_yuml", input_len = input.len());
        let _enter = parse_span.enter();

        let chumsky = ChumskyYumlParser::new();
        let mut non_binary = 0usize;

        for (index, line) in split_lines(input).enumerate() {
            match chumsky.parse_line(line) {
                Statement::Skip => {}
                Statement::Classes(names) => {
                    trace!(line = index, ?names, "Not a binary relation");
                    non_binary += 1;
                    for name in names {
                        database.add_node(name)?;
                    }
                }
                Statement::Relation {
                    source,
                    target,
                    marker,
                } => {
                    trace!(line = index, %source, %target, ?marker, "Relation");
                    database.add_node(source.clone())?;
                    database.add_node(target.clone())?;
                    let relation = match marker.relation_kind() {
                        // Second token is the child: `[Parent]^[Child]`
                        None => Relation::Inheritance(InheritanceEdge::new(target, source)),
                        Some(kind) => {
                            Relation::Association(AssociationEdge::new(source, target, kind))
                        }
                    };
                    database.add_edge(relation)?;
                }
            }
        }

        let inheritance = database
            .edges()
            .filter(|relation| matches!(relation, Relation::Inheritance(_)))
            .count();
        debug!(
            classes = database.node_count(),
            inheritance,
            associations = database.edge_count() - inheritance,
            non_binary,
            "Parsed yUML diagram"
        );
        Ok(())
    }
}

impl Default for YumlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<DiagramGraph> for YumlParser {
    fn parse(&self, input: &str, database: &mut DiagramGraph) -> Result<()> {
        self.apply(input, database)
    }

    fn name(&self) -> &'static str {
        "yuml"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        let chumsky = ChumskyYumlParser::new();
        split_lines(input).any(|line| match chumsky.parse_line(line) {
            Statement::Skip => false,
            Statement::Classes(names) => !names.is_empty(),
            Statement::Relation { .. } => true,
        })
    }
}
