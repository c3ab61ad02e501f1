//! yUML line parser using chumsky
//!
//! Turns a single line of yUML text into a [`Statement`]. The grammar is
//! line-oriented: every bracketed token names a class, and a line with exactly
//! two tokens is also a relation whose kind is picked by [`RelationMarker`].

use crate::core::chumsky_utils::{bracket_tokens, yuml_comment};
use crate::core::RelationKind;
use chumsky::prelude::*;

/// Relation marker found on a two-token line
///
/// Variants are listed in the order they are tested; the first marker present
/// anywhere on the line wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationMarker {
    /// `^`
    Inheritance,
    /// `++`
    Composition,
    /// `*`
    Aggregation,
    /// `->`
    Association,
    /// No recognised marker
    Unknown,
}

impl RelationMarker {
    /// Classify a line by its first matching marker.
    ///
    /// The whole line is inspected, bracket contents included, so
    /// `[A]^[B]*[C]`-style lines and attribute lists containing `*` are
    /// resolved by priority alone.
    pub fn classify(line: &str) -> Self {
        if line.contains('^') {
            RelationMarker::Inheritance
        } else if line.contains("++") {
            RelationMarker::Composition
        } else if line.contains('*') {
            RelationMarker::Aggregation
        } else if line.contains("->") {
            RelationMarker::Association
        } else {
            RelationMarker::Unknown
        }
    }

    /// The association kind for this marker, or `None` for inheritance
    pub fn relation_kind(self) -> Option<RelationKind> {
        match self {
            RelationMarker::Inheritance => None,
            RelationMarker::Composition => Some(RelationKind::Composition),
            RelationMarker::Aggregation => Some(RelationKind::Aggregation),
            RelationMarker::Association => Some(RelationKind::Association),
            RelationMarker::Unknown => Some(RelationKind::Unknown),
        }
    }
}

/// One classified line of yUML text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Blank line or `//` comment
    Skip,
    /// Zero, one, or three-plus class tokens: classes only, no relation
    Classes(Vec<String>),
    /// Exactly two class tokens, in source order
    Relation {
        source: String,
        target: String,
        marker: RelationMarker,
    },
}

/// Normalize a raw bracket body into a class name.
///
/// Everything from the first `|` on is an attribute list and is dropped.
pub fn normalize_class_name(raw: &str) -> String {
    raw.split_once('|')
        .map_or(raw, |(name, _attributes)| name)
        .trim()
        .to_string()
}

/// Chumsky-based yUML line parser
pub struct ChumskyYumlParser;

impl ChumskyYumlParser {
    pub fn new() -> Self {
        Self
    }

    /// Raw bracket bodies on a line, in source order
    pub fn raw_tokens<'src>(&self, line: &'src str) -> Vec<&'src str> {
        // Every character is consumed by one branch or the other, so the
        // scanner cannot fail; an error here would mean no tokens anyway.
        bracket_tokens()
            .parse(line)
            .into_result()
            .unwrap_or_default()
    }

    /// Parse one line into a statement
    pub fn parse_line(&self, line: &str) -> Statement {
        let trimmed = line.trim();
        if trimmed.is_empty() || Self::is_comment(trimmed) {
            return Statement::Skip;
        }

        let mut names: Vec<String> = self
            .raw_tokens(trimmed)
            .into_iter()
            .map(normalize_class_name)
            .collect();

        if names.len() != 2 {
            return Statement::Classes(names);
        }

        let target = names.pop().unwrap_or_default();
        let source = names.pop().unwrap_or_default();
        Statement::Relation {
            source,
            target,
            marker: RelationMarker::classify(trimmed),
        }
    }

    fn is_comment(trimmed: &str) -> bool {
        yuml_comment().parse(trimmed).into_result().is_ok()
    }
}

impl Default for ChumskyYumlParser {
    fn default() -> Self {
        Self::new()
    }
}
