//! Core type definitions for diagram processing
//!
//! Relation kinds recognised on association lines, and the wider label set
//! used by histograms where inheritance competes alongside them.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Kind of a non-inheritance relation between two classes
///
/// The marker that selects each kind is checked in a fixed priority order
/// by the parser; see [`crate::plugins::yuml::RelationMarker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationKind {
    /// `++`
    Composition,
    /// `*`
    Aggregation,
    /// `->`
    Association,
    /// Any other joining text
    Unknown,
}

impl RelationKind {
    /// All kinds, in marker priority order
    pub const ALL: [RelationKind; 4] = [
        RelationKind::Composition,
        RelationKind::Aggregation,
        RelationKind::Association,
        RelationKind::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Composition => "composition",
            RelationKind::Aggregation => "aggregation",
            RelationKind::Association => "association",
            RelationKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "composition" => Ok(RelationKind::Composition),
            "aggregation" => Ok(RelationKind::Aggregation),
            "association" => Ok(RelationKind::Association),
            "unknown" => Ok(RelationKind::Unknown),
            _ => Err(format!("Unknown relation kind: {}", s)),
        }
    }
}

impl Serialize for RelationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A label in a relation histogram: an association kind or inheritance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationLabel {
    Kind(RelationKind),
    Inheritance,
}

impl RelationLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationLabel::Kind(kind) => kind.as_str(),
            RelationLabel::Inheritance => "inheritance",
        }
    }
}

impl From<RelationKind> for RelationLabel {
    fn from(kind: RelationKind) -> Self {
        RelationLabel::Kind(kind)
    }
}

impl fmt::Display for RelationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("inheritance") {
            return Ok(RelationLabel::Inheritance);
        }
        RelationKind::from_str(s)
            .map(RelationLabel::Kind)
            .map_err(|_| format!("Unknown relation label: {}", s))
    }
}

impl Serialize for RelationLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_kind_display() {
        assert_eq!(RelationKind::Composition.to_string(), "composition");
        assert_eq!(RelationKind::Aggregation.to_string(), "aggregation");
        assert_eq!(RelationKind::Association.to_string(), "association");
        assert_eq!(RelationKind::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_relation_kind_from_str() {
        for kind in RelationKind::ALL {
            assert_eq!(kind.as_str().parse::<RelationKind>().unwrap(), kind);
        }
        assert_eq!(
            "COMPOSITION".parse::<RelationKind>().unwrap(),
            RelationKind::Composition
        );
        assert!("inheritance".parse::<RelationKind>().is_err());
    }

    #[test]
    fn test_relation_label_from_str() {
        assert_eq!(
            "inheritance".parse::<RelationLabel>().unwrap(),
            RelationLabel::Inheritance
        );
        assert_eq!(
            "aggregation".parse::<RelationLabel>().unwrap(),
            RelationLabel::Kind(RelationKind::Aggregation)
        );
        assert!("realization".parse::<RelationLabel>().is_err());
    }
}
