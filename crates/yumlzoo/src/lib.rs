//! yumlzoo - Structural statistics for yUML class diagrams
//!
//! A library for parsing the bracketed yUML class-diagram notation into a
//! graph of classes and typed relations, and for measuring those graphs one
//! diagram at a time or across a whole diagram zoo.
//!
//! # Quick Start
//!
//! ```rust
//! use yumlzoo::{compute_stats, parse};
//!
//! let graph = parse("[Animal]^[Dog]\n[Dog]->[Bone]");
//! let stats = compute_stats("Pets", &graph);
//! assert_eq!(stats.num_classes, 3);
//! assert_eq!(stats.num_blocks, 5);
//! assert_eq!(stats.tree_depth.levels(), 1);
//! ```
//!
//! # Working with a zoo
//!
//! ```rust,no_run
//! use yumlzoo::prelude::*;
//!
//! let index = ZooIndex::scan("dataset/zoo")?;
//! let records = collect_stats(&index)?;
//! let summary = summarize(&records)?;
//! println!("deepest: {:?}", summary.max_depth_models);
//! # Ok::<(), yumlzoo::ZooError>(())
//! ```

pub mod core;
pub mod corpus;
pub mod plugins;
pub mod stats;

use std::path::Path;

pub use crate::core::*;
pub use corpus::{collect_stats, compute_model_stats, ZooIndex};
pub use plugins::yuml::{AssociationEdge, DiagramGraph, InheritanceEdge, YumlParser};
pub use stats::{
    compute_stats, summarize, summarize_with, DatasetSummary, DiagramStats, SummaryOptions,
    TreeDepth,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{Database, Parser, RelationKind, RelationLabel, ZooError};
    pub use crate::corpus::{collect_stats, compute_model_stats, ZooEntry, ZooFileName, ZooIndex};
    pub use crate::plugins::yuml::{
        AssociationEdge, ChumskyYumlParser, DiagramGraph, InheritanceEdge, Relation,
        RelationMarker, Statement, YumlParser,
    };
    pub use crate::stats::{
        compute_stats, summarize, summarize_with, DatasetSummary, DenseModel, DiagramStats,
        LabelHistogram, Spread, SummaryOptions, TreeDepth,
    };
}

/// Parse yUML text into a diagram graph
///
/// Never fails: blank lines, `//` comments and lines that are not binary
/// relations are skipped or only contribute their class names.
///
/// # Example
/// ```rust
/// use yumlzoo::parse;
///
/// let graph = parse("[A]^[B]\n[B]++[C]");
/// assert_eq!(graph.class_count(), 3);
/// assert_eq!(graph.inheritance_count(), 1);
/// assert_eq!(graph.association_count(), 1);
/// ```
pub fn parse(input: &str) -> DiagramGraph {
    YumlParser::new().parse_graph(input)
}

/// Read a UTF-8 yUML file and parse it
///
/// # Returns
/// * `Ok(DiagramGraph)` - The parsed graph
/// * `Err(ZooError::Io)` - If the file cannot be read as UTF-8 text
pub fn parse_file(path: impl AsRef<Path>) -> Result<DiagramGraph, ZooError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Reading yUML source");
    let content = std::fs::read_to_string(path)?;
    Ok(parse(&content))
}
