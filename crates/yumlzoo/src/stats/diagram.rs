//! Per-diagram statistics

use super::{LabelHistogram, TreeDepth};
use crate::core::{RelationKind, RelationLabel};
use crate::plugins::yuml::DiagramGraph;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, span, warn, Level};

/// Structural statistics for one diagram
///
/// `num_associations` always equals the sum of `association_types`, and
/// `num_blocks` is classes + inheritance edges + association edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramStats {
    pub model: String,
    pub num_classes: usize,
    pub num_inheritance: usize,
    pub num_associations: usize,
    /// Association counts per kind, in first-seen order
    pub association_types: IndexMap<RelationKind, usize>,
    pub num_blocks: usize,
    pub tree_depth: TreeDepth,
    pub most_frequent_label: Option<RelationLabel>,
    /// `association_types` followed by an `inheritance` entry
    pub label_counts: LabelHistogram,
}

impl DiagramStats {
    /// Blocks per class, or `None` for a diagram without classes
    pub fn block_density(&self) -> Option<f64> {
        (self.num_classes > 0).then(|| self.num_blocks as f64 / self.num_classes as f64)
    }
}

/// Compute statistics for a parsed diagram
pub fn compute_stats(model: impl Into<String>, graph: &DiagramGraph) -> DiagramStats {
    let model = model.into();
    let stats_span = span!(Level::DEBUG, "compute_stats", model = %model);
    let _enter = stats_span.enter();

    let tree_depth = TreeDepth::from_edges(graph.inheritance());
    if tree_depth.is_cyclic() {
        warn!(model = %model, "Inheritance graph contains a cycle, depth reported as 0");
    }

    let mut association_types: IndexMap<RelationKind, usize> = IndexMap::new();
    for edge in graph.associations() {
        *association_types.entry(edge.kind).or_insert(0) += 1;
    }

    let num_classes = graph.class_count();
    let num_inheritance = graph.inheritance_count();
    let num_associations: usize = association_types.values().sum();
    let num_blocks = num_classes + num_inheritance + num_associations;

    let mut label_counts = LabelHistogram::from_association_types(&association_types);
    label_counts.set(RelationLabel::Inheritance, num_inheritance);
    let most_frequent_label = label_counts.most_frequent().map(|(label, _)| label);

    debug!(
        num_classes,
        num_inheritance,
        num_associations,
        num_blocks,
        tree_depth = tree_depth.levels(),
        "Computed diagram statistics"
    );

    DiagramStats {
        model,
        num_classes,
        num_inheritance,
        num_associations,
        association_types,
        num_blocks,
        tree_depth,
        most_frequent_label,
        label_counts,
    }
}
