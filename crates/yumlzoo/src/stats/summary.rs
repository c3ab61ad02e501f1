//! Dataset-level aggregation of diagram statistics

use super::{DiagramStats, LabelHistogram};
use crate::core::{RelationLabel, ZooError};
use serde::Serialize;
use tracing::{debug, info, span, Level};

/// Number of models reported in the density ranking by default
pub const DEFAULT_TOP_DENSE: usize = 5;

/// Aggregation options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    top_dense: usize,
}

impl SummaryOptions {
    /// Options with a custom density ranking size; `top_dense` must be positive
    pub fn with_top_dense(top_dense: usize) -> Result<Self, ZooError> {
        if top_dense == 0 {
            return Err(ZooError::invalid_config(
                "density ranking size must be at least 1",
            ));
        }
        Ok(Self { top_dense })
    }

    pub fn top_dense(&self) -> usize {
        self.top_dense
    }
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            top_dense: DEFAULT_TOP_DENSE,
        }
    }
}

/// Mean and sample standard deviation of one per-model figure
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spread {
    pub mean: f64,
    /// `None` with fewer than two models
    pub std_dev: Option<f64>,
}

impl Spread {
    fn of(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std_dev = (values.len() > 1).then(|| {
            let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (squares / (n - 1.0)).sqrt()
        });
        Self { mean, std_dev }
    }
}

/// One entry of the density ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DenseModel {
    pub model: String,
    pub block_density: f64,
}

/// Aggregate statistics over a collection of diagrams
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total_models: usize,
    pub total_classes: usize,
    pub total_inheritance: usize,
    pub total_associations: usize,
    pub total_blocks: usize,

    pub classes_per_model: Spread,
    pub blocks_per_model: Spread,
    pub tree_depth: Spread,

    pub max_tree_depth: usize,
    pub min_tree_depth: usize,
    /// Every model at `max_tree_depth`, in record order
    pub max_depth_models: Vec<String>,
    /// Every model at `min_tree_depth`, in record order
    pub min_depth_models: Vec<String>,
    /// Models whose inheritance edges form a cycle (counted as depth 0)
    pub cyclic_models: Vec<String>,

    /// Association kinds in first-seen order, then `inheritance`
    pub label_frequency: LabelHistogram,
    pub most_frequent_label_overall: Option<RelationLabel>,

    /// Highest blocks-per-class first; models without classes are left out
    pub top_dense_models: Vec<DenseModel>,
}

/// Summarize with default options
pub fn summarize(records: &[DiagramStats]) -> Result<DatasetSummary, ZooError> {
    summarize_with(records, &SummaryOptions::default())
}

/// Summarize a non-empty collection of diagram statistics
pub fn summarize_with(
    records: &[DiagramStats],
    options: &SummaryOptions,
) -> Result<DatasetSummary, ZooError> {
    let summary_span = span!(Level::INFO, "summarize", records = records.len());
    let _enter = summary_span.enter();

    if records.is_empty() {
        return Err(ZooError::EmptyCollection);
    }

    let total_classes: usize = records.iter().map(|r| r.num_classes).sum();
    let total_inheritance: usize = records.iter().map(|r| r.num_inheritance).sum();
    let total_associations: usize = records.iter().map(|r| r.num_associations).sum();
    let total_blocks: usize = records.iter().map(|r| r.num_blocks).sum();

    let classes: Vec<f64> = records.iter().map(|r| r.num_classes as f64).collect();
    let blocks: Vec<f64> = records.iter().map(|r| r.num_blocks as f64).collect();
    let depths: Vec<f64> = records
        .iter()
        .map(|r| r.tree_depth.levels() as f64)
        .collect();
    let classes_per_model = Spread::of(&classes);
    let blocks_per_model = Spread::of(&blocks);
    let tree_depth = Spread::of(&depths);

    let levels = records.iter().map(|r| r.tree_depth.levels());
    let max_tree_depth = levels.clone().max().unwrap_or(0);
    let min_tree_depth = levels.min().unwrap_or(0);
    let models_at = |depth: usize| -> Vec<String> {
        records
            .iter()
            .filter(|r| r.tree_depth.levels() == depth)
            .map(|r| r.model.clone())
            .collect()
    };
    let max_depth_models = models_at(max_tree_depth);
    let min_depth_models = models_at(min_tree_depth);
    let cyclic_models: Vec<String> = records
        .iter()
        .filter(|r| r.tree_depth.is_cyclic())
        .map(|r| r.model.clone())
        .collect();

    let mut label_frequency = LabelHistogram::new();
    for record in records {
        for (kind, count) in &record.association_types {
            label_frequency.add(RelationLabel::Kind(*kind), *count);
        }
    }
    label_frequency.set(RelationLabel::Inheritance, total_inheritance);
    let most_frequent_label_overall = label_frequency.most_frequent().map(|(label, _)| label);

    let mut dense: Vec<DenseModel> = records
        .iter()
        .filter_map(|r| {
            r.block_density().map(|block_density| DenseModel {
                model: r.model.clone(),
                block_density,
            })
        })
        .collect();
    // Stable sort: equal densities keep record order
    dense.sort_by(|a, b| b.block_density.total_cmp(&a.block_density));
    dense.truncate(options.top_dense());

    debug!(total_classes, total_blocks, max_tree_depth, min_tree_depth, "Aggregated dataset");
    info!(models = records.len(), "Dataset summary computed");

    Ok(DatasetSummary {
        total_models: records.len(),
        total_classes,
        total_inheritance,
        total_associations,
        total_blocks,
        classes_per_model,
        blocks_per_model,
        tree_depth,
        max_tree_depth,
        min_tree_depth,
        max_depth_models,
        min_depth_models,
        cyclic_models,
        label_frequency,
        most_frequent_label_overall,
        top_dense_models: dense,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RelationKind;
    use crate::plugins::yuml::YumlParser;
    use crate::stats::compute_stats;

    fn record(model: &str, input: &str) -> DiagramStats {
        compute_stats(model, &YumlParser::new().parse_graph(input))
    }

    #[test]
    fn test_empty_collection_fails() {
        let result = summarize(&[]);
        assert!(matches!(result, Err(ZooError::EmptyCollection)));
    }

    #[test]
    fn test_options_reject_zero() {
        assert!(SummaryOptions::with_top_dense(0).is_err());
        assert_eq!(SummaryOptions::with_top_dense(3).unwrap().top_dense(), 3);
        assert_eq!(SummaryOptions::default().top_dense(), DEFAULT_TOP_DENSE);
    }

    #[test]
    fn test_totals_and_spread() {
        let records = vec![
            record("Chain", "[A]^[B]\n[B]^[C]"),
            record("Flat", "[A]->[B]"),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.total_models, 2);
        assert_eq!(summary.total_classes, 5);
        assert_eq!(summary.total_inheritance, 2);
        assert_eq!(summary.total_associations, 1);
        assert_eq!(summary.total_blocks, 8);

        assert_eq!(summary.classes_per_model.mean, 2.5);
        let std = summary.classes_per_model.std_dev.unwrap();
        assert!((std - 0.5f64.sqrt()).abs() < 1e-12);
        assert_eq!(summary.tree_depth.mean, 1.0);
    }

    #[test]
    fn test_single_record_has_no_std_dev() {
        let summary = summarize(&[record("Only", "[A]->[B]")]).unwrap();
        assert_eq!(summary.blocks_per_model.mean, 3.0);
        assert_eq!(summary.blocks_per_model.std_dev, None);
    }

    #[test]
    fn test_extremal_models_complete() {
        let records = vec![
            record("Deep1", "[A]^[B]\n[B]^[C]"),
            record("Shallow", "[A]->[B]"),
            record("Deep2", "[X]^[Y]\n[Y]^[Z]"),
            record("Cycle", "[A]^[B]\n[B]^[A]"),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.max_tree_depth, 2);
        assert_eq!(summary.max_depth_models, vec!["Deep1", "Deep2"]);
        assert_eq!(summary.min_tree_depth, 0);
        assert_eq!(summary.min_depth_models, vec!["Shallow", "Cycle"]);
        assert_eq!(summary.cyclic_models, vec!["Cycle"]);
    }

    #[test]
    fn test_label_frequency_order_and_winner() {
        let records = vec![
            record("One", "[A]*[B]\n[A]^[C]"),
            record("Two", "[A]++[B]\n[B]++[C]\n[C]*[D]"),
        ];
        let summary = summarize(&records).unwrap();
        let labels: Vec<_> = summary.label_frequency.iter().collect();
        assert_eq!(
            labels,
            vec![
                (RelationLabel::Kind(RelationKind::Aggregation), 2),
                (RelationLabel::Kind(RelationKind::Composition), 2),
                (RelationLabel::Inheritance, 1),
            ]
        );
        assert_eq!(
            summary.most_frequent_label_overall,
            Some(RelationLabel::Kind(RelationKind::Aggregation))
        );
    }

    #[test]
    fn test_density_ranking() {
        let records = vec![
            record("Sparse", "[A]\n[B]\n[C]"),
            record("Empty", "// nothing here"),
            record("DenseA", "[A]->[B]\n[A]*[B]"),
            record("DenseB", "[X]->[Y]\n[X]*[Y]"),
            record("Mid", "[A]->[B]"),
        ];
        let options = SummaryOptions::with_top_dense(3).unwrap();
        let summary = summarize_with(&records, &options).unwrap();

        let ranked: Vec<_> = summary
            .top_dense_models
            .iter()
            .map(|d| (d.model.as_str(), d.block_density))
            .collect();
        assert_eq!(ranked, vec![("DenseA", 2.0), ("DenseB", 2.0), ("Mid", 1.5)]);
    }

    #[test]
    fn test_density_excludes_classless_models() {
        let records = vec![record("Empty", ""), record("Lonely", "[A]")];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.top_dense_models.len(), 1);
        assert_eq!(summary.top_dense_models[0].model, "Lonely");
    }
}
