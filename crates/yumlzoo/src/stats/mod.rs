//! Structural statistics for parsed diagrams
//!
//! [`compute_stats`] derives a [`DiagramStats`] record from one
//! [`DiagramGraph`](crate::plugins::yuml::DiagramGraph); [`summarize`] folds a
//! collection of records into a [`DatasetSummary`].

mod depth;
mod diagram;
mod hierarchy;
mod histogram;
mod summary;

pub use depth::TreeDepth;
pub use diagram::{compute_stats, DiagramStats};
pub use hierarchy::{Hierarchy, HierarchyEntry};
pub use histogram::LabelHistogram;
pub use summary::{
    summarize, summarize_with, DatasetSummary, DenseModel, Spread, SummaryOptions,
    DEFAULT_TOP_DENSE,
};
