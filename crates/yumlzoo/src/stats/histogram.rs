//! Relation label histogram
//!
//! Counts are kept in insertion order. Ranking ties go to the label that was
//! inserted first, which keeps results reproducible for a given input order.

use crate::core::{RelationKind, RelationLabel};
use indexmap::IndexMap;
use serde::Serialize;

/// Insertion-ordered label counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelHistogram {
    counts: IndexMap<RelationLabel, usize>,
}

impl LabelHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from per-kind association counts, in their existing order
    pub fn from_association_types(types: &IndexMap<RelationKind, usize>) -> Self {
        let mut histogram = Self::new();
        for (kind, count) in types {
            histogram.add(RelationLabel::Kind(*kind), *count);
        }
        histogram
    }

    /// Add `count` to a label, appending it if unseen
    pub fn add(&mut self, label: RelationLabel, count: usize) {
        *self.counts.entry(label).or_insert(0) += count;
    }

    /// Overwrite a label's count, appending it if unseen
    pub fn set(&mut self, label: RelationLabel, count: usize) {
        self.counts.insert(label, count);
    }

    /// Merge another histogram in; labels new to `self` keep `other`'s order
    pub fn merge(&mut self, other: &LabelHistogram) {
        for (label, count) in other.iter() {
            self.add(label, count);
        }
    }

    pub fn get(&self, label: RelationLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RelationLabel, usize)> + '_ {
        self.counts.iter().map(|(label, count)| (*label, *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Label with the highest count; the earliest inserted wins a tie.
    ///
    /// A label that is present with count 0 can still be returned when every
    /// count is 0. `None` only for an empty histogram.
    pub fn most_frequent(&self) -> Option<(RelationLabel, usize)> {
        let mut best: Option<(RelationLabel, usize)> = None;
        for (label, count) in self.iter() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((label, count)),
            }
        }
        best
    }
}
