//! Diagram zoo corpus
//!
//! A zoo is a flat directory of diagram sources and their fragments, named
//! `<Model>.<ext>` or `<Model>_<class|rel><N>.<ext>`. This module indexes such
//! a directory, resolves model names to their `.yuml` source, and runs the
//! statistics pipeline over every model.

mod collect;
mod filename;
mod index;

pub use collect::{collect_stats, compute_model_stats};
pub use filename::{FragmentKind, ZooFileKind, ZooFileName};
pub use index::{ZooEntry, ZooIndex, YUML_EXTENSION};
