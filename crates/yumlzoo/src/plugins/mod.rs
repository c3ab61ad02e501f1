//! Plugin implementations for diagram notations
//!
//! Each plugin implements the core traits for its notation.

pub mod yuml;

pub use yuml::*;
