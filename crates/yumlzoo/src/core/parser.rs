//! Core parser trait
//!
//! A parser turns diagram source text into database operations.

use super::Database;
use anyhow::Result;

/// Core trait for diagram parsers
///
/// Implementations should be lenient: lines they cannot interpret are skipped
/// rather than reported as failures. An `Err` is reserved for problems with the
/// database itself.
pub trait Parser<D: Database>: Send + Sync {
    /// Parse input text and write the result into `database`
    fn parse(&self, input: &str, database: &mut D) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check if the input looks like something this parser understands
    fn can_parse(&self, input: &str) -> bool;
}
