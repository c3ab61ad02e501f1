//! Core abstractions for yUML diagram processing
//!
//! This module defines the storage and parsing seams every diagram source goes
//! through, together with the shared relation types, errors and logging setup.

pub mod chumsky_utils;
mod database;
mod error;
pub mod logging;
mod parser;
mod types;

pub use database::*;
pub use error::*;
pub use logging::*;
pub use parser::*;
pub use types::*;
