//! Core error types for diagram processing
//!
//! Parsing itself never fails on malformed text; these errors cover the
//! surrounding concerns: reading sources, looking up models and aggregating.

use thiserror::Error;

/// Core error types for the yUML zoo pipeline
#[derive(Error, Debug)]
pub enum ZooError {
    #[error("Model not found: no .yuml source for '{model}'")]
    ModelNotFound { model: String },

    #[error("Cannot summarize an empty collection of diagram statistics")]
    EmptyCollection,

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ZooError {
    /// Create a new model-not-found error
    pub fn model_not_found(model: impl Into<String>) -> Self {
        Self::ModelNotFound {
            model: model.into(),
        }
    }

    /// Create a new configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
