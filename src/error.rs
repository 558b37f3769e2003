//! Error types for radha-travels

use std::path::PathBuf;

use thiserror::Error;

/// Per-request estimator failures
#[derive(Debug, Error, PartialEq)]
pub enum FareError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Rate table / settings errors. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Rate table has no {service} rate for segment '{segment}'")]
    MissingRate {
        service: &'static str,
        segment: &'static str,
    },

    #[error("Rate table {service} block has unknown segment '{key}'")]
    UnknownSegment { service: &'static str, key: String },

    #[error("Rate table value {field} must be a non-negative number, got {value}")]
    InvalidRate { field: String, value: f64 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fare(#[from] FareError),

    #[error("{0}")]
    Validation(String),

    #[error("Gallery folder not found")]
    GalleryNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
