//! Error types for catalog and scene configuration loading.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while loading a catalog or a scene configuration.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog has no planets")]
    Empty,

    #[error("duplicate body name: {0}")]
    DuplicateName(String),

    #[error("{name}: {field} must be positive, got {value}")]
    NonPositive {
        name: String,
        field: &'static str,
        value: f32,
    },

    #[error("belt range invalid: inner {inner}, outer {outer}")]
    BeltRange { inner: f32, outer: f32 },

    #[error("belt size range invalid: min {min}, max {max}")]
    BeltSizeRange { min: f32, max: f32 },

    #[error("invalid scene config: {0}")]
    Config(String),
}
