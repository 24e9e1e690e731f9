//! Error types for quadcomp-region

use thiserror::Error;

/// Errors from decomposition, overlay rendering and parameter checks
#[derive(Debug, Error)]
pub enum RegionError {
    /// Invalid geometry or image passed through from the core types
    #[error(transparent)]
    Core(#[from] quadcomp_core::Error),

    /// Threshold, minimum block size or block list rejected
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The statistics source covers no pixels
    #[error("cannot decompose an image with no pixels")]
    EmptyImage,
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
