//! Error type for the quadcomp pipeline

use quadcomp_io::IoError;
use quadcomp_region::RegionError;
use thiserror::Error;

/// Errors from any stage of the pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Image decoding or encoding failed
    #[error(transparent)]
    Io(#[from] IoError),

    /// Decomposition or rendering failed
    #[error(transparent)]
    Region(#[from] RegionError),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
