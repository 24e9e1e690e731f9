//! Errors raised while decoding input images or encoding overlays

use thiserror::Error;

/// Error type for reading and writing images
#[derive(Error, Debug)]
pub enum IoError {
    /// Opening, reading or writing a file failed
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// Format detected but not handled by this build (GIF, TIFF, ...)
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Header or raster is malformed or truncated
    #[error("malformed image: {0}")]
    InvalidData(String),

    /// The PNG or JPEG decoder rejected the stream
    #[error("cannot decode image: {0}")]
    DecodeError(String),

    /// The PNG or JPEG encoder failed
    #[error("cannot encode image: {0}")]
    EncodeError(String),

    /// Decoded dimensions could not form an RGB image
    #[error(transparent)]
    Core(#[from] quadcomp_core::Error),
}

/// Result type for image I/O
pub type IoResult<T> = Result<T, IoError>;
