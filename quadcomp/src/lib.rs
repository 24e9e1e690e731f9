//! quadcomp - Quadtree image decomposition for Rust
//!
//! Splits an RGB image into the largest blocks that are either uniform in
//! color or have reached a minimum size, renders the block outlines, and
//! estimates how much smaller the image would be stored as blocks.
//!
//! # Overview
//!
//! - [`region`] - decomposition, overlay rendering and metrics
//! - [`io`] - PNG, JPEG and PNM decoding to RGB, and encoding
//! - [`compress`] - the whole pipeline in one call
//!
//! # Example
//!
//! ```
//! use quadcomp::{Color, Pix, compress};
//! use quadcomp::region::QuadtreeParams;
//!
//! let pix = Pix::new_filled(16, 16, Color::BLACK).unwrap();
//! let report = compress(&pix, &QuadtreeParams::default()).unwrap();
//! assert_eq!(report.decomposition.len(), 1);
//! assert_eq!(report.metrics.compression_ratio, Some(96.0));
//! ```

mod error;
mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use quadcomp_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use quadcomp_io as io;
pub use quadcomp_region as region;

pub use error::{Error, Result};
pub use pipeline::{CompressionReport, compress, compress_file, compress_with_color};
