//! quadcomp-region - Quadtree decomposition for quadcomp
//!
//! This crate provides the region processing at the heart of quadcomp:
//!
//! - **Quadtree decomposition** - Recursively split an image until every
//!   block is small or uniform in color
//! - **Channel statistics** - Exact per-channel variance, by direct scan
//!   or from summed-area tables
//! - **Overlay rendering** - Outline the resulting blocks on the image
//! - **Compression metrics** - Estimate the size saved by storing blocks
//!
//! # Examples
//!
//! ```
//! use quadcomp_core::{Block, Color, Pix};
//! use quadcomp_region::{QuadtreeParams, decompose, render_overlay};
//!
//! // Black left half, white right half
//! let pix = Pix::from_fn(64, 64, |x, _| {
//!     if x < 32 { Color::BLACK } else { Color::WHITE }
//! })
//! .unwrap();
//!
//! let tree = decompose(pix.grid(), &QuadtreeParams::default()).unwrap();
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.blocks().get(1), Some(&Block::new_unchecked(32, 0, 32, 32)));
//!
//! let overlay = render_overlay(&pix, tree.blocks(), Color::RED).unwrap();
//! assert_eq!(overlay.get_rgb(32, 10), Some((255, 0, 0)));
//!
//! let metrics = tree.metrics();
//! assert_eq!(metrics.estimated_compressed_bytes, 32);
//! ```

pub mod error;
pub mod metrics;
pub mod overlay;
pub mod params;
pub mod quadtree;
pub mod stats;

pub use error::{RegionError, RegionResult};
pub use metrics::{BYTES_PER_BLOCK, BYTES_PER_PIXEL, CompressionMetrics};
pub use overlay::{DEFAULT_OUTLINE_COLOR, render_overlay};
pub use params::{
    DEFAULT_MIN_SIZE, DEFAULT_THRESHOLD, MIN_SIZE_RANGE, QuadtreeParams, THRESHOLD_RANGE,
};
#[cfg(feature = "parallel")]
pub use quadtree::decompose_parallel;
pub use quadtree::{
    Decomposition, decompose, decompose_direct, decompose_with_stats, max_depth_bound,
};
pub use stats::{ChannelStats, DirectStats, IntegralImage, RegionStats};
