//! Quadtree - variance-driven image decomposition
//!
//! A quadtree recursively divides an image into four quadrants until each
//! region is either small enough or uniform enough in color. The leaves,
//! in depth-first top-left, top-right, bottom-left, bottom-right order,
//! exactly tile the image.
//!
//! # Splitting rule
//!
//! A block `(x, y, w, h)` becomes a leaf when any of the following holds:
//!
//! - `w <= min_size`
//! - `h <= min_size`
//! - the largest per-channel standard deviation of its pixels is strictly
//!   below `threshold`
//!
//! Otherwise it splits at `w / 2` and `h / 2` (integer division); the right
//! and bottom quadrants take the odd remainder.
//!
//! # Depth
//!
//! The root has depth 1. No leaf is deeper than [`max_depth_bound`].

use crate::error::{RegionError, RegionResult};
use crate::metrics::CompressionMetrics;
use crate::params::QuadtreeParams;
use crate::stats::{ChannelStats, DirectStats, IntegralImage};
use quadcomp_core::{Block, Blocks, PixelGrid};

/// Leaves produced by a decomposition
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    width: u32,
    height: u32,
    blocks: Blocks,
    max_depth: u32,
}

impl Decomposition {
    /// Width of the decomposed image
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the decomposed image
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Leaves in emission order
    pub fn blocks(&self) -> &Blocks {
        &self.blocks
    }

    /// Number of leaves
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True if there are no leaves
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Depth of the deepest leaf (root = 1)
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Size accounting for this decomposition
    pub fn metrics(&self) -> CompressionMetrics {
        CompressionMetrics::compute(self.width, self.height, self.blocks.len())
    }

    /// Consume and return the leaves
    pub fn into_blocks(self) -> Blocks {
        self.blocks
    }
}

/// Upper bound on leaf depth for a `width × height` image
///
/// Returns `ceil(log2(max(width, height) / min_size)) + 1`, and at least 1.
pub fn max_depth_bound(width: u32, height: u32, min_size: u32) -> u32 {
    let longest = width.max(height) as u64;
    let min_size = min_size.max(1) as u64;
    let mut levels = 0;
    while min_size << levels < longest {
        levels += 1;
    }
    levels + 1
}

/// Decompose an image into uniform blocks.
///
/// Images of up to [`IntegralImage::MAX_PIXELS`] pixels get an
/// [`IntegralImage`], so each uniformity test costs four table lookups per
/// channel. The tables take 36 bytes per pixel on top of the image itself
/// (about 75 MB at the limit). Larger images fall back to [`DirectStats`],
/// which allocates nothing and scans each tested block once, for
/// `O(pixels × depth)` total work. Both paths return identical leaves.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `params` fails
/// [`QuadtreeParams::validate`].
///
/// # Examples
///
/// ```
/// use quadcomp_core::{Color, Pix};
/// use quadcomp_region::{QuadtreeParams, decompose};
///
/// let pix = Pix::new_filled(64, 64, Color::WHITE).unwrap();
/// let tree = decompose(pix.grid(), &QuadtreeParams::default()).unwrap();
/// assert_eq!(tree.len(), 1);
/// ```
pub fn decompose(grid: PixelGrid<'_>, params: &QuadtreeParams) -> RegionResult<Decomposition> {
    params.validate()?;
    match IntegralImage::new(grid) {
        Some(integral) => decompose_with_stats(&integral, params),
        None => {
            log_direct_fallback(grid);
            decompose_with_stats(&DirectStats::new(grid), params)
        }
    }
}

fn log_direct_fallback(grid: PixelGrid<'_>) {
    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        max_pixels = IntegralImage::MAX_PIXELS,
        "image too large for integral tables, scanning blocks directly"
    );
}

/// Decompose an image by scanning pixels directly for every block.
///
/// Produces the same leaves as [`decompose`] without the table memory.
pub fn decompose_direct(
    grid: PixelGrid<'_>,
    params: &QuadtreeParams,
) -> RegionResult<Decomposition> {
    decompose_with_stats(&DirectStats::new(grid), params)
}

/// Decompose using a caller-supplied statistics provider.
pub fn decompose_with_stats<S: ChannelStats + ?Sized>(
    stats: &S,
    params: &QuadtreeParams,
) -> RegionResult<Decomposition> {
    params.validate()?;
    let (width, height) = (stats.width(), stats.height());
    if width == 0 || height == 0 {
        return Err(RegionError::EmptyImage);
    }

    let mut blocks = Blocks::new();
    let mut max_depth = 0;
    subdivide(
        stats,
        params,
        Block::new_unchecked(0, 0, width, height),
        1,
        &mut blocks,
        &mut max_depth,
    );

    tracing::debug!(
        width,
        height,
        threshold = params.threshold,
        min_size = params.min_size,
        blocks = blocks.len(),
        max_depth,
        "quadtree decomposition complete"
    );

    Ok(Decomposition {
        width,
        height,
        blocks,
        max_depth,
    })
}

/// Leaf test shared by the sequential and parallel drivers.
#[inline]
fn is_leaf<S: ChannelStats + ?Sized>(stats: &S, params: &QuadtreeParams, b: &Block) -> bool {
    b.w <= params.min_size
        || b.h <= params.min_size
        || stats.region_stats(b).is_uniform(params.threshold)
}

fn subdivide<S: ChannelStats + ?Sized>(
    stats: &S,
    params: &QuadtreeParams,
    b: Block,
    depth: u32,
    out: &mut Blocks,
    max_depth: &mut u32,
) {
    if is_leaf(stats, params, &b) {
        out.push(b);
        *max_depth = (*max_depth).max(depth);
        return;
    }
    for child in b.quadrants() {
        subdivide(stats, params, child, depth + 1, out, max_depth);
    }
}

/// Parallel decomposition
///
/// The four children of each node are decomposed concurrently with
/// `rayon::join` and their leaves concatenated in TL, TR, BL, BR order, so
/// the result equals [`decompose`] exactly.
#[cfg(feature = "parallel")]
pub fn decompose_parallel(
    grid: PixelGrid<'_>,
    params: &QuadtreeParams,
) -> RegionResult<Decomposition> {
    params.validate()?;
    let decomposition = match IntegralImage::new(grid) {
        Some(integral) => parallel::decompose(&integral, params),
        None => {
            log_direct_fallback(grid);
            parallel::decompose(&DirectStats::new(grid), params)
        }
    };
    Ok(decomposition)
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::{Decomposition, is_leaf, subdivide as subdivide_seq};
    use crate::params::QuadtreeParams;
    use crate::stats::ChannelStats;
    use quadcomp_core::{Block, Blocks};

    /// Blocks of this area or smaller are finished on the current thread.
    const SEQUENTIAL_AREA: u64 = 64 * 64;

    pub(super) fn decompose<S: ChannelStats + Sync>(
        stats: &S,
        params: &QuadtreeParams,
    ) -> Decomposition {
        let (width, height) = (stats.width(), stats.height());
        let (blocks, max_depth) =
            subdivide(stats, params, Block::new_unchecked(0, 0, width, height), 1);

        tracing::debug!(
            width,
            height,
            blocks = blocks.len(),
            max_depth,
            "parallel quadtree decomposition complete"
        );

        Decomposition {
            width,
            height,
            blocks,
            max_depth,
        }
    }

    fn subdivide<S: ChannelStats + Sync>(
        stats: &S,
        params: &QuadtreeParams,
        b: Block,
        depth: u32,
    ) -> (Blocks, u32) {
        if b.area() <= SEQUENTIAL_AREA {
            let mut out = Blocks::new();
            let mut max_depth = 0;
            subdivide_seq(stats, params, b, depth, &mut out, &mut max_depth);
            return (out, max_depth);
        }
        if is_leaf(stats, params, &b) {
            return (vec![b].into(), depth);
        }

        let [tl, tr, bl, br] = b.quadrants();
        let (((mut out, d0), (mut b1, d1)), ((mut b2, d2), (mut b3, d3))) = rayon::join(
            || {
                rayon::join(
                    || subdivide(stats, params, tl, depth + 1),
                    || subdivide(stats, params, tr, depth + 1),
                )
            },
            || {
                rayon::join(
                    || subdivide(stats, params, bl, depth + 1),
                    || subdivide(stats, params, br, depth + 1),
                )
            },
        );

        out.append(&mut b1);
        out.append(&mut b2);
        out.append(&mut b3);
        let max_depth = d0.max(d1).max(d2).max(d3);
        (out, max_depth)
    }
}
