//! Decompose, render and measure in one call

use crate::error::Result;
use quadcomp_core::{Color, Pix};
use quadcomp_region::{
    CompressionMetrics, DEFAULT_OUTLINE_COLOR, Decomposition, QuadtreeParams, render_overlay,
};
use std::path::Path;

/// Everything one run produces
#[derive(Debug, Clone)]
pub struct CompressionReport {
    /// Leaf blocks and depth
    pub decomposition: Decomposition,
    /// Copy of the input with block outlines drawn
    pub overlay: Pix,
    /// Size estimates derived from the block count
    pub metrics: CompressionMetrics,
}

/// Run the pipeline with the default outline color.
pub fn compress(pix: &Pix, params: &QuadtreeParams) -> Result<CompressionReport> {
    compress_with_color(pix, params, DEFAULT_OUTLINE_COLOR)
}

/// Run the pipeline, outlining blocks in `color`.
pub fn compress_with_color(
    pix: &Pix,
    params: &QuadtreeParams,
    color: Color,
) -> Result<CompressionReport> {
    #[cfg(feature = "parallel")]
    let decomposition = quadcomp_region::decompose_parallel(pix.grid(), params)?;
    #[cfg(not(feature = "parallel"))]
    let decomposition = quadcomp_region::decompose(pix.grid(), params)?;

    let overlay = render_overlay(pix, decomposition.blocks(), color)?;
    let metrics = decomposition.metrics();

    tracing::debug!(
        blocks = metrics.block_count,
        ratio = ?metrics.compression_ratio,
        "compression report ready"
    );

    Ok(CompressionReport {
        decomposition,
        overlay,
        metrics,
    })
}

/// Read an image file and run the pipeline on it.
pub fn compress_file<P: AsRef<Path>>(
    path: P,
    params: &QuadtreeParams,
) -> Result<(Pix, CompressionReport)> {
    let pix = quadcomp_io::read_image(path)?;
    let report = compress(&pix, params)?;
    Ok((pix, report))
}
