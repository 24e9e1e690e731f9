//! Compression size estimates
//!
//! The estimate assumes an uncompressed image costs 3 bytes per pixel and
//! each leaf block costs 8 bytes (position, size and a mean color).

use std::fmt;

/// Bytes per pixel of the uncompressed RGB image.
pub const BYTES_PER_PIXEL: u64 = 3;

/// Estimated bytes per stored block.
pub const BYTES_PER_BLOCK: u64 = 8;

/// Size accounting for one decomposition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionMetrics {
    pub width: u32,
    pub height: u32,
    pub original_pixel_count: u64,
    pub block_count: u64,
    pub original_bytes: u64,
    pub estimated_compressed_bytes: u64,
    /// `original_bytes / estimated_compressed_bytes`, absent when there
    /// are no blocks
    pub compression_ratio: Option<f64>,
}

impl CompressionMetrics {
    /// Compute the metrics for a `width × height` image split into
    /// `block_count` blocks.
    pub fn compute(width: u32, height: u32, block_count: usize) -> Self {
        let original_pixel_count = width as u64 * height as u64;
        let block_count = block_count as u64;
        let original_bytes = original_pixel_count * BYTES_PER_PIXEL;
        let estimated_compressed_bytes = block_count * BYTES_PER_BLOCK;
        let compression_ratio = if estimated_compressed_bytes > 0 {
            Some(original_bytes as f64 / estimated_compressed_bytes as f64)
        } else {
            tracing::warn!(width, height, "no blocks; compression ratio is undefined");
            None
        };

        Self {
            width,
            height,
            original_pixel_count,
            block_count,
            original_bytes,
            estimated_compressed_bytes,
            compression_ratio,
        }
    }

    /// Original size in KiB
    pub fn original_kib(&self) -> f64 {
        self.original_bytes as f64 / 1024.0
    }

    /// Estimated compressed size in KiB
    pub fn compressed_kib(&self) -> f64 {
        self.estimated_compressed_bytes as f64 / 1024.0
    }
}

/// Format an integer with `,` thousands separators.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for CompressionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original Dimensions: {} × {}", self.width, self.height)?;
        writeln!(
            f,
            "Original Pixel Count: {}",
            group_thousands(self.original_pixel_count)
        )?;
        writeln!(
            f,
            "Blocks Used in Compression: {}",
            group_thousands(self.block_count)
        )?;
        writeln!(f, "Estimated Original Size: {:.2} KB", self.original_kib())?;
        writeln!(
            f,
            "Estimated Compressed Size: {:.2} KB",
            self.compressed_kib()
        )?;
        match self.compression_ratio {
            Some(ratio) => write!(f, "Estimated Compression Ratio: {:.2}×", ratio),
            None => write!(
                f,
                "Warning: compression resulted in zero blocks; check your threshold or image."
            ),
        }
    }
}
