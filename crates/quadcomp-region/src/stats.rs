//! Per-channel block statistics
//!
//! A block is uniform when the largest of its three per-channel population
//! standard deviations is below the decomposition threshold. Statistics are
//! accumulated as exact integer sums (`n`, `Σv`, `Σv²` per channel), so the
//! variance numerator `n·Σv² − (Σv)²` is exact and every [`ChannelStats`]
//! implementation reports bit-identical results for the same block.
//!
//! Two providers are available:
//!
//! - [`DirectStats`] walks the block's pixels each time it is queried.
//! - [`IntegralImage`] precomputes summed-area tables once, then answers
//!   each query in constant time from four table lookups. The tables cost
//!   36 bytes per pixel, so they are only built for images of at most
//!   [`IntegralImage::MAX_PIXELS`] pixels.

use quadcomp_core::{Block, PixelGrid, color};

/// Exact channel sums over a set of pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionStats {
    /// Number of pixels
    pub count: u64,
    /// Per-channel sums `[Σr, Σg, Σb]`
    pub sum: [u64; 3],
    /// Per-channel sums of squares `[Σr², Σg², Σb²]`
    pub sum_sq: [u64; 3],
}

impl RegionStats {
    /// Accumulate one packed pixel.
    #[inline]
    pub fn add_pixel(&mut self, pixel: u32) {
        self.count += 1;
        for (c, v) in color::channels(pixel).into_iter().enumerate() {
            let v = v as u64;
            self.sum[c] += v;
            self.sum_sq[c] += v * v;
        }
    }

    /// Mean of channel `c`, or `None` for an empty set.
    pub fn mean(&self, c: usize) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum[c] as f64 / self.count as f64)
    }

    /// Population variance (ddof = 0) of channel `c`.
    ///
    /// An empty set has variance 0.
    pub fn variance(&self, c: usize) -> f64 {
        let n = self.count;
        if n == 0 {
            return 0.0;
        }
        let n128 = n as u128;
        let s = self.sum[c] as u128;
        let exact = n128
            .checked_mul(self.sum_sq[c] as u128)
            .zip(s.checked_mul(s))
            .map(|(a, b)| a.saturating_sub(b));
        match exact {
            Some(num) => num as f64 / (n as f64 * n as f64),
            None => {
                let mean = self.sum[c] as f64 / n as f64;
                (self.sum_sq[c] as f64 / n as f64 - mean * mean).max(0.0)
            }
        }
    }

    /// Population standard deviation of channel `c`.
    pub fn std_dev(&self, c: usize) -> f64 {
        self.variance(c).sqrt()
    }

    /// Largest standard deviation across the three channels.
    pub fn max_std(&self) -> f64 {
        (0..3).map(|c| self.std_dev(c)).fold(0.0, f64::max)
    }

    /// Uniformity test used by the decomposition.
    ///
    /// An empty set is uniform; otherwise `max_std() < threshold`.
    pub fn is_uniform(&self, threshold: f64) -> bool {
        self.count == 0 || self.max_std() < threshold
    }
}

/// Source of per-block channel statistics
pub trait ChannelStats {
    /// Width of the underlying image
    fn width(&self) -> u32;

    /// Height of the underlying image
    fn height(&self) -> u32;

    /// Statistics for the pixels covered by `b`, clipped to the image.
    fn region_stats(&self, b: &Block) -> RegionStats;
}

/// Statistics computed by scanning the pixels of each queried block
#[derive(Debug, Clone, Copy)]
pub struct DirectStats<'a> {
    grid: PixelGrid<'a>,
}

impl<'a> DirectStats<'a> {
    pub fn new(grid: PixelGrid<'a>) -> Self {
        Self { grid }
    }
}

impl ChannelStats for DirectStats<'_> {
    fn width(&self) -> u32 {
        self.grid.width()
    }

    fn height(&self) -> u32 {
        self.grid.height()
    }

    fn region_stats(&self, b: &Block) -> RegionStats {
        let mut stats = RegionStats::default();
        for pixel in self.grid.block_pixels(b) {
            stats.add_pixel(pixel);
        }
        stats
    }
}

/// Per-channel summed-area tables of values and squared values
///
/// Entry `(x, y)` of each table (with a zero row and column prepended)
/// holds the sum over the rectangle `[0, x) × [0, y)`. Value sums are
/// stored as `u32` and squared sums as `u64`, 36 bytes per table entry.
#[derive(Debug, Clone)]
pub struct IntegralImage {
    sum: Vec<[u32; 3]>,
    sum_sq: Vec<[u64; 3]>,
    width: u32,
    height: u32,
}

impl IntegralImage {
    /// Largest image, in pixels, for which tables are built (about 75 MB)
    ///
    /// Far below `u32::MAX / 255`, so no value sum can overflow.
    pub const MAX_PIXELS: u64 = 1 << 21;

    /// Whether a `width × height` image is within [`Self::MAX_PIXELS`].
    pub fn fits(width: u32, height: u32) -> bool {
        width as u64 * height as u64 <= Self::MAX_PIXELS
    }

    /// Build the tables for a grid.
    ///
    /// Returns `None` if the grid is larger than [`Self::MAX_PIXELS`].
    pub fn new(grid: PixelGrid<'_>) -> Option<Self> {
        let width = grid.width();
        let height = grid.height();
        if !Self::fits(width, height) {
            return None;
        }
        let stride = width as usize + 1;
        let len = stride * (height as usize + 1);
        let mut sum = vec![[0u32; 3]; len];
        let mut sum_sq = vec![[0u64; 3]; len];

        for y in 0..height {
            let mut row_sum = [0u32; 3];
            let mut row_sq = [0u64; 3];
            let above = y as usize * stride;
            let here = above + stride;
            for (x, &pixel) in grid.row_span(0, y, width).iter().enumerate() {
                for (c, v) in color::channels(pixel).into_iter().enumerate() {
                    row_sum[c] += v as u32;
                    row_sq[c] += v as u64 * v as u64;
                    sum[here + x + 1][c] = sum[above + x + 1][c] + row_sum[c];
                    sum_sq[here + x + 1][c] = sum_sq[above + x + 1][c] + row_sq[c];
                }
            }
        }

        Some(Self {
            sum,
            sum_sq,
            width,
            height,
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * (self.width as usize + 1) + x as usize
    }

    /// Rectangle sum from a table: `D - B - C + A`.
    #[inline]
    fn rect<T: Copy + Into<u64>>(
        &self,
        table: &[[T; 3]],
        x0: u32,
        y0: u32,
        x1: u32,
        y1: u32,
    ) -> [u64; 3] {
        let a = table[self.index(x0, y0)];
        let b = table[self.index(x1, y0)];
        let c = table[self.index(x0, y1)];
        let d = table[self.index(x1, y1)];
        let v = |t: T| -> u64 { t.into() };
        std::array::from_fn(|i| v(d[i]) + v(a[i]) - v(b[i]) - v(c[i]))
    }
}

impl ChannelStats for IntegralImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn region_stats(&self, b: &Block) -> RegionStats {
        let x1 = b.right().min(self.width);
        let y1 = b.bottom().min(self.height);
        let x0 = b.x.min(x1);
        let y0 = b.y.min(y1);
        let count = (x1 - x0) as u64 * (y1 - y0) as u64;
        if count == 0 {
            return RegionStats::default();
        }
        RegionStats {
            count,
            sum: self.rect(&self.sum, x0, y0, x1, y1),
            sum_sq: self.rect(&self.sum_sq, x0, y0, x1, y1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadcomp_core::{Color, Pix};

    #[test]
    fn test_two_pixel_std_is_exact() {
        let pix = Pix::from_fn(2, 1, |x, _| {
            if x == 0 { Color::BLACK } else { Color::new(30, 30, 30) }
        })
        .unwrap();
        let stats = DirectStats::new(pix.grid()).region_stats(&pix.grid().bounds());
        assert_eq!(stats.count, 2);
        assert_eq!(stats.variance(0), 225.0);
        assert_eq!(stats.max_std(), 15.0);
        assert!(!stats.is_uniform(15.0));
        assert!(stats.is_uniform(15.01));
    }

    #[test]
    fn test_max_std_picks_largest_channel() {
        let pix = Pix::from_fn(4, 1, |x, _| Color::new(10, (x * 2) as u8, (x * 20) as u8)).unwrap();
        let stats = DirectStats::new(pix.grid()).region_stats(&pix.grid().bounds());
        assert_eq!(stats.std_dev(0), 0.0);
        assert!(stats.std_dev(2) > stats.std_dev(1));
        assert_eq!(stats.max_std(), stats.std_dev(2));
        assert_eq!(stats.mean(0), Some(10.0));
    }

    #[test]
    fn test_empty_stats_are_uniform() {
        let stats = RegionStats::default();
        assert_eq!(stats.max_std(), 0.0);
        assert_eq!(stats.mean(1), None);
        assert!(stats.is_uniform(0.0));
    }

    #[test]
    fn test_integral_matches_direct() {
        let pix = Pix::from_fn(13, 9, |x, y| {
            Color::new((x * 19 + y) as u8, (x * y * 7) as u8, (255 - x * 3) as u8)
        })
        .unwrap();
        let direct = DirectStats::new(pix.grid());
        let integral = IntegralImage::new(pix.grid()).unwrap();
        for b in [
            Block::new_unchecked(0, 0, 13, 9),
            Block::new_unchecked(3, 2, 5, 4),
            Block::new_unchecked(12, 8, 1, 1),
            Block::new_unchecked(10, 6, 8, 8),
            Block::new_unchecked(20, 20, 2, 2),
        ] {
            assert_eq!(direct.region_stats(&b), integral.region_stats(&b), "{}", b);
        }
    }

    #[test]
    fn test_integral_saturated_sums() {
        // Every sum at its largest for this size
        let pix = Pix::new_filled(300, 200, Color::WHITE).unwrap();
        let integral = IntegralImage::new(pix.grid()).unwrap();
        let stats = integral.region_stats(&pix.grid().bounds());
        assert_eq!(stats.sum, [60_000 * 255; 3]);
        assert_eq!(stats.sum_sq, [60_000 * 255 * 255; 3]);
        assert_eq!(stats.max_std(), 0.0);
    }

    #[test]
    fn test_integral_pixel_budget() {
        assert!(IntegralImage::fits(2048, 1024));
        assert!(!IntegralImage::fits(2048, 1025));
        assert!(!IntegralImage::fits(4000, 3000));
        assert!(!IntegralImage::fits(u32::MAX, u32::MAX));
        assert!(IntegralImage::MAX_PIXELS * 255 < u32::MAX as u64);

        let pix = Pix::new(2049, 1024).unwrap();
        assert!(IntegralImage::new(pix.grid()).is_none());
    }
}
