//! Decomposition parameters
//!
//! [`QuadtreeParams`] holds the two knobs of a decomposition run: the
//! color-variance threshold and the minimum block size. The core accepts
//! any `threshold >= 0` and `min_size >= 1`; the narrower ranges a user
//! interface offers are exported as constants and checked separately by
//! [`QuadtreeParams::validate_ui_ranges`].

use crate::error::{RegionError, RegionResult};
use std::ops::RangeInclusive;

/// Default color-variance threshold.
pub const DEFAULT_THRESHOLD: f64 = 15.0;

/// Default minimum block size in pixels.
pub const DEFAULT_MIN_SIZE: u32 = 16;

/// Threshold range offered to interactive users.
pub const THRESHOLD_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Minimum block size range offered to interactive users.
pub const MIN_SIZE_RANGE: RangeInclusive<u32> = 4..=64;

/// Parameters for a quadtree decomposition
///
/// A block stops subdividing when `w <= min_size`, `h <= min_size`, or the
/// largest per-channel standard deviation of its pixels is strictly below
/// `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadtreeParams {
    /// Maximum per-channel standard deviation (exclusive) for a uniform block
    pub threshold: f64,
    /// Size floor applied to each dimension independently
    pub min_size: u32,
}

impl Default for QuadtreeParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_size: DEFAULT_MIN_SIZE,
        }
    }
}

impl QuadtreeParams {
    /// Create validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if `threshold` is negative
    /// or not finite, or if `min_size` is zero.
    pub fn new(threshold: f64, min_size: u32) -> RegionResult<Self> {
        let params = Self {
            threshold,
            min_size,
        };
        params.validate()?;
        Ok(params)
    }

    /// Set the threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the minimum block size
    pub fn with_min_size(mut self, min_size: u32) -> Self {
        self.min_size = min_size;
        self
    }

    /// Check the invariants the decomposition relies on.
    pub fn validate(&self) -> RegionResult<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(RegionError::InvalidParameters(format!(
                "threshold must be a finite number >= 0, got {}",
                self.threshold
            )));
        }
        if self.min_size == 0 {
            return Err(RegionError::InvalidParameters(
                "min_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Check the parameters against [`THRESHOLD_RANGE`] and [`MIN_SIZE_RANGE`].
    pub fn validate_ui_ranges(&self) -> RegionResult<()> {
        self.validate()?;
        if !THRESHOLD_RANGE.contains(&self.threshold) {
            return Err(RegionError::InvalidParameters(format!(
                "threshold {} outside {}..={}",
                self.threshold,
                THRESHOLD_RANGE.start(),
                THRESHOLD_RANGE.end()
            )));
        }
        if !MIN_SIZE_RANGE.contains(&self.min_size) {
            return Err(RegionError::InvalidParameters(format!(
                "min_size {} outside {}..={}",
                self.min_size,
                MIN_SIZE_RANGE.start(),
                MIN_SIZE_RANGE.end()
            )));
        }
        Ok(())
    }
}
