//! Synthetic test images
//!
//! Deterministic generators for the inputs used across the regression
//! tests. The pseudo-random generator is a fixed xorshift so images are
//! identical on every platform and run.

use crate::TestResult;
use quadcomp_core::{Block, Color, Pix};

/// A single-color image.
pub fn solid(width: u32, height: u32, color: Color) -> TestResult<Pix> {
    Ok(Pix::new_filled(width, height, color)?)
}

/// Left half `left`, right half `right` (split at `width / 2`).
pub fn vertical_split(width: u32, height: u32, left: Color, right: Color) -> TestResult<Pix> {
    let half = width / 2;
    Ok(Pix::from_fn(width, height, |x, _| {
        if x < half { left } else { right }
    })?)
}

/// Checkerboard of `cell`-sized squares alternating between two colors.
pub fn checkerboard(width: u32, height: u32, cell: u32, a: Color, b: Color) -> TestResult<Pix> {
    let cell = cell.max(1);
    Ok(Pix::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b }
    })?)
}

/// Smooth diagonal gradient across all three channels.
pub fn gradient(width: u32, height: u32) -> TestResult<Pix> {
    let wd = width.max(2) - 1;
    let hd = height.max(2) - 1;
    Ok(Pix::from_fn(width, height, |x, y| {
        Color::new(
            (x * 255 / wd) as u8,
            (y * 255 / hd) as u8,
            ((x + y) * 255 / (wd + hd)) as u8,
        )
    })?)
}

/// Uniform noise from a fixed seed.
pub fn noise(width: u32, height: u32, seed: u64) -> TestResult<Pix> {
    let mut state = seed | 1;
    Ok(Pix::from_fn(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let v = state.to_le_bytes();
        Color::new(v[0], v[1], v[2])
    })?)
}

/// A flat background with solid rectangles painted on top, in order.
pub fn with_rects(
    width: u32,
    height: u32,
    background: Color,
    rects: &[(Block, Color)],
) -> TestResult<Pix> {
    let mut pm = Pix::new_filled(width, height, background)?.to_mut();
    for (b, c) in rects {
        pm.paint_block(b, *c);
    }
    Ok(pm.into())
}
