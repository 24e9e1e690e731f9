//! Block outline overlay
//!
//! Each block `(x, y, w, h)` is stroked as a one-pixel outline over the
//! closed range `x..=x + w`, `y..=y + h`. The right and bottom edges
//! therefore land on the first column and row of the neighbouring blocks;
//! at the image border they fall outside and are clipped.

use crate::error::{RegionError, RegionResult};
use quadcomp_core::{Blocks, Color, Pix};

/// Outline color used when none is given.
pub const DEFAULT_OUTLINE_COLOR: Color = Color::RED;

/// Render `blocks` as outlines on a copy of `base`.
///
/// The base image is left untouched.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if a block does not lie
/// inside `base`.
pub fn render_overlay(base: &Pix, blocks: &Blocks, color: Color) -> RegionResult<Pix> {
    let grid = base.grid();
    if let Some(b) = blocks.iter().find(|b| !grid.contains_block(b)) {
        return Err(RegionError::InvalidParameters(format!(
            "block ({}) outside {}x{} image",
            b,
            base.width(),
            base.height()
        )));
    }

    let mut pm = base.to_mut();
    pm.draw_blocks(blocks, color);
    Ok(pm.into())
}
