//! Graphics rendering functions
//!
//! Axis-aligned line and rectangle outline rendering on RGB images.
//! Everything is clipped to the image; coordinates outside it are
//! silently skipped.

use super::PixMut;
use crate::block::Block;

/// RGB color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red color
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    /// Green color
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    /// Blue color
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    /// Compose as packed 32-bit pixel
    pub fn to_pixel32(&self) -> u32 {
        crate::color::compose_rgb(self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl PixMut {
    /// Render a horizontal run from `x1` to `x2` inclusive on row `y`.
    pub fn render_hline(&mut self, x1: u32, x2: u32, y: u32, color: Color) {
        if y >= self.height() || x1 >= self.width() {
            return;
        }
        let x2 = x2.min(self.width() - 1);
        let val = color.to_pixel32();
        for x in x1..=x2 {
            self.set_pixel_unchecked(x, y, val);
        }
    }

    /// Render a vertical run from `y1` to `y2` inclusive on column `x`.
    pub fn render_vline(&mut self, x: u32, y1: u32, y2: u32, color: Color) {
        if x >= self.width() || y1 >= self.height() {
            return;
        }
        let y2 = y2.min(self.height() - 1);
        let val = color.to_pixel32();
        for y in y1..=y2 {
            self.set_pixel_unchecked(x, y, val);
        }
    }

    /// Render a 1-pixel outline of a block.
    ///
    /// The stroke runs over the closed corner range `(x, y)..=(x + w, y + h)`:
    /// the right and bottom edges sit on the first column and row *after*
    /// the block, which is the left/top edge of the adjacent block. Edges
    /// that fall outside the image are clipped. Empty blocks draw nothing.
    pub fn render_block_outline(&mut self, b: &Block, color: Color) {
        if b.is_empty() {
            return;
        }
        let (x0, y0) = (b.x, b.y);
        let (x1, y1) = (b.right(), b.bottom());
        self.render_hline(x0, x1, y0, color);
        self.render_hline(x0, x1, y1, color);
        self.render_vline(x0, y0, y1, color);
        self.render_vline(x1, y0, y1, color);
    }
}
