//! Block drawing and painting operations
//!
//! Functions for outlining and filling blocks on images.

use crate::block::{Block, Blocks};
use crate::pix::{Color, PixMut};

/// Clip a block to image bounds, returning `(x, y, x_end, y_end)` or
/// `None` if nothing is left.
fn clip_block_to_image(b: &Block, img_w: u32, img_h: u32) -> Option<(u32, u32, u32, u32)> {
    let x1 = b.right().min(img_w);
    let y1 = b.bottom().min(img_h);
    if b.x >= x1 || b.y >= y1 {
        return None;
    }
    Some((b.x, b.y, x1, y1))
}

impl PixMut {
    /// Fill a block region with a constant color.
    pub fn paint_block(&mut self, b: &Block, color: Color) {
        let Some((x, y, x_end, y_end)) = clip_block_to_image(b, self.width(), self.height())
        else {
            return;
        };
        let val = color.to_pixel32();
        for py in y..y_end {
            for px in x..x_end {
                self.set_pixel_unchecked(px, py, val);
            }
        }
    }

    /// Draw 1-pixel outlines of all blocks with a given color.
    ///
    /// Blocks are drawn in list order. For blocks that tile an image the
    /// result does not depend on that order, since adjacent outlines
    /// coincide on their shared edge and all strokes use the same color.
    pub fn draw_blocks(&mut self, blocks: &Blocks, color: Color) {
        for b in blocks {
            self.render_block_outline(b, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Block, Blocks, Color, Pix};

    #[test]
    fn test_paint_block_clipped() {
        let mut pm = Pix::new(4, 4).unwrap().to_mut();
        pm.paint_block(&Block::new_unchecked(2, 2, 10, 10), Color::WHITE);
        let pix: Pix = pm.into();
        assert_eq!(pix.get_rgb(1, 1), Some((0, 0, 0)));
        assert_eq!(pix.get_rgb(3, 3), Some((255, 255, 255)));
        let white = pix
            .data()
            .iter()
            .filter(|&&p| p == Color::WHITE.to_pixel32())
            .count();
        assert_eq!(white, 4);
    }

    #[test]
    fn test_draw_blocks_order_independent() {
        let tiles: Blocks = Block::new_unchecked(0, 0, 9, 7).quadrants().into_iter().collect();
        let reversed: Blocks = tiles.iter().rev().copied().collect();

        let base = Pix::new_filled(9, 7, Color::new(10, 20, 30)).unwrap();
        let mut a = base.to_mut();
        a.draw_blocks(&tiles, Color::RED);
        let mut b = base.to_mut();
        b.draw_blocks(&reversed, Color::RED);

        let a: Pix = a.into();
        let b: Pix = b.into();
        assert_eq!(a.count_diff_pixels(&b), Some(0));
        assert!(a.count_diff_pixels(&base).unwrap() > 0);
    }
}
