//! PixelGrid - borrowed read-only view over RGB pixels
//!
//! A `PixelGrid` never owns pixel data. It is what decomposition and
//! statistics code takes as input, so those algorithms can read an image
//! without cloning it and without any way to modify it.

use super::Pix;
use crate::block::Block;
use crate::color;
use crate::error::{Error, Result};

/// Read-only view of a row-major grid of packed RGB pixels.
#[derive(Debug, Clone, Copy)]
pub struct PixelGrid<'a> {
    data: &'a [u32],
    width: u32,
    height: u32,
}

impl<'a> PixelGrid<'a> {
    /// Wrap a caller-owned slice of packed `0xRRGGBBAA` words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::DimensionMismatch`] if `data.len() != width * height`.
    pub fn new(data: &'a [u32], width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub(crate) fn from_pix(pix: &'a Pix) -> Self {
        Self {
            data: pix.data(),
            width: pix.width(),
            height: pix.height(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The rectangle covering the whole grid.
    #[inline]
    pub fn bounds(&self) -> Block {
        Block::new_unchecked(0, 0, self.width, self.height)
    }

    /// Check that `b` lies entirely inside the grid.
    pub fn contains_block(&self, b: &Block) -> bool {
        b.right() <= self.width && b.bottom() <= self.height
    }

    /// Channels `[r, g, b]` at (x, y), or `None` outside the grid.
    pub fn rgb(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(color::channels(
            self.data[y as usize * self.width as usize + x as usize],
        ))
    }

    /// Packed words of row `y`, restricted to `x..x + w`.
    ///
    /// # Panics
    ///
    /// Panics if the span leaves the grid.
    #[inline]
    pub fn row_span(&self, x: u32, y: u32, w: u32) -> &'a [u32] {
        let start = y as usize * self.width as usize + x as usize;
        &self.data[start..start + w as usize]
    }

    /// Iterate over the packed words covered by `b`, row by row.
    ///
    /// `b` is clipped to the grid; an empty block yields nothing.
    pub fn block_pixels(&self, b: &Block) -> impl Iterator<Item = u32> + 'a {
        let grid = *self;
        let x_end = b.right().min(self.width);
        let y_end = b.bottom().min(self.height);
        let x = b.x.min(x_end);
        let y = b.y.min(y_end);
        (y..y_end).flat_map(move |row| grid.row_span(x, row, x_end - x).iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pix::Color;

    #[test]
    fn test_new_validates_length() {
        let data = [0u32; 6];
        assert!(PixelGrid::new(&data, 3, 2).is_ok());
        assert!(matches!(
            PixelGrid::new(&data, 4, 2),
            Err(Error::DimensionMismatch {
                expected: 8,
                actual: 6
            })
        ));
        assert!(PixelGrid::new(&data, 0, 2).is_err());
    }

    #[test]
    fn test_block_pixels() {
        let pix = Pix::from_fn(4, 4, |x, y| Color::new((x + 4 * y) as u8, 0, 0)).unwrap();
        let grid = pix.grid();
        let reds: Vec<u8> = grid
            .block_pixels(&Block::new_unchecked(1, 1, 2, 2))
            .map(color::red)
            .collect();
        assert_eq!(reds, vec![5, 6, 9, 10]);
        assert_eq!(
            grid.block_pixels(&Block::new_unchecked(3, 3, 0, 0)).count(),
            0
        );
    }

    #[test]
    fn test_rgb_and_bounds() {
        let pix = Pix::new_filled(3, 2, Color::new(1, 2, 3)).unwrap();
        let grid = pix.grid();
        assert_eq!(grid.rgb(2, 1), Some([1, 2, 3]));
        assert_eq!(grid.rgb(3, 1), None);
        assert_eq!(grid.bounds(), Block::new_unchecked(0, 0, 3, 2));
        assert!(grid.contains_block(&Block::new_unchecked(1, 0, 2, 2)));
        assert!(!grid.contains_block(&Block::new_unchecked(1, 0, 3, 2)));
    }
}
