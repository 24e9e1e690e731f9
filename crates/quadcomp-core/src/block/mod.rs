//! Block, Blocks - Rectangle regions
//!
//! A [`Block`] is an axis-aligned rectangle in pixel coordinates; a
//! [`Blocks`] is an ordered list of them. Decomposition results are
//! `Blocks` whose members partition an image.

mod draw;

use crate::error::{Error, Result};

/// A rectangle region `{x, y, w, h}`
///
/// Small and `Copy`; coordinates are unsigned since blocks never extend
/// to the left of or above the image origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Block {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Block {
    /// Create a new block
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero, or if the right or
    /// bottom edge overflows `u32`.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "block dimensions must be positive: w={}, h={}",
                w, h
            )));
        }
        if x.checked_add(w).is_none() || y.checked_add(h).is_none() {
            return Err(Error::InvalidParameter(format!(
                "block ({}, {}, {}, {}) overflows the coordinate range",
                x, y, w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a block without validation
    pub const fn new_unchecked(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Get the area in pixels
    #[inline]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Check if the block is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Split into four quadrants: top-left, top-right, bottom-left, bottom-right.
    ///
    /// Uses `w / 2` and `h / 2` (floor) for the left/top halves, so odd
    /// remainders go to the right and bottom children. The four children
    /// tile the block exactly. A child is empty when the matching dimension
    /// is 1.
    pub fn quadrants(&self) -> [Block; 4] {
        let half_w = self.w / 2;
        let half_h = self.h / 2;
        [
            Block::new_unchecked(self.x, self.y, half_w, half_h),
            Block::new_unchecked(self.x + half_w, self.y, self.w - half_w, half_h),
            Block::new_unchecked(self.x, self.y + half_h, half_w, self.h - half_h),
            Block::new_unchecked(
                self.x + half_w,
                self.y + half_h,
                self.w - half_w,
                self.h - half_h,
            ),
        ]
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.w, self.h)
    }
}

/// Ordered list of blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocks {
    blocks: Vec<Block>,
}

impl Blocks {
    /// Create a new empty list
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Get the number of blocks
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get a block by index
    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Add a block
    pub fn push(&mut self, b: Block) {
        self.blocks.push(b);
    }

    /// Move all blocks of `other` to the end of this list, keeping their order.
    pub fn append(&mut self, other: &mut Blocks) {
        self.blocks.append(&mut other.blocks);
    }

    /// Get all blocks as a slice
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterate over the blocks in order
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Sum of all block areas
    pub fn total_area(&self) -> u64 {
        self.blocks.iter().map(Block::area).sum()
    }

    /// Check that the blocks tile a `width x height` image exactly once.
    ///
    /// Every block must be non-empty and inside the image, and every pixel
    /// must be covered by exactly one block.
    pub fn is_partition_of(&self, width: u32, height: u32) -> bool {
        let mut cover = vec![0u8; width as usize * height as usize];
        for b in &self.blocks {
            if b.is_empty() || b.right() > width || b.bottom() > height {
                return false;
            }
            for y in b.y..b.bottom() {
                let row = y as usize * width as usize;
                for x in b.x..b.right() {
                    let c = &mut cover[row + x as usize];
                    if *c != 0 {
                        return false;
                    }
                    *c = 1;
                }
            }
        }
        cover.iter().all(|&c| c == 1)
    }
}

impl From<Vec<Block>> for Blocks {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl FromIterator<Block> for Blocks {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Blocks {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Blocks {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_new_validation() {
        assert!(Block::new(0, 0, 1, 1).is_ok());
        assert!(Block::new(0, 0, 0, 1).is_err());
        assert!(Block::new(0, 0, 1, 0).is_err());
        assert!(Block::new(u32::MAX, 0, 1, 1).is_err());
    }

    #[test]
    fn test_quadrants_even() {
        let q = Block::new_unchecked(0, 0, 32, 32).quadrants();
        assert_eq!(q[0], Block::new_unchecked(0, 0, 16, 16));
        assert_eq!(q[1], Block::new_unchecked(16, 0, 16, 16));
        assert_eq!(q[2], Block::new_unchecked(0, 16, 16, 16));
        assert_eq!(q[3], Block::new_unchecked(16, 16, 16, 16));
    }

    #[test]
    fn test_quadrants_odd_remainder_right_bottom() {
        let q = Block::new_unchecked(10, 20, 7, 5).quadrants();
        assert_eq!(q[0], Block::new_unchecked(10, 20, 3, 2));
        assert_eq!(q[1], Block::new_unchecked(13, 20, 4, 2));
        assert_eq!(q[2], Block::new_unchecked(10, 22, 3, 3));
        assert_eq!(q[3], Block::new_unchecked(13, 22, 4, 3));
        let total: u64 = q.iter().map(Block::area).sum();
        assert_eq!(total, 35);
    }

    #[test]
    fn test_quadrants_width_one_has_empty_children() {
        let q = Block::new_unchecked(0, 0, 1, 4).quadrants();
        assert!(q[0].is_empty());
        assert!(q[2].is_empty());
        assert_eq!(q[1].area() + q[3].area(), 4);
    }

    #[test]
    fn test_is_partition_of() {
        let whole = Block::new_unchecked(0, 0, 5, 3);
        let tiles: Blocks = whole.quadrants().into_iter().collect();
        assert!(tiles.is_partition_of(5, 3));
        assert_eq!(tiles.total_area(), 15);

        let mut overlapping = tiles.clone();
        overlapping.push(Block::new_unchecked(0, 0, 1, 1));
        assert!(!overlapping.is_partition_of(5, 3));

        let missing: Blocks = tiles.iter().copied().take(3).collect();
        assert!(!missing.is_partition_of(5, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Block::new_unchecked(1, 2, 3, 4).to_string(), "1 2 3 4");
    }
}
