//! PIX - The RGB image container
//!
//! `Pix` holds an 8-bit-per-channel RGB image, one packed 32-bit word per
//! pixel (`0xRRGGBBAA`, alpha fixed at 255). Rows are stored top to bottom
//! with no padding, so the word for `(x, y)` is at `y * width + x`.
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, copy into a `PixMut` with [`Pix::to_mut`], then
//! convert back with `Into<Pix>`.
//! Read-only algorithms borrow a [`PixelGrid`] through [`Pix::grid`].

mod graphics;
mod grid;

pub use graphics::Color;
pub use grid::PixelGrid;

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

#[derive(Debug, Clone)]
struct PixData {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl PixData {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// PIX - RGB image container
///
/// # Examples
///
/// ```
/// use quadcomp_core::Pix;
///
/// let pix = Pix::new(640, 480).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new black image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, Color::BLACK)
    }

    /// Create a new image filled with a single color.
    pub fn new_filled(width: u32, height: u32, fill: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        let data = vec![fill.to_pixel32(); len];
        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create an image from interleaved 8-bit RGB bytes (`R, G, B, R, G, B, ...`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::DimensionMismatch`] if `bytes.len() != width * height * 3`.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if bytes.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let data = bytes
            .chunks_exact(3)
            .map(|c| color::compose_rgb(c[0], c[1], c[2]))
            .collect();
        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Color,
    {
        let mut pm = Pix::new(width, height)?.to_mut();
        for y in 0..height {
            for x in 0..width {
                pm.set_pixel_unchecked(x, y, f(x, y).to_pixel32());
            }
        }
        Ok(pm.into())
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        self.inner.width as u64 * self.inner.height as u64
    }

    /// Packed pixel words, row-major.
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Borrow a read-only view of the pixels.
    pub fn grid(&self) -> PixelGrid<'_> {
        PixelGrid::from_pix(self)
    }

    /// Get a packed pixel at (x, y), or `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get RGB values at (x, y), or `None` outside the image.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Interleaved 8-bit RGB bytes, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.inner.data.len() * 3);
        for &p in &self.inner.data {
            let (r, g, b) = color::extract_rgb(p);
            out.extend_from_slice(&[r, g, b]);
        }
        out
    }

    /// Check if two images have the same dimensions.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Count pixels that differ between two same-sized images.
    ///
    /// Returns `None` if the sizes differ.
    pub fn count_diff_pixels(&self, other: &Pix) -> Option<u64> {
        if !self.sizes_equal(other) {
            return None;
        }
        let n = self
            .data()
            .iter()
            .zip(other.data())
            .filter(|(a, b)| a != b)
            .count();
        Some(n as u64)
    }

    /// Create a mutable copy of this PIX.
    ///
    /// Always copies; the original is never modified.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Set a packed pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a packed pixel without bounds checking against the image shape.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }
}

impl From<PixMut> for Pix {
    fn from(pm: PixMut) -> Self {
        Pix {
            inner: Arc::new(pm.inner),
        }
    }
}
