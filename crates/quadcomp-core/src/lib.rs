//! quadcomp core - Basic data structures for quadtree image decomposition
//!
//! This crate provides the fundamental data structures used throughout
//! the quadcomp workspace:
//!
//! - [`Pix`] / [`PixMut`] - The RGB image container (immutable / mutable)
//! - [`PixelGrid`] - A borrowed, read-only view over RGB pixels
//! - [`Block`] / [`Blocks`] - Rectangle regions and ordered block lists
//! - [`Color`] - Stroke color for outline rendering

pub mod block;
pub mod error;
pub mod pix;

pub use block::{Block, Blocks};
pub use error::{Error, Result};
pub use pix::{Color, Pix, PixMut, PixelGrid};

/// Color channel helpers for packed 32-bit RGB pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB). The alpha byte is
/// always 255; it exists only so the packing matches common RGBA layouts.
pub mod color {
    /// Red channel index
    pub const RED: usize = 0;
    /// Green channel index
    pub const GREEN: usize = 1;
    /// Blue channel index
    pub const BLUE: usize = 2;

    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;

    /// Opaque alpha byte stored in the LSB of every pixel.
    pub const OPAQUE: u32 = 0xff;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT) | ((g as u32) << GREEN_SHIFT) | ((b as u32) << BLUE_SHIFT) | OPAQUE
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract the three channels as an array indexed by [`RED`], [`GREEN`], [`BLUE`].
    #[inline]
    pub fn channels(pixel: u32) -> [u8; 3] {
        [red(pixel), green(pixel), blue(pixel)]
    }

}
