//! JPEG image format support
//!
//! Reads baseline/progressive JPEG with `jpeg-decoder` and writes RGB JPEG
//! with `jpeg-encoder`. Grayscale is replicated to three channels. CMYK
//! (including Adobe YCCK, which the decoder hands back as CMYK) is
//! converted with `R = (255 - C)(255 - K) / 255` and likewise for G and B.
//! 16-bit grayscale is rejected.

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use quadcomp_core::{Pix, color};
use std::io::{Read, Write};

/// Quality used by [`write_jpeg`].
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let samples = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::RGB24 => 3,
        PixelFormat::CMYK32 => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };
    let expected = width as usize * height as usize * samples;
    if data.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG data too short: {} < {}",
            data.len(),
            expected
        )));
    }

    let mut pix_mut = Pix::new(width, height)?.to_mut();
    for (i, px) in data[..expected].chunks_exact(samples).enumerate() {
        let x = (i % width as usize) as u32;
        let y = (i / width as usize) as u32;
        let pixel = match *px {
            [l] => color::compose_rgb(l, l, l),
            [r, g, b] => color::compose_rgb(r, g, b),
            [c, m, y, k] => cmyk_to_rgb(c, m, y, k),
            _ => unreachable!(),
        };
        pix_mut.set_pixel_unchecked(x, y, pixel);
    }

    Ok(pix_mut.into())
}

/// Convert one CMYK sample (0 = no ink) to a packed RGB pixel.
fn cmyk_to_rgb(c: u8, m: u8, y: u8, k: u8) -> u32 {
    let white = 255 - k as u32;
    let channel = |v: u8| (((255 - v as u32) * white + 127) / 255) as u8;
    color::compose_rgb(channel(c), channel(m), channel(y))
}

/// Write an RGB JPEG at [`DEFAULT_JPEG_QUALITY`].
pub fn write_jpeg<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    write_jpeg_with_quality(pix, writer, DEFAULT_JPEG_QUALITY)
}

/// Write an RGB JPEG with an explicit quality (1..=100).
pub fn write_jpeg_with_quality<W: Write>(pix: &Pix, writer: W, quality: u8) -> IoResult<()> {
    if !(1..=100).contains(&quality) {
        return Err(IoError::EncodeError(format!(
            "JPEG quality must be in 1..=100, got {}",
            quality
        )));
    }
    let (Ok(w), Ok(h)) = (u16::try_from(pix.width()), u16::try_from(pix.height())) else {
        return Err(IoError::EncodeError(format!(
            "JPEG dimensions limited to 65535, got {}x{}",
            pix.width(),
            pix.height()
        )));
    };

    let encoder = jpeg_encoder::Encoder::new(writer, quality);
    encoder
        .encode(&pix.to_rgb_bytes(), w, h, jpeg_encoder::ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
