//! PNM (Portable Any Map) format support
//!
//! Reads binary PGM (P5) and PPM (P6) and writes PPM (P6). Samples with
//! `maxval > 255` are two bytes, big-endian. Every sample is rescaled from
//! `0..=maxval` to `0..=255` with rounding. ASCII variants and PBM are not
//! supported.

use crate::{IoError, IoResult};
use quadcomp_core::{Pix, color};
use std::io::{BufRead, Read, Write};

/// Read the next whitespace-delimited header token, skipping `#` comments.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            break;
        }
        let c = byte[0];
        if c == b'#' && token.is_empty() {
            let mut comment = Vec::new();
            reader.read_until(b'\n', &mut comment)?;
            continue;
        }
        if c.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(c as char);
    }
    if token.is_empty() {
        return Err(IoError::InvalidData("truncated PNM header".to_string()));
    }
    Ok(token)
}

fn read_header_value<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse::<u32>()
        .map_err(|_| IoError::InvalidData(format!("bad PNM {}: {:?}", what, token)))
}

/// Read a binary PGM/PPM image from a reader.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Pix> {
    let magic = read_token(&mut reader)?;
    let channels = match magic.as_str() {
        "P5" => 1usize,
        "P6" => 3usize,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM variant {} not supported",
                other
            )));
        }
    };
    let width = read_header_value(&mut reader, "width")?;
    let height = read_header_value(&mut reader, "height")?;
    let maxval = read_header_value(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("bad PNM maxval {}", maxval)));
    }
    let bytes_per_sample = if maxval > 255 { 2 } else { 1 };

    let raster_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels * bytes_per_sample))
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM dimensions too large: {}x{}", width, height))
        })?;

    // Grows only with the bytes actually present
    let mut raster = Vec::new();
    reader
        .by_ref()
        .take(raster_len as u64)
        .read_to_end(&mut raster)?;
    if raster.len() < raster_len {
        return Err(IoError::InvalidData(format!(
            "truncated PNM raster: {} of {} bytes",
            raster.len(),
            raster_len
        )));
    }

    let scale = |s: &[u8]| -> u8 {
        let v = if bytes_per_sample == 2 {
            u16::from_be_bytes([s[0], s[1]]) as u32
        } else {
            s[0] as u32
        };
        if maxval == 255 {
            return v as u8;
        }
        ((v.min(maxval) * 255 + maxval / 2) / maxval) as u8
    };

    let mut pix_mut = Pix::new(width, height)?.to_mut();
    let stride = channels * bytes_per_sample;
    for (i, px) in raster.chunks_exact(stride).enumerate() {
        let x = (i % width as usize) as u32;
        let y = (i / width as usize) as u32;
        let pixel = if channels == 1 {
            let g = scale(px);
            color::compose_rgb(g, g, g)
        } else {
            color::compose_rgb(
                scale(&px[0..]),
                scale(&px[bytes_per_sample..]),
                scale(&px[2 * bytes_per_sample..]),
            )
        };
        pix_mut.set_pixel_unchecked(x, y, pixel);
    }

    Ok(pix_mut.into())
}

/// Write a `Pix` as binary PPM (P6, maxval 255).
pub fn write_pnm<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", pix.width(), pix.height())?;
    writer.write_all(&pix.to_rgb_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadcomp_core::Color;
    use std::io::Cursor;

    #[test]
    fn test_ppm_roundtrip() {
        let pix = Pix::from_fn(3, 2, |x, y| Color::new(x as u8, y as u8, 99)).unwrap();
        let mut buffer = Vec::new();
        write_pnm(&pix, &mut buffer).unwrap();
        assert!(buffer.starts_with(b"P6\n3 2\n255\n"));

        let pix2 = read_pnm(Cursor::new(buffer)).unwrap();
        assert_eq!(pix.count_diff_pixels(&pix2), Some(0));
    }

    #[test]
    fn test_pgm_with_comment() {
        let mut data = b"P5\n# a comment\n2 1\n255\n".to_vec();
        data.extend_from_slice(&[7, 250]);
        let pix = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(pix.get_rgb(0, 0), Some((7, 7, 7)));
        assert_eq!(pix.get_rgb(1, 0), Some((250, 250, 250)));
    }

    #[test]
    fn test_pgm_small_maxval_rescaled() {
        let mut data = b"P5 2 1 15\n".to_vec();
        data.extend_from_slice(&[15, 0]);
        let pix = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(pix.get_rgb(0, 0), Some((255, 255, 255)));
        assert_eq!(pix.get_rgb(1, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_ppm_16bit_rescaled() {
        let mut data = b"P6 1 1 65535\n".to_vec();
        data.extend_from_slice(&[0x12, 0x34, 0xAB, 0xCD, 0xFF, 0xFF]);
        let pix = read_pnm(Cursor::new(data)).unwrap();
        // 0x1234 * 255 / 65535 = 18.1, 0xABCD * 255 / 65535 = 171.0
        assert_eq!(pix.get_rgb(0, 0), Some((18, 171, 255)));
    }

    #[test]
    fn test_ppm_10bit_rescaled_by_maxval() {
        let mut data = b"P6 2 1 1023\n".to_vec();
        data.extend_from_slice(&[0x03, 0xFF, 0x03, 0xFF, 0x03, 0xFF]);
        data.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, 0x01, 0x00]);
        let pix = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(pix.get_rgb(0, 0), Some((255, 255, 255)));
        // 512 * 255 / 1023 = 127.6, 256 * 255 / 1023 = 63.8
        assert_eq!(pix.get_rgb(1, 0), Some((128, 0, 64)));
    }

    #[test]
    fn test_pgm_12bit_rescaled_by_maxval() {
        let mut data = b"P5 1 1 4095\n".to_vec();
        data.extend_from_slice(&[0x08, 0x00]);
        let pix = read_pnm(Cursor::new(data)).unwrap();
        // 2048 * 255 / 4095 = 127.5
        assert_eq!(pix.get_rgb(0, 0), Some((128, 128, 128)));
    }

    #[test]
    fn test_oversized_header_is_error() {
        let data = b"P6 4294967295 4294967295 255\n".to_vec();
        assert!(read_pnm(Cursor::new(data)).is_err());
    }

    #[test]
    fn test_large_header_short_raster() {
        let mut data = b"P6 20000 20000 255\n".to_vec();
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_truncated_raster() {
        let data = b"P6 2 2 255\n\x00\x00\x00".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_ascii_variant_unsupported() {
        assert!(matches!(
            read_pnm(Cursor::new(b"P3 1 1 255 0 0 0".to_vec())),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
