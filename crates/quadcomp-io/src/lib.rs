//! quadcomp-io - Image I/O for quadcomp
//!
//! Decodes images into RGB [`Pix`] and encodes overlays back to disk.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature      |
//! |--------|------|-------|--------------|
//! | PNG    | Yes  | Yes   | `png-format` |
//! | JPEG   | Yes  | Yes   | `jpeg`       |
//! | PNM    | P5/P6| P6    | `pnm`        |
//!
//! Whatever the stored color type, reading yields an 8-bit RGB image:
//! grayscale is replicated, palettes are expanded, alpha is dropped.

pub mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use quadcomp_core::Pix;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

/// Read an image from a file, detecting the format from its contents.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    let pix = read_image_format(reader, format)?;
    tracing::debug!(
        path = %path.display(),
        ?format,
        width = pix.width(),
        height = pix.height(),
        "decoded image"
    );
    Ok(pix)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

/// Read an image of a known format.
#[allow(unused_variables, unused_mut)]
pub fn read_image_format<R>(reader: R, format: ImageFormat) -> IoResult<Pix>
where
    R: std::io::BufRead + std::io::Seek,
{
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "reading {:?} is not supported",
            other
        ))),
    }
}

/// Write an image to a file.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);
    write_image_format(pix, writer, format)?;
    tracing::debug!(path = %path.display(), ?format, "wrote image");
    Ok(())
}

/// Encode an image into a new buffer.
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(pix, &mut buffer, format)?;
    Ok(buffer)
}

#[allow(unused_variables)]
fn write_image_format<W: std::io::Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(pix, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(pix, writer),
        other => Err(IoError::UnsupportedFormat(format!(
            "writing {:?} is not supported",
            other
        ))),
    }
}
