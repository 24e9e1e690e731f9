//! Image I/O regression test
//!
//! Round trips synthetic images through every supported format, checks
//! that grayscale, alpha and high-bit-depth inputs normalize to 8-bit RGB,
//! and that malformed PNM headers fail cleanly.

use quadcomp_core::Pix;
use quadcomp_io::jpeg::write_jpeg_with_quality;
use quadcomp_io::{
    ImageFormat, detect_format, read_image, read_image_mem, write_image, write_image_mem,
};
use quadcomp_test::{RegParams, images, regout_dir};

/// Mean absolute per-channel difference between two same-sized images.
fn mean_abs_diff(a: &Pix, b: &Pix) -> f64 {
    let total: u64 = a
        .to_rgb_bytes()
        .iter()
        .zip(b.to_rgb_bytes().iter())
        .map(|(&x, &y)| (x as i32 - y as i32).unsigned_abs() as u64)
        .sum();
    total as f64 / (a.pixel_count() * 3) as f64
}

fn encode_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }
    out
}

#[test]
fn imageio_reg() {
    let mut rp = RegParams::new("imageio");
    let outdir = regout_dir();

    let pix = images::gradient(61, 47).unwrap();

    // --- Lossless formats: exact file round trip ---
    for format in [ImageFormat::Png, ImageFormat::Pnm] {
        let path = format!("{}/imageio_gradient.{}", outdir, format.extension());
        write_image(&pix, &path, format).unwrap();
        rp.check(
            detect_format(&path).ok() == Some(format),
            &format!("{:?} not detected", format),
        );
        let back = read_image(&path).unwrap();
        rp.compare_pix(&pix, &back);
    }

    // --- JPEG: lossy, dimensions kept, error small ---
    for quality in [75u8, 90, 100] {
        let mut bytes = Vec::new();
        write_jpeg_with_quality(&pix, &mut bytes, quality).unwrap();
        let back = read_image_mem(&bytes).unwrap();
        rp.compare_values(61.0, back.width() as f64, 0.0);
        rp.compare_values(47.0, back.height() as f64, 0.0);
        let err = mean_abs_diff(&pix, &back);
        eprintln!("  jpeg q={}: mean abs diff {:.3}", quality, err);
        rp.check(err < 8.0, &format!("jpeg q={} error {}", quality, err));
    }
    let bytes = write_image_mem(&pix, ImageFormat::Jpeg).unwrap();
    rp.check(bytes.starts_with(&[0xff, 0xd8]), "jpeg magic");

    // --- Grayscale PNG replicates into three channels ---
    let gray = encode_png(3, 2, png::ColorType::Grayscale, &[0, 50, 100, 150, 200, 250]);
    let back = read_image_mem(&gray).unwrap();
    rp.check(back.get_rgb(1, 0) == Some((50, 50, 50)), "gray replicated");
    rp.check(back.get_rgb(2, 1) == Some((250, 250, 250)), "gray replicated");

    // --- RGBA PNG drops alpha without compositing ---
    let rgba = encode_png(2, 1, png::ColorType::Rgba, &[10, 20, 30, 0, 40, 50, 60, 128]);
    let back = read_image_mem(&rgba).unwrap();
    rp.check(back.get_rgb(0, 0) == Some((10, 20, 30)), "alpha dropped");
    rp.check(back.get_rgb(1, 0) == Some((40, 50, 60)), "alpha dropped");

    // --- Binary PGM replicates into three channels ---
    let mut pgm = b"P5\n2 2\n255\n".to_vec();
    pgm.extend_from_slice(&[0, 64, 128, 255]);
    let back = read_image_mem(&pgm).unwrap();
    rp.check(back.get_rgb(1, 1) == Some((255, 255, 255)), "pgm replicated");
    rp.check(back.get_rgb(1, 0) == Some((64, 64, 64)), "pgm replicated");

    // --- 10-bit PPM is rescaled by its maxval ---
    let mut ppm = b"P6\n2 1\n1023\n".to_vec();
    ppm.extend_from_slice(&[0x03, 0xFF, 0x02, 0x00, 0x00, 0x00]);
    ppm.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x03, 0xFF]);
    let back = read_image_mem(&ppm).unwrap();
    rp.check(back.get_rgb(0, 0) == Some((255, 128, 0)), "10-bit ppm rescaled");
    rp.check(back.get_rgb(1, 0) == Some((0, 0, 255)), "10-bit ppm rescaled");

    // --- Impossible header: an error, not a panic or a huge allocation ---
    rp.check(
        read_image_mem(b"P6 4294967295 4294967295 255\n").is_err(),
        "oversized ppm header accepted",
    );
    rp.check(
        read_image_mem(b"P5 30000 30000 255\n\x00\x01").is_err(),
        "short ppm raster accepted",
    );

    assert!(rp.cleanup(), "imageio regression test failed");
}
