//! End-to-end pipeline regression test
//!
//! Encodes synthetic images to disk, reads them back through
//! `compress_file`, and checks the report.
//!
//! Run with:
//! ```
//! cargo test -p quadcomp --test pipeline_reg
//! ```

use quadcomp::io::{ImageFormat, write_image};
use quadcomp::region::{QuadtreeParams, decompose};
use quadcomp::{Block, Color, compress, compress_file, compress_with_color};
use quadcomp_test::{RegParams, images, regout_dir};

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    let pix = images::with_rects(
        96,
        64,
        Color::new(240, 240, 240),
        &[
            (Block::new_unchecked(0, 0, 48, 32), Color::new(10, 60, 160)),
            (Block::new_unchecked(60, 40, 20, 20), Color::new(200, 30, 30)),
        ],
    )
    .unwrap();
    let params = QuadtreeParams::new(10.0, 4).unwrap();

    // --- Lossless round trip through each lossless format ---
    for format in [ImageFormat::Png, ImageFormat::Pnm] {
        let path = format!("{}/pipeline_input.{}", regout_dir(), format.extension());
        write_image(&pix, &path, format).unwrap();
        let (decoded, report) = compress_file(&path, &params).unwrap();
        rp.compare_pix(&pix, &decoded);

        let direct = decompose(pix.grid(), &params).unwrap();
        rp.compare_blocks(direct.blocks(), report.decomposition.blocks());
        rp.compare_values(
            direct.len() as f64,
            report.metrics.block_count as f64,
            0.0,
        );
        rp.check(
            report.decomposition.blocks().is_partition_of(96, 64),
            "pipeline output is not a partition",
        );
    }

    // --- JPEG input: lossy, but still a full partition ---
    let path = format!("{}/pipeline_input.jpg", regout_dir());
    write_image(&pix, &path, ImageFormat::Jpeg).unwrap();
    let (decoded, report) = compress_file(&path, &params).unwrap();
    rp.compare_values(96.0, decoded.width() as f64, 0.0);
    rp.compare_values(64.0, decoded.height() as f64, 0.0);
    rp.check(
        report.decomposition.blocks().is_partition_of(96, 64),
        "jpeg pipeline output is not a partition",
    );

    // --- Overlay color ---
    let report = compress_with_color(&pix, &params, Color::BLUE).unwrap();
    rp.check(
        report.overlay.get_rgb(0, 0) == Some((0, 0, 255)),
        "overlay should use the requested color",
    );

    let report = compress(&pix, &params).unwrap();
    eprintln!("{}", report.metrics);
    rp.compare_values(
        (96 * 64 * 3) as f64 / (8 * report.decomposition.len()) as f64,
        report.metrics.compression_ratio.unwrap_or(0.0),
        1e-9,
    );

    assert!(rp.cleanup(), "pipeline regression test failed");
}
