mod error;

use argh::FromArgs;
use error::CliError;
use quadcomp::Color;
use quadcomp::io::ImageFormat;
use quadcomp::region::{
    DEFAULT_MIN_SIZE, DEFAULT_OUTLINE_COLOR, DEFAULT_THRESHOLD, QuadtreeParams,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Split an image into uniform quadtree blocks and estimate the compressed size
struct Args {
    /// input image (PNG, JPEG, PPM/PGM)
    #[argh(positional)]
    input: PathBuf,

    /// color-variance threshold, 0 to 100 [default: 15]
    #[argh(option, short = 't', default = "DEFAULT_THRESHOLD")]
    threshold: f64,

    /// minimum block size in pixels, 4 to 64 [default: 16]
    #[argh(option, short = 'm', default = "DEFAULT_MIN_SIZE")]
    min_size: u32,

    /// write the block overlay here (.png, .jpg, .ppm)
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// outline color as r,g,b [default: 255,0,0]
    #[argh(option, from_str_fn(parse_color), default = "DEFAULT_OUTLINE_COLOR")]
    color: Color,

    /// print one "x y w h" line per block
    #[argh(switch)]
    blocks: bool,
}

fn parse_color(s: &str) -> Result<Color, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let &[r, g, b] = parts.as_slice() else {
        return Err(format!("Invalid color: {s}. Expected r,g,b"));
    };
    let channel = |v: &str| {
        v.parse::<u8>()
            .map_err(|_| format!("Invalid color channel: {v}. Expected 0 to 255"))
    };
    Ok(Color::new(channel(r)?, channel(g)?, channel(b)?))
}

fn run(args: Args) -> Result<(), CliError> {
    let params = QuadtreeParams::new(args.threshold, args.min_size)?;
    params.validate_ui_ranges()?;
    let output_format = args
        .output
        .as_ref()
        .map(ImageFormat::from_path)
        .transpose()?;

    let pix = quadcomp::io::read_image(&args.input)?;
    let report = quadcomp::compress_with_color(&pix, &params, args.color)?;

    println!("{}", report.metrics);
    if args.blocks {
        for b in report.decomposition.blocks() {
            println!("{b}");
        }
    }

    if let (Some(path), Some(format)) = (&args.output, output_format) {
        quadcomp::io::write_image(&report.overlay, path, format)?;
        tracing::info!(path = %path.display(), "wrote overlay");
    }
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
