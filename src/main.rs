use std::path::PathBuf;

use anyhow::{Context, bail};
use mt9m001_convert_rs::frame_pipeline::{ConversionConfig, RawToTiffPipeline, SensorMode};
use mt9m001_convert_rs::logger;

use tracing::{error, info};

const USAGE: &str = "usage: mt9m001_convert_rs <input> [--output PATH] [--width N] [--height N]";

struct Args {
    input: PathBuf,
    output: Option<PathBuf>,
    width: usize,
    height: usize,
}

fn parse_args() -> anyhow::Result<Args> {
    let default = SensorMode::default();
    let mut input = None;
    let mut output = None;
    let mut width = default.width;
    let mut height = default.height;

    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--output" => {
                output = Some(PathBuf::from(
                    argv.next().context("--output requires a path")?,
                ));
            }
            "--width" => {
                width = argv
                    .next()
                    .context("--width requires a value")?
                    .parse()
                    .context("invalid --width")?;
            }
            "--height" => {
                height = argv
                    .next()
                    .context("--height requires a value")?
                    .parse()
                    .context("invalid --height")?;
            }
            _ if input.is_none() && !arg.starts_with("--") => {
                input = Some(PathBuf::from(arg));
            }
            _ => bail!("unexpected argument `{arg}`\n{USAGE}"),
        }
    }

    Ok(Args {
        input: input.context(USAGE)?,
        output,
        width,
        height,
    })
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let args = parse_args()?;

    let mode = SensorMode::builder()
        .width(args.width)
        .height(args.height)
        .build();
    let config = ConversionConfig::builder().mode(mode).build();
    let pipeline = RawToTiffPipeline::new(config)?;

    info!("Raw frame to TIFF pipeline initialized");
    info!("Frame size: {}x{}", mode.width, mode.height);

    if args.input.is_dir() {
        let report = pipeline.convert_dir(&args.input, args.output.as_deref())?;
        info!("Converted {} file(s)", report.converted.len());
        if !report.is_clean() {
            bail!("{} file(s) failed to convert", report.failed.len());
        }
    } else {
        let output = args
            .output
            .unwrap_or_else(|| args.input.with_extension("tiff"));
        match pipeline.convert_file(&args.input, &output) {
            Ok(_) => info!("Conversion successful!"),
            Err(e) => {
                error!("Conversion failed: {}", e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}
