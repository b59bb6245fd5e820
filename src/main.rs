//! lut3d_convert_rs - convert integer 3D LUT text files into C initializer records

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use lut3d_convert_rs::logger;
use lut3d_convert_rs::lut_pipeline::common::config::{DEFAULT_MAX_VALUE, DEFAULT_SIDE};
use lut3d_convert_rs::lut_pipeline::{ConversionConfig, LutConversionPipeline, MissingInputPolicy, Traversal};

use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "lut3d_convert_rs")]
#[command(version, about = "Convert integer values in a 3D LUT file to normalized C initializer records")]
struct Cli {
    /// 3D LUT file, one `r g b` integer triple per line
    #[arg(short = 'f', long)]
    input: PathBuf,

    /// Traversal order: rgb or bgr (case-insensitive)
    #[arg(short, long)]
    traversal: Traversal,

    /// Raw value that maps to 1.0
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
    max_value: f64,

    /// Grid points per cube axis
    #[arg(long, default_value_t = DEFAULT_SIDE)]
    side: usize,

    /// Write records to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat an unopenable input as an empty LUT instead of failing immediately
    #[arg(long)]
    allow_missing: bool,

    /// Print the entries at OFFSET + n * side^2 with their indices instead of converting
    #[arg(long, value_name = "OFFSET", conflicts_with = "output")]
    probe: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> ConversionConfig {
        ConversionConfig::builder()
            .max_value(self.max_value)
            .side(self.side)
            .traversal(self.traversal)
            .missing_input(if self.allow_missing {
                MissingInputPolicy::Empty
            } else {
                MissingInputPolicy::Fail
            })
            .build()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let pipeline = LutConversionPipeline::new(cli.config());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Some(offset) = cli.probe {
        let written = pipeline
            .probe_file(&cli.input, offset, &mut out)
            .with_context(|| format!("Failed to probe {}", cli.input.display()))?;
        info!("Probed {} entries", written);
        return Ok(());
    }

    let summary = match &cli.output {
        Some(path) => pipeline.convert_file_to_path(&cli.input, path),
        None => pipeline.convert_file(&cli.input, &mut out),
    }
    .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    if summary.skipped > 0 {
        info!("Skipped {} malformed lines", summary.skipped);
    }

    Ok(())
}
