use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cubelerp::models::{AppConfig, RunRequest};
use cubelerp::services::{CubeOutput, CubePipeline};

#[derive(Parser)]
#[command(name = "cubelerp")]
#[command(about = "Interpolate colors across the eight corners of a cube")]
struct Cli {
    /// Working space to interpolate in: "rgba" or "oklab"
    #[arg(long, default_value = "rgba")]
    format: String,

    /// Number of points along each axis of the cube (1 to 256)
    #[arg(long, default_value_t = 6, allow_negative_numbers = true)]
    depth: i64,

    /// Print the parsed corners and timings
    #[arg(short, long)]
    verbose: bool,

    /// Use the fixed debug cube (#000000,#0000FF,...,#FFFFFF) instead of --verts
    #[arg(short, long)]
    debug: bool,

    /// Print hex codes instead of color blocks in the terminal
    #[arg(short = 'H', long)]
    hex: bool,

    /// Draw each terminal block with its grid index (slice, row, column)
    #[arg(short, long)]
    labels: bool,

    /// Write one PNG per depth-slice instead of printing
    #[arg(short = 'i', long)]
    generate_images: bool,

    /// Eight hex codes separated by commas: '#000000,#FFFFFF,...'.
    /// Order is front-top (left, right), front-bottom, back-top, back-bottom.
    /// Empty for random corners.
    #[arg(long, default_value = "")]
    verts: String,

    /// Directory for --generate-images output (default from config, else ./images)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn to_request(&self) -> RunRequest {
        RunRequest {
            format: self.format.clone(),
            depth: self.depth,
            verts: self.verts.clone(),
            debug: self.debug,
            hex: self.hex,
            labels: self.labels,
            generate_images: self.generate_images,
            output_dir: self.output_dir.clone(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "cubelerp=info"
    } else {
        "cubelerp=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load(cli.config.as_deref());
    let pipeline = CubePipeline::new(config);
    let request = cli.to_request();

    let prepared = pipeline.prepare(&request, &mut rand::thread_rng())?;
    if cli.verbose {
        print!("{}", prepared.describe());
    }

    match pipeline.execute(&prepared, &request)? {
        CubeOutput::Images(images) => {
            let dir = pipeline.output_dir(&request);
            let report = pipeline.save_images(&images, &dir)?;
            println!(
                "Wrote {} images to {}",
                report.written.len(),
                dir.display()
            );
        }
        CubeOutput::Terminal(text) => print!("{text}"),
    }

    Ok(())
}
