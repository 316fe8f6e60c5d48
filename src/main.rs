//! mdxdoc — generate MDX API pages from a typst library's docs.json.
//!
//! Reads the function documentation extracted from a drawing library (one list
//! of function records per source file) and writes:
//!
//! - one `.mdx` page per function, with the doc text converted through
//!   `typst compile --format html`
//! - one `<file>-combined.mdx` page per source file re-exporting its public functions
//! - optionally (`--svg`), an image per example block
//!
//! `mdxdoc docs.json -o docs/api --svg static/examples`

mod convert;
mod escape;
mod example;
mod generate;
mod layout;
mod loader;
mod model;
mod preview;
mod render;
mod typst;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mdxdoc",
    version,
    about = "Generate MDX documentation from typst docs with optional example images"
)]
struct Cli {
    /// Path to docs.json. If omitted, reads from stdin.
    json_file: Option<PathBuf>,

    /// Output directory for MDX files
    #[arg(short = 'o', long, default_value = "mdx_output")]
    output: PathBuf,

    /// Library import used by example images (use @local/cetz:VERSION for a local build)
    #[arg(short = 'c', long, default_value = preview::DEFAULT_CETZ)]
    cetz: String,

    /// Render example images into DIR
    #[arg(
        long,
        value_name = "DIR",
        num_args = 0..=1,
        default_missing_value = "svg_output"
    )]
    svg: Option<PathBuf>,

    /// Image format of rendered examples
    #[arg(long, value_enum, default_value = "svg")]
    image_format: typst::ImageFormat,

    /// typst compiler binary
    #[arg(long, env = "TYPST_BIN", default_value = "typst")]
    typst: PathBuf,

    /// Only log warnings and errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let docs = loader::load(cli.json_file.as_deref())?;

    let config = generate::Config {
        output_dir: cli.output,
        cetz: cli.cetz,
        image_dir: cli.svg,
        image_format: cli.image_format,
    };

    log::info!("using CeTZ package: {}", config.cetz);
    log::info!("MDX output directory: {}", config.output_dir.display());
    if let Some(dir) = &config.image_dir {
        log::info!("image output directory: {}", dir.display());
    }

    let compiler = typst::Typst::new(cli.typst);
    let summary = generate::Generator::new(&config, &compiler).run(&docs)?;

    log::info!(
        "done: {} pages, {} combined, {} images, {} failures",
        summary.pages,
        summary.combined,
        summary.images,
        summary.failures()
    );
    Ok(())
}

/// `RUST_LOG` wins over the default level.
fn init_logging(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
