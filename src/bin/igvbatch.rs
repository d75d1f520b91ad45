//! A binary that writes an IGV batch script to snapshot every variant in a
//! table across the alignment files of the samples it was found in.
//!
//! ```shell
//! cargo run --release --bin=igvbatch -- -i variants.tsv -b bams/ -d snapshots/
//! ```
//!
//! Each row of the table names a chromosome, a position, and a comma-separated
//! list of sample identifiers. Any `.bam` file in the alignment directory whose
//! name contains one of those identifiers is loaded, the view is centered on
//! the variant, and a snapshot is taken. Rows without any matching alignment
//! files are skipped.

use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use igvbatch::config;
use igvbatch::config::Columns;
use igvbatch::generator;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// Takes a TSV with a list of variants and identifiers and creates IGV
/// snapshot commands for all BAM files matching each identifier.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The input TSV (optionally gzipped).
    #[arg(short, long = "inputtsv")]
    input_tsv: PathBuf,

    /// The directory containing the BAM files (symlinks are followed).
    #[arg(short, long = "bamdir", default_value = config::DEFAULT_ALIGNMENT_DIRECTORY)]
    bam_dir: PathBuf,

    /// Where the snapshots should be saved (defaults to the current
    /// directory).
    #[arg(short = 'd', long = "snapshotdirectory")]
    snapshot_directory: Option<PathBuf>,

    /// The name of the output batch file.
    #[arg(short = 'o', long = "batchoutput", default_value = config::DEFAULT_OUTPUT)]
    batch_output: PathBuf,

    /// The width of each snapshot in number of bases.
    #[arg(short, long = "windowsize", default_value_t = config::DEFAULT_WINDOW_WIDTH)]
    window_size: f64,

    /// The maximum height of each panel (increase if reads are getting cut
    /// off).
    #[arg(short = 'H', long = "panelheight", default_value_t = config::DEFAULT_PANEL_HEIGHT)]
    panel_height: u64,

    /// A comma-separated list of the chromosome, position, and identifier
    /// column names.
    #[arg(short = 'n', long = "cols", default_value_t = Columns::default())]
    cols: Columns,

    #[command(flatten)]
    verbose: Verbosity,
}

fn throw(args: Args) -> Result<()> {
    let mut builder = config::Builder::default()
        .input(args.input_tsv)
        .alignment_directory(args.bam_dir)
        .output(args.batch_output)
        .window_width(args.window_size)
        .panel_height(args.panel_height)
        .columns(args.cols);

    if let Some(directory) = args.snapshot_directory {
        builder = builder.snapshot_directory(directory);
    }

    let config = builder.try_build().context("resolving configuration")?;

    info!("input table: {}", config.input().display());
    info!(
        "alignment directory: {}",
        config.alignment_directory().display()
    );
    info!("snapshot directory: {}", config.snapshot_directory().display());

    let summary = generator::run(&config).with_context(|| {
        format!(
            "generating batch script from `{}`",
            config.input().display()
        )
    })?;

    info!(
        "read {} variant(s): {} snapshot(s) with {} alignment load(s), {} skipped without a \
         matching alignment file",
        summary.records(),
        summary.snapshots(),
        summary.loads(),
        summary.skipped()
    );
    info!("batch script written to {}", config.output().display());

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .init(),
    };

    throw(args)
}
