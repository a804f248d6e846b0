// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::Parser;
use log::warn;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::resolve_config;
use crate::core::aggregate::{BatchAggregator, analyze_upload};
use crate::core::collect::{CollectOptions, collect_uploads};
use crate::models::FileFailure;
use crate::report::{Format, render_batch, render_failure, render_file};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text files or directories to count
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Number of rows to show in each frequency table
    #[arg(short = 't', long)]
    pub top: Option<usize>,

    /// File extensions picked up inside directories (comma-separated)
    #[arg(long = "ext", value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Glob patterns to skip inside directories (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Config file (defaults to the nearest wordtally.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the batch summary even for a single file
    #[arg(short, long)]
    pub batch: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runs the command and prints the report to stdout.
///
/// # Errors
///
/// See [`execute`].
#[inline]
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&args, &mut out)
}

/// Runs the command, writing the report to `out`.
///
/// Files that cannot be read or decoded are reported alongside the others
/// and never make the command fail.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, an exclude pattern is
/// invalid, no input file was found, or the report cannot be written.
#[inline]
pub fn execute<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;

    let extensions = args
        .extensions
        .as_ref()
        .unwrap_or(&config.collect.extensions);
    let exclude = config.collect.exclude.iter().chain(&args.exclude);
    let options = CollectOptions::new(extensions, exclude)?;

    let format = args.format.or(config.report.format).unwrap_or_default();
    let top = args.top.or(config.report.top);

    let uploads = collect_uploads(&args.inputs, &options);
    if uploads.is_empty() {
        bail!(
            "No input files found (looking for: {})",
            options.extensions().join(", ")
        );
    }

    if let [single] = uploads.as_slice() {
        if !args.batch {
            return match single {
                Ok(upload) => match analyze_upload(upload) {
                    Ok(result) => render_file(out, &result, format, top),
                    Err(err) => {
                        let failure = FileFailure::new(upload.filename.as_str(), err);
                        warn!("skipping {failure}");
                        render_failure(out, &failure, format)
                    }
                },
                Err(failure) => {
                    warn!("skipping {failure}");
                    render_failure(out, failure, format)
                }
            }
            .context("Failed to write report");
        }
    }

    let mut aggregator = BatchAggregator::new();
    for upload in uploads {
        match upload {
            Ok(upload) => aggregator.add_upload(&upload),
            Err(failure) => aggregator.add_failure(failure),
        }
    }

    render_batch(out, &aggregator.finish(), format, top).context("Failed to write report")
}
