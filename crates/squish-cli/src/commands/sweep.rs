use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use squish_core::compress::CompressionResult;
use squish_core::quality::Quality;

use crate::summary::print_sweep_table;

#[derive(Args)]
pub struct SweepArgs {
    /// Input image
    pub file: PathBuf,

    /// First quality to try
    #[arg(long, default_value = "1")]
    pub from: i64,

    /// Last quality to try
    #[arg(long, default_value = "31")]
    pub to: i64,

    /// Quality increment
    #[arg(long, default_value = "5")]
    pub step: usize,

    /// Directory for the compressed copy
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

pub fn run(args: &SweepArgs, config_path: &Path) -> Result<()> {
    let from = Quality::new(args.from)?;
    let to = Quality::new(args.to)?;
    if from > to {
        bail!("--from ({from}) must not exceed --to ({to})");
    }
    if args.step == 0 {
        bail!("--step must be at least 1");
    }

    let (_, compressor) = super::compressor_for(config_path, &args.file, args.output_dir.as_ref())?;

    let qualities: Vec<Quality> = (from.get()..=to.get())
        .step_by(args.step)
        .map(|q| Quality::clamped(q as i64))
        .collect();

    let pb = ProgressBar::new(qualities.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:12} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    // The encoder overwrites one output file, so each size is read before the
    // next run.
    let mut rows: Vec<(Quality, CompressionResult)> = Vec::with_capacity(qualities.len());
    for quality in qualities {
        pb.set_message(format!("quality {quality}"));
        let result = compressor.compress(quality)?;
        rows.push((quality, result));
        pb.inc(1);
    }
    pb.finish_and_clear();

    print_sweep_table(&args.file, &rows);
    Ok(())
}
