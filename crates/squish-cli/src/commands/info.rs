use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use squish_core::format::format_file_size;

#[derive(Args)]
pub struct InfoArgs {
    /// Image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let bytes = std::fs::metadata(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?
        .len();
    let (width, height) = image::image_dimensions(&args.file)
        .with_context(|| format!("Failed to decode {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", width, height);
    println!(
        "Size:        {} ({} bytes)",
        format_file_size(bytes).trim_start_matches("Size: "),
        bytes
    );

    Ok(())
}
