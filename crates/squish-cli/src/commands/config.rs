use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use squish_core::config::AppConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the squish.toml to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show the settings in effect (the --config file over the defaults)
    #[arg(long)]
    pub effective: bool,
}

/// Print or save squish settings as TOML: the built-in defaults, or with
/// `--effective` the validated result of loading `--config`.
pub fn run(args: &ConfigArgs, config_path: &Path) -> Result<()> {
    let config = if args.effective {
        AppConfig::load_or_default(config_path)
            .with_context(|| format!("Invalid squish config {}", config_path.display()))?
    } else {
        AppConfig::default()
    };
    let document = config.to_toml().context("Failed to serialize squish config")?;

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("Failed to write squish config to {}", path.display()))?;
            let kind = if args.effective { "Effective" } else { "Default" };
            println!("{kind} squish config saved to {}", path.display());
        }
        None => print!("{document}"),
    }

    Ok(())
}
