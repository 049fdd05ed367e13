mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "squish", about = "Compress images with an external encoder")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (TOML)
    #[arg(short, long, global = true, default_value = "squish.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress one image and report the size change
    Compress(commands::compress::CompressArgs),
    /// Compress at a range of qualities and tabulate the sizes
    Sweep(commands::sweep::SweepArgs),
    /// Print or save the default or effective squish config
    Config(commands::config::ConfigArgs),
    /// Show image file size and dimensions
    Info(commands::info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Compress(args) => commands::compress::run(args, &cli.config),
        Commands::Sweep(args) => commands::sweep::run(args, &cli.config),
        Commands::Config(args) => commands::config::run(args, &cli.config),
        Commands::Info(args) => commands::info::run(args),
    }
}
