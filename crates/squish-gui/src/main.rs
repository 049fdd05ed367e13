mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod workers;

use std::path::PathBuf;

use anyhow::Context;
use squish_core::config::AppConfig;

const DEFAULT_CONFIG_FILE: &str = "squish.toml";

/// Config path: first CLI argument, else `squish.toml` beside the executable.
fn config_path() -> PathBuf {
    if let Some(arg) = std::env::args_os().nth(1) {
        return PathBuf::from(arg);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_CONFIG_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

fn load_config() -> anyhow::Result<AppConfig> {
    let path = config_path();
    AppConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config().unwrap_or_else(|e| {
        tracing::warn!("{e:#}; using defaults");
        AppConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Image Compressor"),
        ..Default::default()
    };

    eframe::run_native(
        "Squish",
        options,
        Box::new(|cc| Ok(Box::new(app::SquishApp::new(&cc.egui_ctx, config)))),
    )
}
