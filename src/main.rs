// Launch Countdown
// Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use launch_countdown::services::settings::ConfigService;
use launch_countdown::ui_egui::{resolve_board, LaunchApp};

/// Desktop dashboard of upcoming U.S. rocket launches
#[derive(Debug, Parser)]
#[command(name = "launch-countdown", version)]
struct CliArgs {
    /// JSON file with launch records, overriding the configured data file
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Config file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    log::info!("Starting Launch Countdown v{}", env!("CARGO_PKG_VERSION"));

    let config_service = match &args.config {
        Some(path) => ConfigService::new(path),
        None => ConfigService::from_default_location(),
    };
    let config = config_service.load_or_default();

    let (board, notice) = resolve_board(args.data.as_deref(), &config);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("U.S. Launches")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Countdown",
        native_options,
        Box::new(move |cc| Ok(Box::new(LaunchApp::new(cc, config, board, notice)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start the launch dashboard: {err}"))?;

    Ok(())
}
