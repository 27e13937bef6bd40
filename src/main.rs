use anyhow::Context;
use eframe::egui;
use env_logger::Builder;
use log::{LevelFilter, info};
use std::path::Path;

use crate::config::{CONFIG_FILE_NAME, PlotConfig};
use crate::ui::QueuePlotApp;

mod analyzer;
mod config;
mod ui;

fn main() -> anyhow::Result<()> {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("mlfq_queue_plot"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    info!("Starting up");

    let config = PlotConfig::load(Path::new(CONFIG_FILE_NAME))?;

    // Any load failure ends the run here, before a window is opened
    let queue_log = analyzer::load_queue_log(&config.log_path, config.console_capture)
        .with_context(|| format!("Failed to load queue log {}", config.log_path.display()))?;

    let title = config.window_title.clone();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_title(title.clone()).with_inner_size([1280.0, 760.0]),
        ..Default::default()
    };

    // Blocks until the window is closed
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(QueuePlotApp::new(config, queue_log, cc.storage)))),
    )
    .map_err(|e| anyhow::anyhow!("Chart window failed: {e}"))?;

    info!("Chart window closed");
    Ok(())
}
