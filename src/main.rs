mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::LaunchDashboardApp;
use eframe::egui;

/// Used when no dataset path is given on the command line.
const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // Loaded once; a bad file means the window never opens.
    let dataset = data::loader::load_file(&path).inspect_err(|e| {
        log::error!("Failed to load dataset: {e:#}");
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashboardApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the dashboard window")
}
