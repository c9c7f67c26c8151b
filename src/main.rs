mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::TvDashApp;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::load()?;
    log::debug!("Using {config:?}");

    // The dataset is loaded once up front; a bad file aborts startup.
    let dataset = data::loader::load_file(&config.dataset_path)
        .with_context(|| format!("loading {}", config.dataset_path.display()))?;
    if dataset.is_empty() {
        log::warn!("{} contains no shows", config.dataset_path.display());
    }
    let state = AppState::new(dataset, Some(config.dataset_path.clone()));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TV Shows – Streaming Platforms Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(TvDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {e}"))
}
