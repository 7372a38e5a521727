mod app;
mod color;
mod config;
mod state;
mod ui;

use anyhow::Context;
use app::RustyReelApp;
use config::AppConfig;
use eframe::egui;
use state::AppState;

fn setup_logging() {
    let mut builder = env_logger::Builder::new();

    builder.filter(None, log::LevelFilter::Info);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.init();
}

fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = AppConfig::from_env()?;
    let mut state = AppState::new(config.min_rating);

    // A bad startup file is fatal; files opened later only set the status line.
    if let Some(path) = &config.data_path {
        state
            .load_path(path)
            .with_context(|| format!("cannot start with data file {}", path.display()))?;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Reel – IMDb Movie Picker",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can fetch and render posters.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(RustyReelApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running the window: {e}"))
}
