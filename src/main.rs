//! CO2 per Country - emissions per capita dashboard
//!
//! Loads the emissions and geography tables, aggregates top emitters over a
//! year range and shows them as bar charts and maps.

mod charts;
mod config;
mod dashboard;
mod data;
mod stats;
mod gui;

use anyhow::anyhow;
use config::AppConfig;
use dashboard::Dashboard;
use data::DataCache;
use eframe::egui;
use gui::Co2DashboardApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    info!(
        co2 = %config.co2_path.display(),
        geo = %config.geo_path.display(),
        "starting dashboard"
    );
    let dashboard = Dashboard::new(config, DataCache::new());

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("CO2 per Country"),
        ..Default::default()
    };

    eframe::run_native(
        "CO2 per Country",
        options,
        Box::new(|cc| Ok(Box::new(Co2DashboardApp::new(cc, dashboard)))),
    )
    .map_err(|e| anyhow!("GUI error: {e}"))
}
