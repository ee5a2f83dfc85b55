//! Fast-food admin dashboard entry point

use anyhow::{Context as _, Result};
use eframe::egui;
use fd_data::{Catalog, DashboardConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod host;
mod session;

use app::AdminApp;
use session::Session;

fn load_catalog(config: &DashboardConfig) -> Result<Catalog> {
    match &config.seed_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load seed data from {}", path.display())),
        None => Catalog::embedded().context("embedded seed data is malformed"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DashboardConfig::load_default().context("failed to load configuration")?;
    let (store, figures) = load_catalog(&config)?.into_store()?;
    let session = Session::new(&config, store, figures)?;

    info!("Starting fast-food admin dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([900.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Fast Food Admin",
        options,
        Box::new(move |cc| Box::new(AdminApp::new(cc, session, &config))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
