//! Jekyll Compose - desktop companion for Jekyll sites
//!
//! Create posts, drafts, pages and collection files, publish and unpublish
//! drafts, and kick off builds without leaving the GUI.

mod app;
mod core;
mod ui;

use app::ComposeApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Jekyll Compose...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Jekyll Compose"),
        ..Default::default()
    };

    eframe::run_native(
        "Jekyll Compose",
        native_options,
        Box::new(|cc| Ok(Box::new(ComposeApp::new(cc)))),
    )
}
