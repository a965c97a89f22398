//! Bond Grid - Main Entry Point
//!
//! Opens a bond dataset in an interactive table with search, sorting and
//! pagination.
//!
//! Usage: `bondgrid [DATASET.json]`

use bondgrid_rs::{
    config::{AppConfig, AppState},
    frontend::{load_startup_dataset, BondGridApp},
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,bondgrid_rs=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bond Grid");

    let config = AppConfig::load_or_default();
    let mut app_state = AppState::load_or_default();
    app_state.cleanup_missing_datasets();

    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let (records, dataset_path, last_error) =
        load_startup_dataset(&config, &app_state, explicit);
    if last_error.is_none() {
        app_state.add_recent_dataset(&dataset_path);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 480.0])
            .with_title("Bond Grid"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Bond Grid",
        native_options,
        Box::new(|cc| {
            Ok(Box::new(BondGridApp::new(
                cc,
                config,
                app_state,
                records,
                Some(dataset_path),
                last_error,
            )))
        }),
    );

    tracing::info!("Shutting down...");

    result
}
