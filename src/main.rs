//! BookTrack GUI - Main Entry Point
//!
//! Native client listing the books served by the BookTrack API.

use booktrack_gui::app::application::run_app;
use booktrack_gui::domain::config::AppConfig;
use booktrack_gui::utils::config_store::{load_config, CONFIG_FILE};

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting BookTrack GUI...");

    let config = match load_config::<AppConfig>(CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }
    };

    // Run the GPUI application
    run_app(config);
}
