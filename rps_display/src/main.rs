// main.rs - Rock/paper/scissors automaton in an egui window
//
// Startup: load config, initialise tracing, open the window.

use std::path::PathBuf;

use eframe::egui;
use rps_core::{SimConfig, Simulation};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod ui;

use error::DisplayError;
use ui::RpsApp;

const DEFAULT_CONFIG_PATH: &str = "rps-config.yaml";

/// Room around the canvas for the control rows and statistics.
const PANEL_MARGIN: [f32; 2] = [40.0, 260.0];

fn main() -> Result<(), DisplayError> {
    let config_path = std::env::var_os("RPS_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config_found = config_path.exists();
    let config = if config_found {
        SimConfig::from_file(&config_path)?
    } else {
        SimConfig::default()
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    if config_found {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }

    let canvas = config.display.canvas_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([(canvas + PANEL_MARGIN[0]).max(760.0), canvas + PANEL_MARGIN[1]]),
        ..Default::default()
    };

    let sim = Simulation::new(config);
    eframe::run_native(
        "Rock Paper Scissors Automaton",
        options,
        Box::new(move |_cc| Box::new(RpsApp::new(sim))),
    )?;

    info!("Window closed");
    Ok(())
}
