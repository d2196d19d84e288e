#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod domain;
pub mod error;
pub mod metro_map;
pub mod routing;
pub mod schedule;
pub mod settings;
pub mod shell;
pub mod tickets;
pub mod ui;

// Re-export commonly used types
pub use domain::{RouteMode, RouteResult, Station, StationId, StationRegistry};
pub use error::AppError;
pub use settings::AppSettings;
pub use ui::MetroConnectApp;

use anyhow::Context;
// CLI argument parsing
use clap::Parser;

use crate::routing::PlannerKind;
use crate::schedule::BoardScope;
use crate::shell::Tab;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for the mock data generator (routes, arrival boards)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Route planner: synthesized placeholder routes or shortest paths over the network
    #[arg(long, value_enum, default_value_t = PlannerKind::Mock)]
    pub routing: PlannerKind,

    /// What the graph planner optimizes for
    #[arg(long, value_enum, default_value_t = RouteMode::Fastest)]
    pub route_mode: RouteMode,

    /// Whether picking another station rebuilds the arrival board
    #[arg(long, value_enum, default_value_t = BoardScope::Network)]
    pub board_scope: BoardScope,

    /// Tab shown at startup
    #[arg(long, value_enum, default_value_t = Tab::Map)]
    pub start_tab: Tab,

    /// Keep each tab's state when switching away instead of resetting it
    #[arg(long, default_value_t = false)]
    pub keep_tab_state: bool,
}

/// Builds and validates the built-in station registry.
pub fn load_network() -> anyhow::Result<StationRegistry> {
    let registry = StationRegistry::standard().context("station table failed validation")?;
    log::info!(
        "Loaded {} stations on {} lines",
        registry.len(),
        registry.lines().count()
    );
    Ok(registry)
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    settings: AppSettings,
    registry: StationRegistry,
) -> Box<dyn eframe::App> {
    let app = ui::MetroConnectApp::new(cc, settings, registry);
    Box::new(app)
}
