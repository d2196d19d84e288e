#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use anyhow::anyhow;
use clap::Parser;
use eframe::NativeOptions;

use metro_connect::{AppSettings, Cli, load_network, run_app};

fn main() -> anyhow::Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);
    let settings = AppSettings::from(&args);

    // C. Static network, validated before any window opens
    let registry = load_network()?;

    // D. Run Native App
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MetroConnect - Умная навигация в метро",
        options,
        Box::new(move |cc| Ok(run_app(cc, settings, registry))),
    )
    .map_err(|e| anyhow!("eframe failed: {e}"))
}
