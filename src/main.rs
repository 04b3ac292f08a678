// Rust Datepicker
// Main entry point

use anyhow::{anyhow, Result};
use rust_datepicker::services::render::{GridRenderer, TextRenderer};
use rust_datepicker::services::settings::SettingsService;
use rust_datepicker::ui_egui::{DatePickerApp, LoggingHooks};
use rust_datepicker::{DatePicker, PickerSettings};

fn load_settings() -> PickerSettings {
    match SettingsService::from_default_location().and_then(|service| service.load()) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Using default settings: {:#}", e);
            PickerSettings::default()
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Datepicker");

    let settings = load_settings();
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("--print") => {
            let input = args.next().unwrap_or_default();
            let mut picker = DatePicker::builder(settings).input_value(input).build()?;
            if let Some(frame) = picker.draw(true) {
                println!("{}", TextRenderer.render(&frame));
            }
            Ok(())
        }
        Some("--json") => {
            let input = args.next().unwrap_or_default();
            let mut picker = DatePicker::builder(settings).input_value(input).build()?;
            if let Some(frame) = picker.draw(true) {
                println!("{}", serde_json::to_string_pretty(&frame)?);
            }
            Ok(())
        }
        Some(other) => Err(anyhow!(
            "Unknown argument '{}'; expected --print or --json",
            other
        )),
        None => run_gui(settings),
    }
}

fn run_gui(settings: PickerSettings) -> Result<()> {
    let picker = DatePicker::builder(settings).hooks(LoggingHooks).build()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Rust Datepicker")
            .with_inner_size([420.0, 360.0])
            .with_min_inner_size([320.0, 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Datepicker",
        options,
        Box::new(move |_cc| Ok(Box::new(DatePickerApp::new(picker)))),
    )
    .map_err(|e| anyhow!("GUI error: {}", e))
}
