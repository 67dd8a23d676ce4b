#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod submit_worker;
mod views;

use app::ScorecardApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 820.0])
            .with_title("StationCard"),
        ..Default::default()
    };

    eframe::run_native(
        "StationCard",
        options,
        Box::new(|cc| Ok(Box::new(ScorecardApp::new(cc)))),
    )
}
