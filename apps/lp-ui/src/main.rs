#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod run_worker;
mod views;

use app::LpOnlineApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("lp_solve online"),
        ..Default::default()
    };

    eframe::run_native(
        "lp_solve online",
        options,
        Box::new(|cc| Ok(Box::new(LpOnlineApp::new(cc)))),
    )
}
