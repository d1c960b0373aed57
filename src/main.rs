//! Fundviz - Grant Funding Distribution Viewer
//!
//! Loads a grant disbursement CSV and overlays cumulative distribution
//! curves for the selected grant pools.

mod charts;
mod curve;
mod data;
mod gui;

use eframe::egui;
use gui::FundvizApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Fundviz"),
        ..Default::default()
    };

    eframe::run_native(
        "Fundviz",
        options,
        Box::new(|cc| Ok(Box::new(FundvizApp::new(cc)))),
    )
}
