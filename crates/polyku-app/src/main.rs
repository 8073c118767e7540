//! Polyku desktop application using egui/eframe.
//!
//! This is the entry point for the desktop Polyku application: an
//! interactive multi-size Sudoku-variant board with a saved-game history
//! screen.

use eframe::egui::{self, Vec2};

use crate::app::PolykuApp;

mod action;
mod app;
mod history;
mod state;
mod ui;

fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    log::info!("starting Polyku");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_app_id("io.github.polyku.polyku")
            .with_resizable(true)
            .with_inner_size(Vec2::new(800.0, 680.0))
            .with_min_inner_size(Vec2::new(420.0, 420.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Polyku",
        options,
        Box::new(|cc| Ok(Box::new(PolykuApp::new(cc)))),
    )
}
