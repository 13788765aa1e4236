// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::ViewportBuilder;
use quotes_scrape::{
    config::{consts::LOG_FILE, state::AppState},
    gui,
    log::{self, LogSink},
};

fn main() {
    log::init(LogSink::File(Path::new(LOG_FILE)));

    let state = AppState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w, state.gui.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
