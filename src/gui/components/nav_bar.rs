// src/gui/components/nav_bar.rs

use eframe::egui;
use egui_extras::{Size, StripBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(session) = app.session_mut() else { return };

    let mut prev = false;
    let mut next = false;

    StripBuilder::new(ui)
        .sizes(Size::remainder(), 2)
        .horizontal(|mut strip| {
            strip.cell(|ui| {
                prev = ui
                    .add_sized([ui.available_width(), 32.0], egui::Button::new("← Previous"))
                    .clicked();
            });
            strip.cell(|ui| {
                next = ui
                    .add_sized([ui.available_width(), 32.0], egui::Button::new("Next →"))
                    .clicked();
            });
        });

    if prev {
        session.prev();
        logd!("UI: previous → {}", session.index());
    }
    if next {
        session.next();
        logd!("UI: next → {}", session.index());
    }
}
