// src/gui/components/tag_panel.rs
//
// Left sidebar: multi-select tag list. Clicking a tag toggles it; "Clear"
// drops the whole selection. Any change resets the carousel to the first
// match (handled by Session).

use eframe::egui;

use crate::config::consts::SIDEBAR_CAPTION;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");

    let Some(session) = app.session_mut() else { return };
    let tags = session.all_tags();

    ui.horizontal(|ui| {
        ui.label(format!("Filter by tags ({} selected)", session.active_tags().len()));
        if ui
            .add_enabled(!session.active_tags().is_empty(), egui::Button::new("Clear"))
            .clicked()
            && session.clear_tags()
        {
            logf!("UI: tags cleared");
        }
    });

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("tag_panel_scroll")
        .max_height(list_height(ui.available_height()))
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for tag in &tags {
                let is_selected = session.active_tags().contains(tag);
                if ui.selectable_label(is_selected, tag.as_str()).clicked() && session.toggle_tag(tag) {
                    logf!(
                        "UI: tag {:?} {} → {} match(es)",
                        tag,
                        if is_selected { "off" } else { "on" },
                        session.filtered_len()
                    );
                }
            }
        });

    ui.separator();
    ui.label(egui::RichText::new(SIDEBAR_CAPTION).small().weak());
}

/// Room for the tag list, leaving space for the caption underneath.
fn list_height(available: f32) -> f32 {
    (available - CAPTION_RESERVE).max(0.0)
}

const CAPTION_RESERVE: f32 = 48.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_height_never_negative() {
        assert_eq!(list_height(500.0), 452.0);
        assert_eq!(list_height(CAPTION_RESERVE), 0.0);
        assert_eq!(list_height(10.0), 0.0);
        assert_eq!(list_height(0.0), 0.0);
    }
}
