// src/gui/components/quote_card.rs
//
// The card: revealed quote text, author, tags as pills. Returns false when
// the selection matches nothing, in which case only the notice is drawn.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText};

use crate::config::consts::EMPTY_NOTICE;
use crate::gui::app::App;
use crate::viewer::Card;

pub fn draw(ui: &mut egui::Ui, app: &App) -> bool {
    let Some(session) = app.session() else { return false };

    let Some(quote) = session.current() else {
        ui.add_space(12.0);
        ui.colored_label(ui.visuals().warn_fg_color, EMPTY_NOTICE);
        return false;
    };
    let card = Card::from(quote);

    let shown = app.typewriter.reveal(card.text);
    if shown.len() < card.text.len() {
        ui.ctx().request_repaint_after(app.typewriter.delay());
    }

    ui.add_space(16.0);
    egui::Frame::new()
        .fill(Color32::from_white_alpha(10))
        .corner_radius(CornerRadius::same(24))
        .inner_margin(Margin::same(32))
        .show(ui, |ui| {
            ui.set_width(ui.available_width().min(700.0));
            ui.set_min_height(96.0);

            ui.label(RichText::new(shown).size(20.0));

            ui.add_space(24.0);
            ui.label(RichText::new(format!("— {}", card.author)).strong().weak());

            ui.add_space(16.0);
            ui.horizontal_wrapped(|ui| {
                for tag in card.tags {
                    egui::Frame::new()
                        .fill(Color32::from_white_alpha(20))
                        .corner_radius(CornerRadius::same(255))
                        .inner_margin(Margin::symmetric(10, 4))
                        .show(ui, |ui| {
                            ui.label(RichText::new(tag).small());
                        });
                }
            });
        });

    ui.add_space(8.0);
    ui.label(
        RichText::new(format!("{} / {}", session.index() + 1, session.filtered_len()))
            .small()
            .weak(),
    );
    true
}
