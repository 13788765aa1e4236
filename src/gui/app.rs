// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, state::AppState},
    store,
    viewer::{Session, Typewriter},
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

/// What the window has to work with.
pub enum Content {
    Ready(Session),
    /// Load failed; nothing to show but the reason.
    Failed(String),
}

pub struct App {
    pub state: AppState,
    pub content: Content,
    pub typewriter: Typewriter,

    // session revision the typewriter last restarted for
    pub shown_rev: Option<u64>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let content = match store::load_table(&state.options.data_path) {
            Ok(table) => {
                logf!("Init: {} quotes, {} tags", table.len(), table.all_tags().len());
                Content::Ready(Session::new(table))
            }
            Err(e) => {
                loge!("Init: {e}");
                Content::Failed(e.to_string())
            }
        };

        let typewriter = Typewriter::new(state.options.reveal_delay);

        Self { state, content, typewriter, shown_rev: None }
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.content {
            Content::Ready(s) => Some(s),
            Content::Failed(_) => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match &mut self.content {
            Content::Ready(s) => Some(s),
            Content::Failed(_) => None,
        }
    }

    /// Replay the reveal after any navigation or filter change, including
    /// ones that leave the same quote on screen.
    pub fn sync_typewriter(&mut self) {
        let rev = self.session().map(|s| s.revision());
        if rev != self.shown_rev {
            self.typewriter.restart();
            self.shown_rev = rev;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Content::Failed(msg) = &self.content {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading(APP_TITLE);
                ui.separator();
                ui.colored_label(ui.visuals().error_fg_color, msg.as_str());
            });
            return;
        }

        egui::SidePanel::left("filters")
            .resizable(false)
            .default_width(self.state.gui.sidebar_w)
            .show(ctx, |ui| {
                crate::gui::components::tag_panel::draw(ui, self);
                self.sync_typewriter();
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);

            self.sync_typewriter();
            if !crate::gui::components::quote_card::draw(ui, self) {
                // empty selection: nothing to page through
                return;
            }

            ui.separator();

            crate::gui::components::nav_bar::draw(ui, self);
            self.sync_typewriter();
        });
    }
}
