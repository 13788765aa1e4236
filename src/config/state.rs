// src/config/state.rs
use super::options::ViewerOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,
    pub sidebar_w: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 900.0,
            window_h: 640.0,
            sidebar_w: 220.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: ViewerOptions,
    pub gui: GuiState,
}
