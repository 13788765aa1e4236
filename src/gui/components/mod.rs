// src/gui/components/mod.rs
pub mod nav_bar;
pub mod quote_card;
pub mod tag_panel;
