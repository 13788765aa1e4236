// src/viewer/mod.rs
//
// Frontend-agnostic viewer logic. The egui window (`gui`) and the CLI `card`
// command both drive a `Session` and render `Card`s.
pub mod card;
pub mod session;
pub mod typewriter;

pub use card::Card;
pub use session::{FilterState, Session};
pub use typewriter::Typewriter;
