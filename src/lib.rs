// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod data;
pub mod gui;
pub mod normalize;
pub mod progress;
pub mod scrape;
pub mod store;
pub mod viewer;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
