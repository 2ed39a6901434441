//! Command handlers - extracted from main.rs for testability
//!
//! Each handler builds the command's output as a `String`; `main` prints it.

pub mod catalog;
pub mod classify;
pub mod config;

pub use catalog::{build_matrix, execute_matrix, execute_presets};
pub use classify::{execute_classify, execute_preset, render_profile};
pub use config::execute_config;
