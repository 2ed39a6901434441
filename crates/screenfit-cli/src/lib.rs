//! Screenfit CLI Library
//!
//! Command-line interface for the Screenfit breakpoint classifier.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    CategoryArg, ClassifyArgs, Cli, ColorArg, Commands, ConfigArgs, FormatArg, MatrixArgs,
    PlatformArg, PresetArgs, PresetsArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{to_json, Renderer};
