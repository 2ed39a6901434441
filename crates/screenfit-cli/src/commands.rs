//! CLI command definitions using clap

use crate::config::ColorChoice;
use clap::{Parser, Subcommand, ValueEnum};
use screenfit::{BreakpointCategory, DeviceMetrics, Platform};
use std::path::PathBuf;

/// Screenfit: classify mobile device metrics into responsive breakpoints
#[derive(Parser, Debug)]
#[command(name = "screenfit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// YAML configuration file with breakpoint thresholds and extra devices
    #[arg(long, global = true, env = "SCREENFIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify ad-hoc device metrics
    Classify(ClassifyArgs),

    /// Classify a named device preset
    Preset(PresetArgs),

    /// List device presets
    Presets(PresetsArgs),

    /// Classify every preset in both orientations
    Matrix(MatrixArgs),

    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Arguments for the classify command
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Width in logical pixels
    #[arg(long, allow_negative_numbers = true)]
    pub width: f64,

    /// Height in logical pixels
    #[arg(long, allow_negative_numbers = true)]
    pub height: f64,

    /// Pixel density multiplier
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    pub scale: f64,

    /// User font scale
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    pub font_scale: f64,

    /// Host platform
    #[arg(short, long, default_value = "ios")]
    pub platform: PlatformArg,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,
}

impl ClassifyArgs {
    /// Metrics described by the arguments
    #[must_use]
    pub fn metrics(&self) -> DeviceMetrics {
        DeviceMetrics::new(self.width, self.height, self.platform.into())
            .with_scale(self.scale)
            .with_font_scale(self.font_scale)
    }
}

/// Arguments for the preset command
#[derive(Parser, Debug)]
pub struct PresetArgs {
    /// Preset name (case-insensitive), e.g. "iPhone SE"
    pub name: String,

    /// Classify the preset rotated to landscape
    #[arg(long)]
    pub landscape: bool,

    /// Override the preset's font scale
    #[arg(long)]
    pub font_scale: Option<f64>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,
}

/// Arguments for the presets command
#[derive(Parser, Debug)]
pub struct PresetsArgs {
    /// Only list presets for this platform
    #[arg(short, long)]
    pub platform: Option<PlatformArg>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,
}

/// Arguments for the matrix command
#[derive(Parser, Debug)]
pub struct MatrixArgs {
    /// Only show rows in this category
    #[arg(short, long)]
    pub category: Option<CategoryArg>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Validate the configuration without printing it
    #[arg(long)]
    pub check: bool,
}

/// Output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

/// Platform argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlatformArg {
    /// iOS / iPadOS
    #[default]
    Ios,
    /// Android
    Android,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Ios => Self::Ios,
            PlatformArg::Android => Self::Android,
        }
    }
}

/// Category argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryArg {
    /// Compact phones
    Small,
    /// Regular phones
    Medium,
    /// Large phones
    Large,
    /// Tablets
    Tablet,
}

impl From<CategoryArg> for BreakpointCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Small => Self::Small,
            CategoryArg::Medium => Self::Medium,
            CategoryArg::Large => Self::Large,
            CategoryArg::Tablet => Self::Tablet,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_classify() {
        let cli = Cli::try_parse_from([
            "screenfit",
            "classify",
            "--width",
            "414",
            "--height",
            "896",
            "--scale",
            "2",
            "--platform",
            "android",
            "--format",
            "json",
        ])
        .unwrap();

        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        let metrics = args.metrics();
        assert_eq!(metrics.width, 414.0);
        assert_eq!(metrics.scale, 2.0);
        assert_eq!(metrics.font_scale, 1.0);
        assert_eq!(metrics.platform, Platform::Android);
        assert_eq!(args.format, FormatArg::Json);
    }

    #[test]
    fn test_parse_negative_width() {
        let cli =
            Cli::try_parse_from(["screenfit", "classify", "--width", "-5", "--height", "10"])
                .unwrap();
        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.width, -5.0);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["screenfit", "presets", "-vv", "--color", "never"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, ColorArg::Never);
    }

    #[test]
    fn test_parse_matrix_category() {
        let cli = Cli::try_parse_from(["screenfit", "matrix", "--category", "tablet"]).unwrap();
        let Commands::Matrix(args) = cli.command else {
            panic!("expected matrix");
        };
        assert_eq!(
            args.category.map(BreakpointCategory::from),
            Some(BreakpointCategory::Tablet)
        );
    }

    #[test]
    fn test_classify_requires_dimensions() {
        assert!(Cli::try_parse_from(["screenfit", "classify", "--width", "320"]).is_err());
    }
}
