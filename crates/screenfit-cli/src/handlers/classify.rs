//! Classify and preset command handlers

use crate::commands::{ClassifyArgs, FormatArg, PresetArgs};
use crate::error::CliResult;
use crate::output::{to_json, Renderer};
use screenfit::{DeviceProfile, ScreenfitConfig};
use tracing::info;

/// Render one profile in the requested format
pub fn render_profile(
    profile: &DeviceProfile,
    format: FormatArg,
    renderer: Renderer,
) -> CliResult<String> {
    match format {
        FormatArg::Text => Ok(renderer.profile(profile)),
        FormatArg::Json => Ok(to_json(profile)?),
    }
}

/// Execute the classify command
pub fn execute_classify(
    config: &ScreenfitConfig,
    args: &ClassifyArgs,
    renderer: Renderer,
) -> CliResult<String> {
    let classifier = config.classifier()?;
    let profile = classifier.profile(&args.metrics())?;
    info!(
        category = %profile.classification.category,
        orientation = %profile.classification.orientation,
        "classified ad-hoc metrics"
    );
    render_profile(&profile, args.format, renderer)
}

/// Execute the preset command
pub fn execute_preset(
    config: &ScreenfitConfig,
    args: &PresetArgs,
    renderer: Renderer,
) -> CliResult<String> {
    let catalog = config.catalog();
    let preset = catalog.require(&args.name)?;

    let mut metrics = if args.landscape {
        preset.metrics.landscape()
    } else {
        preset.metrics
    };
    if let Some(font_scale) = args.font_scale {
        metrics = metrics.with_font_scale(font_scale);
    }

    let profile = config.classifier()?.profile_named(&preset.name, &metrics)?;
    render_profile(&profile, args.format, renderer)
}
