//! Presets and matrix command handlers

use crate::commands::{FormatArg, MatrixArgs, PresetsArgs};
use crate::error::CliResult;
use crate::output::{to_json, Renderer};
use screenfit::{
    BreakpointCategory, Classifier, DeviceCatalog, DevicePreset, DeviceProfile, Platform,
    ScreenfitConfig, ScreenfitResult,
};
use tracing::debug;

/// Execute the presets command
pub fn execute_presets(
    config: &ScreenfitConfig,
    args: &PresetsArgs,
    renderer: Renderer,
) -> CliResult<String> {
    let catalog = config.catalog();
    let platform = args.platform.map(Platform::from);
    let presets: Vec<&DevicePreset> = catalog
        .iter()
        .filter(|p| platform.map_or(true, |wanted| p.metrics.platform == wanted))
        .collect();

    match args.format {
        FormatArg::Text => Ok(renderer.preset_list(presets)),
        FormatArg::Json => Ok(to_json(&presets)?),
    }
}

/// Profile every preset in portrait and in landscape, keeping rows whose
/// category matches `filter`. Square devices get a single portrait row.
pub fn build_matrix(
    catalog: &DeviceCatalog,
    classifier: &Classifier,
    filter: Option<BreakpointCategory>,
) -> ScreenfitResult<Vec<DeviceProfile>> {
    let mut rows = Vec::with_capacity(catalog.len() * 2);
    for preset in catalog {
        let portrait = preset.metrics.portrait();
        let landscape = Some(preset.metrics.landscape()).filter(|m| *m != portrait);
        for metrics in std::iter::once(portrait).chain(landscape) {
            let profile = classifier.profile_named(&preset.name, &metrics)?;
            if filter.map_or(true, |c| profile.classification.category == c) {
                rows.push(profile);
            }
        }
    }
    debug!(rows = rows.len(), "built compatibility matrix");
    Ok(rows)
}

/// Execute the matrix command
pub fn execute_matrix(
    config: &ScreenfitConfig,
    args: &MatrixArgs,
    renderer: Renderer,
) -> CliResult<String> {
    let rows = build_matrix(
        &config.catalog(),
        &config.classifier()?,
        args.category.map(BreakpointCategory::from),
    )?;

    match args.format {
        FormatArg::Text => Ok(renderer.matrix(&rows)),
        FormatArg::Json => Ok(to_json(&rows)?),
    }
}
