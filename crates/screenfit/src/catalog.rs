//! Device Catalog
//!
//! Named real-device metrics used as compatibility fixtures.

use crate::metrics::{DeviceMetrics, Platform};
use crate::result::{ScreenfitError, ScreenfitResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A named device and its portrait metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PresetRecord")]
pub struct DevicePreset {
    /// Device name (e.g., "iPhone SE")
    pub name: String,
    /// Metrics in the device's natural orientation
    #[serde(flatten)]
    pub metrics: DeviceMetrics,
}

impl DevicePreset {
    /// Create a new preset; surrounding whitespace is stripped from the name
    #[must_use]
    pub fn new(name: impl Into<String>, metrics: DeviceMetrics) -> Self {
        let mut name = name.into();
        let trimmed = name.trim();
        if trimmed.len() != name.len() {
            name = trimmed.to_string();
        }
        Self { name, metrics }
    }
}

const fn default_scale() -> f64 {
    1.0
}

/// Flat on-disk form of a preset. `flatten` cannot reject unknown keys,
/// so the fields are spelled out here.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetRecord {
    name: String,
    width: f64,
    height: f64,
    #[serde(default = "default_scale")]
    scale: f64,
    #[serde(default = "default_scale", alias = "fontScale")]
    font_scale: f64,
    platform: Platform,
}

impl From<PresetRecord> for DevicePreset {
    fn from(record: PresetRecord) -> Self {
        let metrics = DeviceMetrics::new(record.width, record.height, record.platform)
            .with_scale(record.scale)
            .with_font_scale(record.font_scale);
        Self::new(record.name, metrics)
    }
}

fn catalog_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Catalog of device presets, looked up by case-insensitive name
#[derive(Debug, Clone, Default)]
pub struct DeviceCatalog {
    presets: BTreeMap<String, DevicePreset>,
}

impl DeviceCatalog {
    /// Create a catalog with the built-in presets
    #[must_use]
    pub fn new() -> Self {
        let mut catalog = Self::empty();

        catalog.register(Self::iphone_se());
        catalog.register(Self::iphone_x());
        catalog.register(Self::iphone_11());
        catalog.register(Self::ipad());
        catalog.register(Self::ipad_pro());
        catalog.register(Self::pixel_7());
        catalog.register(Self::galaxy_s23());
        catalog.register(Self::galaxy_tab_s8());

        catalog
    }

    /// Create a catalog with no presets
    #[must_use]
    pub fn empty() -> Self {
        Self {
            presets: BTreeMap::new(),
        }
    }

    /// Register a preset, replacing any preset with the same name
    pub fn register(&mut self, mut preset: DevicePreset) {
        let trimmed = preset.name.trim();
        if trimmed.len() != preset.name.len() {
            preset.name = trimmed.to_string();
        }
        debug!(name = %preset.name, "registering device preset");
        let _ = self.presets.insert(catalog_key(&preset.name), preset);
    }

    /// Get a preset by name, ignoring case and surrounding whitespace
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DevicePreset> {
        self.presets.get(&catalog_key(name))
    }

    /// Get a preset by name, failing with `UnknownPreset`
    pub fn require(&self, name: &str) -> ScreenfitResult<&DevicePreset> {
        self.get(name)
            .ok_or_else(|| ScreenfitError::unknown_preset(name))
    }

    /// Preset names, in case-insensitive order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.presets.values().map(|p| p.name.as_str()).collect()
    }

    /// Iterate over presets in name order
    pub fn iter(&self) -> impl Iterator<Item = &DevicePreset> {
        self.presets.values()
    }

    /// Number of presets
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the catalog has no presets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    // ========================================================================
    // iOS Presets
    // ========================================================================

    /// iPhone SE (1st generation)
    #[must_use]
    pub fn iphone_se() -> DevicePreset {
        DevicePreset::new(
            "iPhone SE",
            DeviceMetrics::new(320.0, 568.0, Platform::Ios).with_scale(2.0),
        )
    }

    /// iPhone X
    #[must_use]
    pub fn iphone_x() -> DevicePreset {
        DevicePreset::new(
            "iPhone X",
            DeviceMetrics::new(375.0, 812.0, Platform::Ios).with_scale(3.0),
        )
    }

    /// iPhone 11
    #[must_use]
    pub fn iphone_11() -> DevicePreset {
        DevicePreset::new(
            "iPhone 11",
            DeviceMetrics::new(414.0, 896.0, Platform::Ios).with_scale(2.0),
        )
    }

    /// iPad (9.7")
    #[must_use]
    pub fn ipad() -> DevicePreset {
        DevicePreset::new(
            "iPad",
            DeviceMetrics::new(768.0, 1024.0, Platform::Ios).with_scale(2.0),
        )
    }

    /// iPad Pro 12.9"
    #[must_use]
    pub fn ipad_pro() -> DevicePreset {
        DevicePreset::new(
            "iPad Pro 12.9",
            DeviceMetrics::new(1024.0, 1366.0, Platform::Ios).with_scale(2.0),
        )
    }

    // ========================================================================
    // Android Presets
    // ========================================================================

    /// Google Pixel 7
    #[must_use]
    pub fn pixel_7() -> DevicePreset {
        DevicePreset::new(
            "Pixel 7",
            DeviceMetrics::new(412.0, 915.0, Platform::Android).with_scale(2.625),
        )
    }

    /// Samsung Galaxy S23
    #[must_use]
    pub fn galaxy_s23() -> DevicePreset {
        DevicePreset::new(
            "Galaxy S23",
            DeviceMetrics::new(360.0, 780.0, Platform::Android).with_scale(3.0),
        )
    }

    /// Samsung Galaxy Tab S8
    #[must_use]
    pub fn galaxy_tab_s8() -> DevicePreset {
        DevicePreset::new(
            "Galaxy Tab S8",
            DeviceMetrics::new(800.0, 1280.0, Platform::Android).with_scale(2.0),
        )
    }
}

impl<'a> IntoIterator for &'a DeviceCatalog {
    type Item = &'a DevicePreset;
    type IntoIter = std::collections::btree_map::Values<'a, String, DevicePreset>;

    fn into_iter(self) -> Self::IntoIter {
        self.presets.values()
    }
}
