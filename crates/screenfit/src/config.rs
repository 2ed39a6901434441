//! YAML configuration: breakpoint thresholds and extra device presets.
//!
//! ```yaml
//! policy:
//!   small_max_width: 360
//!   android_tablet_max_aspect: 1.6
//! devices:
//!   - name: Galaxy Fold (folded)
//!     width: 280
//!     height: 653
//!     scale: 3
//!     platform: android
//! ```

use crate::breakpoint::BreakpointPolicy;
use crate::catalog::{DeviceCatalog, DevicePreset};
use crate::classifier::Classifier;
use crate::result::{ScreenfitError, ScreenfitResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Screenfit configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenfitConfig {
    /// Breakpoint thresholds
    pub policy: BreakpointPolicy,
    /// Devices added to (or overriding) the built-in catalog
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<DevicePreset>,
}

impl ScreenfitConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a configuration from YAML.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> ScreenfitResult<Self> {
        let config = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str::<Self>(yaml).map_err(|e| ScreenfitError::ConfigParse {
                message: e.to_string(),
            })?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_path(path: impl AsRef<Path>) -> ScreenfitResult<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)?;
        let config = Self::from_yaml(&yaml)?;
        info!(
            path = %path.display(),
            devices = config.devices.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> ScreenfitResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| ScreenfitError::ConfigParse {
            message: e.to_string(),
        })
    }

    /// Check the policy and every custom device
    pub fn validate(&self) -> ScreenfitResult<()> {
        self.policy.validate()?;

        let mut seen = HashSet::new();
        for device in &self.devices {
            device.metrics.validate()?;
            if !seen.insert(device.name.trim().to_lowercase()) {
                return Err(ScreenfitError::DuplicatePreset {
                    name: device.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Built-in presets plus configured devices
    #[must_use]
    pub fn catalog(&self) -> DeviceCatalog {
        let mut catalog = DeviceCatalog::new();
        for device in &self.devices {
            catalog.register(device.clone());
        }
        catalog
    }

    /// Classifier using the configured policy
    pub fn classifier(&self) -> ScreenfitResult<Classifier> {
        Classifier::new(self.policy)
    }
}
