//! Breakpoint Classifier
//!
//! Pure mapping from [`DeviceMetrics`] to a [`Classification`]. The
//! classifier owns nothing but its policy; every call validates its input
//! and returns the same answer for the same metrics.
//!
//! ```
//! use screenfit::{BreakpointCategory, Classifier, DeviceMetrics, Orientation, Platform};
//!
//! let classifier = Classifier::default();
//! let metrics = DeviceMetrics::new(768.0, 1024.0, Platform::Ios).with_scale(2.0);
//! let result = classifier.classify(&metrics).unwrap();
//! assert_eq!(result.category, BreakpointCategory::Tablet);
//! assert_eq!(result.orientation, Orientation::Portrait);
//! ```

use crate::breakpoint::{BreakpointCategory, BreakpointPolicy};
use crate::metrics::{DensityBucket, DeviceMetrics, Orientation, TextSize};
use crate::result::ScreenfitResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of classifying one set of metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    /// Layout category
    pub category: BreakpointCategory,
    /// Screen orientation
    pub orientation: Orientation,
}

/// Everything the classifier can say about a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Device name, when the metrics came from a preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Metrics the profile was computed from
    pub metrics: DeviceMetrics,
    /// Category and orientation
    pub classification: Classification,
    /// Density class
    pub density: DensityBucket,
    /// Text size class
    pub text_size: TextSize,
    /// Physical width in device pixels
    pub physical_width: u32,
    /// Physical height in device pixels
    pub physical_height: u32,
}

/// Breakpoint classifier
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Classifier {
    policy: BreakpointPolicy,
}

impl Classifier {
    /// Create a classifier, rejecting an inconsistent policy
    pub fn new(policy: BreakpointPolicy) -> ScreenfitResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Policy in use
    #[must_use]
    pub const fn policy(&self) -> &BreakpointPolicy {
        &self.policy
    }

    /// Classify device metrics.
    ///
    /// Fails with `InvalidMetrics` if any dimension, scale or font scale is
    /// non-positive or not finite.
    pub fn classify(&self, metrics: &DeviceMetrics) -> ScreenfitResult<Classification> {
        metrics.validate()?;

        let classification = Classification {
            category: self.policy.category(metrics),
            orientation: metrics.orientation(),
        };
        debug!(
            width = metrics.width,
            height = metrics.height,
            platform = %metrics.platform,
            category = %classification.category,
            orientation = %classification.orientation,
            "classified device metrics"
        );
        Ok(classification)
    }

    /// Classify and compute the derived density and text classes
    pub fn profile(&self, metrics: &DeviceMetrics) -> ScreenfitResult<DeviceProfile> {
        let classification = self.classify(metrics)?;
        let (physical_width, physical_height) = metrics.physical_size();
        Ok(DeviceProfile {
            name: None,
            metrics: *metrics,
            classification,
            density: DensityBucket::from_scale(metrics.scale),
            text_size: TextSize::from_font_scale(metrics.font_scale),
            physical_width,
            physical_height,
        })
    }

    /// Like [`Classifier::profile`], tagged with a device name
    pub fn profile_named(
        &self,
        name: impl Into<String>,
        metrics: &DeviceMetrics,
    ) -> ScreenfitResult<DeviceProfile> {
        let mut profile = self.profile(metrics)?;
        profile.name = Some(name.into());
        Ok(profile)
    }
}
