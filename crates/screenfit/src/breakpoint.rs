//! Breakpoint categories and the thresholds that define them.

use crate::metrics::{DeviceMetrics, Platform};
use crate::result::{ScreenfitError, ScreenfitResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse device category used to pick a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakpointCategory {
    /// Compact phones
    Small,
    /// Regular phones
    Medium,
    /// Large phones, and phones held in landscape
    Large,
    /// Tablets
    Tablet,
}

impl BreakpointCategory {
    /// All categories, smallest first
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::Tablet];

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Tablet => "tablet",
        }
    }
}

impl fmt::Display for BreakpointCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for BreakpointCategory {
    type Err = ScreenfitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScreenfitError::UnknownCategory {
                value: s.to_string(),
            })
    }
}

/// Width thresholds and aspect heuristics for classification.
///
/// Widths are logical pixels. Bands are half-open: a width equal to a
/// threshold belongs to the band above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreakpointPolicy {
    /// Widths below this are small
    pub small_max_width: f64,
    /// Widths below this (and at least `small_max_width`) are medium
    pub medium_max_width: f64,
    /// Widths at or above this are always tablets
    pub tablet_min_width: f64,
    /// Medium-band devices at least this tall are large phones
    pub large_min_height: f64,
    /// Highest long/short ratio an iOS device in the boundary band may have
    /// and still count as a tablet
    pub ios_tablet_max_aspect: f64,
    /// Same limit for Android, whose tablets run wider (16:10)
    pub android_tablet_max_aspect: f64,
}

impl Default for BreakpointPolicy {
    fn default() -> Self {
        Self {
            small_max_width: 400.0,
            medium_max_width: 700.0,
            tablet_min_width: 1000.0,
            large_min_height: 800.0,
            ios_tablet_max_aspect: 1.5,
            android_tablet_max_aspect: 1.7,
        }
    }
}

impl BreakpointPolicy {
    /// Create the default policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the small/medium boundary
    #[must_use]
    pub const fn with_small_max_width(mut self, width: f64) -> Self {
        self.small_max_width = width;
        self
    }

    /// Set the medium/boundary-band boundary
    #[must_use]
    pub const fn with_medium_max_width(mut self, width: f64) -> Self {
        self.medium_max_width = width;
        self
    }

    /// Set the width from which every device is a tablet
    #[must_use]
    pub const fn with_tablet_min_width(mut self, width: f64) -> Self {
        self.tablet_min_width = width;
        self
    }

    /// Set the height that promotes a medium phone to large
    #[must_use]
    pub const fn with_large_min_height(mut self, height: f64) -> Self {
        self.large_min_height = height;
        self
    }

    /// Set the tablet aspect limit for one platform
    #[must_use]
    pub const fn with_tablet_max_aspect(mut self, platform: Platform, aspect: f64) -> Self {
        match platform {
            Platform::Ios => self.ios_tablet_max_aspect = aspect,
            Platform::Android => self.android_tablet_max_aspect = aspect,
        }
        self
    }

    /// Tablet aspect limit for a platform
    #[must_use]
    pub const fn tablet_max_aspect(&self, platform: Platform) -> f64 {
        match platform {
            Platform::Ios => self.ios_tablet_max_aspect,
            Platform::Android => self.android_tablet_max_aspect,
        }
    }

    /// Check that thresholds are positive, finite and ascending
    pub fn validate(&self) -> ScreenfitResult<()> {
        let fields = [
            ("small_max_width", self.small_max_width),
            ("medium_max_width", self.medium_max_width),
            ("tablet_min_width", self.tablet_min_width),
            ("large_min_height", self.large_min_height),
            ("ios_tablet_max_aspect", self.ios_tablet_max_aspect),
            ("android_tablet_max_aspect", self.android_tablet_max_aspect),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScreenfitError::invalid_policy(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }

        if self.small_max_width > self.medium_max_width {
            return Err(ScreenfitError::invalid_policy(format!(
                "small_max_width ({}) exceeds medium_max_width ({})",
                self.small_max_width, self.medium_max_width
            )));
        }
        if self.medium_max_width > self.tablet_min_width {
            return Err(ScreenfitError::invalid_policy(format!(
                "medium_max_width ({}) exceeds tablet_min_width ({})",
                self.medium_max_width, self.tablet_min_width
            )));
        }

        for platform in [Platform::Ios, Platform::Android] {
            let aspect = self.tablet_max_aspect(platform);
            if aspect < 1.0 {
                return Err(ScreenfitError::invalid_policy(format!(
                    "{platform} tablet aspect limit must be at least 1.0, got {aspect}"
                )));
            }
        }

        Ok(())
    }

    /// Category for already-validated metrics
    #[must_use]
    pub fn category(&self, metrics: &DeviceMetrics) -> BreakpointCategory {
        let width = metrics.width;
        if width < self.small_max_width {
            BreakpointCategory::Small
        } else if width < self.medium_max_width {
            if metrics.height >= self.large_min_height {
                BreakpointCategory::Large
            } else {
                BreakpointCategory::Medium
            }
        } else if width >= self.tablet_min_width
            || metrics.aspect_ratio() <= self.tablet_max_aspect(metrics.platform)
        {
            BreakpointCategory::Tablet
        } else {
            BreakpointCategory::Large
        }
    }
}
