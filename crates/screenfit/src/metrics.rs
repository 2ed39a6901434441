//! Device Metrics
//!
//! Logical screen dimensions, pixel density, font scale and platform identity
//! as sampled from the host at a single point in time.

use crate::result::{ScreenfitError, ScreenfitResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Host operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple iOS / iPadOS
    #[serde(alias = "iOS")]
    Ios,
    /// Google Android
    #[serde(alias = "Android")]
    Android,
}

impl Platform {
    /// Lowercase identifier, as the host reports it
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ScreenfitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            _ => Err(ScreenfitError::UnknownPlatform {
                value: s.to_string(),
            }),
        }
    }
}

/// Screen orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Height is at least the width (square screens count as portrait)
    Portrait,
    /// Width exceeds height
    Landscape,
}

impl Orientation {
    /// Orientation of a `width` x `height` surface
    #[must_use]
    pub fn of(width: f64, height: f64) -> Self {
        if width > height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

const fn default_scale() -> f64 {
    1.0
}

/// Device metrics sampled from the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceMetrics {
    /// Width in logical pixels
    pub width: f64,
    /// Height in logical pixels
    pub height: f64,
    /// Pixel density multiplier (physical / logical)
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// User text-size multiplier
    #[serde(default = "default_scale", alias = "fontScale")]
    pub font_scale: f64,
    /// Host operating system
    pub platform: Platform,
}

impl DeviceMetrics {
    /// Create metrics with a scale and font scale of 1.0
    #[must_use]
    pub const fn new(width: f64, height: f64, platform: Platform) -> Self {
        Self {
            width,
            height,
            scale: 1.0,
            font_scale: 1.0,
            platform,
        }
    }

    /// Set pixel scale
    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set font scale
    #[must_use]
    pub const fn with_font_scale(mut self, font_scale: f64) -> Self {
        self.font_scale = font_scale;
        self
    }

    /// Set platform
    #[must_use]
    pub const fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Check that every numeric field is positive and finite.
    ///
    /// Fields are checked in declaration order and the first offender is
    /// reported.
    pub fn validate(&self) -> ScreenfitResult<()> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("scale", self.scale),
            ("font_scale", self.font_scale),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScreenfitError::InvalidMetrics { field, value });
            }
        }
        Ok(())
    }

    /// Current orientation
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.width, self.height)
    }

    /// Same device rotated by 90 degrees
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            ..self
        }
    }

    /// Portrait version of these metrics
    #[must_use]
    pub fn portrait(self) -> Self {
        if self.width > self.height {
            self.rotated()
        } else {
            self
        }
    }

    /// Landscape version of these metrics (square screens are left as-is)
    #[must_use]
    pub fn landscape(self) -> Self {
        if self.height > self.width {
            self.rotated()
        } else {
            self
        }
    }

    /// Long side divided by short side, always >= 1.0 for valid metrics
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.width.max(self.height) / self.width.min(self.height)
    }

    /// Physical pixel dimensions, rounded to the nearest pixel
    #[must_use]
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width * self.scale).round() as u32,
            (self.height * self.scale).round() as u32,
        )
    }

    /// Rendered size of text specified at `size` points
    #[must_use]
    pub fn scaled_font(&self, size: f64) -> f64 {
        size * self.font_scale
    }
}

/// Coarse density class derived from the pixel scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityBucket {
    /// scale < 1.0
    Ldpi,
    /// 1.0 <= scale < 1.5
    Mdpi,
    /// 1.5 <= scale < 2.0
    Hdpi,
    /// 2.0 <= scale < 3.0
    Xhdpi,
    /// 3.0 <= scale < 4.0
    Xxhdpi,
    /// scale >= 4.0
    Xxxhdpi,
}

impl DensityBucket {
    /// Bucket for a pixel scale
    #[must_use]
    pub fn from_scale(scale: f64) -> Self {
        if scale < 1.0 {
            Self::Ldpi
        } else if scale < 1.5 {
            Self::Mdpi
        } else if scale < 2.0 {
            Self::Hdpi
        } else if scale < 3.0 {
            Self::Xhdpi
        } else if scale < 4.0 {
            Self::Xxhdpi
        } else {
            Self::Xxxhdpi
        }
    }

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ldpi => "ldpi",
            Self::Mdpi => "mdpi",
            Self::Hdpi => "hdpi",
            Self::Xhdpi => "xhdpi",
            Self::Xxhdpi => "xxhdpi",
            Self::Xxxhdpi => "xxxhdpi",
        }
    }
}

impl fmt::Display for DensityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Text size class derived from the font scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    /// font_scale < 1.0
    Small,
    /// 1.0 <= font_scale < 1.3
    Default,
    /// 1.3 <= font_scale < 2.0
    Large,
    /// font_scale >= 2.0
    Accessibility,
}

impl TextSize {
    /// Class for a font scale
    #[must_use]
    pub fn from_font_scale(font_scale: f64) -> Self {
        if font_scale < 1.0 {
            Self::Small
        } else if font_scale < 1.3 {
            Self::Default
        } else if font_scale < 2.0 {
            Self::Large
        } else {
            Self::Accessibility
        }
    }

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Default => "default",
            Self::Large => "large",
            Self::Accessibility => "accessibility",
        }
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
