//! Output formatting

use console::{style, StyledObject};
use screenfit::{BreakpointCategory, DevicePreset, DeviceProfile};
use serde::Serialize;
use std::fmt::Write;

/// Renders profiles and preset listings as text
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether to use colors
    pub use_color: bool,
}

impl Renderer {
    /// Create a new renderer
    #[must_use]
    pub const fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn category(&self, category: BreakpointCategory) -> StyledObject<&'static str> {
        let styled = style(category.as_str()).force_styling(self.use_color).bold();
        match category {
            BreakpointCategory::Small => styled.yellow(),
            BreakpointCategory::Medium => styled.green(),
            BreakpointCategory::Large => styled.cyan(),
            BreakpointCategory::Tablet => styled.magenta(),
        }
    }

    /// Multi-line report for one device
    #[must_use]
    pub fn profile(&self, profile: &DeviceProfile) -> String {
        let m = &profile.metrics;
        let mut out = String::new();
        if let Some(name) = &profile.name {
            let _ = writeln!(out, "{}", style(name).force_styling(self.use_color).bold());
        }
        let _ = writeln!(
            out,
            "  category:     {}",
            self.category(profile.classification.category)
        );
        let _ = writeln!(out, "  orientation:  {}", profile.classification.orientation);
        let _ = writeln!(out, "  platform:     {}", m.platform);
        let _ = writeln!(out, "  logical:      {} x {}", m.width, m.height);
        let _ = writeln!(
            out,
            "  physical:     {} x {} @{}x ({})",
            profile.physical_width, profile.physical_height, m.scale, profile.density
        );
        let _ = writeln!(out, "  font scale:   {} ({})", m.font_scale, profile.text_size);
        out
    }

    /// One line per preset
    #[must_use]
    pub fn preset_list<'a>(&self, presets: impl IntoIterator<Item = &'a DevicePreset>) -> String {
        let mut out = String::new();
        for preset in presets {
            let m = &preset.metrics;
            let _ = writeln!(
                out,
                "{:<20} {:<8} {:>6} x {:<6} @{}x",
                preset.name, m.platform, m.width, m.height, m.scale
            );
        }
        out
    }

    /// Compatibility matrix table
    #[must_use]
    pub fn matrix(&self, rows: &[DeviceProfile]) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<20} {:<8} {:>13}  {:<10} {}",
            "DEVICE", "PLATFORM", "SIZE", "ORIENT", "CATEGORY"
        );
        for row in rows {
            let m = &row.metrics;
            let size = format!("{}x{}", m.width, m.height);
            let _ = writeln!(
                out,
                "{:<20} {:<8} {:>13}  {:<10} {}",
                row.name.as_deref().unwrap_or("-"),
                m.platform.as_str(),
                size,
                row.classification.orientation.as_str(),
                self.category(row.classification.category)
            );
        }
        out
    }
}

/// Pretty JSON followed by a newline
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
