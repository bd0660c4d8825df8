//! Application settings

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckSettings {
    /// Theme settings
    pub theme: ThemeSettings,

    /// Native window geometry
    pub window: WindowSettings,

    /// Height of every chart in points
    pub chart_height: f32,

    /// Whether arrow keys and `C` drive the deck
    pub keyboard_navigation: bool,
}

/// Theme settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Whether to use dark mode
    pub dark_mode: bool,

    /// UI scale factor
    pub scale_factor: f32,
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            theme: ThemeSettings::default(),
            window: WindowSettings::default(),
            chart_height: 288.0,
            keyboard_navigation: true,
        }
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            scale_factor: 1.0,
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 860.0,
            min_width: 720.0,
            min_height: 560.0,
        }
    }
}

impl DeckSettings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Clamp values that would make the UI unusable
    fn sanitized(mut self) -> Self {
        self.theme.scale_factor = self.theme.scale_factor.clamp(0.5, 3.0);
        self.chart_height = self.chart_height.max(120.0);
        self.window.width = self.window.width.max(self.window.min_width);
        self.window.height = self.window.height.max(self.window.min_height);
        self
    }
}
