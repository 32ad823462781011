//! Shared appearance of the map overlay buttons.

use eframe::egui::Color32;
use serde::Deserialize;

/// Appearance of a control button: a fixed-size square with a rounded,
/// semi-transparent dark-blue background.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlStyle {
    /// Button side length in pixels.
    pub size: f32,
    /// Inner padding around the icon in pixels.
    pub padding: f32,
    /// Corner radius in pixels.
    pub corner_radius: u8,
    /// Background color as straight RGBA.
    pub background: [u8; 4],
}

impl Default for ControlStyle {
    fn default() -> Self {
        Self {
            size: 28.0,
            padding: 2.0,
            corner_radius: 2,
            background: [0, 60, 136, 179],
        }
    }
}

impl ControlStyle {
    pub fn background_color(&self) -> Color32 {
        let [r, g, b, a] = self.background;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    /// Icon glyph size leaving room for padding inside the button.
    pub fn icon_size(&self) -> f32 {
        (self.size - 2.0 * self.padding - 8.0).max(8.0)
    }
}
