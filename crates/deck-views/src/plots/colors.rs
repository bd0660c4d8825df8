//! Color utilities for plots

use deck_core::Rgb;
use egui::Color32;

/// Convert a content color into an egui color
pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Get a categorical color from the default palette
pub fn categorical_color(index: usize) -> Color32 {
    const PALETTE: &[Color32] = &[
        Color32::from_rgb(136, 132, 216), // Purple
        Color32::from_rgb(130, 202, 157), // Green
        Color32::from_rgb(255, 198, 88),  // Amber
        Color32::from_rgb(255, 115, 0),   // Orange
        Color32::from_rgb(0, 136, 254),   // Blue
        Color32::from_rgb(0, 196, 159),   // Teal
    ];
    PALETTE[index % PALETTE.len()]
}

/// Color at `index` in `palette`, cycling; falls back to the default palette
pub fn palette_color(palette: &[Rgb], index: usize) -> Color32 {
    if palette.is_empty() {
        categorical_color(index)
    } else {
        to_color32(palette[index % palette.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles_by_index() {
        let palette = [Rgb(1, 2, 3), Rgb(4, 5, 6)];
        assert_eq!(palette_color(&palette, 0), Color32::from_rgb(1, 2, 3));
        assert_eq!(palette_color(&palette, 3), Color32::from_rgb(4, 5, 6));
    }

    #[test]
    fn test_empty_palette_uses_defaults() {
        assert_eq!(palette_color(&[], 1), categorical_color(1));
        assert_eq!(categorical_color(6), categorical_color(0));
    }
}
