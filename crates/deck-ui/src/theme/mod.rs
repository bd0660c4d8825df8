use deck_core::ThemeSettings;
use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Theme configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub dark_mode: bool,
    pub scale_factor: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            dark_mode: false,
            scale_factor: 1.0,
        }
    }
}

impl From<&ThemeSettings> for Theme {
    fn from(settings: &ThemeSettings) -> Self {
        Self {
            dark_mode: settings.dark_mode,
            scale_factor: settings.scale_factor,
        }
    }
}

/// Accent used for active navigation and code toggles
pub fn accent_color() -> Color32 {
    Color32::from_rgb(37, 99, 235)
}

/// Build the deck visuals: a clean slide look in either mode
pub fn visuals(theme: &Theme) -> Visuals {
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };
    let accent = accent_color();

    let (page, panel, faint, border, text) = if theme.dark_mode {
        (
            Color32::from_rgb(17, 24, 39),
            Color32::from_rgb(31, 41, 55),
            Color32::from_rgb(38, 50, 68),
            Color32::from_rgb(55, 65, 81),
            Color32::from_rgb(229, 231, 235),
        )
    } else {
        (
            Color32::from_rgb(243, 244, 246),
            Color32::WHITE,
            Color32::from_rgb(249, 250, 251),
            Color32::from_rgb(229, 231, 235),
            Color32::from_rgb(31, 41, 55),
        )
    };

    visuals.panel_fill = page;
    visuals.window_fill = panel;
    visuals.faint_bg_color = faint;
    visuals.extreme_bg_color = if theme.dark_mode {
        Color32::from_rgb(11, 15, 25)
    } else {
        Color32::from_rgb(241, 245, 249)
    };
    visuals.code_bg_color = visuals.extreme_bg_color;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, border);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text);
    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.rounding = Rounding::same(4.0);
    }
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);

    visuals.selection.bg_fill = accent;
    visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);
    visuals.hyperlink_color = accent;

    visuals.window_shadow.extrusion = 8.0;
    visuals.popup_shadow.extrusion = 4.0;
    visuals
}

/// Apply the deck theme to the context
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);
    style.spacing.indent = 20.0;

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(24.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals(theme));
    ctx.set_pixels_per_point(theme.scale_factor);

    tracing::debug!(
        "Applied {} theme at scale {}",
        if theme.dark_mode { "dark" } else { "light" },
        theme.scale_factor
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_settings() {
        let settings = ThemeSettings {
            dark_mode: true,
            scale_factor: 1.5,
        };
        assert_eq!(
            Theme::from(&settings),
            Theme {
                dark_mode: true,
                scale_factor: 1.5
            }
        );
    }

    #[test]
    fn test_visuals_follow_mode() {
        let light = visuals(&Theme::default());
        assert!(!light.dark_mode);
        assert_eq!(light.window_fill, Color32::WHITE);
        assert_eq!(light.selection.bg_fill, accent_color());

        let dark = visuals(&Theme {
            dark_mode: true,
            scale_factor: 1.0,
        });
        assert!(dark.dark_mode);
        assert_eq!(dark.hyperlink_color, accent_color());
    }

    #[test]
    fn test_apply_theme_sets_context_visuals() {
        let ctx = Context::default();
        apply_theme(&ctx, &Theme::default());
        assert_eq!(ctx.style().visuals.panel_fill, Color32::from_rgb(243, 244, 246));
        assert_eq!(
            ctx.style().text_styles[&TextStyle::Body],
            FontId::new(15.0, FontFamily::Proportional)
        );
    }
}
