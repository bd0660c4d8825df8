//! Section tabs across the top of the deck

use deck_core::DeckEvent;
use deck_views::NavControl;
use egui::{Color32, RichText, Rounding, Ui, Vec2};

use crate::theme::accent_color;

/// Navigation strip: one button per section, in registry order
pub struct NavigationStrip<'a> {
    controls: &'a [NavControl<'a>],
}

impl<'a> NavigationStrip<'a> {
    pub fn new(controls: &'a [NavControl<'a>]) -> Self {
        Self { controls }
    }

    /// Show the strip; returns the selection made this frame
    pub fn ui(&self, ui: &mut Ui) -> Option<DeckEvent> {
        let mut event = None;

        ui.horizontal_wrapped(|ui| {
            ui.style_mut().spacing.item_spacing = Vec2::new(6.0, 6.0);

            for control in self.controls {
                let button = if control.active {
                    egui::Button::new(RichText::new(control.label).color(Color32::WHITE).strong())
                        .fill(accent_color())
                } else {
                    egui::Button::new(RichText::new(control.label))
                        .fill(ui.visuals().faint_bg_color)
                };

                let response = ui.add(button.rounding(Rounding::same(6.0)));
                if response.clicked() {
                    event = Some(DeckEvent::SelectSection(control.key));
                }
            }
        });

        event
    }
}
