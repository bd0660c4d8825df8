//! The interactive deck: presentation, view state and settings in one owner

use deck_core::{DeckEvent, DeckSettings, Presentation, ViewState};
use deck_views::render;
use egui::Context;

use crate::shell;

/// Owns the single [`ViewState`] and routes UI events into it
pub struct PresentationView {
    presentation: Presentation,
    state: ViewState,
    settings: DeckSettings,
}

impl PresentationView {
    pub fn new(presentation: Presentation, settings: DeckSettings) -> Self {
        let state = ViewState::new(&presentation.sections);
        Self {
            presentation,
            state,
            settings,
        }
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn settings(&self) -> &DeckSettings {
        &self.settings
    }

    /// Apply one event; invalid ones are logged and dropped
    pub fn dispatch(&mut self, event: DeckEvent) {
        if let Err(err) = self.state.apply(&self.presentation.sections, event) {
            tracing::warn!("Ignoring {:?}: {}", event, err);
        }
    }

    /// Draw one frame and apply the events raised during it
    pub fn show(&mut self, ctx: &Context) {
        let mut events = if self.settings.keyboard_navigation {
            shell::keyboard_events(ctx)
        } else {
            Vec::new()
        };

        match render(&self.presentation, &self.state) {
            Ok(frame) => events.extend(shell::show_frame(ctx, &frame, self.settings.chart_height)),
            Err(err) => tracing::error!("Failed to render section {}: {}", self.state.active_section(), err),
        }

        for event in events {
            self.dispatch(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::SectionKey;
    use deck_slides::{keys, presentation};
    use egui::epaint::ClippedShape;
    use egui::{Event, FullOutput, Key, Modifiers, PointerButton, Pos2, RawInput, Rect, Shape, Vec2};

    fn view(settings: DeckSettings) -> PresentationView {
        PresentationView::new(presentation().unwrap(), settings)
    }

    fn input(events: Vec<Event>, modifiers: Modifiers) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1280.0, 4000.0))),
            events,
            modifiers,
            ..Default::default()
        }
    }

    fn key_press(key: Key) -> RawInput {
        chord(key, Modifiers::NONE)
    }

    fn chord(key: Key, modifiers: Modifiers) -> RawInput {
        input(
            vec![Event::Key {
                key,
                pressed: true,
                repeat: false,
                modifiers,
            }],
            modifiers,
        )
    }

    fn frame(view: &mut PresentationView, ctx: &Context, input: RawInput) -> FullOutput {
        ctx.run(input, |ctx| view.show(ctx))
    }

    /// Center of the painted text `label`, searched through nested shapes
    fn text_center(shape: &Shape, label: &str) -> Option<Pos2> {
        match shape {
            Shape::Text(text) if text.galley.text() == label => {
                Some(text.galley.rect.translate(text.pos.to_vec2()).center())
            }
            Shape::Vec(shapes) => shapes.iter().find_map(|s| text_center(s, label)),
            _ => None,
        }
    }

    fn locate(view: &mut PresentationView, ctx: &Context, label: &str) -> Pos2 {
        // Second idle pass so the layout has settled.
        frame(view, ctx, input(Vec::new(), Modifiers::NONE));
        let output = frame(view, ctx, input(Vec::new(), Modifiers::NONE));
        output
            .shapes
            .iter()
            .find_map(|clipped: &ClippedShape| text_center(&clipped.shape, label))
            .unwrap_or_else(|| panic!("'{}' was not painted", label))
    }

    fn click(view: &mut PresentationView, ctx: &Context, pos: Pos2) {
        let button = |pressed| Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        };
        frame(view, ctx, input(vec![Event::PointerMoved(pos), button(true)], Modifiers::NONE));
        frame(view, ctx, input(vec![button(false)], Modifiers::NONE));
    }

    #[test]
    fn test_starts_on_first_section_with_code_hidden() {
        let view = view(DeckSettings::default());
        assert_eq!(view.presentation().sections.len(), keys::ALL.len());
        assert_eq!(view.state().active_section().as_str(), keys::INTRO);
        assert!(!view.state().show_code());
    }

    #[test]
    fn test_dispatch_drops_invalid_keys() {
        let mut view = view(DeckSettings::default());
        view.dispatch(DeckEvent::SelectSection(SectionKey::new("doesNotExist")));
        assert_eq!(view.state().active_section().as_str(), keys::INTRO);

        view.dispatch(DeckEvent::SelectSection(SectionKey::new(keys::ETHICS)));
        assert_eq!(view.state().active_section().as_str(), keys::ETHICS);
    }

    #[test]
    fn test_idle_frames_leave_state_alone() {
        let mut view = view(DeckSettings::default());
        let ctx = Context::default();
        frame(&mut view, &ctx, RawInput::default());
        frame(&mut view, &ctx, RawInput::default());
        assert_eq!(view.state().active_section().as_str(), keys::INTRO);
        assert!(!view.state().show_code());
    }

    #[test]
    fn test_keyboard_drives_the_deck() {
        let mut view = view(DeckSettings::default());
        let ctx = Context::default();

        frame(&mut view, &ctx, key_press(Key::ArrowRight));
        assert_eq!(view.state().active_section().as_str(), keys::STREAMING);

        frame(&mut view, &ctx, key_press(Key::C));
        assert!(view.state().show_code());

        frame(&mut view, &ctx, key_press(Key::ArrowLeft));
        frame(&mut view, &ctx, key_press(Key::ArrowLeft));
        assert_eq!(view.state().active_section().as_str(), keys::INTRO);
        assert!(view.state().show_code());
    }

    #[test]
    fn test_keyboard_can_be_disabled() {
        let settings = DeckSettings {
            keyboard_navigation: false,
            ..DeckSettings::default()
        };
        let mut view = view(settings);
        let ctx = Context::default();

        frame(&mut view, &ctx, key_press(Key::ArrowRight));
        assert_eq!(view.state().active_section().as_str(), keys::INTRO);
        assert!(!view.settings().keyboard_navigation);
    }

    #[test]
    fn test_ctrl_c_does_not_toggle_code() {
        let mut view = view(DeckSettings::default());
        let ctx = Context::default();

        frame(&mut view, &ctx, chord(Key::C, Modifiers::CTRL));
        frame(&mut view, &ctx, chord(Key::C, Modifiers::COMMAND));
        assert!(!view.state().show_code());

        frame(&mut view, &ctx, key_press(Key::C));
        assert!(view.state().show_code());
    }

    #[test]
    fn test_clicks_toggle_code_and_select_sections() {
        let mut view = view(DeckSettings::default());
        let ctx = Context::default();

        let toggle = locate(&mut view, &ctx, "Show R Implementation");
        click(&mut view, &ctx, toggle);
        assert!(view.state().show_code());
        assert_eq!(view.state().active_section().as_str(), keys::INTRO);

        let tab = locate(&mut view, &ctx, "E-commerce Optimization");
        click(&mut view, &ctx, tab);
        assert_eq!(view.state().active_section().as_str(), keys::ECOMMERCE);
        assert!(view.state().show_code());

        let hide = locate(&mut view, &ctx, "Hide R Code");
        click(&mut view, &ctx, hide);
        assert!(!view.state().show_code());
        locate(&mut view, &ctx, "Show Dynamic Pricing Algorithm");
    }
}
