//! Deck layout: header with navigation, scrolling body, footer

use deck_core::{DeckChrome, DeckEvent};
use deck_views::{Body, ContentPainter, PresentationFrame};
use egui::{
    Align, CentralPanel, Context, Frame, Key, Layout, Margin, RichText, Rounding, ScrollArea,
    TopBottomPanel,
};

use crate::navigation_strip::NavigationStrip;
use crate::widget_utils::{section_id, WidgetId};

/// Widest the slide body grows before centering
const MAX_BODY_WIDTH: f32 = 960.0;

/// Show a whole frame and return the events its controls raised
pub fn show_frame(ctx: &Context, frame: &PresentationFrame<'_>, chart_height: f32) -> Vec<DeckEvent> {
    let mut events = Vec::new();

    if let Some(event) = header(ctx, frame) {
        events.push(event);
    }
    footer(ctx, frame.chrome);
    events.extend(body(ctx, &frame.body, chart_height));

    events
}

fn header(ctx: &Context, frame: &PresentationFrame<'_>) -> Option<DeckEvent> {
    let accent = crate::theme::accent_color();
    let mut event = None;

    TopBottomPanel::top(WidgetId::new("deck").with("header").id())
        .frame(
            Frame::none()
                .fill(ctx.style().visuals.window_fill())
                .inner_margin(Margin::symmetric(16.0, 12.0)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&frame.chrome.title).size(28.0).strong().color(accent));
                ui.label(RichText::new(&frame.chrome.subtitle).size(18.0));
                ui.label(RichText::new(&frame.chrome.tagline).small().weak());
            });
            ui.add_space(10.0);
            event = NavigationStrip::new(&frame.navigation).ui(ui);
        });

    event
}

fn footer(ctx: &Context, chrome: &DeckChrome) {
    TopBottomPanel::bottom(WidgetId::new("deck").with("footer").id()).show(ctx, |ui| {
        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(4.0);
            ui.label(RichText::new(&chrome.footer).small().weak());
            ui.add_space(4.0);
        });
    });
}

fn body(ctx: &Context, body: &Body<'_>, chart_height: f32) -> Vec<DeckEvent> {
    let ids = section_id(body.key);
    let mut events = Vec::new();

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .id_source(ids.clone().with("scroll").build())
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let width = ui.available_width().min(MAX_BODY_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.set_max_width(width);
                    Frame::none()
                        .fill(ui.visuals().window_fill())
                        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                        .rounding(Rounding::same(10.0))
                        .inner_margin(Margin::same(24.0))
                        .show(ui, |ui| {
                            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                                events = ContentPainter::new(ids.with("content").id(), chart_height)
                                    .show(ui, body);
                            });
                        });
                });
            });
    });

    events
}

/// Events for the deck's keyboard shortcuts pressed this frame
pub fn keyboard_events(ctx: &Context) -> Vec<DeckEvent> {
    ctx.input(|input| {
        let mut events = Vec::new();
        if input.key_pressed(Key::ArrowLeft) {
            events.push(DeckEvent::PreviousSection);
        }
        if input.key_pressed(Key::ArrowRight) {
            events.push(DeckEvent::NextSection);
        }
        // Plain C only, so copy shortcuts leave the code block alone.
        if input.modifiers.is_none() && input.key_pressed(Key::C) {
            events.push(DeckEvent::ToggleCode);
        }
        events
    })
}
