//! Paints a resolved section body with egui

use deck_core::{DeckEvent, GroupStyle, HeadingLevel, Paragraph, Reference, SwatchCard, TextTone};
use egui::{Color32, Frame, Id, Margin, RichText, Rounding, Sense, Stroke, Ui, Vec2};
use egui_extras::syntax_highlighting::{code_view_ui, CodeTheme};

use crate::frame::{Body, CodeToggle, VisualNode};
use crate::plots::{colors, show_chart};

/// Walks a [`Body`] and collects the events its controls emit
pub struct ContentPainter {
    id: Id,
    chart_height: f32,
    charts_drawn: usize,
    events: Vec<DeckEvent>,
}

impl ContentPainter {
    pub fn new(id: Id, chart_height: f32) -> Self {
        Self {
            id,
            chart_height,
            charts_drawn: 0,
            events: Vec::new(),
        }
    }

    /// Paint `body` and return the events raised this frame
    pub fn show(mut self, ui: &mut Ui, body: &Body<'_>) -> Vec<DeckEvent> {
        ui.heading(RichText::new(body.title).size(26.0).strong());
        ui.add_space(12.0);
        self.nodes(ui, &body.nodes);
        self.events
    }

    fn nodes(&mut self, ui: &mut Ui, nodes: &[VisualNode<'_>]) {
        for node in nodes {
            self.node(ui, node);
        }
    }

    fn node(&mut self, ui: &mut Ui, node: &VisualNode<'_>) {
        match node {
            VisualNode::Heading { level, text } => heading(ui, *level, text),
            VisualNode::Text(paragraph) => text(ui, paragraph),
            VisualNode::List(items) => {
                for item in *items {
                    ui.horizontal_wrapped(|ui| {
                        ui.label("•");
                        ui.label(item.as_str());
                    });
                }
                ui.add_space(6.0);
            }
            VisualNode::Chart(model) => {
                // Each chart keeps its own plot memory.
                let id = self.id.with(("chart", self.charts_drawn));
                self.charts_drawn += 1;
                show_chart(ui, id, model, self.chart_height);
                ui.add_space(6.0);
            }
            VisualNode::CodeToggle(toggle) => self.code_toggle(ui, toggle),
            VisualNode::Swatches(card) => swatches(ui, card),
            VisualNode::References(references) => reference_list(ui, references),
            VisualNode::Group { style, children } => self.group(ui, *style, children),
        }
    }

    fn code_toggle(&mut self, ui: &mut Ui, toggle: &CodeToggle<'_>) {
        let accent = ui.visuals().selection.bg_fill;
        let button = egui::Button::new(RichText::new(toggle.label.as_ref()).color(Color32::WHITE))
            .fill(accent)
            .rounding(Rounding::same(4.0));
        if ui.add(button).clicked() {
            self.events.push(DeckEvent::ToggleCode);
        }

        if let Some(sample) = toggle.block {
            ui.add_space(6.0);
            let theme = CodeTheme::from_memory(ui.ctx());
            Frame::none()
                .fill(ui.visuals().extreme_bg_color)
                .rounding(Rounding::same(6.0))
                .inner_margin(Margin::same(10.0))
                .show(ui, |ui| {
                    egui::ScrollArea::horizontal()
                        .id_source(self.id.with(("code", sample.label.as_str())))
                        .show(ui, |ui| code_view_ui(ui, &theme, &sample.code, &sample.language));
                });
        }
        ui.add_space(6.0);
    }

    fn group(&mut self, ui: &mut Ui, style: GroupStyle, children: &[VisualNode<'_>]) {
        match style {
            GroupStyle::Columns(count) => {
                let count = count.max(1);
                ui.columns(count, |columns| {
                    for (idx, child) in children.iter().enumerate() {
                        self.node(&mut columns[idx % count], child);
                    }
                });
                ui.add_space(8.0);
            }
            GroupStyle::Row => {
                if children.is_empty() {
                    return;
                }
                ui.columns(children.len(), |columns| {
                    for (column, child) in columns.iter_mut().zip(children) {
                        self.node(column, child);
                    }
                });
                ui.add_space(8.0);
            }
            GroupStyle::Highlight | GroupStyle::Panel | GroupStyle::Callout | GroupStyle::Card => {
                group_frame(ui, style).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    self.nodes(ui, children);
                });
                ui.add_space(10.0);
            }
        }
    }
}

/// Frame decoration for boxed group styles
fn group_frame(ui: &Ui, style: GroupStyle) -> Frame {
    let visuals = ui.visuals();
    let dark = visuals.dark_mode;
    let frame = Frame::none()
        .rounding(Rounding::same(8.0))
        .inner_margin(Margin::same(14.0));

    match style {
        GroupStyle::Highlight => frame
            .fill(if dark { Color32::from_rgb(28, 40, 62) } else { Color32::from_rgb(235, 244, 255) })
            .stroke(Stroke::new(1.0, visuals.selection.bg_fill)),
        GroupStyle::Callout => frame
            .fill(if dark { Color32::from_rgb(60, 48, 20) } else { Color32::from_rgb(255, 248, 225) })
            .stroke(Stroke::new(1.0, Color32::from_rgb(255, 193, 7))),
        GroupStyle::Card => frame
            .fill(visuals.window_fill())
            .stroke(visuals.widgets.noninteractive.bg_stroke),
        GroupStyle::Panel | GroupStyle::Columns(_) | GroupStyle::Row => {
            frame.fill(visuals.faint_bg_color)
        }
    }
}

fn heading(ui: &mut Ui, level: HeadingLevel, text: &str) {
    let size = match level {
        HeadingLevel::Section => 21.0,
        HeadingLevel::Subsection => 17.0,
        HeadingLevel::Card => 14.5,
    };
    ui.add_space(4.0);
    ui.label(RichText::new(text).size(size).strong());
    ui.add_space(4.0);
}

fn text(ui: &mut Ui, paragraph: &Paragraph) {
    let body = match paragraph.tone {
        TextTone::Body => RichText::new(&paragraph.text),
        TextTone::Caption => RichText::new(&paragraph.text).small().weak(),
        TextTone::Note => RichText::new(&paragraph.text).small().italics().weak(),
    };

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        ui.label(body);
        if let Some(marker) = paragraph.citation_marker() {
            ui.label(RichText::new(marker).small().weak());
        }
    });
    ui.add_space(6.0);
}

fn swatches(ui: &mut Ui, card: &SwatchCard) {
    ui.label(RichText::new(&card.title).strong());
    for swatch in &card.swatches {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
            ui.painter()
                .rect_filled(rect, Rounding::same(2.0), colors::to_color32(swatch.color));
            ui.label(swatch.label.as_str());
        });
    }
}

fn reference_list(ui: &mut Ui, references: &[Reference]) {
    for (idx, reference) in references.iter().enumerate() {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(format!("{}.", idx + 1)).strong());
            ui.label(reference.text.as_str());
            ui.hyperlink(&reference.url);
        });
        ui.add_space(4.0);
    }
}
