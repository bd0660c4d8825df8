//! Scatter plot with per-point marker sizes

use egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, Points};
use std::hash::Hash;

use super::{ScatterChart, ScatterPoint};

impl ScatterChart {
    /// Point sitting at plot coordinates `(x, y)`
    pub fn point_at(&self, x: f64, y: f64) -> Option<&ScatterPoint> {
        self.points
            .iter()
            .find(|p| (p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6)
    }
}

pub(super) fn show(ui: &mut Ui, id: impl Hash, chart: &ScatterChart, height: f32) {
    let mut plot = Plot::new(id)
        .height(height)
        .show_grid(true)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false);

    if chart.show_legend {
        plot = plot.legend(Legend::default());
    }
    if let Some(label) = &chart.x_label {
        plot = plot.x_axis_label(label.clone());
    }
    if let Some(label) = &chart.y_label {
        plot = plot.y_axis_label(label.clone());
    }

    let tooltip = chart.clone();
    plot = plot.label_formatter(move |name: &str, value: &PlotPoint| {
        if !tooltip.show_tooltip || name.is_empty() {
            return String::new();
        }
        match tooltip.point_at(value.x, value.y).and_then(|p| p.label.as_deref()) {
            Some(label) => format!("{}\nx: {}\ny: {}", label, value.x, value.y),
            None => format!("x: {}\ny: {}", value.x, value.y),
        }
    });

    plot.show(ui, |plot_ui| {
        // Same name on every marker keeps a single legend entry.
        for point in &chart.points {
            plot_ui.points(
                Points::new(vec![[point.x, point.y]])
                    .color(chart.color)
                    .filled(true)
                    .radius(chart.marker_radius(point))
                    .shape(MarkerShape::Circle)
                    .name(&chart.name),
            );
        }
    });
}
