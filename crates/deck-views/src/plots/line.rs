//! Line plot over categorical x positions

use egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Points};
use std::hash::Hash;

use super::{category_labels, CartesianChart};

pub(super) fn show(ui: &mut Ui, id: impl Hash, chart: &CartesianChart, height: f32) {
    let label_color = ui.visuals().weak_text_color();

    let mut plot = Plot::new(id)
        .height(height)
        .show_axes([false, true])
        .show_grid(true)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .include_y(chart.label_baseline());

    if chart.show_legend {
        plot = plot.legend(Legend::default());
    }
    if let Some(label) = &chart.y_label {
        plot = plot.y_axis_label(label.clone());
    }

    let tooltip = chart.clone();
    plot = plot.label_formatter(move |name: &str, value: &PlotPoint| {
        if !tooltip.show_tooltip || name.is_empty() {
            return String::new();
        }
        let category = tooltip.category_at(value.x).unwrap_or_default();
        format!("{}\n{}: {:.1}", category, name, value.y)
    });

    plot.show(ui, |plot_ui| {
        for series in &chart.series {
            let points: Vec<[f64; 2]> = series
                .values
                .iter()
                .enumerate()
                .map(|(x, &y)| [x as f64, y])
                .collect();

            plot_ui.line(
                Line::new(PlotPoints::new(points.clone()))
                    .color(series.color)
                    .width(2.0)
                    .name(&series.name),
            );
            plot_ui.points(
                Points::new(PlotPoints::new(points))
                    .color(series.color)
                    .radius(3.0)
                    .name(&series.name),
            );
        }

        category_labels(plot_ui, chart, label_color);
    });
}
