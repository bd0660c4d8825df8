//! Grouped bar chart, one bar per series in each category

use egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint};
use std::hash::Hash;

use super::{category_labels, CartesianChart};

/// Share of a category slot covered by its bar group
const GROUP_WIDTH: f64 = 0.8;

/// Center of bar `series` within category `category`
fn bar_offset(category: usize, series: usize, series_count: usize) -> f64 {
    let bar_width = GROUP_WIDTH / series_count.max(1) as f64;
    category as f64 - GROUP_WIDTH / 2.0 + bar_width * (series as f64 + 0.5)
}

pub(super) fn show(ui: &mut Ui, id: impl Hash, chart: &CartesianChart, height: f32) {
    let label_color = ui.visuals().weak_text_color();
    let series_count = chart.series.len();
    let bar_width = GROUP_WIDTH / series_count.max(1) as f64;

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
    // Bars report through the element formatter; blank the crosshair label.
    plot = plot.label_formatter(|_name: &str, _value: &PlotPoint| String::new());

    plot.show(ui, |plot_ui| {
        for (series_idx, series) in chart.series.iter().enumerate() {
            let bars = series
                .values
                .iter()
                .enumerate()
                .map(|(category_idx, &value)| {
                    Bar::new(bar_offset(category_idx, series_idx, series_count), value)
                        .width(bar_width)
                        .name(chart.categories.get(category_idx).cloned().unwrap_or_default())
                        .fill(series.color)
                })
                .collect();

            let mut bar_chart = BarChart::new(bars).color(series.color).name(&series.name);
            if chart.show_tooltip {
                let name = series.name.clone();
                bar_chart = bar_chart.element_formatter(Box::new(move |bar: &Bar, _: &BarChart| {
                    format!("{}\n{}: {:.1}", bar.name, name, bar.value)
                }));
            }
            plot_ui.bar_chart(bar_chart);
        }

        category_labels(plot_ui, chart, label_color);
    });
}
