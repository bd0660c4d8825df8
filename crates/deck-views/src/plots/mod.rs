//! Chart adapter and plot drawing
//!
//! [`adapt`] maps a static [`ChartSpec`] onto the shape the plot widgets
//! consume: axis fields picked, colors assigned, legend and tooltips
//! switched on. Values pass through untouched.

mod bar;
mod line;
mod pie;
mod scatter;

pub mod colors;

use deck_core::{ChartKind, ChartSpec, Record};
use egui::{Color32, Ui};
use egui_plot::{PlotPoint, PlotUi, Text};
use std::hash::Hash;

/// Input for one chart widget
#[derive(Debug, Clone, PartialEq)]
pub enum ChartModel {
    Line(CartesianChart),
    Bar(CartesianChart),
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartModel {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartModel::Line(_) => ChartKind::Line,
            ChartModel::Bar(_) => ChartKind::Bar,
            ChartModel::Pie(_) => ChartKind::Pie,
            ChartModel::Scatter(_) => ChartKind::Scatter,
        }
    }
}

/// Category axis chart (line or grouped bar)
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianChart {
    pub categories: Vec<String>,
    pub series: Vec<PlotSeries>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub show_legend: bool,
    pub show_tooltip: bool,
}

/// One named series of values aligned with the categories
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub name: String,
    pub color: Color32,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
    pub show_labels: bool,
    pub show_tooltip: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

impl PieChart {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Share of the whole taken by slice `index`
    pub fn fraction(&self, index: usize) -> f64 {
        let total = self.total();
        match self.slices.get(index) {
            Some(slice) if total > 0.0 => slice.value / total,
            _ => 0.0,
        }
    }

    /// Outside label, e.g. `Aware: 33%`
    pub fn slice_label(&self, index: usize) -> String {
        let label = self
            .slices
            .get(index)
            .map(|s| s.label.as_str())
            .unwrap_or_default();
        format!("{}: {:.0}%", label, self.fraction(index) * 100.0)
    }

    /// Slice under `turn`, measured clockwise from twelve o'clock in [0, 1)
    pub fn slice_at(&self, turn: f64) -> Option<usize> {
        let turn = turn.rem_euclid(1.0);
        let mut start = 0.0;
        for index in 0..self.slices.len() {
            let end = start + self.fraction(index);
            if turn >= start && turn < end {
                return Some(index);
            }
            start = end;
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub name: String,
    pub color: Color32,
    pub points: Vec<ScatterPoint>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Marker area range in square points
    pub size_range: (f64, f64),
    pub show_legend: bool,
    pub show_tooltip: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub size: Option<f64>,
    pub label: Option<String>,
}

impl ScatterChart {
    /// Marker radius for a point: its size mapped linearly onto the area range
    pub fn marker_radius(&self, point: &ScatterPoint) -> f32 {
        let (min_area, max_area) = self.size_range;
        let sizes = self.points.iter().filter_map(|p| p.size);
        let (lo, hi) = sizes.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s), hi.max(s))
        });

        let area = match point.size {
            Some(size) if hi > lo => min_area + (size - lo) / (hi - lo) * (max_area - min_area),
            Some(_) => (min_area + max_area) / 2.0,
            None => min_area,
        };
        (area / std::f64::consts::PI).sqrt() as f32
    }
}

impl CartesianChart {
    /// Largest plotted value, never below zero
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }

    /// Category at a plot x coordinate
    pub fn category_at(&self, x: f64) -> Option<&str> {
        let index = x.round();
        if index < 0.0 {
            return None;
        }
        self.categories.get(index as usize).map(String::as_str)
    }

    /// Plot y coordinate of the category labels under the data
    fn label_baseline(&self) -> f64 {
        -0.08 * self.max_value().max(1.0)
    }
}

/// Category names placed under each x position of a category chart
fn category_labels(plot_ui: &mut PlotUi, chart: &CartesianChart, color: Color32) {
    let y = chart.label_baseline();
    for (idx, category) in chart.categories.iter().enumerate() {
        plot_ui.text(Text::new(PlotPoint::new(idx as f64, y), category.as_str()).color(color));
    }
}

fn number(spec: &ChartSpec, record: &Record, field: &str) -> f64 {
    record.number_of(field).unwrap_or_else(|| {
        tracing::warn!("{} chart record has no numeric field '{}'", spec.kind, field);
        0.0
    })
}

fn channel_color(spec: &ChartSpec, index: usize) -> Color32 {
    spec.channels
        .get(index)
        .and_then(|c| c.color)
        .map(colors::to_color32)
        .unwrap_or_else(|| colors::categorical_color(index))
}

fn cartesian(spec: &ChartSpec) -> CartesianChart {
    let series = spec
        .channels
        .iter()
        .enumerate()
        .map(|(idx, channel)| PlotSeries {
            name: channel.name.clone(),
            color: channel_color(spec, idx),
            values: spec
                .series
                .iter()
                .map(|record| number(spec, record, &channel.field))
                .collect(),
        })
        .collect();

    CartesianChart {
        categories: spec.categories(),
        series,
        x_label: spec.x_label.clone(),
        y_label: spec.y_label.clone(),
        show_legend: true,
        show_tooltip: true,
    }
}

fn pie(spec: &ChartSpec) -> PieChart {
    let value_field = spec.channels.first().map(|c| c.field.as_str()).unwrap_or("value");

    let slices = spec
        .series
        .iter()
        .enumerate()
        .map(|(idx, record)| PieSlice {
            label: record.text_of(&spec.x_field).unwrap_or_default(),
            value: number(spec, record, value_field),
            color: colors::palette_color(&spec.palette, idx),
        })
        .collect();

    PieChart {
        slices,
        show_labels: true,
        show_tooltip: true,
    }
}

fn scatter(spec: &ChartSpec) -> ScatterChart {
    let (y_field, name) = spec
        .channels
        .first()
        .map(|c| (c.field.as_str(), c.name.clone()))
        .unwrap_or(("y", String::new()));

    let points = spec
        .series
        .iter()
        .map(|record| ScatterPoint {
            x: number(spec, record, &spec.x_field),
            y: number(spec, record, y_field),
            size: spec.size_field.as_deref().and_then(|f| record.number_of(f)),
            label: spec.label_field.as_deref().and_then(|f| record.text_of(f)),
        })
        .collect();

    ScatterChart {
        name,
        color: channel_color(spec, 0),
        points,
        x_label: spec.x_label.clone(),
        y_label: spec.y_label.clone(),
        size_range: spec.size_range,
        show_legend: true,
        show_tooltip: true,
    }
}

/// Map a chart spec onto its widget input
pub fn adapt(spec: &ChartSpec) -> ChartModel {
    match spec.kind {
        ChartKind::Line => ChartModel::Line(cartesian(spec)),
        ChartKind::Bar => ChartModel::Bar(cartesian(spec)),
        ChartKind::Pie => ChartModel::Pie(pie(spec)),
        ChartKind::Scatter => ChartModel::Scatter(scatter(spec)),
    }
}

/// Draw a chart; `id` must be unique among the charts on screen
pub fn show_chart(ui: &mut Ui, id: impl Hash, model: &ChartModel, height: f32) {
    match model {
        ChartModel::Line(chart) => line::show(ui, id, chart, height),
        ChartModel::Bar(chart) => bar::show(ui, id, chart, height),
        ChartModel::Pie(chart) => pie::show(ui, chart, height),
        ChartModel::Scatter(chart) => scatter::show(ui, id, chart, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::Rgb;

    fn pie_spec() -> ChartSpec {
        ChartSpec::pie(vec![
            Record::new().label("name", "Aware").number("value", 33.0),
            Record::new().label("name", "Somewhat Aware").number("value", 41.0),
            Record::new().label("name", "Unaware").number("value", 26.0),
            Record::new().label("name", "Other").number("value", 0.0),
        ])
        .x_field("name")
        .channel("value", "Awareness")
        .palette(&[Rgb(0, 136, 254), Rgb(0, 196, 159), Rgb(255, 187, 40)])
    }

    #[test]
    fn test_cartesian_series_follow_channels() {
        let spec = ChartSpec::line(vec![
            Record::new().label("month", "Jan").number("a", 1.0).number("b", 2.0),
            Record::new().label("month", "Feb").number("a", 3.0).number("b", 4.0),
        ])
        .x_field("month")
        .y_label("Engagement")
        .colored_channel("a", "Series A", Rgb(1, 2, 3))
        .channel("b", "Series B");

        let ChartModel::Line(chart) = adapt(&spec) else {
            panic!("expected a line chart");
        };
        assert_eq!(chart.categories, vec!["Jan", "Feb"]);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "Series A");
        assert_eq!(chart.series[0].color, Color32::from_rgb(1, 2, 3));
        assert_eq!(chart.series[0].values, vec![1.0, 3.0]);
        assert_eq!(chart.series[1].color, colors::categorical_color(1));
        assert_eq!(chart.series[1].values, vec![2.0, 4.0]);
        assert_eq!(chart.y_label.as_deref(), Some("Engagement"));
        assert!(chart.show_legend && chart.show_tooltip);
        assert_eq!(chart.max_value(), 4.0);
        assert_eq!(chart.category_at(0.8), Some("Feb"));
        assert_eq!(chart.category_at(-0.7), None);
        assert_eq!(chart.category_at(5.0), None);
    }

    #[test]
    fn test_missing_numbers_become_zero() {
        let spec = ChartSpec::bar(vec![Record::new().label("c", "X")])
            .x_field("c")
            .channel("v", "Value");
        let ChartModel::Bar(chart) = adapt(&spec) else {
            panic!("expected a bar chart");
        };
        assert_eq!(chart.series[0].values, vec![0.0]);
    }

    #[test]
    fn test_pie_palette_is_assigned_by_index() {
        let ChartModel::Pie(chart) = adapt(&pie_spec()) else {
            panic!("expected a pie chart");
        };
        assert_eq!(chart.slices[0].color, Color32::from_rgb(0, 136, 254));
        assert_eq!(chart.slices[2].color, Color32::from_rgb(255, 187, 40));
        assert_eq!(chart.slices[3].color, chart.slices[0].color);
    }

    #[test]
    fn test_pie_labels_and_hit_testing() {
        let ChartModel::Pie(chart) = adapt(&pie_spec()) else {
            panic!("expected a pie chart");
        };
        assert_eq!(chart.total(), 100.0);
        assert_eq!(chart.slice_label(0), "Aware: 33%");
        assert_eq!(chart.slice_label(1), "Somewhat Aware: 41%");
        assert_eq!(chart.slice_label(2), "Unaware: 26%");
        assert_eq!(chart.slice_label(3), "Other: 0%");

        assert_eq!(chart.slice_at(0.10), Some(0));
        assert_eq!(chart.slice_at(0.50), Some(1));
        assert_eq!(chart.slice_at(0.90), Some(2));
        assert_eq!(chart.slice_at(1.10), Some(0));
    }

    #[test]
    fn test_scatter_points_and_marker_sizes() {
        let spec = ChartSpec::scatter(vec![
            Record::new().number("x", 2.0).number("y", 72.0).number("s", 10.0).label("n", "Small"),
            Record::new().number("x", 100.0).number("y", 90.5).number("s", 60.0).label("n", "Large"),
        ])
        .x_field("x")
        .channel("y", "Accuracy")
        .size("s", (100.0, 500.0))
        .point_label("n");

        let ChartModel::Scatter(chart) = adapt(&spec) else {
            panic!("expected a scatter chart");
        };
        assert_eq!(chart.name, "Accuracy");
        assert_eq!(chart.points[1].y, 90.5);
        assert_eq!(chart.points[0].label.as_deref(), Some("Small"));

        let small = chart.marker_radius(&chart.points[0]) as f64;
        let large = chart.marker_radius(&chart.points[1]) as f64;
        assert!((small * small * std::f64::consts::PI - 100.0).abs() < 1e-3);
        assert!((large * large * std::f64::consts::PI - 500.0).abs() < 1e-2);
    }
}
