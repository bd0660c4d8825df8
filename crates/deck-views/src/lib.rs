//! View system for the slide deck
//!
//! `frame` turns a presentation and its view state into a visual tree,
//! `content` paints that tree, and `plots` adapts static chart specs for
//! egui_plot and draws them.

mod content;
mod frame;
pub mod plots;

pub use content::ContentPainter;
pub use frame::{render, Body, CodeToggle, NavControl, PresentationFrame, VisualNode};
pub use plots::{
    adapt, show_chart, CartesianChart, ChartModel, PieChart, PieSlice, PlotSeries, ScatterChart,
    ScatterPoint,
};
