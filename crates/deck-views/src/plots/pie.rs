//! Pie chart drawn directly with the painter

use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use std::f64::consts::TAU;

use super::PieChart;

/// Room left around the disc for outside labels
const LABEL_MARGIN: f32 = 28.0;

/// Screen point at `turn` (clockwise from twelve o'clock) on a circle
fn point_at_turn(center: Pos2, radius: f32, turn: f64) -> Pos2 {
    let angle = turn * TAU - TAU / 4.0;
    center + Vec2::new(radius * angle.cos() as f32, radius * angle.sin() as f32)
}

/// Turn of a screen position around `center`, in [0, 1)
fn turn_of(center: Pos2, pos: Pos2) -> f64 {
    let delta = pos - center;
    let angle = (delta.y as f64).atan2(delta.x as f64);
    ((angle + TAU / 4.0) / TAU).rem_euclid(1.0)
}

fn draw_slice(painter: &egui::Painter, center: Pos2, radius: f32, start: f64, end: f64, color: Color32) {
    let segments = ((end - start) * 360.0).ceil().max(1.0) as usize;
    for i in 0..segments {
        let a = start + (end - start) * (i as f64 / segments as f64);
        let b = start + (end - start) * ((i + 1) as f64 / segments as f64);
        painter.add(Shape::convex_polygon(
            vec![
                center,
                point_at_turn(center, radius, a),
                point_at_turn(center, radius, b),
            ],
            color,
            Stroke::NONE,
        ));
    }
}

pub(super) fn show(ui: &mut Ui, chart: &PieChart, height: f32) {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
    let center = rect.center();
    let radius = (height / 2.0 - LABEL_MARGIN).min(width / 4.0).max(8.0);

    let hovered = response.hover_pos().and_then(|pos| {
        if pos.distance(center) <= radius {
            chart.slice_at(turn_of(center, pos))
        } else {
            None
        }
    });

    let painter = ui.painter_at(rect);
    let text_color = ui.visuals().text_color();
    let separator = Stroke::new(1.0, ui.visuals().extreme_bg_color);

    let mut start = 0.0;
    for (idx, slice) in chart.slices.iter().enumerate() {
        let end = start + chart.fraction(idx);
        if end > start {
            let color = if hovered == Some(idx) {
                slice.color.gamma_multiply(0.8)
            } else {
                slice.color
            };
            draw_slice(&painter, center, radius, start, end, color);
            painter.line_segment([center, point_at_turn(center, radius, start)], separator);

            if chart.show_labels {
                let mid = (start + end) / 2.0;
                let anchor = if mid < 0.5 { Align2::LEFT_CENTER } else { Align2::RIGHT_CENTER };
                painter.text(
                    point_at_turn(center, radius + 10.0, mid),
                    anchor,
                    chart.slice_label(idx),
                    FontId::proportional(12.0),
                    text_color,
                );
            }
        }
        start = end;
    }

    if chart.show_tooltip {
        if let Some(slice) = hovered.and_then(|idx| chart.slices.get(idx)) {
            response.on_hover_text(format!("{}: {}", slice.label, slice.value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_run_clockwise_from_top() {
        let center = Pos2::new(100.0, 100.0);
        let top = point_at_turn(center, 50.0, 0.0);
        let right = point_at_turn(center, 50.0, 0.25);
        assert!((top.x - 100.0).abs() < 1e-3 && (top.y - 50.0).abs() < 1e-3);
        assert!((right.x - 150.0).abs() < 1e-3 && (right.y - 100.0).abs() < 1e-3);

        assert!(turn_of(center, top).abs() < 1e-6);
        assert!((turn_of(center, right) - 0.25).abs() < 1e-6);
        assert!((turn_of(center, Pos2::new(50.0, 100.0)) - 0.75).abs() < 1e-6);
    }
}
