use std::collections::BTreeMap;
use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{pos2, vec2, Align2, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, Points};

use crate::color::{generate_palette, ColorMap};
use crate::data::aggregate::{PieChart, PieSlice};
use crate::data::filter::ScatterChart;

/// Arc resolution for pie wedges.
const SEGMENT_ANGLE: f32 = TAU / 128.0;

// ---------------------------------------------------------------------------
// Success pie chart
// ---------------------------------------------------------------------------

/// Start/end angle of each wedge, clockwise from 12 o'clock (screen y points down).
fn wedge_angles(slices: &[PieSlice]) -> Vec<(f32, f32)> {
    let total: usize = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    slices
        .iter()
        .map(|s| {
            let end = start + TAU * s.value as f32 / total as f32;
            let wedge = (start, end);
            start = end;
            wedge
        })
        .collect()
}

fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + radius * vec2(angle.cos(), angle.sin())
}

/// Render the success pie with a legend to its right.
pub fn pie_chart(ui: &mut Ui, chart: &PieChart, height: f32) {
    ui.heading(&chart.title);

    let total = chart.total();
    if total == 0 {
        ui.allocate_ui(vec2(ui.available_width(), height), |ui: &mut Ui| {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label("No data");
            });
        });
        return;
    }

    let (response, painter) =
        ui.allocate_painter(vec2(ui.available_width(), height), Sense::hover());
    let rect = response.rect;
    let radius = (rect.height() * 0.45).min(rect.width() * 0.25);
    let center = pos2(rect.left() + rect.width() * 0.35, rect.center().y);
    let palette = generate_palette(chart.slices.len());

    for (&(start, end), &color) in wedge_angles(&chart.slices).iter().zip(&palette) {
        if end <= start {
            continue;
        }
        // Fan of thin triangles so wedges wider than 180° stay convex.
        let steps = ((end - start) / SEGMENT_ANGLE).ceil().max(1.0) as usize;
        for i in 0..steps {
            let a0 = start + (end - start) * i as f32 / steps as f32;
            let a1 = start + (end - start) * (i + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(
                vec![center, arc_point(center, radius, a0), arc_point(center, radius, a1)],
                color,
                Stroke::NONE,
            ));
        }
    }

    let legend_x = center.x + radius + 32.0;
    let text_color = ui.visuals().text_color();
    for (i, (slice, &color)) in chart.slices.iter().zip(&palette).enumerate() {
        let y = rect.top() + 16.0 + i as f32 * 22.0;
        painter.rect_filled(
            Rect::from_center_size(pos2(legend_x, y), vec2(12.0, 12.0)),
            2.0,
            color,
        );
        let pct = 100.0 * slice.value as f32 / total as f32;
        painter.text(
            pos2(legend_x + 14.0, y),
            Align2::LEFT_CENTER,
            format!("{}   {} ({pct:.1}%)", slice.label, slice.value),
            FontId::proportional(14.0),
            text_color,
        );
    }
}

// ---------------------------------------------------------------------------
// Payload vs. outcome scatter chart
// ---------------------------------------------------------------------------

/// Render the scatter chart, one legend entry per booster category.
pub fn scatter_chart(ui: &mut Ui, chart: &ScatterChart, color_map: &ColorMap, height: f32) {
    ui.heading(&chart.title);
    if chart.points.is_empty() {
        ui.label("No data");
    }

    let mut by_category: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for p in &chart.points {
        by_category
            .entry(p.category.as_str())
            .or_default()
            .push([p.x, p.y]);
    }

    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(0.0)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, points) in by_category {
                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(color_map.color_for(category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(label: &str, value: usize) -> PieSlice {
        PieSlice {
            label: label.into(),
            value,
        }
    }

    #[test]
    fn wedges_cover_the_full_circle() {
        let wedges = wedge_angles(&[slice("a", 1), slice("b", 3)]);
        assert_eq!(wedges.len(), 2);
        assert_eq!(wedges[0].0, -FRAC_PI_2);
        assert_eq!(wedges[0].1, wedges[1].0);
        assert!((wedges[1].1 - (TAU - FRAC_PI_2)).abs() < 1e-5);
        assert!((wedges[1].1 - wedges[1].0 - 0.75 * TAU).abs() < 1e-5);
    }

    #[test]
    fn zero_total_has_no_wedges() {
        assert!(wedge_angles(&[slice("a", 0), slice("b", 0)]).is_empty());
        assert!(wedge_angles(&[]).is_empty());
    }
}
