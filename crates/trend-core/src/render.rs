// File: crates/trend-core/src/render.rs
// Summary: Layered full-repaint renderer: grid, area fill, line, markers, labels.

use skia_safe as skia;

use crate::layout::{linspace, PlotLayout};
use crate::surface::Surface;
use crate::theme::Theme;

const GRID_ROWS: usize = 4;
const LINE_WIDTH: f32 = 2.2;
const MARKER_RADIUS: f32 = 2.5;
const LABEL_SIZE: f32 = 11.0;

/// Repaint the whole surface from a mapped layout.
///
/// Draw order, later layers occluding earlier ones: background clear, grid
/// rows, area fill, line stroke, point markers, first/last period labels,
/// then the formatted max/min values right-aligned at the top and bottom
/// of the plotting area. Every call repaints from scratch; datasets are
/// small and redraws are infrequent. A no-op when the layout is empty or
/// the surface has no backing buffer.
pub fn render(
    surface: &mut Surface,
    layout: &PlotLayout,
    theme: &Theme,
    axis_format: &dyn Fn(f64) -> String,
) {
    let geom = surface.geometry();
    if layout.points.is_empty() || geom.is_zero_area() {
        return;
    }
    let (left, right) = geom.x_bounds();
    let (top, bottom) = geom.y_bounds();
    let Some(canvas) = surface.canvas() else {
        return;
    };

    canvas.clear(theme.background);

    let mut grid = skia::Paint::default();
    grid.set_anti_alias(true);
    grid.set_style(skia::paint::Style::Stroke);
    grid.set_stroke_width(1.0);
    grid.set_color(theme.grid);
    for y in linspace(top, bottom, GRID_ROWS) {
        canvas.draw_line((left, y), (right, y), &grid);
    }

    // Area under the line, closed down to the bottom bound at both ends.
    let points = &layout.points;
    let last = points.len() - 1;
    let mut area = skia::Path::new();
    area.move_to((points[0].x, bottom));
    for p in points.iter() {
        area.line_to((p.x, p.y));
    }
    area.line_to((points[last].x, bottom));
    area.close();
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.fill);
    canvas.draw_path(&area, &fill);

    let mut path = skia::Path::new();
    path.move_to((points[0].x, points[0].y));
    for p in points.iter().skip(1) {
        path.line_to((p.x, p.y));
    }
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(LINE_WIDTH);
    stroke.set_color(theme.line);
    canvas.draw_path(&path, &stroke);

    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_style(skia::paint::Style::Fill);
    marker.set_color(theme.line);
    for p in points.iter() {
        canvas.draw_circle((p.x, p.y), MARKER_RADIUS, &marker);
    }

    // Only the first and last period labels are drawn to avoid crowding.
    let mut text = skia::Paint::default();
    text.set_anti_alias(true);
    text.set_color(theme.text);
    let mut font = skia::Font::default();
    font.set_size(LABEL_SIZE);

    let baseline = geom.height - 4.0;
    canvas.draw_str(&points[0].label, (left, baseline), &font, &text);
    let (last_w, _) = font.measure_str(&points[last].label, Some(&text));
    canvas.draw_str(&points[last].label, (right - last_w, baseline), &font, &text);

    let max_label = axis_format(layout.max_value);
    let (max_w, _) = font.measure_str(&max_label, Some(&text));
    canvas.draw_str(&max_label, (right - max_w, top + LABEL_SIZE), &font, &text);
    let min_label = axis_format(layout.min_value);
    let (min_w, _) = font.measure_str(&min_label, Some(&text));
    canvas.draw_str(&min_label, (right - min_w, bottom - 5.0), &font, &text);
}
