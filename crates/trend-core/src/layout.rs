// File: crates/trend-core/src/layout.rs
// Summary: Pure data-space to pixel-space mapping for the plotting area.

use crate::series::Dataset;
use crate::types::Insets;

/// Surface measurements for one draw cycle. Recomputed on every resize or
/// redraw; never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Displayed width in logical pixels.
    pub width: f32,
    /// Displayed height in logical pixels.
    pub height: f32,
    pub insets: Insets,
    /// Physical-to-logical pixel ratio of the display.
    pub device_pixel_ratio: f32,
}

impl Geometry {
    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            insets: Insets::new(0.0, 0.0, 0.0, 0.0),
            device_pixel_ratio: 1.0,
        }
    }

    /// Left and right x bounds of the plotting area.
    #[inline]
    pub fn x_bounds(&self) -> (f32, f32) {
        (self.insets.left, self.width - self.insets.right)
    }

    /// Top and bottom y bounds of the plotting area.
    #[inline]
    pub fn y_bounds(&self) -> (f32, f32) {
        (self.insets.top, self.height - self.insets.bottom)
    }

    pub fn is_zero_area(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// One mapped data point, cached per draw cycle for hit-testing and
/// superseded wholesale on the next draw.
#[derive(Clone, Debug)]
pub struct PlottedPoint {
    pub x: f32,
    pub y: f32,
    pub value: f64,
    pub index: usize,
    pub label: String,
}

/// Mapper output: pixel points plus the value bounds they were scaled to.
#[derive(Clone, Debug, Default)]
pub struct PlotLayout {
    pub points: Vec<PlottedPoint>,
    pub min_value: f64,
    pub max_value: f64,
}

/// Map a dataset into pixel space. Pure function of its inputs; identical
/// inputs yield bit-identical output.
///
/// Point `i` sits at the linear interpolation of `i / (n - 1)` between the
/// horizontal plot bounds; a single-point dataset sits at the midpoint.
/// Larger values map to smaller y (top-left-origin pixel space). A flat
/// series plots as one horizontal line at mid-height of the plotting area
/// instead of dividing by the zero value range.
pub fn compute_points(dataset: &Dataset, geom: &Geometry) -> PlotLayout {
    let values = dataset.values();
    if values.is_empty() {
        return PlotLayout::default();
    }

    let mut min_value = f64::INFINITY;
    let mut max_value = f64::NEG_INFINITY;
    for &v in values {
        min_value = min_value.min(v);
        max_value = max_value.max(v);
    }
    let range = max_value - min_value;

    let (left, right) = geom.x_bounds();
    let (top, bottom) = geom.y_bounds();
    let n = values.len();

    let mut points = Vec::with_capacity(n);
    for (i, &v) in values.iter().enumerate() {
        let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.5 };
        let x = left + t * (right - left);
        let norm = if range > 0.0 { ((v - min_value) / range) as f32 } else { 0.5 };
        let y = bottom - norm * (bottom - top);
        let label = dataset.labels().get(i).cloned().unwrap_or_default();
        points.push(PlottedPoint { x, y, value: v, index: i, label });
    }

    PlotLayout { points, min_value, max_value }
}

/// Evenly spaced values from `start` to `end`, inclusive.
pub fn linspace(start: f32, end: f32, steps: usize) -> Vec<f32> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f32 - 1.0);
    (0..steps).map(|i| start + step * i as f32).collect()
}
