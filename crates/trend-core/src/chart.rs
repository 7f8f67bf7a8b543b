// File: crates/trend-core/src/chart.rs
// Summary: Chart controller: wires resize, mapping, rendering, and pointer input.

use std::rc::Rc;

use anyhow::Result;

use crate::hit::{nearest_point, Tooltip};
use crate::layout::{compute_points, PlotLayout, PlottedPoint};
use crate::render::render;
use crate::series::{RangeKey, SeriesDefinition};
use crate::surface::{Surface, SurfaceHost};
use crate::theme::Theme;
use crate::types::Insets;

/// Everything a chart needs at construction time.
pub struct ChartConfig {
    /// The embedding environment. `None` yields a disabled controller
    /// whose operations are no-ops: a chart that cannot be measured must
    /// not break page setup, and callers need not null-check.
    pub host: Option<Rc<dyn SurfaceHost>>,
    pub series: SeriesDefinition,
    pub insets: Insets,
    pub theme: Theme,
    pub initial_range: RangeKey,
}

impl ChartConfig {
    pub fn new(host: Option<Rc<dyn SurfaceHost>>, series: SeriesDefinition) -> Self {
        Self {
            host,
            series,
            insets: Insets::default(),
            theme: Theme::dark(),
            initial_range: RangeKey::Full,
        }
    }
}

/// Owns one chart: its surface, point cache, tooltip, and active range.
/// All state transitions come in as external events; each redraw fully
/// overwrites the previous one, so nothing is ever cancelled.
pub struct ChartController {
    host: Option<Rc<dyn SurfaceHost>>,
    surface: Surface,
    series: SeriesDefinition,
    insets: Insets,
    theme: Theme,
    active_range: RangeKey,
    layout: PlotLayout,
    tooltip: Tooltip,
    redraw_queued: bool,
}

impl ChartController {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            host: config.host,
            surface: Surface::new(),
            series: config.series,
            insets: config.insets,
            theme: config.theme,
            active_range: config.initial_range,
            layout: PlotLayout::default(),
            tooltip: Tooltip::default(),
            redraw_queued: false,
        }
    }

    /// Whether a surface host was attached at construction.
    pub fn is_enabled(&self) -> bool {
        self.host.is_some()
    }

    /// Resize, remap, and repaint from the dataset active right now.
    ///
    /// The dataset lookup is late-bound so range changes take effect
    /// without rebuilding the controller. The point cache is replaced
    /// wholesale; a missing or empty dataset clears it and skips painting.
    pub fn redraw(&mut self) -> Result<()> {
        self.redraw_queued = false;
        let Some(host) = self.host.clone() else {
            return Ok(());
        };
        let geometry = self.surface.resize(host.as_ref(), self.insets)?;

        let layout = match self.series.dataset(self.active_range) {
            Some(ds) if !ds.is_empty() && !geometry.is_zero_area() => {
                compute_points(ds, &geometry)
            }
            _ => PlotLayout::default(),
        };
        render(&mut self.surface, &layout, &self.theme, &*self.series.axis_format);
        self.layout = layout;
        Ok(())
    }

    /// Range-selector input: switch the active dataset and repaint.
    pub fn on_range_select(&mut self, key: RangeKey) -> Result<()> {
        self.active_range = key;
        self.redraw()
    }

    /// Viewport resize: re-measure and repaint.
    pub fn on_resize(&mut self) -> Result<()> {
        self.redraw()
    }

    /// Theme toggle. The repaint is queued instead of run inline so a
    /// style change still being applied by the embedder lands first; call
    /// `run_queued` once the current event turn is over. No ordering is
    /// guaranteed beyond "after this turn".
    pub fn on_theme_change(&mut self, dark: bool) {
        self.theme = Theme::for_mode(dark);
        self.redraw_queued = true;
    }

    /// Run a queued redraw, if any. Returns whether one ran.
    pub fn run_queued(&mut self) -> Result<bool> {
        if !self.redraw_queued {
            return Ok(false);
        }
        self.redraw()?;
        Ok(true)
    }

    /// Pointer movement in surface-local logical coordinates.
    pub fn on_pointer_move(&mut self, x: f32, _y: f32) {
        // An empty cache (no render yet) leaves the tooltip untouched.
        if let Some(point) = nearest_point(&self.layout.points, x) {
            let value = (self.series.tooltip_format)(point.value);
            self.tooltip.show(point, value);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.tooltip.hide();
    }

    /// Touch input shares the pointer hit path; only the first active
    /// touch point is considered.
    pub fn on_touch_start(&mut self, touches: &[(f32, f32)]) {
        if let Some(&(x, y)) = touches.first() {
            self.on_pointer_move(x, y);
        }
    }

    pub fn on_touch_end(&mut self) {
        self.tooltip.hide();
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Point cache from the most recent draw cycle.
    pub fn points(&self) -> &[PlottedPoint] {
        &self.layout.points
    }

    pub fn active_range(&self) -> RangeKey {
        self.active_range
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }
}
