// File: crates/trend-core/tests/controller.rs
// Purpose: Controller event flow: late-bound ranges, queued theme redraws, tooltip lifecycle.

use std::rc::Rc;

use trend_core::format;
use trend_core::{
    ActiveRanges, ChartConfig, ChartController, Dataset, FixedHost, RangeKey, SeriesDefinition,
};

fn labelled(values: &[f64]) -> Dataset {
    let labels = (0..values.len()).map(|i| format!("M{i}")).collect();
    Dataset::new(labels, values.to_vec())
}

fn series() -> SeriesDefinition {
    SeriesDefinition::new(format::count(), format::percent())
        .with_range(RangeKey::Short, labelled(&[1.0, 2.0, 3.0]))
        .with_range(RangeKey::Full, labelled(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]))
}

fn chart_with_host(width: f32, height: f32) -> ChartController {
    let host = Rc::new(FixedHost::new(width, height, 1.0));
    ChartController::new(ChartConfig::new(Some(host), series()))
}

#[test]
fn missing_host_yields_a_disabled_no_op_instance() {
    let mut chart = ChartController::new(ChartConfig::new(None, series()));
    assert!(!chart.is_enabled());
    chart.redraw().unwrap();
    chart.on_range_select(RangeKey::Short).unwrap();
    chart.on_pointer_move(10.0, 10.0);
    assert!(chart.points().is_empty());
    assert!(!chart.tooltip().visible);
}

#[test]
fn redraw_caches_points_for_the_active_range() {
    let mut chart = chart_with_host(200.0, 100.0);
    chart.redraw().unwrap();
    // default range is full
    assert_eq!(chart.active_range(), RangeKey::Full);
    assert_eq!(chart.points().len(), 6);

    chart.on_range_select(RangeKey::Short).unwrap();
    assert_eq!(chart.points().len(), 3);
}

#[test]
fn missing_range_clears_the_cache_without_erroring() {
    let mut chart = chart_with_host(200.0, 100.0);
    chart.redraw().unwrap();
    assert!(!chart.points().is_empty());
    chart.on_range_select(RangeKey::Medium).unwrap();
    assert!(chart.points().is_empty());
}

#[test]
fn theme_change_repaints_only_at_end_of_turn() {
    let mut chart = chart_with_host(150.0, 80.0);
    chart.redraw().unwrap();
    assert_eq!(chart.theme().name, "dark");

    chart.on_theme_change(false);
    assert_eq!(chart.theme().name, "light");
    assert!(chart.run_queued().unwrap());
    // nothing left queued
    assert!(!chart.run_queued().unwrap());
}

#[test]
fn tooltip_follows_pointer_and_hides_on_leave() {
    let mut chart = chart_with_host(200.0, 100.0);
    chart.redraw().unwrap();

    let x = chart.points()[1].x;
    chart.on_pointer_move(x + 1.0, 40.0);
    let tooltip = chart.tooltip();
    assert!(tooltip.visible);
    assert_eq!(tooltip.period, "M1");
    assert_eq!(tooltip.value, "+2.0%");
    assert_eq!(tooltip.rows(), [("Period", "M1"), ("Value", "+2.0%")]);

    chart.on_pointer_leave();
    assert!(!chart.tooltip().visible);
}

#[test]
fn pointer_before_first_render_is_not_a_fault() {
    let mut chart = chart_with_host(200.0, 100.0);
    chart.on_pointer_move(50.0, 20.0);
    assert!(!chart.tooltip().visible);
}

#[test]
fn touch_uses_the_first_active_point_only() {
    let mut chart = chart_with_host(200.0, 100.0);
    chart.redraw().unwrap();

    let x0 = chart.points()[0].x;
    chart.on_touch_start(&[(x0, 30.0), (9999.0, 30.0)]);
    assert!(chart.tooltip().visible);
    assert_eq!(chart.tooltip().period, "M0");

    chart.on_touch_end();
    assert!(!chart.tooltip().visible);
}

#[test]
fn resize_event_remeasures_the_surface() {
    let host = Rc::new(FixedHost::new(200.0, 100.0, 1.0));
    let mut chart = ChartController::new(ChartConfig::new(Some(host.clone()), series()));
    chart.redraw().unwrap();
    let before = chart.points().last().unwrap().x;

    host.set_size(400.0, 100.0);
    chart.on_resize().unwrap();
    let after = chart.points().last().unwrap().x;
    assert!(after > before);
}

#[test]
fn zero_area_host_skips_rendering_without_error() {
    let host = Rc::new(FixedHost::new(0.0, 0.0, 1.0));
    let mut chart = ChartController::new(ChartConfig::new(Some(host), series()));
    chart.redraw().unwrap();
    assert!(!chart.surface_mut().has_backing());
    assert!(chart.points().is_empty());
}

#[test]
fn active_ranges_tracks_per_chart_selection() {
    let mut ranges = ActiveRanges::new(RangeKey::Full);
    assert_eq!(ranges.active("net"), RangeKey::Full);

    ranges.select("net", RangeKey::Short);
    assert_eq!(ranges.active("net"), RangeKey::Short);
    // untouched charts keep the default
    assert_eq!(ranges.active("aum"), RangeKey::Full);
}

#[test]
fn range_key_strings_round_trip() {
    for key in RangeKey::ALL {
        assert_eq!(RangeKey::parse(key.as_str()), Some(key));
    }
    assert_eq!(RangeKey::parse("yearly"), None);
}
