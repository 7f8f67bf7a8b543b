// File: crates/trend-core/tests/layout.rs
// Purpose: Geometry mapper properties: anchoring, monotonicity, degenerate inputs.

use trend_core::{compute_points, Dataset, Geometry, Insets};

fn geom(width: f32, height: f32) -> Geometry {
    Geometry {
        width,
        height,
        insets: Insets::new(18.0, 14.0, 18.0, 18.0),
        device_pixel_ratio: 1.0,
    }
}

fn dataset(values: &[f64]) -> Dataset {
    let labels = (0..values.len()).map(|i| format!("P{i}")).collect();
    Dataset::new(labels, values.to_vec())
}

#[test]
fn endpoints_anchor_to_plot_bounds() {
    let layout = compute_points(&dataset(&[1.0, 2.0, 3.0, 4.0]), &geom(200.0, 100.0));
    assert_eq!(layout.points[0].x, 18.0);
    assert_eq!(layout.points[3].x, 200.0 - 18.0);
}

#[test]
fn larger_values_plot_higher() {
    let layout = compute_points(&dataset(&[10.0, 20.0, 15.0]), &geom(100.0, 50.0));
    let p = &layout.points;
    assert!(p[1].y < p[0].y);
    assert!(p[1].y < p[2].y);
    // 10 is the minimum and plots lowest
    assert!(p[0].y > p[2].y);
}

#[test]
fn equal_values_share_a_y_coordinate() {
    let layout = compute_points(&dataset(&[7.0, 9.0, 7.0]), &geom(100.0, 50.0));
    assert_eq!(layout.points[0].y, layout.points[2].y);
}

#[test]
fn single_point_sits_at_horizontal_midpoint() {
    let layout = compute_points(&dataset(&[42.0]), &geom(100.0, 50.0));
    assert_eq!(layout.points.len(), 1);
    let mid = (18.0 + (100.0 - 18.0)) / 2.0;
    assert!((layout.points[0].x - mid).abs() < 1e-6);
}

#[test]
fn flat_series_maps_to_a_single_level() {
    let layout = compute_points(&dataset(&[5.0; 6]), &geom(120.0, 60.0));
    let y0 = layout.points[0].y;
    assert!(y0.is_finite());
    assert!(layout.points.iter().all(|p| (p.y - y0).abs() < 1e-6));
    // mid-height of the plotting area
    let mid = (14.0 + (60.0 - 18.0)) / 2.0;
    assert!((y0 - mid).abs() < 1e-6);
}

#[test]
fn empty_dataset_yields_empty_layout() {
    let layout = compute_points(&Dataset::default(), &geom(100.0, 50.0));
    assert!(layout.points.is_empty());
}

#[test]
fn scenario_three_quarters() {
    let ds = Dataset::new(
        vec!["Q1".into(), "Q2".into(), "Q3".into()],
        vec![10.0, 20.0, 15.0],
    );
    let layout = compute_points(&ds, &geom(100.0, 50.0));
    assert_eq!(layout.points.len(), 3);
    assert_eq!(layout.min_value, 10.0);
    assert_eq!(layout.max_value, 20.0);
    assert_eq!(layout.points[1].label, "Q2");
    // 20 is the maximum and plots highest
    assert!(layout.points[1].y < layout.points[0].y);
    assert!(layout.points[1].y < layout.points[2].y);
}

#[test]
fn identical_inputs_map_identically() {
    let ds = dataset(&[3.0, 1.0, 4.0, 1.5]);
    let g = geom(320.0, 180.0);
    let a = compute_points(&ds, &g);
    let b = compute_points(&ds, &g);
    assert_eq!(a.points.len(), b.points.len());
    for (pa, pb) in a.points.iter().zip(&b.points) {
        assert_eq!(pa.x.to_bits(), pb.x.to_bits());
        assert_eq!(pa.y.to_bits(), pb.y.to_bits());
    }
}

#[test]
fn non_finite_values_are_filtered_at_construction() {
    let ds = Dataset::new(
        vec!["a".into(), "b".into(), "c".into(), "d".into()],
        vec![1.0, f64::NAN, f64::INFINITY, 2.0],
    );
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.labels(), ["a", "d"]);
    assert_eq!(ds.values(), [1.0, 2.0]);
}
