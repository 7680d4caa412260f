use super::*;

#[test]
fn scale_maps_endpoints_and_midpoint() {
    assert!((scale(0.0, 0.0, 10.0, 0.0, 100.0)).abs() < 1e-9);
    assert!((scale(10.0, 0.0, 10.0, 0.0, 100.0) - 100.0).abs() < 1e-9);
    assert!((scale(5.0, 0.0, 10.0, 0.0, 100.0) - 50.0).abs() < 1e-9);
}

#[test]
fn scale_degenerate_domain_collapses_to_output_min() {
    assert!((scale(7.0, 3.0, 3.0, 0.0, 100.0)).abs() < 1e-9);
}

#[test]
fn polyline_spaces_points_evenly_across_the_width() {
    let points = polyline_points(&[0.0, 5.0, 10.0], 0.0, 10.0, 100.0, 50.0);
    assert_eq!(points, "0.0,50.0 50.0,25.0 100.0,0.0");
}

#[test]
fn area_points_close_the_polygon_along_the_baseline() {
    let points = area_points(&[0.0, 10.0], 0.0, 10.0, 100.0, 50.0);
    assert!(points.starts_with("0.0,50.0 "));
    assert!(points.ends_with(" 100.0,50.0"));
}

#[test]
fn radar_polygon_starts_at_the_top_spoke() {
    // First value at max should land straight up from the center.
    let points = radar_polygon(&[100.0, 100.0, 100.0, 100.0], 100.0, 130.0, 130.0, 100.0);
    let first = points.split(' ').next().unwrap();
    assert_eq!(first, "130.0,30.0");
}

#[test]
fn radar_polygon_clamps_overrange_values() {
    let clamped = radar_polygon(&[250.0], 100.0, 130.0, 130.0, 100.0);
    let exact = radar_polygon(&[100.0], 100.0, 130.0, 130.0, 100.0);
    assert_eq!(clamped, exact);
}

#[test]
fn bar_width_is_a_clamped_percentage() {
    assert!((bar_width_pct(50.0, 100.0) - 50.0).abs() < 1e-9);
    assert!((bar_width_pct(150.0, 100.0) - 100.0).abs() < 1e-9);
    assert!((bar_width_pct(-5.0, 100.0)).abs() < 1e-9);
    assert!((bar_width_pct(5.0, 0.0)).abs() < 1e-9);
}
