use super::*;

#[test]
fn progress_is_proportional_to_position() {
    assert!((progress_pct(1, 8) - 12.5).abs() < 1e-9);
    assert!((progress_pct(4, 8) - 50.0).abs() < 1e-9);
    assert!((progress_pct(8, 8) - 100.0).abs() < 1e-9);
}

#[test]
fn progress_with_no_steps_is_zero() {
    assert!((progress_pct(1, 0)).abs() < 1e-9);
}
