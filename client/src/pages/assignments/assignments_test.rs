use super::management::{SIR_PILLARS, sir_average, sir_band};
use super::*;

#[test]
fn accent_colors_are_distinct_per_assignment() {
    let colors = ["02", "03", "04", "05"].map(accent_color);
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn unknown_assignment_number_falls_back_to_the_first_accent() {
    assert_eq!(accent_color("99"), accent_color("02"));
}

#[test]
fn sir_bands_follow_the_score_thresholds() {
    assert_eq!(sir_band(4.5), "sir-cell sir-cell--strong");
    assert_eq!(sir_band(4.0), "sir-cell sir-cell--strong");
    assert_eq!(sir_band(3.5), "sir-cell sir-cell--steady");
    assert_eq!(sir_band(2.5), "sir-cell sir-cell--weak");
}

#[test]
fn sir_averages_match_the_pillar_scores() {
    assert!((sir_average(0) - 3.5).abs() < 1e-9);
    assert!((sir_average(1) - 3.0).abs() < 1e-9);
    assert!((sir_average(2) - 4.3).abs() < 1e-9);
}

#[test]
fn every_sir_pillar_scores_all_three_units() {
    assert_eq!(SIR_PILLARS.len(), 7);
    for (_, scores) in SIR_PILLARS {
        for score in scores {
            assert!((1.0..=5.0).contains(&score));
        }
    }
}
