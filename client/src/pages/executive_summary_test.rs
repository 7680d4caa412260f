use super::*;

const FINANCIAL: &str =
    "Revenue: $72.8B (2024), EBIT: $9.3B (12.8% margin), Strong cash generation";

#[test]
fn revenue_figure_extracts_the_dollar_amount() {
    assert_eq!(revenue_figure(FINANCIAL), Some("72.8"));
}

#[test]
fn revenue_figure_missing_marker_yields_none() {
    assert_eq!(revenue_figure("EBIT: $9.3B"), None);
    assert_eq!(revenue_figure(""), None);
}

#[test]
fn ebit_margin_reads_the_parenthesized_qualifier() {
    assert_eq!(ebit_margin_figure(FINANCIAL), Some("12.8% margin"));
}

#[test]
fn ebit_margin_handles_negative_margins() {
    let text = "Revenue: $3.9B (2024), EBIT: -$5.1B (-131.8% margin)";
    assert_eq!(ebit_margin_figure(text), Some("-131.8% margin"));
}

#[test]
fn ebit_margin_without_parentheses_yields_none() {
    assert_eq!(ebit_margin_figure("EBIT: $9.3B and rising"), None);
}

#[test]
fn fit_score_short_takes_the_numeric_prefix() {
    assert_eq!(fit_score_short("9/10 - Strong alignment"), "9/10");
    assert_eq!(fit_score_short("n/a"), "n/a");
}
