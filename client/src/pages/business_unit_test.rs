use super::*;
use crate::net::types::UnitApplications;

fn record(id: &str, blue: &str, model_e: &str, pro: &str) -> FrameworkRecord {
    FrameworkRecord {
        id: id.to_owned(),
        name: id.to_owned(),
        source: "Session 1".to_owned(),
        area: "Strategy".to_owned(),
        applications: UnitApplications {
            blue: blue.to_owned(),
            model_e: model_e.to_owned(),
            pro: pro.to_owned(),
        },
        assessment: String::new(),
    }
}

#[test]
fn every_unit_reports_four_headline_metrics() {
    for unit in UnitKey::ALL {
        let metrics = headline_metrics(unit);
        assert_eq!(metrics[0].0, "Revenue (2024)");
        assert!(metrics.iter().all(|(_, value)| !value.is_empty()));
    }
}

#[test]
fn model_e_chart_omits_the_off_scale_ebit_row() {
    let rows = performance_rows(UnitKey::ModelE);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.label != "EBIT Margin"));
}

#[test]
fn blue_and_pro_charts_keep_all_four_rows() {
    for unit in [UnitKey::Blue, UnitKey::Pro] {
        let rows = performance_rows(unit);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].label, "EBIT Margin");
    }
}

#[test]
fn narrative_splits_on_comma_space() {
    let points = narrative_points("Revenue: $72.8B (2024), Strong cash generation, 2,279K units");
    assert_eq!(
        points,
        vec!["Revenue: $72.8B (2024)", "Strong cash generation", "2,279K units"]
    );
}

#[test]
fn narrative_drops_empty_phrases() {
    assert!(narrative_points("").is_empty());
    assert_eq!(narrative_points("one, , two"), vec!["one", "two"]);
}

#[test]
fn applicable_frameworks_needs_a_substantive_note() {
    let records = vec![
        record("swot", "Strengths in legacy ICE franchise", "n/a", "x"),
        record("five-forces", "short", "Rivalry is intense in the EV market", "x"),
    ];
    let blue = applicable_frameworks(&records, UnitKey::Blue);
    assert_eq!(blue.len(), 1);
    assert_eq!(blue[0].id, "swot");

    let model_e = applicable_frameworks(&records, UnitKey::ModelE);
    assert_eq!(model_e.len(), 1);
    assert_eq!(model_e[0].id, "five-forces");
}

#[test]
fn applicable_frameworks_caps_at_four() {
    let records: Vec<FrameworkRecord> = (0..6)
        .map(|i| record(&format!("f{i}"), "a perfectly substantive note", "", ""))
        .collect();
    let picked = applicable_frameworks(&records, UnitKey::Blue);
    assert_eq!(picked.len(), 4);
    assert_eq!(picked[0].id, "f0");
}
