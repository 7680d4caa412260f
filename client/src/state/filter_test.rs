use super::*;
use crate::net::types::UnitApplications;

fn record(id: &str, name: &str, area: &str, assessment: &str) -> FrameworkRecord {
    FrameworkRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        source: "test".to_owned(),
        area: area.to_owned(),
        applications: UnitApplications {
            blue: String::new(),
            model_e: String::new(),
            pro: String::new(),
        },
        assessment: assessment.to_owned(),
    }
}

fn catalog() -> Vec<FrameworkRecord> {
    vec![
        record(
            "five-forces",
            "Porter's Five Forces",
            "Competitive Strategy",
            "Competitive pressure on the EV unit.",
        ),
        record(
            "focused-factory",
            "Focused Factory",
            "Operations Strategy",
            "Factory focus at business-unit scale.",
        ),
        record(
            "time-value",
            "Time Value of Money",
            "Financial Analysis",
            "Losses as purchased optionality.",
        ),
        record(
            "generic-strategies",
            "Porter's Generic Strategies",
            "Competitive Strategy",
            "Each unit pursues a distinct generic strategy.",
        ),
    ]
}

// =============================================================
// Identity and ordering
// =============================================================

#[test]
fn default_filter_is_the_identity() {
    let records = catalog();
    let shown = visible(&records, &FilterState::default());
    assert_eq!(shown.len(), records.len());
    let ids: Vec<&str> = shown.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["five-forces", "focused-factory", "time-value", "generic-strategies"]);
}

#[test]
fn visible_preserves_original_order() {
    let records = catalog();
    let mut filter = FilterState::default();
    filter.set_category("Competitive Strategy");
    let ids: Vec<&str> = visible(&records, &filter).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["five-forces", "generic-strategies"]);
}

// =============================================================
// Predicate conjunction
// =============================================================

#[test]
fn combined_filter_is_a_subset_of_each_predicate_alone() {
    let records = catalog();

    let mut both = FilterState::default();
    both.set_query("porter");
    both.set_category("Competitive Strategy");

    let mut query_only = FilterState::default();
    query_only.set_query("porter");

    let mut category_only = FilterState::default();
    category_only.set_category("Competitive Strategy");

    let both_ids: Vec<&str> = visible(&records, &both).iter().map(|r| r.id.as_str()).collect();
    let query_ids: Vec<&str> =
        visible(&records, &query_only).iter().map(|r| r.id.as_str()).collect();
    let category_ids: Vec<&str> =
        visible(&records, &category_only).iter().map(|r| r.id.as_str()).collect();

    for id in &both_ids {
        assert!(query_ids.contains(id));
        assert!(category_ids.contains(id));
    }
}

#[test]
fn query_matches_name_or_assessment_case_insensitively() {
    let records = catalog();
    let mut filter = FilterState::default();

    filter.set_query("FOCUSED");
    assert_eq!(visible(&records, &filter).len(), 1);

    // "optionality" appears only in an assessment.
    filter.set_query("optionality");
    let shown = visible(&records, &filter);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, "time-value");
}

#[test]
fn unique_name_substring_yields_exactly_that_record() {
    let records = catalog();
    let mut filter = FilterState::default();
    filter.set_query("time value");
    let shown = visible(&records, &filter);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].name, "Time Value of Money");
}

#[test]
fn single_record_category_filters_to_one_entry() {
    let records = catalog();
    let mut filter = FilterState::default();
    filter.set_category("Financial Analysis");
    filter.set_query("");
    let shown = visible(&records, &filter);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, "time-value");
}

#[test]
fn no_match_yields_an_empty_list() {
    let records = catalog();
    let mut filter = FilterState::default();
    filter.set_query("blockchain");
    assert!(visible(&records, &filter).is_empty());
}

// =============================================================
// Category enumeration
// =============================================================

#[test]
fn categories_are_distinct_in_first_appearance_order() {
    let records = catalog();
    assert_eq!(
        categories(&records),
        vec!["Competitive Strategy", "Operations Strategy", "Financial Analysis"]
    );
}
