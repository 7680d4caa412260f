use super::*;

fn sample_framework_json() -> &'static str {
    r#"{
        "id": "focused-factory",
        "name": "Focused Factory",
        "source": "Wickham Skinner, Harvard Business Review (1974)",
        "area": "Operations Strategy",
        "applications": {
            "blue": "Brownfield ICE efficiency.",
            "model_e": "Greenfield battery campuses.",
            "pro": "Dedicated upfit centers."
        },
        "assessment": "Factory focus applied at business-unit scale."
    }"#
}

#[test]
fn framework_record_deserializes_from_authored_shape() {
    let record: FrameworkRecord = serde_json::from_str(sample_framework_json()).unwrap();
    assert_eq!(record.id, "focused-factory");
    assert_eq!(record.area, "Operations Strategy");
    assert_eq!(record.applications.model_e, "Greenfield battery campuses.");
}

#[test]
fn application_for_selects_the_matching_unit_text() {
    let record: FrameworkRecord = serde_json::from_str(sample_framework_json()).unwrap();
    assert_eq!(record.application_for(UnitKey::Blue), "Brownfield ICE efficiency.");
    assert_eq!(record.application_for(UnitKey::ModelE), "Greenfield battery campuses.");
    assert_eq!(record.application_for(UnitKey::Pro), "Dedicated upfit centers.");
}

#[test]
fn business_units_document_round_trips() {
    let unit = BusinessUnitRecord {
        name: "Ford Pro".to_owned(),
        financial: "Revenue: $66.9B (2024), EBIT: $9.0B (13.5% margin)".to_owned(),
        marketing: "Fleet mission segmentation".to_owned(),
        management: "Balanced model".to_owned(),
        operations: "85% capacity utilization".to_owned(),
        strategic_position: "Differentiation exemplar.".to_owned(),
        framework_fit_score: "10/10 - Integrated strategy".to_owned(),
    };
    let doc = BusinessUnits {
        blue: unit.clone(),
        model_e: unit.clone(),
        pro: unit,
    };
    let json = serde_json::to_string(&doc).unwrap();
    let back: BusinessUnits = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
    assert_eq!(back.get(UnitKey::Pro).framework_fit_score, "10/10 - Integrated strategy");
}

#[test]
fn kpi_table_tolerates_missing_groups() {
    let table: KpiTable = serde_json::from_str(r#"{ "financial": [] }"#).unwrap();
    assert!(table.financial.is_empty());
    assert!(table.sustainability.is_empty());
}

#[test]
fn unit_key_round_trips_through_json_keys() {
    for unit in UnitKey::ALL {
        assert_eq!(UnitKey::from_key(unit.as_key()), Some(unit));
    }
    assert_eq!(UnitKey::from_key("fleet"), None);
}

#[test]
fn unit_routes_match_the_navigation_table() {
    assert_eq!(UnitKey::Blue.route(), "/blue");
    assert_eq!(UnitKey::ModelE.route(), "/model-e");
    assert_eq!(UnitKey::Pro.route(), "/pro");
}
