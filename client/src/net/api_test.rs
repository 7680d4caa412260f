use super::*;

#[test]
fn endpoints_live_under_the_data_prefix() {
    for endpoint in [business_units_endpoint(), kpis_endpoint(), frameworks_endpoint()] {
        assert!(endpoint.starts_with("/data/"));
        assert!(endpoint.ends_with(".json"));
    }
}

#[test]
fn endpoints_are_distinct() {
    assert_ne!(business_units_endpoint(), kpis_endpoint());
    assert_ne!(business_units_endpoint(), frameworks_endpoint());
    assert_ne!(kpis_endpoint(), frameworks_endpoint());
}
