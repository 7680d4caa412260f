//! Fetch helpers for the static JSON documents.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `None`, since the documents only exist
//! behind the dev server.
//!
//! ERROR HANDLING
//! ==============
//! Load failures are the one error kind in this system. They are logged and
//! collapsed to `None` so views fall back to an empty render instead of
//! retrying or raising a user-facing error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{BusinessUnits, FrameworkRecord, KpiTable};

/// Path of the business-unit narrative document.
#[must_use]
pub fn business_units_endpoint() -> &'static str {
    "/data/business_units.json"
}

/// Path of the KPI figures document.
#[must_use]
pub fn kpis_endpoint() -> &'static str {
    "/data/kpis.json"
}

/// Path of the framework catalog document.
#[must_use]
pub fn frameworks_endpoint() -> &'static str {
    "/data/frameworks.json"
}

/// Fetch the per-unit narrative records. `None` on any failure.
pub async fn fetch_business_units() -> Option<BusinessUnits> {
    fetch_json(business_units_endpoint()).await
}

/// Fetch the KPI table. `None` on any failure.
pub async fn fetch_kpis() -> Option<KpiTable> {
    fetch_json(kpis_endpoint()).await
}

/// Fetch the ordered framework catalog. `None` on any failure.
pub async fn fetch_frameworks() -> Option<Vec<FrameworkRecord>> {
    fetch_json(frameworks_endpoint()).await
}

#[cfg(feature = "hydrate")]
async fn fetch_json<T: serde::de::DeserializeOwned>(path: &str) -> Option<T> {
    let resp = match gloo_net::http::Request::get(path).send().await {
        Ok(resp) => resp,
        Err(err) => {
            log::error!("fetching {path} failed: {err}");
            return None;
        }
    };
    if !resp.ok() {
        log::error!("fetching {path} failed: status {}", resp.status());
        return None;
    }
    match resp.json::<T>().await {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("decoding {path} failed: {err}");
            None
        }
    }
}

#[cfg(not(feature = "hydrate"))]
async fn fetch_json<T: serde::de::DeserializeOwned>(_path: &str) -> Option<T> {
    None
}
