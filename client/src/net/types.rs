//! Schemas for the authored JSON documents served under `/data`.
//!
//! DESIGN
//! ======
//! These types mirror the files produced by the data conversion step so
//! deserialization stays lossless. Records are read-only once loaded; every
//! field is display text, not computed input.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The three analyzed business units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitKey {
    Blue,
    ModelE,
    Pro,
}

impl UnitKey {
    /// All units in presentation order.
    pub const ALL: [UnitKey; 3] = [UnitKey::Blue, UnitKey::ModelE, UnitKey::Pro];

    /// The JSON object key for this unit.
    #[must_use]
    pub fn as_key(self) -> &'static str {
        match self {
            UnitKey::Blue => "blue",
            UnitKey::ModelE => "model_e",
            UnitKey::Pro => "pro",
        }
    }

    /// Parse a JSON object key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "blue" => Some(UnitKey::Blue),
            "model_e" => Some(UnitKey::ModelE),
            "pro" => Some(UnitKey::Pro),
            _ => None,
        }
    }

    /// Human-readable unit name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            UnitKey::Blue => "Ford Blue",
            UnitKey::ModelE => "Ford Model e",
            UnitKey::Pro => "Ford Pro",
        }
    }

    /// Route path of the unit's detail view.
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            UnitKey::Blue => "/blue",
            UnitKey::ModelE => "/model-e",
            UnitKey::Pro => "/pro",
        }
    }

    /// Brand accent color for charts and card chrome.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            UnitKey::Blue => "#003478",
            UnitKey::ModelE => "#FF6B00",
            UnitKey::Pro => "#00A550",
        }
    }

    /// One-line unit description for headers.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            UnitKey::Blue => {
                "Traditional internal combustion engine vehicles including iconic trucks and cars."
            }
            UnitKey::ModelE => "Electric vehicle division driving the company's sustainable future.",
            UnitKey::Pro => {
                "Commercial solutions with integrated software and services for fleet customers."
            }
        }
    }
}

/// One authored framework entry from `frameworks.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkRecord {
    /// Stable slug identity (list position is not relied upon).
    pub id: String,
    pub name: String,
    /// Citation for the framework.
    pub source: String,
    /// Category tag, e.g. `"Competitive Strategy"`.
    pub area: String,
    pub applications: UnitApplications,
    /// Overall-assessment summary text.
    pub assessment: String,
}

impl FrameworkRecord {
    /// Application notes for one business unit.
    #[must_use]
    pub fn application_for(&self, unit: UnitKey) -> &str {
        match unit {
            UnitKey::Blue => &self.applications.blue,
            UnitKey::ModelE => &self.applications.model_e,
            UnitKey::Pro => &self.applications.pro,
        }
    }
}

/// Per-unit application text for a framework.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitApplications {
    pub blue: String,
    pub model_e: String,
    pub pro: String,
}

/// One authored narrative record from `business_units.json`.
///
/// The four dimension fields are comma-separated phrase lists; views split
/// them into bullet points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessUnitRecord {
    pub name: String,
    pub financial: String,
    pub marketing: String,
    pub management: String,
    pub operations: String,
    pub strategic_position: String,
    /// Display label such as `"10/10 - Integrated strategy ..."`.
    pub framework_fit_score: String,
}

/// The full `business_units.json` document, keyed by unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessUnits {
    pub blue: BusinessUnitRecord,
    pub model_e: BusinessUnitRecord,
    pub pro: BusinessUnitRecord,
}

impl BusinessUnits {
    /// Record for one unit.
    #[must_use]
    pub fn get(&self, unit: UnitKey) -> &BusinessUnitRecord {
        match unit {
            UnitKey::Blue => &self.blue,
            UnitKey::ModelE => &self.model_e,
            UnitKey::Pro => &self.pro,
        }
    }
}

/// One KPI row from `kpis.json`. Opaque pass-through display data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiRecord {
    pub metric: String,
    pub ford_overall: String,
    pub ford_blue: String,
    pub model_e: String,
    pub ford_pro: String,
    pub benchmark: String,
    pub performance_vs_benchmark: String,
    pub trend: String,
}

/// The full `kpis.json` document, grouped by KPI category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiTable {
    #[serde(default)]
    pub financial: Vec<KpiRecord>,
    #[serde(default)]
    pub marketing: Vec<KpiRecord>,
    #[serde(default)]
    pub management: Vec<KpiRecord>,
    #[serde(default)]
    pub operations: Vec<KpiRecord>,
    #[serde(default)]
    pub quality: Vec<KpiRecord>,
    #[serde(default)]
    pub sustainability: Vec<KpiRecord>,
}
