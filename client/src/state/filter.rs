//! Search and category filtering over the loaded framework catalog.
//!
//! DESIGN
//! ======
//! Filtering is a pure function of `(records, query, category)`; the state
//! holds only the two predicate inputs. Views recompute the visible subset
//! on every render, which is cheap for a twelve-entry catalog and keeps the
//! records themselves immutable.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::FrameworkRecord;

/// Sentinel category meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Filter inputs for the framework explorer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring matched against name + assessment.
    pub query: String,
    /// Selected area, or [`ALL_CATEGORIES`].
    pub category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_owned(),
        }
    }
}

impl FilterState {
    /// Replace the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Replace the selected category.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Whether a record passes both predicates. The empty query matches
    /// every record.
    #[must_use]
    pub fn matches(&self, record: &FrameworkRecord) -> bool {
        let category_ok = self.category == ALL_CATEGORIES || record.area == self.category;
        if !category_ok {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.assessment.to_lowercase().contains(&needle)
    }
}

/// The visible subset of `records`, preserving input order.
#[must_use]
pub fn visible<'a>(records: &'a [FrameworkRecord], filter: &FilterState) -> Vec<&'a FrameworkRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Distinct area values in first-appearance order, for the select control.
#[must_use]
pub fn categories(records: &[FrameworkRecord]) -> Vec<String> {
    let mut seen = Vec::new();
    for record in records {
        if !seen.contains(&record.area) {
            seen.push(record.area.clone());
        }
    }
    seen
}
