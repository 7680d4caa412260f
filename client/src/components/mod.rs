//! Reusable UI component modules.
//!
//! Components are presentational: they map one record or value tuple to
//! markup and keep no state beyond hover/open flags owned by their parent.

pub mod cards;
pub mod charts;
pub mod footer;
pub mod framework_card;
pub mod nav_bar;
pub mod spinner;
