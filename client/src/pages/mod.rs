//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (data fetches, local state,
//! timers) and delegates rendering details to `components`. Pages are
//! stateless across navigations: they re-fetch on every mount.

pub mod assignments;
pub mod business_unit;
pub mod executive_summary;
pub mod frameworks;
pub mod story;
