//! Shared client state modules.
//!
//! ARCHITECTURE
//! ============
//! Each struct here is plain data provided to the component tree as an
//! `RwSignal` context from `app::App`. Keeping the transition logic on the
//! structs (rather than inline in views) lets the state machines be unit
//! tested natively, without a browser.

pub mod filter;
pub mod story;
pub mod ui;
