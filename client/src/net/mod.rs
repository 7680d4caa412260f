//! Data-loading boundary: static JSON schemas and fetch helpers.

pub mod api;
pub mod types;
