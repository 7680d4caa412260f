//! Environment-driven server configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SITE_DIR: &str = "site";
pub const DEFAULT_DATA_DIR: &str = "data";

/// Runtime settings, each overridable by an environment variable.
#[derive(Clone, Debug)]
pub struct Config {
    /// Listen port (`PORT`).
    pub port: u16,
    /// Directory holding `index.html`, the stylesheet, and the WASM bundle
    /// (`SITE_DIR`).
    pub site_dir: PathBuf,
    /// Directory holding the authored JSON documents (`DATA_DIR`).
    pub data_dir: PathBuf,
}

impl Config {
    /// Read configuration from the process environment, falling back to
    /// defaults for anything unset. An unparseable `PORT` also falls back
    /// rather than aborting.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let site_dir =
            PathBuf::from(lookup("SITE_DIR").unwrap_or_else(|| DEFAULT_SITE_DIR.to_owned()));
        let data_dir =
            PathBuf::from(lookup("DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_owned()));
        Self { port, site_dir, data_dir }
    }
}
