// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Defaults for overlap queries, overridable from a file or the environment.

use serde::Deserialize;

use crate::error::Result;
use crate::window::WorkingHoursWindow;
use crate::zone::{parse_zone_list, TimeZoneId};

/// Environment variable naming an optional configuration file.
pub const CONFIG_PATH_VAR: &str = "ZONEWISE_CONFIG";

/// Prefix of the environment overrides (`ZONEWISE_TOP_N=12`).
pub const ENV_PREFIX: &str = "ZONEWISE";

/// Number of ranked hours shown when nothing else is configured.
pub const DEFAULT_TOP_N: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub start: i64,
    pub end: i64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        let window = WorkingHoursWindow::DEFAULT;
        Self {
            start: i64::from(window.start()),
            end: i64::from(window.end()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OverlapConfig {
    pub working_hours: WindowConfig,
    /// How many ranked hours callers should display.
    pub top_n: usize,
    /// Zone names preselected before the user picks any.
    pub default_zones: Vec<String>,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            working_hours: WindowConfig::default(),
            top_n: DEFAULT_TOP_N,
            default_zones: Vec::new(),
        }
    }
}

impl OverlapConfig {
    /// Loads the file named by `ZONEWISE_CONFIG` (if set), then applies
    /// `ZONEWISE_*` environment overrides. Nested keys use `__`, e.g.
    /// `ZONEWISE_WORKING_HOURS__START=8`; `ZONEWISE_DEFAULT_ZONES` is a
    /// comma-separated list.
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
            builder = builder.add_source(config::File::with_name(&path));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("default_zones"),
        );
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Parses a TOML document, falling back to defaults for missing keys.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }

    /// The validated working-hours window.
    pub fn window(&self) -> Result<WorkingHoursWindow> {
        WorkingHoursWindow::new(self.working_hours.start, self.working_hours.end)
    }

    /// The validated default zones.
    pub fn zones(&self) -> Result<Vec<TimeZoneId>> {
        parse_zone_list(&self.default_zones.join(","))
    }
}
