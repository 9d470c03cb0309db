// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Crate-wide error type.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors produced while resolving zones or validating caller input.
///
/// Every fallible operation in the crate returns this type. Nothing is
/// silently defaulted: an unknown zone never turns into a zero offset.
#[derive(Error, Debug)]
pub enum ZoneError {
    /// The identifier is not present in the timezone database.
    #[error("unknown timezone identifier: {zone:?}")]
    ZoneResolution { zone: String },

    #[error("invalid working-hours window: {0}")]
    InvalidWindow(String),

    #[error("invalid age bracket {0:?} (expected child, adult or senior)")]
    InvalidAgeBracket(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// The wall-clock time falls inside a DST gap in `zone`.
    #[error("local time {local} does not exist in {zone}")]
    NonexistentLocalTime { zone: String, local: NaiveDateTime },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ZoneError {
    pub(crate) fn unresolved(zone: impl Into<String>) -> Self {
        ZoneError::ZoneResolution { zone: zone.into() }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ZoneError>;
