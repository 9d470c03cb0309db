// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Validated timezone identifiers and zone-list parsing.
//!
//! A [`TimeZoneId`] can only be built from a name the bundled IANA database
//! knows about, so every downstream computation can treat it as resolvable.
//! Zone lists shared through URLs (`?meeting-tz=Zone1,Zone2`) are parsed once
//! into `Vec<TimeZoneId>` by [`parse_zone_list`] / [`zones_from_query`].

use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use tracing::warn;
use url::form_urlencoded;

use crate::error::{Result, ZoneError};

/// Query parameter used by the meeting scheduler share links.
pub const MEETING_QUERY_KEY: &str = "meeting-tz";

/// Query parameter used by the multi-zone converter share links.
pub const CONVERTER_QUERY_KEY: &str = "tz";

/// An IANA timezone name that is known to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeZoneId {
    tz: Tz,
}

impl TimeZoneId {
    /// Wraps an already-resolved `chrono_tz` zone.
    #[inline]
    pub const fn from_tz(tz: Tz) -> Self {
        Self { tz }
    }

    /// The underlying `chrono_tz` zone.
    #[inline]
    pub const fn tz(&self) -> Tz {
        self.tz
    }

    /// Canonical database name, e.g. `"America/Los_Angeles"`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// Last path segment with underscores replaced by spaces.
    ///
    /// ```
    /// use zonewise::TimeZoneId;
    ///
    /// let zone: TimeZoneId = "America/Los_Angeles".parse().unwrap();
    /// assert_eq!(zone.simplified_name(), "Los Angeles");
    /// ```
    pub fn simplified_name(&self) -> String {
        let name = self.name();
        name.rsplit('/').next().unwrap_or(name).replace('_', " ")
    }
}

impl FromStr for TimeZoneId {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        trimmed
            .parse::<Tz>()
            .map(Self::from_tz)
            .map_err(|_| ZoneError::unresolved(trimmed))
    }
}

impl From<Tz> for TimeZoneId {
    fn from(tz: Tz) -> Self {
        Self::from_tz(tz)
    }
}

impl fmt::Display for TimeZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TimeZoneId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// Returns `true` if `zone` names a timezone in the database.
pub fn is_valid_zone(zone: &str) -> bool {
    zone.parse::<TimeZoneId>().is_ok()
}

/// Parses a comma-separated list of zone names.
///
/// Segments are trimmed and empty segments are skipped. Repeated zones keep
/// their first position only. The first unknown name fails the whole list.
pub fn parse_zone_list(list: &str) -> Result<Vec<TimeZoneId>> {
    let mut zones: Vec<TimeZoneId> = Vec::new();
    for segment in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let zone = segment.parse::<TimeZoneId>().inspect_err(|e| {
            warn!(zone = segment, error = %e, "rejecting zone list");
        })?;
        if !zones.contains(&zone) {
            zones.push(zone);
        }
    }
    Ok(zones)
}

/// Reads the zone list stored under `key` in a URL query string.
///
/// The leading `?` is optional and values are percent-decoded. A missing
/// parameter yields an empty list.
pub fn zones_from_query(query: &str, key: &str) -> Result<Vec<TimeZoneId>> {
    let query = query.strip_prefix('?').unwrap_or(query);
    match form_urlencoded::parse(query.as_bytes()).find(|(k, _)| k == key) {
        Some((_, value)) => parse_zone_list(&value),
        None => Ok(Vec::new()),
    }
}

/// Encodes `zones` as a `key=Zone1,Zone2` query string (percent-encoded).
pub fn zones_to_query(zones: &[TimeZoneId], key: &str) -> String {
    let joined = zones
        .iter()
        .map(TimeZoneId::name)
        .collect::<Vec<_>>()
        .join(",");
    form_urlencoded::Serializer::new(String::new())
        .append_pair(key, &joined)
        .finish()
}
