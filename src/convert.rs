// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock conversion between zones.
//!
//! Local times are interpreted with an explicit policy at DST transitions:
//! an ambiguous reading (clocks fall back) resolves to the earlier instant,
//! and a reading inside a spring-forward gap is an error.

use std::fmt;

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

use crate::error::{Result, ZoneError};
use crate::zone::TimeZoneId;

/// Output format for [`calculate_arrival_time`], e.g.
/// `January 15, 2024 12:00:00 PM EST`.
pub const ARRIVAL_FORMAT: &str = "%B %d, %Y %I:%M:%S %p %Z";

const DEPARTURE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Pins a wall-clock reading in `zone` to an instant.
///
/// # Errors
///
/// [`ZoneError::NonexistentLocalTime`] if `local` is skipped by a DST jump.
pub fn localize(local: NaiveDateTime, zone: &TimeZoneId) -> Result<DateTime<Tz>> {
    match zone.tz().from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(ZoneError::NonexistentLocalTime {
            zone: zone.name().to_owned(),
            local,
        }),
    }
}

/// Reads `local` on the clocks of `from` and returns the same instant on the
/// clocks of `to`.
pub fn convert_local_time(
    local: NaiveDateTime,
    from: &TimeZoneId,
    to: &TimeZoneId,
) -> Result<DateTime<Tz>> {
    Ok(localize(local, from)?.with_timezone(&to.tz()))
}

/// A zone together with its wall-clock reading of some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneClock {
    pub zone: TimeZoneId,
    pub local: DateTime<Tz>,
}

impl ZoneClock {
    /// Reading of `instant` on the clocks of `zone`.
    pub fn at<Z: TimeZone>(zone: TimeZoneId, instant: &DateTime<Z>) -> Self {
        Self {
            zone,
            local: instant.with_timezone(&zone.tz()),
        }
    }

    /// Twelve-hour clock reading, e.g. `09:30 AM`.
    pub fn time_12h(&self) -> String {
        self.local.format("%I:%M %p").to_string()
    }

    /// Zone abbreviation in effect, e.g. `CET` or `IST`.
    pub fn abbreviation(&self) -> String {
        self.local.format("%Z").to_string()
    }
}

impl fmt::Display for ZoneClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time_12h(), self.abbreviation())
    }
}

impl Serialize for ZoneClock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("ZoneClock", 2)?;
        s.serialize_field("zone", &self.zone)?;
        s.serialize_field("local", &self.local.to_rfc3339())?;
        s.end()
    }
}

/// Shows a meeting set for `time` on `date` in `from` on every clock in `zones`.
pub fn meeting_time_across(
    date: NaiveDate,
    time: NaiveTime,
    from: &TimeZoneId,
    zones: &[TimeZoneId],
) -> Result<Vec<ZoneClock>> {
    let instant = localize(date.and_time(time), from)?;
    Ok(zones.iter().map(|z| ZoneClock::at(*z, &instant)).collect())
}

/// Converts a departure reading in `from` to the arrival zone's clock and
/// formats it with [`ARRIVAL_FORMAT`].
///
/// `departure` is `YYYY-MM-DDTHH:MM[:SS]`; a space may replace the `T`.
pub fn calculate_arrival_time(
    departure: &str,
    from: &TimeZoneId,
    to: &TimeZoneId,
) -> Result<String> {
    let local = parse_departure(departure)?;
    let arrival = convert_local_time(local, from, to)?;
    Ok(arrival.format(ARRIVAL_FORMAT).to_string())
}

fn parse_departure(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    DEPARTURE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .ok_or_else(|| {
            ZoneError::InvalidTimestamp(format!("unrecognised departure time {text:?}"))
        })
}
