// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timestamp extraction from pasted log text.
//!
//! Recognised layouts, tried in this order:
//!
//! | Kind | Example | Zone |
//! |------|---------|------|
//! | [`TimestampKind::Iso8601`] | `2023-05-14T15:30:45.123Z` | embedded |
//! | [`TimestampKind::UnixEpoch`] | `1684078245`, `1684078245123` | UTC |
//! | [`TimestampKind::CommonLog`] | `14/May/2023:15:30:45 +0000` | embedded |
//! | [`TimestampKind::DateTime`] | `2023-05-14 15:30:45` | caller's zone |
//! | [`TimestampKind::UsDateTime`] | `05/14/2023 15:30:45` | caller's zone |
//! | [`TimestampKind::TimeOnly`] | `15:30:45` | caller's zone, caller's date |

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::Serialize;
use tracing::debug;

use crate::convert::localize;
use crate::error::{Result, ZoneError};
use crate::zone::TimeZoneId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampKind {
    Iso8601,
    UnixEpoch,
    CommonLog,
    DateTime,
    UsDateTime,
    TimeOnly,
}

/// One timestamp found in a log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedTimestamp {
    /// The text exactly as it appeared.
    pub raw: String,
    pub kind: TimestampKind,
    pub instant: DateTime<Utc>,
}

impl ExtractedTimestamp {
    /// Whole seconds since the Unix epoch.
    pub fn unix_seconds(&self) -> i64 {
        self.instant.timestamp()
    }

    /// `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub fn iso8601(&self) -> String {
        self.instant.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// The instant on the clocks of `zone`.
    pub fn in_zone(&self, zone: &TimeZoneId) -> DateTime<chrono_tz::Tz> {
        self.instant.with_timezone(&zone.tz())
    }
}

static PATTERNS: Lazy<[(TimestampKind, Regex); 6]> = Lazy::new(|| {
    let re = |p: &str| Regex::new(p).expect("timestamp pattern is valid");
    [
        (
            TimestampKind::Iso8601,
            re(r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d{1,3})?(?:Z|[+-]\d{2}:\d{2})"),
        ),
        (TimestampKind::UnixEpoch, re(r"\b\d{10,13}\b")),
        (
            TimestampKind::CommonLog,
            re(r"\d{1,2}/[A-Za-z]{3}/\d{4}:\d{2}:\d{2}:\d{2} [+-]\d{4}"),
        ),
        (
            TimestampKind::DateTime,
            re(r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}(?:\.\d{1,6})?"),
        ),
        (
            TimestampKind::UsDateTime,
            re(r"\d{1,2}/\d{1,2}/\d{2,4} \d{2}:\d{2}:\d{2}"),
        ),
        (TimestampKind::TimeOnly, re(r"\d{2}:\d{2}:\d{2}(?:\.\d{1,6})?")),
    ]
});

/// Finds every timestamp in `text`.
///
/// Layouts without an explicit offset are read on the clocks of `zone`;
/// bare times are placed on the date `reference` has in `zone`. A match lying
/// inside an already accepted one is ignored, as are repeats of an accepted
/// text or instant. Candidates that do not form a valid date are skipped.
pub fn extract_timestamps(
    text: &str,
    zone: &TimeZoneId,
    reference: DateTime<Utc>,
) -> Vec<ExtractedTimestamp> {
    let today = reference.with_timezone(&zone.tz()).date_naive();
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut found: Vec<ExtractedTimestamp> = Vec::new();

    for (kind, pattern) in PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            if spans.iter().any(|&(s, e)| s <= m.start() && m.end() <= e) {
                continue;
            }
            let raw = m.as_str();
            let instant = match parse_candidate(*kind, raw, zone, today) {
                Ok(instant) => instant,
                Err(e) => {
                    debug!(raw, ?kind, error = %e, "skipping timestamp candidate");
                    continue;
                }
            };
            if found.iter().any(|t| t.raw == raw || t.instant == instant) {
                continue;
            }
            spans.push((m.start(), m.end()));
            found.push(ExtractedTimestamp {
                raw: raw.to_owned(),
                kind: *kind,
                instant,
            });
        }
    }

    debug!(count = found.len(), "extracted timestamps");
    found
}

fn parse_candidate(
    kind: TimestampKind,
    raw: &str,
    zone: &TimeZoneId,
    today: NaiveDate,
) -> Result<DateTime<Utc>> {
    let invalid = || ZoneError::InvalidTimestamp(raw.to_owned());
    match kind {
        TimestampKind::Iso8601 => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| invalid()),
        TimestampKind::UnixEpoch => {
            let value: i64 = raw.parse().map_err(|_| invalid())?;
            let parsed = if raw.len() <= 10 {
                DateTime::from_timestamp(value, 0)
            } else {
                DateTime::from_timestamp_millis(value)
            };
            parsed.ok_or_else(invalid)
        }
        TimestampKind::CommonLog => DateTime::parse_from_str(raw, "%d/%b/%Y:%H:%M:%S %z")
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| invalid()),
        TimestampKind::DateTime => {
            let local =
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map_err(|_| invalid())?;
            Ok(localize(local, zone)?.with_timezone(&Utc))
        }
        TimestampKind::UsDateTime => {
            let year_digits = raw
                .split(' ')
                .next()
                .and_then(|date| date.rsplit('/').next())
                .map_or(0, str::len);
            let format = match year_digits {
                2 => "%m/%d/%y %H:%M:%S",
                4 => "%m/%d/%Y %H:%M:%S",
                _ => return Err(invalid()),
            };
            let local = NaiveDateTime::parse_from_str(raw, format).map_err(|_| invalid())?;
            Ok(localize(local, zone)?.with_timezone(&Utc))
        }
        TimestampKind::TimeOnly => {
            let time = NaiveTime::parse_from_str(raw, "%H:%M:%S%.f").map_err(|_| invalid())?;
            Ok(localize(today.and_time(time), zone)?.with_timezone(&Utc))
        }
    }
}
