// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timezone overlap primitives.
//!
//! This crate answers the questions behind a meeting planner: what is each
//! zone's UTC offset right now, at which UTC hours are the most participants
//! inside their working hours, and how hard is the jet lag between two zones.
//!
//! # Core types
//!
//! - [`TimeZoneId`] — an IANA zone name validated against the tz database.
//! - [`WorkingHoursWindow`] — local working hours, possibly wrapping midnight.
//! - [`ScoredHour`] — availability count for one UTC hour.
//! - [`OverlapSummary`] — the ranked 24-hour table plus derived facts.
//! - [`JetlagEstimate`] — severity, direction and recovery days for a trip.
//! - [`ExtractedTimestamp`] — a timestamp found in log text.
//!
//! # Operations
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`resolve_offset_hours`] | UTC offset of a zone, folded into `(−12, +12]` |
//! | [`score_hours`] | zones available at each UTC hour |
//! | [`rank`] | best hours first, ties in hour order |
//! | [`find_overlap`] | score + rank + perfect-match flag |
//! | [`estimate_jetlag`] | jet-lag classification for two zones |
//! | [`parse_zone_list`] / [`zones_from_query`] | validated zone lists from text or URLs |
//! | [`convert_local_time`] / [`calculate_arrival_time`] | wall-clock conversion |
//! | [`extract_timestamps`] | timestamps in pasted logs |
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use zonewise::{find_overlap, parse_zone_list, WorkingHoursWindow};
//!
//! let zones = parse_zone_list("America/Los_Angeles,America/New_York").unwrap();
//! let instant = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
//! let summary = find_overlap(&zones, WorkingHoursWindow::DEFAULT, instant);
//!
//! assert!(summary.perfect_match);
//! assert_eq!(summary.best_hours(), vec![17, 18, 19, 20, 21]);
//! ```
//!
//! Every fallible call returns [`ZoneError`]; unknown zones are reported,
//! never replaced by a zero offset.

mod convert;
mod error;
mod grid;
mod jetlag;
mod log_parser;
mod offset;
mod settings;
mod window;
mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use convert::{
    calculate_arrival_time, convert_local_time, localize, meeting_time_across, ZoneClock,
    ARRIVAL_FORMAT,
};
pub use error::{Result, ZoneError};
pub use grid::{
    find_overlap, format_hour, has_perfect_match, rank, score_hours, top_n, OverlapSummary,
    ScoredHour,
};
pub use jetlag::{
    estimate_jetlag, estimate_jetlag_by_name, AgeBracket, JetlagEstimate, Severity,
    TravelDirection,
};
pub use log_parser::{extract_timestamps, ExtractedTimestamp, TimestampKind};
pub use offset::resolve_offset_hours;
pub use settings::{OverlapConfig, WindowConfig, DEFAULT_TOP_N};
pub use window::WorkingHoursWindow;
pub use zone::{
    is_valid_zone, parse_zone_list, zones_from_query, zones_to_query, TimeZoneId,
    CONVERTER_QUERY_KEY, MEETING_QUERY_KEY,
};
