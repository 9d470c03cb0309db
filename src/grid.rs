// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hour-grid scoring and ranking of meeting slots.
//!
//! This module provides:
//! - [`score_hours`]: availability count for each of the 24 UTC hours
//! - [`rank`]: stable best-first ordering of a scored grid
//! - [`find_overlap`]: both steps plus the derived "perfect match" flag

use chrono::{DateTime, Utc};
use qtty::Hours;
use serde::Serialize;
use tracing::debug;

use crate::offset::wrap_day;
use crate::window::WorkingHoursWindow;
use crate::zone::TimeZoneId;

/// Number of UTC hours in the scored grid.
pub const HOURS_PER_DAY: u8 = 24;

/// Availability of one UTC hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredHour {
    /// UTC hour of day, `0..24`.
    pub hour: u8,
    /// How many zones are inside their working window at this hour.
    pub score: usize,
}

impl ScoredHour {
    /// The hour rendered as `HH:00`.
    pub fn label(&self) -> String {
        format_hour(self.hour)
    }
}

/// Formats an hour of day as `HH:00`.
pub fn format_hour(hour: u8) -> String {
    format!("{hour:02}:00")
}

/// Scores every UTC hour of the day against `zones`.
///
/// For UTC hour `h` and zone `z` the local hour is
/// `(h + offset(z)) mod 24`; `z` counts towards `h` when that local hour
/// lies in `window`. The result always has 24 entries ordered by hour, and an
/// empty zone list scores zero everywhere.
pub fn score_hours(
    zones: &[TimeZoneId],
    window: WorkingHoursWindow,
    instant: DateTime<Utc>,
) -> Vec<ScoredHour> {
    let offsets: Vec<Hours> = zones.iter().map(|z| z.offset_at(instant)).collect();

    (0..HOURS_PER_DAY)
        .map(|hour| {
            let score = offsets
                .iter()
                .filter(|&&offset| {
                    window.contains(wrap_day(Hours::new(f64::from(hour)) + offset))
                })
                .count();
            ScoredHour { hour, score }
        })
        .collect()
}

/// Orders hours best-first.
///
/// Sorting is stable on score alone, so hours with equal score keep the order
/// they had in `scored` (ascending hour for the output of [`score_hours`]).
pub fn rank(scored: &[ScoredHour]) -> Vec<ScoredHour> {
    let mut ranked = scored.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// First `n` entries of a ranked grid.
pub fn top_n(ranked: &[ScoredHour], n: usize) -> &[ScoredHour] {
    &ranked[..n.min(ranked.len())]
}

/// `true` if at least one hour has every zone available.
///
/// An empty zone list never matches.
pub fn has_perfect_match(scored: &[ScoredHour], zone_count: usize) -> bool {
    zone_count > 0 && scored.iter().any(|s| s.score == zone_count)
}

/// Ranked overlap table for a set of zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapSummary {
    pub window: WorkingHoursWindow,
    pub zone_count: usize,
    pub perfect_match: bool,
    /// All 24 hours, best first.
    pub ranked: Vec<ScoredHour>,
}

impl OverlapSummary {
    /// The hours sharing the top score, in ranked order.
    ///
    /// Empty when nobody is available at any hour.
    pub fn best_hours(&self) -> Vec<u8> {
        let Some(best) = self.ranked.first().map(|s| s.score) else {
            return Vec::new();
        };
        if best == 0 {
            return Vec::new();
        }
        self.ranked
            .iter()
            .take_while(|s| s.score == best)
            .map(|s| s.hour)
            .collect()
    }

    /// Convenience wrapper around [`top_n`].
    pub fn top(&self, n: usize) -> &[ScoredHour] {
        top_n(&self.ranked, n)
    }
}

/// Scores and ranks the day for `zones`.
pub fn find_overlap(
    zones: &[TimeZoneId],
    window: WorkingHoursWindow,
    instant: DateTime<Utc>,
) -> OverlapSummary {
    let scored = score_hours(zones, window, instant);
    let perfect_match = has_perfect_match(&scored, zones.len());
    let ranked = rank(&scored);
    debug!(
        zones = zones.len(),
        %window,
        perfect_match,
        best_score = ranked.first().map(|s| s.score).unwrap_or(0),
        "computed overlap grid"
    );
    OverlapSummary {
        window,
        zone_count: zones.len(),
        perfect_match,
        ranked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::parse_zone_list;
    use chrono::TimeZone;

    fn january() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    fn hours_with_score(scored: &[ScoredHour], score: usize) -> Vec<u8> {
        scored
            .iter()
            .filter(|s| s.score == score)
            .map(|s| s.hour)
            .collect()
    }

    #[test]
    fn grid_has_every_hour_once() {
        let zones = parse_zone_list("Asia/Tokyo,Europe/London,America/Chicago").unwrap();
        let scored = score_hours(&zones, WorkingHoursWindow::DEFAULT, january());
        assert_eq!(scored.len(), 24);
        for (i, entry) in scored.iter().enumerate() {
            assert_eq!(usize::from(entry.hour), i);
            assert!(entry.score <= zones.len());
        }
    }

    #[test]
    fn empty_zone_list_scores_zero() {
        let scored = score_hours(&[], WorkingHoursWindow::DEFAULT, january());
        assert_eq!(scored.len(), 24);
        assert!(scored.iter().all(|s| s.score == 0));

        let ranked = rank(&scored);
        let hours: Vec<u8> = ranked.iter().map(|s| s.hour).collect();
        assert_eq!(hours, (0..24).collect::<Vec<u8>>());
        assert!(!has_perfect_match(&scored, 0));
    }

    #[test]
    fn single_utc_zone_matches_window_directly() {
        let zones = parse_zone_list("UTC").unwrap();
        let scored = score_hours(&zones, WorkingHoursWindow::DEFAULT, january());
        assert_eq!(hours_with_score(&scored, 1), (9..17).collect::<Vec<u8>>());
    }

    #[test]
    fn half_hour_zone_shifts_availability() {
        // Kolkata is +5.5: UTC 3 is 08:30 local (outside), UTC 4 is 09:30.
        let zones = parse_zone_list("Asia/Kolkata").unwrap();
        let scored = score_hours(&zones, WorkingHoursWindow::DEFAULT, january());
        assert_eq!(hours_with_score(&scored, 1), (4..12).collect::<Vec<u8>>());
    }

    #[test]
    fn west_coast_and_east_coast_overlap() {
        let zones = parse_zone_list("America/Los_Angeles,America/New_York").unwrap();
        let scored = score_hours(&zones, WorkingHoursWindow::DEFAULT, january());
        assert_eq!(hours_with_score(&scored, 2), vec![17, 18, 19, 20, 21]);
        assert!(has_perfect_match(&scored, zones.len()));

        let ranked = rank(&scored);
        let order: Vec<u8> = ranked.iter().map(|s| s.hour).take(11).collect();
        assert_eq!(order, vec![17, 18, 19, 20, 21, 0, 14, 15, 16, 22, 23]);
    }

    #[test]
    fn overnight_window_is_scored_across_midnight() {
        let zones = parse_zone_list("UTC").unwrap();
        let window = WorkingHoursWindow::new(22, 2).unwrap();
        let scored = score_hours(&zones, window, january());
        assert_eq!(hours_with_score(&scored, 1), vec![0, 1, 22, 23]);
    }

    #[test]
    fn ranking_is_deterministic() {
        let zones = parse_zone_list("Europe/Paris,Asia/Singapore,America/Denver").unwrap();
        let scored = score_hours(&zones, WorkingHoursWindow::DEFAULT, january());
        assert_eq!(rank(&scored), rank(&scored));
    }

    #[test]
    fn rank_keeps_input_order_for_ties() {
        let scored = vec![
            ScoredHour { hour: 5, score: 1 },
            ScoredHour { hour: 2, score: 3 },
            ScoredHour { hour: 9, score: 1 },
            ScoredHour { hour: 1, score: 3 },
        ];
        let ranked = rank(&scored);
        let hours: Vec<u8> = ranked.iter().map(|s| s.hour).collect();
        assert_eq!(hours, vec![2, 1, 5, 9]);
    }

    #[test]
    fn top_n_is_clamped() {
        let scored = score_hours(&[], WorkingHoursWindow::DEFAULT, january());
        assert_eq!(top_n(&scored, 8).len(), 8);
        assert_eq!(top_n(&scored, 100).len(), 24);
    }

    #[test]
    fn summary_reports_best_hours() {
        let zones = parse_zone_list("America/Los_Angeles,America/New_York").unwrap();
        let summary = find_overlap(&zones, WorkingHoursWindow::DEFAULT, january());
        assert_eq!(summary.zone_count, 2);
        assert!(summary.perfect_match);
        assert_eq!(summary.best_hours(), vec![17, 18, 19, 20, 21]);
        assert_eq!(summary.top(12).len(), 12);

        let empty = find_overlap(&[], WorkingHoursWindow::DEFAULT, january());
        assert!(empty.best_hours().is_empty());
        assert!(!empty.perfect_match);
    }

    #[test]
    fn labels_are_zero_padded() {
        assert_eq!(format_hour(5), "05:00");
        assert_eq!(ScoredHour { hour: 17, score: 0 }.label(), "17:00");
    }
}
