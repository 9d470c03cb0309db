// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Jet-lag severity and recovery estimates.
//!
//! The estimate depends on the signed hour delta between two zones, taken
//! along the shorter rotation around the clock:
//!
//! | \|Δ\| (h) | Severity | Eastward days | Westward days |
//! |-----------|----------|---------------|---------------|
//! | 0–2 | [`Severity::Minimal`] | 1 | 1 |
//! | 3–5 | [`Severity::Moderate`] | ⌈0.8·Δ⌉ | ⌈0.6·Δ⌉ |
//! | 6–8 | [`Severity::Significant`] | ⌈0.9·Δ⌉ | ⌈0.7·Δ⌉ |
//! | 9–12 | [`Severity::Severe`] | Δ | ⌈0.8·Δ⌉ |
//!
//! Children recover in `max(1, ⌊0.8·d⌋)` days and seniors in `⌈1.5·d⌉`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use qtty::Hours;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, ZoneError};
use crate::zone::TimeZoneId;

/// Traveller age group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBracket {
    /// Under 18.
    Child,
    /// 18 to 65.
    #[default]
    Adult,
    /// Over 65.
    Senior,
}

impl FromStr for AgeBracket {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "child" => Ok(Self::Child),
            "adult" => Ok(Self::Adult),
            "senior" => Ok(Self::Senior),
            _ => Err(ZoneError::InvalidAgeBracket(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minimal,
    Moderate,
    Significant,
    Severe,
}

impl Severity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Moderate => "moderate",
            Self::Significant => "significant",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of travel around the clock.
///
/// Eastward travel shortens the day and takes longer to adjust to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelDirection {
    Eastward,
    Westward,
}

impl TravelDirection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eastward => "eastward",
            Self::Westward => "westward",
        }
    }
}

impl fmt::Display for TravelDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JetlagEstimate {
    pub recovery_days: u32,
    pub severity: Severity,
    pub direction: TravelDirection,
    /// Signed whole-hour delta `to − from`, in `[−12, 12]`.
    pub hour_delta: i32,
}

/// Estimates jet lag for a trip from `from` to `to` at `instant`.
pub fn estimate_jetlag(
    from: &TimeZoneId,
    to: &TimeZoneId,
    instant: DateTime<Utc>,
    age: AgeBracket,
) -> JetlagEstimate {
    let raw = to.utc_offset_at(instant) - from.utc_offset_at(instant);
    let hour_delta = shortest_rotation(round_half_up(raw));

    let direction = if hour_delta > 0 {
        TravelDirection::Eastward
    } else {
        TravelDirection::Westward
    };
    let (severity, base_days) = classify(hour_delta.unsigned_abs(), direction);
    let recovery_days = adjust_for_age(base_days, age);

    debug!(
        from = from.name(),
        to = to.name(),
        hour_delta,
        %direction,
        %severity,
        recovery_days,
        "estimated jet lag"
    );

    JetlagEstimate {
        recovery_days,
        severity,
        direction,
        hour_delta,
    }
}

/// [`estimate_jetlag`] for unvalidated zone names.
///
/// # Errors
///
/// [`ZoneError::ZoneResolution`] if either name is unknown.
pub fn estimate_jetlag_by_name(
    from: &str,
    to: &str,
    instant: DateTime<Utc>,
    age: AgeBracket,
) -> Result<JetlagEstimate> {
    let from: TimeZoneId = from.parse()?;
    let to: TimeZoneId = to.parse()?;
    Ok(estimate_jetlag(&from, &to, instant, age))
}

// Halves round towards +∞, so a +10.5 h delta counts as 11 and −10.5 h as −10.
fn round_half_up(delta: Hours) -> i32 {
    (delta.value() + 0.5).floor() as i32
}

fn shortest_rotation(delta: i32) -> i32 {
    if delta > 12 {
        delta - 24
    } else if delta < -12 {
        delta + 24
    } else {
        delta
    }
}

/// `⌈hours · tenths / 10⌉` without floating-point drift.
const fn ceil_tenths(hours: u32, tenths: u32) -> u32 {
    (hours * tenths).div_ceil(10)
}

fn classify(abs_delta: u32, direction: TravelDirection) -> (Severity, u32) {
    let east = matches!(direction, TravelDirection::Eastward);
    match abs_delta {
        0..=2 => (Severity::Minimal, 1),
        3..=5 => (
            Severity::Moderate,
            ceil_tenths(abs_delta, if east { 8 } else { 6 }),
        ),
        6..=8 => (
            Severity::Significant,
            ceil_tenths(abs_delta, if east { 9 } else { 7 }),
        ),
        _ => (
            Severity::Severe,
            ceil_tenths(abs_delta, if east { 10 } else { 8 }),
        ),
    }
}

fn adjust_for_age(days: u32, age: AgeBracket) -> u32 {
    match age {
        AgeBracket::Child => (days * 8 / 10).max(1),
        AgeBracket::Adult => days,
        AgeBracket::Senior => ceil_tenths(days, 15),
    }
}
