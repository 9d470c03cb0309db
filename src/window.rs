// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Local working-hours windows.

use std::fmt;
use std::str::FromStr;

use qtty::Hours;
use serde::Serialize;

use crate::error::{Result, ZoneError};

/// A span of local clock hours considered "available".
///
/// Both bounds are whole hours in `[0, 24)`. Membership is half-open:
/// `start ≤ hour < end`. When `start > end` the window wraps past midnight
/// (an overnight shift such as `22-6` covers 22:00–05:59). A window with
/// `start == end` is empty and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkingHoursWindow {
    start: u8,
    end: u8,
}

impl WorkingHoursWindow {
    /// Office hours, 09:00 to 17:00.
    pub const DEFAULT: Self = Self { start: 9, end: 17 };

    /// Builds a window from whole local hours.
    ///
    /// # Errors
    ///
    /// [`ZoneError::InvalidWindow`] if either bound lies outside `[0, 24)` or
    /// the two bounds are equal.
    pub fn new(start: i64, end: i64) -> Result<Self> {
        let start = checked_hour(start, "start")?;
        let end = checked_hour(end, "end")?;
        if start == end {
            return Err(ZoneError::InvalidWindow(format!(
                "start and end are both {start}, window is empty"
            )));
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub const fn start(&self) -> u8 {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> u8 {
        self.end
    }

    /// `true` when the window crosses midnight.
    #[inline]
    pub const fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Number of whole hours covered.
    pub const fn len_hours(&self) -> u8 {
        if self.wraps_midnight() {
            24 - self.start + self.end
        } else {
            self.end - self.start
        }
    }

    /// Whether a local clock hour (possibly fractional) falls inside.
    pub fn contains(&self, local_hour: Hours) -> bool {
        let start = Hours::new(f64::from(self.start));
        let end = Hours::new(f64::from(self.end));
        if self.wraps_midnight() {
            local_hour >= start || local_hour < end
        } else {
            start <= local_hour && local_hour < end
        }
    }
}

impl Default for WorkingHoursWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for WorkingHoursWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start, self.end)
    }
}

/// Accepts `9-17`, `09:00-17:00` or `22:00 - 06:00`.
impl FromStr for WorkingHoursWindow {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| ZoneError::InvalidWindow(format!("expected START-END, got {s:?}")))?;
        Self::new(parse_hour(start)?, parse_hour(end)?)
    }
}

fn checked_hour(hour: i64, which: &str) -> Result<u8> {
    u8::try_from(hour)
        .ok()
        .filter(|h| *h < 24)
        .ok_or_else(|| ZoneError::InvalidWindow(format!("{which} hour {hour} is outside 0..24")))
}

fn parse_hour(text: &str) -> Result<i64> {
    let text = text.trim();
    let (hours, minutes) = match text.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (text, None),
    };
    if let Some(minutes) = minutes {
        if minutes.parse::<u32>().ok() != Some(0) {
            return Err(ZoneError::InvalidWindow(format!(
                "{text:?} is not a whole hour"
            )));
        }
    }
    match hours.parse::<i64>() {
        Ok(h) => Ok(h),
        Err(_) => match hours.parse::<f64>() {
            Ok(_) => Err(ZoneError::InvalidWindow(format!(
                "{text:?} is not a whole hour"
            ))),
            Err(_) => Err(ZoneError::InvalidWindow(format!("{text:?} is not an hour"))),
        },
    }
}
