// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! UTC offset resolution.
//!
//! The offset of a zone at an instant is the difference between the zone's
//! wall-clock reading and the UTC wall-clock reading of that same instant.
//! The result is expressed in [`Hours`] (fractional for zones such as
//! `Asia/Kolkata`, +5.5 h) and folded into the half-open range `(−12, +12]`,
//! so zones that sit past the date line (`Pacific/Auckland` in summer, +13 h)
//! report the equivalent short rotation (−11 h).

use chrono::{DateTime, Utc};
use qtty::Hours;
use tracing::debug;

use crate::error::Result;
use crate::zone::TimeZoneId;

const DAY: Hours = Hours::new(24.0);
const HALF_DAY: Hours = Hours::new(12.0);

impl TimeZoneId {
    /// Unfolded UTC offset of this zone at `instant`, in `[−12, +14]`
    /// (`Pacific/Kiritimati` is +14 h, `Etc/GMT+12` is −12 h).
    pub fn utc_offset_at(&self, instant: DateTime<Utc>) -> Hours {
        let local = instant.with_timezone(&self.tz()).naive_local();
        let minutes = (local - instant.naive_utc()).num_minutes();
        Hours::new(minutes as f64 / 60.0)
    }

    /// UTC offset of this zone at `instant`, folded into `(−12, +12]`.
    pub fn offset_at(&self, instant: DateTime<Utc>) -> Hours {
        let hours = wrap_half_day(self.utc_offset_at(instant));
        debug!(zone = self.name(), %instant, offset_hours = hours.value(), "resolved offset");
        hours
    }
}

/// Resolves the UTC offset of the zone named `zone` at `instant`.
///
/// # Errors
///
/// [`ZoneError::ZoneResolution`](crate::ZoneError::ZoneResolution) if the
/// name is not in the timezone database.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use zonewise::resolve_offset_hours;
///
/// let instant = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// let offset = resolve_offset_hours("Asia/Kolkata", instant).unwrap();
/// assert_eq!(offset.value(), 5.5);
/// ```
pub fn resolve_offset_hours(zone: &str, instant: DateTime<Utc>) -> Result<Hours> {
    let zone: TimeZoneId = zone.parse()?;
    Ok(zone.offset_at(instant))
}

/// Reduces an hour count to a clock reading in `[0, 24)`.
pub(crate) fn wrap_day(hours: Hours) -> Hours {
    Hours::new(hours.value().rem_euclid(DAY.value()))
}

/// Folds an hour difference into `(−12, +12]`.
pub(crate) fn wrap_half_day(hours: Hours) -> Hours {
    let wrapped = wrap_day(hours);
    if wrapped > HALF_DAY {
        wrapped - DAY
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZoneError;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn offset(zone: &str, instant: DateTime<Utc>) -> f64 {
        resolve_offset_hours(zone, instant).unwrap().value()
    }

    #[test]
    fn whole_hour_offsets() {
        let winter = at(2024, 1, 15, 12);
        assert_eq!(offset("UTC", winter), 0.0);
        assert_eq!(offset("America/New_York", winter), -5.0);
        assert_eq!(offset("America/Los_Angeles", winter), -8.0);
        assert_eq!(offset("Asia/Tokyo", winter), 9.0);
    }

    #[test]
    fn fractional_offsets() {
        let instant = at(2024, 1, 15, 12);
        assert_eq!(offset("Asia/Kolkata", instant), 5.5);
        assert_eq!(offset("Asia/Kathmandu", instant), 5.75);
    }

    #[test]
    fn follows_daylight_saving() {
        assert_eq!(offset("America/New_York", at(2024, 7, 15, 12)), -4.0);
        assert_eq!(offset("Europe/Berlin", at(2024, 7, 15, 12)), 2.0);
        assert_eq!(offset("Europe/Berlin", at(2024, 1, 15, 12)), 1.0);
    }

    #[test]
    fn offsets_beyond_twelve_wrap_to_short_rotation() {
        // NZDT is UTC+13 in January.
        assert_eq!(offset("Pacific/Auckland", at(2024, 1, 15, 12)), -11.0);
        // Line Islands are UTC+14 all year.
        assert_eq!(offset("Pacific/Kiritimati", at(2024, 1, 15, 12)), -10.0);
    }

    #[test]
    fn result_is_always_in_half_open_range() {
        let instants = [at(2024, 1, 1, 0), at(2024, 3, 31, 1), at(2024, 10, 27, 23)];
        for name in ["Pacific/Apia", "Pacific/Chatham", "Asia/Kolkata", "America/St_Johns"] {
            for instant in instants {
                let h = offset(name, instant);
                assert!(h > -12.0 && h <= 12.0, "{name} at {instant}: {h}");
            }
        }
    }

    #[test]
    fn unfolded_offset_keeps_date_line_side() {
        let instant = at(2024, 1, 15, 12);
        let kiritimati: TimeZoneId = "Pacific/Kiritimati".parse().unwrap();
        let gmt_plus_12: TimeZoneId = "Etc/GMT+12".parse().unwrap();
        assert_eq!(kiritimati.utc_offset_at(instant).value(), 14.0);
        assert_eq!(gmt_plus_12.utc_offset_at(instant).value(), -12.0);
        // Folding sends −12 to +12.
        assert_eq!(gmt_plus_12.offset_at(instant).value(), 12.0);
    }

    #[test]
    fn unknown_zone_propagates() {
        let err = resolve_offset_hours("Atlantis/Capital", at(2024, 1, 1, 0)).unwrap_err();
        assert!(matches!(err, ZoneError::ZoneResolution { .. }));
    }

    #[test]
    fn wrap_half_day_boundaries() {
        let fold = |h: f64| wrap_half_day(Hours::new(h)).value();
        assert_eq!(fold(12.0), 12.0);
        assert_eq!(fold(-12.0), 12.0);
        assert_eq!(fold(-23.0), 1.0);
        assert_eq!(fold(13.0), -11.0);
        assert_eq!(fold(0.0), 0.0);
    }

    #[test]
    fn wrap_day_gives_clock_reading() {
        assert_eq!(wrap_day(Hours::new(-0.5)).value(), 23.5);
        assert_eq!(wrap_day(Hours::new(29.75)).value(), 5.75);
        assert_eq!(wrap_day(Hours::new(24.0)).value(), 0.0);
    }
}
