// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Solar transit arithmetic: the standard almanac sunrise equation.
//!
//! Mean solar time at the observer's meridian feeds the solar mean anomaly,
//! equation of center and ecliptic longitude; declination and the hour angle
//! at the requested altitude give the morning and evening passes. Polar
//! conditions (no crossing of the altitude) yield `None`.

use chrono::{DateTime, Utc};

/// Altitude of the solar upper limb at rise/set, degrees.
pub const RISE_SET_ALTITUDE: f64 = -0.8333;

/// Unix seconds of Julian date.
const JD_UNIX_EPOCH: f64 = 2_440_587.5;
/// J2000.0 epoch.
const J2000: f64 = 2_451_545.0;
const OBLIQUITY_DEG: f64 = 23.4397;

/// Julian day number (noon-based) of a Gregorian date.
fn julian_day_number(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    f64::from((1461 * (y + 4716)) / 4) + f64::from((306001 * (m as i32 + 1)) / 10000)
        + f64::from(day as i32)
        + f64::from(b)
        - 1524.0
}

/// The two moments of the day when the sun's center stands at `altitude`
/// degrees: `(morning, evening)`, UTC. Either is `None` when the sun never
/// reaches that altitude.
#[must_use]
pub fn passes_at_altitude(
    latitude: f64,
    longitude: f64,
    altitude: f64,
    year: i32,
    month: u32,
    day: u32,
) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    let n = julian_day_number(year, month, day) - J2000 + 0.0008;
    let mean_solar_time = n - longitude / 360.0;

    let mean_anomaly = (357.5291 + 0.985_600_28 * mean_solar_time).rem_euclid(360.0);
    let m = mean_anomaly.to_radians();
    let center = 1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin();
    let ecliptic_longitude = (mean_anomaly + center + 180.0 + 102.9372).rem_euclid(360.0);
    let l = ecliptic_longitude.to_radians();

    let transit = J2000 + mean_solar_time + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin();
    let declination = (l.sin() * OBLIQUITY_DEG.to_radians().sin()).asin();

    let lat = latitude.to_radians();
    let cos_hour_angle = (altitude.to_radians().sin() - lat.sin() * declination.sin())
        / (lat.cos() * declination.cos());
    if !(-1.0..=1.0).contains(&cos_hour_angle) {
        return (None, None);
    }
    let hour_angle = cos_hour_angle.acos().to_degrees();

    (
        julian_to_utc(transit - hour_angle / 360.0),
        julian_to_utc(transit + hour_angle / 360.0),
    )
}

/// Sunrise and sunset (upper limb at −0.833°), UTC.
#[must_use]
pub fn sunrise_sunset(
    latitude: f64,
    longitude: f64,
    year: i32,
    month: u32,
    day: u32,
) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    passes_at_altitude(latitude, longitude, RISE_SET_ALTITUDE, year, month, day)
}

fn julian_to_utc(jd: f64) -> Option<DateTime<Utc>> {
    let millis = (jd - JD_UNIX_EPOCH) * 86_400_000.0;
    DateTime::<Utc>::from_timestamp_millis(millis.round() as i64)
}
