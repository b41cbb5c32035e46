// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Halachic times ("zmanim") for one civil day at one location.
//!
//! All times come back in the location's timezone; `None` wherever the sun
//! does not reach the defining altitude (polar latitudes).

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;

use crate::location::Location;
use crate::sun;

/// Nightfall when three small stars are visible: sun 8.5° below horizon.
pub const TZEIT_3_SMALL_STARS: f64 = 8.5;

/// Nightfall when three medium stars are visible: sun 7.083° below horizon.
pub const TZEIT_3_MEDIUM_STARS: f64 = 7.083;

/// Dawn and dusk of the Magen Avraham day: sun 16.1° below horizon.
pub const ALOT_HASHACHAR: f64 = 16.1;

/// Zmanim calculator for one (location, date) pair.
#[derive(Debug, Clone)]
pub struct Zmanim {
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    tz: Tz,
}

impl Zmanim {
    #[must_use]
    pub fn new(location: &Location, date: NaiveDate) -> Zmanim {
        Zmanim {
            latitude: location.latitude,
            longitude: location.longitude,
            date,
            tz: location.tz,
        }
    }

    fn local(&self, t: Option<DateTime<Utc>>) -> Option<DateTime<Tz>> {
        t.map(|t| t.with_timezone(&self.tz))
    }

    fn passes(&self) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        sun::sunrise_sunset(
            self.latitude,
            self.longitude,
            self.date.year(),
            self.date.month(),
            self.date.day(),
        )
    }

    fn at_angle(&self, angle: f64, rising: bool) -> Option<DateTime<Tz>> {
        let (morning, evening) = sun::passes_at_altitude(
            self.latitude,
            self.longitude,
            -angle,
            self.date.year(),
            self.date.month(),
            self.date.day(),
        );
        self.local(if rising { morning } else { evening })
    }

    /// Sunrise ("neitz haChama"): upper limb over the eastern horizon.
    #[must_use]
    pub fn sunrise(&self) -> Option<DateTime<Tz>> {
        self.local(self.passes().0)
    }

    /// Sunset ("shkiah"): upper limb below the western horizon.
    #[must_use]
    pub fn sunset(&self) -> Option<DateTime<Tz>> {
        self.local(self.passes().1)
    }

    /// Civil dawn: sun 6° below the horizon in the morning.
    #[must_use]
    pub fn dawn(&self) -> Option<DateTime<Tz>> {
        self.at_angle(6.0, true)
    }

    /// Civil dusk: sun 6° below the horizon in the evening.
    #[must_use]
    pub fn dusk(&self) -> Option<DateTime<Tz>> {
        self.at_angle(6.0, false)
    }

    /// One halachic hour of the Gra day, in milliseconds.
    fn hour_millis(&self) -> Option<i64> {
        let (rise, set) = self.passes();
        Some((set?.timestamp_millis() - rise?.timestamp_millis()) / 12)
    }

    /// Sunrise plus `hours` halachic hours.
    fn hour_offset(&self, hours: f64) -> Option<DateTime<Tz>> {
        let rise = self.passes().0?;
        let millis = rise.timestamp_millis() + (self.hour_millis()? as f64 * hours) as i64;
        self.local(DateTime::<Utc>::from_timestamp_millis(millis))
    }

    /// Sunset of the previous civil day.
    fn eve_sunset(&self) -> Option<DateTime<Utc>> {
        let prev = self.date.pred_opt()?;
        sun::sunrise_sunset(
            self.latitude,
            self.longitude,
            prev.year(),
            prev.month(),
            prev.day(),
        )
        .1
    }

    /// One halachic night hour (previous sunset to sunrise), in milliseconds.
    fn night_hour_millis(&self) -> Option<i64> {
        let set = self.eve_sunset()?;
        let rise = self.passes().0?;
        Some((rise.timestamp_millis() - set.timestamp_millis()) / 12)
    }

    /// Midday: sunrise plus 6 halachic hours.
    #[must_use]
    pub fn chatzot(&self) -> Option<DateTime<Tz>> {
        self.hour_offset(6.0)
    }

    /// Midnight: six night-hours before sunrise.
    #[must_use]
    pub fn chatzot_night(&self) -> Option<DateTime<Tz>> {
        let rise = self.passes().0?;
        let millis = rise.timestamp_millis() - self.night_hour_millis()? * 6;
        self.local(DateTime::<Utc>::from_timestamp_millis(millis))
    }

    /// Dawn: sun 16.1° below the horizon in the morning.
    #[must_use]
    pub fn alot_hashachar(&self) -> Option<DateTime<Tz>> {
        self.at_angle(ALOT_HASHACHAR, true)
    }

    /// Earliest talis and tefillin: sun 11.5° below the horizon.
    #[must_use]
    pub fn misheyakir(&self) -> Option<DateTime<Tz>> {
        self.at_angle(11.5, true)
    }

    /// Earliest talis and tefillin, stricter opinion: sun 10.2° below.
    #[must_use]
    pub fn misheyakir_machmir(&self) -> Option<DateTime<Tz>> {
        self.at_angle(10.2, true)
    }

    /// Latest Shema (Gra): sunrise plus 3 halachic hours.
    #[must_use]
    pub fn sof_zman_shma(&self) -> Option<DateTime<Tz>> {
        self.hour_offset(3.0)
    }

    /// Latest Shacharit (Gra): sunrise plus 4 halachic hours.
    #[must_use]
    pub fn sof_zman_tfilla(&self) -> Option<DateTime<Tz>> {
        self.hour_offset(4.0)
    }

    fn sof_zman_mga(&self, hours: i64) -> Option<DateTime<Tz>> {
        let alot = self.sunrise_offset(-72, false)?;
        let tzeit = self.sunset_offset(72, false)?;
        let alot_ms = alot.timestamp_millis();
        let hour = (tzeit.timestamp_millis() - alot_ms) / 12;
        self.local(DateTime::<Utc>::from_timestamp_millis(alot_ms + hours * hour))
    }

    /// Latest Shema per Magen Avraham: 3 hours of the sunrise−72/sunset+72 day.
    #[must_use]
    pub fn sof_zman_shma_mga(&self) -> Option<DateTime<Tz>> {
        self.sof_zman_mga(3)
    }

    /// Latest Shacharit per Magen Avraham.
    #[must_use]
    pub fn sof_zman_tfilla_mga(&self) -> Option<DateTime<Tz>> {
        self.sof_zman_mga(4)
    }

    /// Earliest Mincha: sunrise plus 6.5 halachic hours.
    #[must_use]
    pub fn mincha_gedola(&self) -> Option<DateTime<Tz>> {
        self.hour_offset(6.5)
    }

    /// Preferable earliest Mincha: sunrise plus 9.5 halachic hours.
    #[must_use]
    pub fn mincha_ketana(&self) -> Option<DateTime<Tz>> {
        self.hour_offset(9.5)
    }

    /// Plag haMincha: sunrise plus 10.75 halachic hours.
    #[must_use]
    pub fn plag_hamincha(&self) -> Option<DateTime<Tz>> {
        self.hour_offset(10.75)
    }

    /// Nightfall at the given depression angle; 0 selects the 8.5° default.
    #[must_use]
    pub fn tzeit(&self, angle: f64) -> Option<DateTime<Tz>> {
        let angle = if angle == 0.0 { TZEIT_3_SMALL_STARS } else { angle };
        self.at_angle(angle, false)
    }

    fn offset(t: Option<DateTime<Tz>>, offset_min: i64, round: bool) -> Option<DateTime<Tz>> {
        let mut t = t? + Duration::minutes(offset_min);
        if round {
            // positive offsets round up to the next minute from 30 seconds
            if offset_min > 0 && t.second() >= 30 {
                t += Duration::minutes(1);
            }
            t = t.with_second(0)?.with_nanosecond(0)?;
        }
        Some(t)
    }

    /// Sunrise plus `offset_min` minutes; optionally rounded to the minute.
    #[must_use]
    pub fn sunrise_offset(&self, offset_min: i64, round: bool) -> Option<DateTime<Tz>> {
        Self::offset(self.sunrise(), offset_min, round)
    }

    /// Sunset plus `offset_min` minutes; optionally rounded to the minute.
    /// Negative offsets give candle-lighting, positive ones Havdalah.
    #[must_use]
    pub fn sunset_offset(&self, offset_min: i64, round: bool) -> Option<DateTime<Tz>> {
        Self::offset(self.sunset(), offset_min, round)
    }
}

/// Formats a local time as "16:15" or "4:15" depending on `hour24`.
#[must_use]
pub fn format_time(t: &DateTime<Tz>, hour24: bool) -> String {
    if hour24 {
        format!("{:02}:{:02}", t.hour(), t.minute())
    } else {
        let (_, h12) = t.hour12();
        format!("{}:{:02}", h12, t.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;

    fn nyc() -> Location {
        Location::new("New York", "US", 40.7128, -74.0060, "America/New_York").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hhmm(t: DateTime<Tz>) -> String {
        format_time(&t, true)
    }

    #[test]
    fn solstice_zmanim_in_new_york() {
        let z = Zmanim::new(&nyc(), date(2022, 6, 21));
        assert_eq!(hhmm(z.sunrise().unwrap()), "05:26");
        assert_eq!(hhmm(z.sunset().unwrap()), "20:31");
        assert_eq!(hhmm(z.chatzot().unwrap()), "12:58");
    }

    #[test]
    fn gra_hours_divide_the_day() {
        let z = Zmanim::new(&nyc(), date(2022, 6, 21));
        let shma = z.sof_zman_shma().unwrap();
        let tfilla = z.sof_zman_tfilla().unwrap();
        assert!(z.sunrise().unwrap() < shma);
        assert!(shma < tfilla);
        assert!(tfilla < z.chatzot().unwrap());
        assert!(z.mincha_gedola().unwrap() < z.mincha_ketana().unwrap());
        assert!(z.mincha_ketana().unwrap() < z.plag_hamincha().unwrap());
        assert!(z.plag_hamincha().unwrap() < z.sunset().unwrap());
    }

    #[test]
    fn mga_shma_precedes_gra_shma() {
        let z = Zmanim::new(&nyc(), date(2022, 6, 21));
        assert!(z.sof_zman_shma_mga().unwrap() < z.sof_zman_shma().unwrap());
    }

    #[test]
    fn candle_lighting_friday_december() {
        let z = Zmanim::new(&nyc(), date(2022, 12, 23));
        let candles = z.sunset_offset(-18, true).unwrap();
        assert_eq!(hhmm(candles), "16:15");
    }

    #[test]
    fn havdalah_saturday_december() {
        let z = Zmanim::new(&nyc(), date(2022, 12, 24));
        let havdalah = z.sunset_offset(72, true).unwrap();
        assert_eq!(hhmm(havdalah), "17:46");
    }

    #[test]
    fn rounds_seconds_up_for_positive_offsets() {
        let z = Zmanim::new(&nyc(), date(2022, 12, 24));
        let raw = z.sunset_offset(72, false).unwrap();
        let rounded = z.sunset_offset(72, true).unwrap();
        assert_eq!(rounded.second(), 0);
        if raw.second() >= 30 {
            assert_eq!(rounded.minute(), (raw + Duration::minutes(1)).minute());
        } else {
            assert_eq!(rounded.minute(), raw.minute());
        }
    }

    #[test]
    fn tzeit_angles_order() {
        let z = Zmanim::new(&nyc(), date(2022, 6, 21));
        let small = z.tzeit(0.0).unwrap();
        let medium = z.tzeit(TZEIT_3_MEDIUM_STARS).unwrap();
        assert!(medium < small);
        assert!(z.sunset().unwrap() < medium);
    }

    #[test]
    fn polar_location_yields_none() {
        let svalbard =
            Location::new("Longyearbyen", "NO", 78.22, 15.64, "Arctic/Longyearbyen").unwrap();
        let z = Zmanim::new(&svalbard, date(2022, 6, 21));
        assert!(z.sunrise().is_none());
        assert!(z.chatzot().is_none());
        assert!(z.sunset_offset(-18, true).is_none());
    }

    #[test]
    fn chatzot_night_before_sunrise() {
        let z = Zmanim::new(&nyc(), date(2022, 6, 21));
        let midnight = z.chatzot_night().unwrap();
        assert!(midnight < z.sunrise().unwrap());
        assert_eq!(midnight.date_naive(), date(2022, 6, 21));
    }
}
