// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Weekday;

use crate::hdate::{self, CHALAKIM_PER_HOUR, HMonth};

/// A mean lunar conjunction, expressed the way it is announced: weekday,
/// civil hour, minutes and leftover chalakim (18 chalakim per minute).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Molad {
    pub dow: Weekday,
    pub hours: u8,
    pub minutes: u8,
    pub chalakim: u8,
}

impl Molad {
    /// Molad of the given month. Months count forward from the molad tohu
    /// (day 1, 5h 204 chalakim) in lunations of 29d 12h 793 chalakim; the
    /// traditional 18:00-based hours are shifted six hours back to civil
    /// clock time.
    #[must_use]
    pub fn new(year: i32, month: HMonth) -> Molad {
        let prev = i64::from(year) - 1;
        let cycles = prev.div_euclid(19);
        let rem = prev.rem_euclid(19);
        let mut months = 235 * cycles + 12 * rem + (rem * 7 + 1) / 19;
        months += hdate::HMonth::in_year(year)
            .position(|m| m == month)
            .expect("month exists in year") as i64;

        let chalakim = 204 + 793 * months;
        let hours = 5 + 12 * months + chalakim / CHALAKIM_PER_HOUR - 6;
        let day = 1 + 29 * months + hours.div_euclid(24);
        let parts = chalakim % CHALAKIM_PER_HOUR;

        Molad {
            dow: weekday_of(day.rem_euclid(7)),
            hours: hours.rem_euclid(24) as u8,
            minutes: (parts / 18) as u8,
            chalakim: (parts % 18) as u8,
        }
    }
}

fn weekday_of(n: i64) -> Weekday {
    match n {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn molad_tishrei_5782_matches_announcement() {
        // Monday night, 27 minutes and 11 chalakim after 23:00
        let m = Molad::new(5782, HMonth::Tishrei);
        assert_eq!(m.dow, Weekday::Mon);
        assert_eq!(m.hours, 23);
        assert_eq!(m.minutes, 27);
        assert_eq!(m.chalakim, 11);
    }

    #[test]
    fn consecutive_molads_advance_one_lunation() {
        // 29d 12h 44m 1ch later, modulo the week
        let a = Molad::new(5783, HMonth::Tishrei);
        let b = Molad::new(5783, HMonth::Cheshvan);
        let to_ch = |m: &Molad| {
            ((m.dow.num_days_from_sunday() as i64 * 24 + i64::from(m.hours))
                * CHALAKIM_PER_HOUR)
                + i64::from(m.minutes) * 18
                + i64::from(m.chalakim)
        };
        let lunation = 29 * 24 * CHALAKIM_PER_HOUR + 12 * CHALAKIM_PER_HOUR + 793;
        let week = 7 * 24 * CHALAKIM_PER_HOUR;
        assert_eq!(
            (to_ch(&a) + lunation).rem_euclid(week),
            to_ch(&b).rem_euclid(week)
        );
    }
}
