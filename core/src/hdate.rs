// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Hebrew (lunisolar) calendar core.
//!
//! Year lengths come from the molad of Tishrei with the four classical
//! postponements (dechiyot); month lengths follow from the year length.
//! Conversions pivot on the absolute day count shared with [`crate::greg`].

use std::fmt;

use chrono::{NaiveDate, Weekday};

use crate::error::CalError;
use crate::greg;
use crate::locale::{self, Locale};

/// Absolute day of 1 Tishrei 1 minus elapsed molad days (far before the
/// Gregorian epoch).
pub const EPOCH: i64 = -1_373_428;

/// Chalakim (parts) per hour.
pub const CHALAKIM_PER_HOUR: i64 = 1080;

/// Hebrew months. Nisan is month 1 per the biblical numbering; the civil
/// year begins at Tishrei. `Adar2` exists only in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HMonth {
    Nisan = 1,
    Iyyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
    Tishrei,
    Cheshvan,
    Kislev,
    Tevet,
    Shvat,
    Adar1,
    Adar2,
}

impl HMonth {
    const ALL: [HMonth; 13] = [
        HMonth::Nisan,
        HMonth::Iyyar,
        HMonth::Sivan,
        HMonth::Tammuz,
        HMonth::Av,
        HMonth::Elul,
        HMonth::Tishrei,
        HMonth::Cheshvan,
        HMonth::Kislev,
        HMonth::Tevet,
        HMonth::Shvat,
        HMonth::Adar1,
        HMonth::Adar2,
    ];

    #[must_use]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// The months of `year` in civil order, Tishrei first.
    pub fn in_year(year: i32) -> impl Iterator<Item = HMonth> {
        let leap = is_leap_year(year);
        Self::ALL
            .into_iter()
            .cycle()
            .skip(6)
            .filter(move |m| leap || *m != HMonth::Adar2)
            .take(usize::from(months_in_year(year)))
    }

    /// English base name; month 12 reads plain "Adar" outside leap years.
    #[must_use]
    pub fn name(self, year: i32) -> &'static str {
        match self {
            HMonth::Nisan => "Nisan",
            HMonth::Iyyar => "Iyyar",
            HMonth::Sivan => "Sivan",
            HMonth::Tammuz => "Tamuz",
            HMonth::Av => "Av",
            HMonth::Elul => "Elul",
            HMonth::Tishrei => "Tishrei",
            HMonth::Cheshvan => "Cheshvan",
            HMonth::Kislev => "Kislev",
            HMonth::Tevet => "Tevet",
            HMonth::Shvat => "Sh'vat",
            HMonth::Adar1 => {
                if is_leap_year(year) {
                    "Adar I"
                } else {
                    "Adar"
                }
            }
            HMonth::Adar2 => "Adar II",
        }
    }

    /// Parses a month name as typed on a command line or in an event file.
    /// Case-insensitive; accepts the common ASCII spellings.
    pub fn from_name(name: &str) -> Result<HMonth, CalError> {
        let lower = name.to_ascii_lowercase();
        let m = match lower.as_str() {
            "nisan" | "nissan" => HMonth::Nisan,
            "iyyar" | "iyar" => HMonth::Iyyar,
            "sivan" => HMonth::Sivan,
            "tamuz" | "tammuz" => HMonth::Tammuz,
            "av" => HMonth::Av,
            "elul" => HMonth::Elul,
            "tishrei" | "tishri" => HMonth::Tishrei,
            "cheshvan" | "heshvan" | "marcheshvan" => HMonth::Cheshvan,
            "kislev" => HMonth::Kislev,
            "tevet" | "teves" => HMonth::Tevet,
            "sh'vat" | "shvat" | "shevat" => HMonth::Shvat,
            "adar" | "adar1" | "adar i" | "adar-i" => HMonth::Adar1,
            "adar2" | "adar ii" | "adar-ii" => HMonth::Adar2,
            _ => return Err(CalError::UnknownMonth(name.to_string())),
        };
        Ok(m)
    }
}

/// A year is leap iff (7y + 1) mod 19 < 7.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// 13 months in a leap year, 12 otherwise.
#[must_use]
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Days from the Hebrew epoch to 1 Tishrei of `year`, by molad arithmetic
/// plus the four dechiyot.
#[must_use]
pub fn elapsed_days(year: i32) -> i64 {
    let prev = i64::from(year) - 1;
    let cycles = prev.div_euclid(19);
    let rem = prev.rem_euclid(19);
    let months = 235 * cycles + 12 * rem + (rem * 7 + 1) / 19;

    let chalakim = 204 + 793 * (months % CHALAKIM_PER_HOUR);
    let hours = 5 + 12 * months + 793 * (months / CHALAKIM_PER_HOUR) + chalakim / CHALAKIM_PER_HOUR;
    let parts = chalakim % CHALAKIM_PER_HOUR + CHALAKIM_PER_HOUR * (hours % 24);
    let day = 1 + 29 * months + hours / 24;

    let mut alt = day;
    // (a) molad at or after 18h; (c) Tuesday molad in a common year at or
    // after 9h 204p; (d) Monday molad after a leap year at or after 15h 589p
    if parts >= 19440
        || (day % 7 == 2 && parts >= 9924 && !is_leap_year(year))
        || (day % 7 == 1 && parts >= 16789 && is_leap_year(year - 1))
    {
        alt += 1;
    }
    // (b) Rosh Hashana never on Sunday, Wednesday or Friday
    if matches!(alt % 7, 0 | 3 | 5) {
        alt += 1;
    }
    alt
}

/// Length of Hebrew year in days; one of {353, 354, 355, 383, 384, 385}.
#[must_use]
pub fn days_in_year(year: i32) -> i64 {
    elapsed_days(year + 1) - elapsed_days(year)
}

/// Cheshvan runs 30 days in a "shelemah" year.
#[must_use]
pub fn long_cheshvan(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

/// Kislev runs 29 days in a "chaserah" year.
#[must_use]
pub fn short_kislev(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

/// Days in a Hebrew month of a given year.
#[must_use]
pub fn days_in_month(month: HMonth, year: i32) -> u8 {
    match month {
        HMonth::Iyyar | HMonth::Tammuz | HMonth::Elul | HMonth::Tevet | HMonth::Adar2 => 29,
        HMonth::Adar1 if !is_leap_year(year) => 29,
        HMonth::Cheshvan if !long_cheshvan(year) => 29,
        HMonth::Kislev if short_kislev(year) => 29,
        _ => 30,
    }
}

/// Greatest absolute day on `weekday` that is ≤ `abs`. 0 = Sunday.
#[must_use]
pub fn day_on_or_before(weekday: i64, abs: i64) -> i64 {
    abs - (abs - weekday).rem_euclid(7)
}

/// A Hebrew calendar date. Immutable value type; always in-range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HDate {
    year: i32,
    month: HMonth,
    day: u8,
}

impl HDate {
    /// Builds a date, applying the documented Adar II → Adar fixup in common
    /// years and rejecting days beyond the month length.
    pub fn new(year: i32, month: HMonth, day: u8) -> Result<HDate, CalError> {
        if year < 1 {
            return Err(CalError::OutOfRange(format!("Hebrew year {year}")));
        }
        let month = if month == HMonth::Adar2 && !is_leap_year(year) {
            HMonth::Adar1
        } else {
            month
        };
        if day == 0 || day > days_in_month(month, year) {
            return Err(CalError::OutOfRange(format!(
                "{} {} {}",
                day,
                month.name(year),
                year
            )));
        }
        Ok(HDate { year, month, day })
    }

    /// Like [`HDate::new`] for dates produced by internal arithmetic, where
    /// an out-of-range day is a bug rather than user input.
    pub(crate) fn must(year: i32, month: HMonth, day: u8) -> HDate {
        debug_assert!(day >= 1 && day <= days_in_month(month, year));
        let month = if month == HMonth::Adar2 && !is_leap_year(year) {
            HMonth::Adar1
        } else {
            month
        };
        HDate { year, month, day }
    }

    /// Converts an absolute day number.
    #[must_use]
    pub fn from_abs(abs: i64) -> HDate {
        let mut year = ((abs - EPOCH) / 366) as i32;
        while abs >= HDate::must(year + 1, HMonth::Tishrei, 1).abs() {
            year += 1;
        }
        let mut rem = abs - HDate::must(year, HMonth::Tishrei, 1).abs();
        for month in HMonth::in_year(year) {
            let len = i64::from(days_in_month(month, year));
            if rem < len {
                return HDate {
                    year,
                    month,
                    day: (rem + 1) as u8,
                };
            }
            rem -= len;
        }
        unreachable!("absolute day {abs} not within year {year}");
    }

    /// Converts a Gregorian date.
    #[must_use]
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> HDate {
        HDate::from_abs(greg::to_abs(year, month, day))
    }

    /// Converts a `chrono` date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> HDate {
        HDate::from_abs(greg::date_to_abs(date))
    }

    /// Absolute day number of this date.
    #[must_use]
    pub fn abs(&self) -> i64 {
        let mut days = i64::from(self.day);
        if self.month < HMonth::Tishrei {
            // months of the spring half follow the whole autumn half
            for m in HMonth::in_year(self.year) {
                if m >= HMonth::Tishrei || m < self.month {
                    days += i64::from(days_in_month(m, self.year));
                }
            }
        } else {
            for m in HMonth::in_year(self.year) {
                if m >= HMonth::Tishrei && m < self.month {
                    days += i64::from(days_in_month(m, self.year));
                }
            }
        }
        EPOCH + elapsed_days(self.year) + days - 1
    }

    /// Gregorian (year, month, day) of this date.
    #[must_use]
    pub fn greg(&self) -> (i32, u32, u32) {
        greg::from_abs(self.abs())
    }

    /// `chrono` date of this date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        greg::abs_to_date(self.abs())
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn month(&self) -> HMonth {
        self.month
    }

    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Day of week; absolute day 0 was a Sunday.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        match self.abs().rem_euclid(7) {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// The date `days` later (or earlier, when negative).
    #[must_use]
    pub fn plus(&self, days: i64) -> HDate {
        HDate::from_abs(self.abs() + days)
    }

    /// Localized month name.
    #[must_use]
    pub fn month_name(&self, locale: Locale) -> &'static str {
        locale::lookup(self.month.name(self.year), locale)
    }
}

impl fmt::Display for HDate {
    // "25 Kislev 5782"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month.name(self.year), self.year)
    }
}
