// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Proleptic Gregorian calendar pinned to the Rata Die day count.
//!
//! Day 1 is Monday, 1 January of year 1. All Hebrew-calendar conversions
//! pivot on this number.

use chrono::{Datelike, NaiveDate};

const MONTH_LENGTHS: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year: divisible by 4, except centuries not divisible by 400.
#[must_use]
pub fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a Gregorian month (1-12).
#[must_use]
pub fn days_in_month(month: u32, year: i32) -> i64 {
    if month == 2 && is_leap(year) {
        29
    } else {
        MONTH_LENGTHS[month as usize - 1]
    }
}

/// Absolute day number of a Gregorian date.
#[must_use]
pub fn to_abs(year: i32, month: u32, day: u32) -> i64 {
    let py = i64::from(year) - 1;
    let mut abs = 365 * py + py.div_euclid(4) - py.div_euclid(100) + py.div_euclid(400);
    for m in 1..month {
        abs += days_in_month(m, year);
    }
    abs + i64::from(day)
}

/// Gregorian (year, month, day) of an absolute day number.
#[must_use]
pub fn from_abs(abs: i64) -> (i32, u32, u32) {
    // Low estimate, then walk forward year by year.
    let mut year = ((abs - 1).div_euclid(366) + 1) as i32;
    while abs >= to_abs(year + 1, 1, 1) {
        year += 1;
    }
    let mut month = 1;
    while abs > to_abs(year, month, days_in_month(month, year) as u32) {
        month += 1;
    }
    let day = (abs - to_abs(year, month, 1) + 1) as u32;
    (year, month, day)
}

/// Absolute day number of a `chrono` date.
#[must_use]
pub fn date_to_abs(date: NaiveDate) -> i64 {
    to_abs(date.year(), date.month(), date.day())
}

/// `chrono` date of an absolute day number.
#[must_use]
pub fn abs_to_date(abs: i64) -> NaiveDate {
    let (y, m, d) = from_abs(abs);
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}
