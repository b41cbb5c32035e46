// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Weekly Torah reading assignment.
//!
//! A Hebrew year's readings are fully determined by its type: the weekday of
//! Rosh Hashana, the year-length kind (chaserah / kesidrah / shelemah) and
//! leapness, with separate tables where Israel and the Diaspora diverge
//! (years in which Pesach VIII or Shavuot II falls on Shabbat). Each table
//! entry covers one Saturday counted from the first Saturday on or after
//! Rosh Hashana: a parasha, a combined double, or none on festival weeks.

use crate::hdate::{self, HDate, HMonth, day_on_or_before};
use crate::locale::{self, Locale};

/// The 54 parshiot in canonical order.
#[rustfmt::skip]
pub static PARSHIOT: [&str; 54] = [
    "Bereshit", "Noach", "Lech-Lecha", "Vayera", "Chayei Sara", "Toldot",
    "Vayetzei", "Vayishlach", "Vayeshev", "Miketz", "Vayigash", "Vayechi",
    "Shemot", "Vaera", "Bo", "Beshalach", "Yitro", "Mishpatim", "Terumah",
    "Tetzaveh", "Ki Tisa", "Vayakhel", "Pekudei", "Vayikra", "Tzav", "Shmini",
    "Tazria", "Metzora", "Achrei Mot", "Kedoshim", "Emor", "Behar",
    "Bechukotai", "Bamidbar", "Nasso", "Beha'alotcha", "Sh'lach", "Korach",
    "Chukat", "Balak", "Pinchas", "Matot", "Masei", "Devarim", "Vaetchanan",
    "Eikev", "Re'eh", "Shoftim", "Ki Teitzei", "Ki Tavo", "Nitzavim",
    "Vayelech", "Ha'Azinu", "Vezot Haberakhah",
];

/// No reading this Saturday (festival week).
const X: i8 = -1;

/// Combined double portion starting at parasha `p`.
const fn d(p: i8) -> i8 {
    -p
}

#[rustfmt::skip]
static MON_CHASER: &[i8] = &[51, 52, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, d(21), 23, 24, X, 25, d(26), d(28), 30, d(31), 33, 34, 35, 36, 37, 38, 39, 40, d(41), 43, 44, 45, 46, 47, 48, 49, d(50)];
#[rustfmt::skip]
static MON_CHASER_LEAP: &[i8] = &[51, 52, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, X, 28, 29, 30, 31, 32, 33, X, 34, 35, 36, 37, d(38), 40, d(41), 43, 44, 45, 46, 47, 48, 49, d(50)];
#[rustfmt::skip]
static MON_CHASER_LEAP_IL: &[i8] = &[51, 52, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, X, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, d(41), 43, 44, 45, 46, 47, 48, 49, d(50)];
#[rustfmt::skip]
static MON_SHALEM: &[i8] = &[51, 52, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, d(21), 23, 24, X, 25, d(26), d(28), 30, d(31), 33, X, 34, 35, 36, 37, d(38), 40, d(41), 43, 44, 45, 46, 47, 48, 49, d(50)];
#[rustfmt::skip]
static MON_SHALEM_LEAP: &[i8] = &[51, 52, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, X, X, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, d(41), 43, 44, 45, 46, 47, 48, 49, 50];
#[rustfmt::skip]
static MON_SHALEM_LEAP_IL: &[i8] = &[51, 52, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, X, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50];
#[rustfmt::skip]
static SAT_CHASER: &[i8] = &[X, 52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, d(21), 23, 24, X, 25, d(26), d(28), 30, d(31), 33, 34, 35, 36, 37, 38, 39, 40, d(41), 43, 44, 45, 46, 47, 48, 49, 50];
#[rustfmt::skip]
static SAT_CHASER_LEAP: &[i8] = &[X, 52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, X, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, d(41), 43, 44, 45, 46, 47, 48, 49, d(50)];
#[rustfmt::skip]
static SAT_SHALEM: &[i8] = &[X, 52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, d(21), 23, 24, X, 25, d(26), d(28), 30, d(31), 33, 34, 35, 36, 37, 38, 39, 40, d(41), 43, 44, 45, 46, 47, 48, 49, d(50)];
#[rustfmt::skip]
static SAT_SHALEM_LEAP: &[i8] = &[X, 52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, X, 28, 29, 30, 31, 32, 33, X, 34, 35, 36, 37, d(38), 40, d(41), 43, 44, 45, 46, 47, 48, 49, d(50)];
#[rustfmt::skip]
static THU_CHASER_LEAP: &[i8] = &[52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, X, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50];
#[rustfmt::skip]
static THU_KESIDRAH: &[i8] = &[52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, d(21), 23, 24, X, X, 25, d(26), d(28), 30, d(31), 33, 34, 35, 36, 37, 38, 39, 40, d(41), 43, 44, 45, 46, 47, 48, 49, 50];
#[rustfmt::skip]
static THU_KESIDRAH_IL: &[i8] = &[52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, d(21), 23, 24, X, 25, d(26), d(28), 30, d(31), 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50];
#[rustfmt::skip]
static THU_SHALEM: &[i8] = &[52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, X, 25, d(26), d(28), 30, d(31), 33, 34, 35, 36, 37, 38, 39, 40, d(41), 43, 44, 45, 46, 47, 48, 49, 50];
#[rustfmt::skip]
static THU_SHALEM_LEAP: &[i8] = &[52, X, X, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, X, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, d(50)];

/// One Saturday's assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Single(u8),
    /// A combined double portion; the value is the first of the pair.
    Double(u8),
}

impl Reading {
    /// "Bereshit" or "Vayakhel-Pekudei".
    #[must_use]
    pub fn name(&self) -> String {
        match *self {
            Reading::Single(p) => PARSHIOT[usize::from(p)].to_string(),
            Reading::Double(p) => format!(
                "{}-{}",
                PARSHIOT[usize::from(p)],
                PARSHIOT[usize::from(p) + 1]
            ),
        }
    }

    /// "Parashat Bereshit" in the requested locale.
    #[must_use]
    pub fn render(&self, locale: Locale) -> String {
        let prefix = locale::lookup("Parashat", locale);
        let name = match *self {
            Reading::Single(p) => locale::lookup(PARSHIOT[usize::from(p)], locale).to_string(),
            Reading::Double(p) => format!(
                "{}-{}",
                locale::lookup(PARSHIOT[usize::from(p)], locale),
                locale::lookup(PARSHIOT[usize::from(p) + 1], locale)
            ),
        };
        format!("{prefix} {name}")
    }
}

/// The reading schedule of one Hebrew year.
#[derive(Debug, Clone, Copy)]
pub struct Sedra {
    year: i32,
    il: bool,
    first_saturday: i64,
    table: &'static [i8],
}

impl Sedra {
    #[must_use]
    pub fn new(year: i32, il: bool) -> Sedra {
        let rh = HDate::must(year, HMonth::Tishrei, 1).abs();
        let rh_dow = rh.rem_euclid(7);
        let leap = hdate::is_leap_year(year);
        let kind = hdate::days_in_year(year) % 10; // 3 chaserah, 4 kesidrah, 5 shelemah

        let table = match (leap, rh_dow, kind) {
            (false, 1, 3) => MON_CHASER,
            (false, 1, 5) => {
                if il {
                    MON_CHASER
                } else {
                    MON_SHALEM
                }
            }
            (false, 2, 4) => {
                if il {
                    MON_CHASER
                } else {
                    MON_SHALEM
                }
            }
            (false, 4, 4) => {
                if il {
                    THU_KESIDRAH_IL
                } else {
                    THU_KESIDRAH
                }
            }
            (false, 4, 5) => THU_SHALEM,
            (false, 6, 3) => SAT_CHASER,
            (false, 6, 5) => SAT_SHALEM,
            (true, 1, 3) => {
                if il {
                    MON_CHASER_LEAP_IL
                } else {
                    MON_CHASER_LEAP
                }
            }
            (true, 1, 5) | (true, 2, 4) => {
                if il {
                    MON_SHALEM_LEAP_IL
                } else {
                    MON_SHALEM_LEAP
                }
            }
            (true, 4, 3) => THU_CHASER_LEAP,
            (true, 4, 5) => THU_SHALEM_LEAP,
            (true, 6, 3) => SAT_CHASER_LEAP,
            (true, 6, 5) => {
                if il {
                    SAT_CHASER_LEAP
                } else {
                    SAT_SHALEM_LEAP
                }
            }
            _ => unreachable!("impossible year type ({leap}, {rh_dow}, {kind})"),
        };

        Sedra {
            year,
            il,
            first_saturday: day_on_or_before(6, rh + 6),
            table,
        }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The reading of the Saturday on or after `abs`, or `None` on festival
    /// weeks. Dates whose Saturday falls in an adjacent year resolve against
    /// that year's schedule.
    #[must_use]
    pub fn lookup(&self, abs: i64) -> Option<Reading> {
        let saturday = day_on_or_before(6, abs + 6);
        let week = (saturday - self.first_saturday).div_euclid(7);
        let entry = if week >= 0 {
            self.table.get(week as usize).copied()
        } else {
            None
        };
        match entry {
            Some(e) => decode(e),
            None => Sedra::new(HDate::from_abs(saturday).year(), self.il).lookup_in_year(saturday),
        }
    }

    fn lookup_in_year(&self, saturday: i64) -> Option<Reading> {
        let week = (saturday - self.first_saturday).div_euclid(7);
        self.table.get(week as usize).copied().and_then(decode)
    }

    /// Iterates the year's Saturdays with their assignments.
    pub fn saturdays(&self) -> impl Iterator<Item = (i64, Option<Reading>)> + '_ {
        self.table
            .iter()
            .enumerate()
            .map(|(week, &e)| (self.first_saturday + 7 * week as i64, decode(e)))
    }
}

fn decode(entry: i8) -> Option<Reading> {
    match entry {
        X => None,
        p if p >= 0 => Some(Reading::Single(p as u8)),
        p => Some(Reading::Double((-p) as u8)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greg;

    fn reading_on(year: i32, il: bool, g: (i32, u32, u32)) -> Option<String> {
        Sedra::new(year, il)
            .lookup(greg::to_abs(g.0, g.1, g.2))
            .map(|r| r.name())
    }

    #[test]
    fn bereshit_5783_falls_on_oct_22() {
        assert_eq!(reading_on(5783, false, (2022, 10, 22)).unwrap(), "Bereshit");
    }

    #[test]
    fn vayakhel_pekudei_combined_in_5783() {
        assert_eq!(
            reading_on(5783, false, (2023, 3, 18)).unwrap(),
            "Vayakhel-Pekudei"
        );
    }

    #[test]
    fn vayakhel_pekudei_split_in_5785() {
        assert_eq!(reading_on(5785, false, (2025, 3, 22)).unwrap(), "Vayakhel");
        assert_eq!(reading_on(5785, false, (2025, 3, 29)).unwrap(), "Pekudei");
    }

    #[test]
    fn diaspora_skips_shavuot_ii_shabbat_in_5783() {
        assert_eq!(reading_on(5783, false, (2023, 5, 27)), None);
        assert_eq!(reading_on(5783, true, (2023, 5, 27)).unwrap(), "Nasso");
    }

    #[test]
    fn israel_splits_matot_masei_in_5782() {
        assert_eq!(reading_on(5782, true, (2022, 7, 23)).unwrap(), "Matot");
        assert_eq!(reading_on(5782, true, (2022, 7, 30)).unwrap(), "Masei");
        assert_eq!(
            reading_on(5782, false, (2022, 7, 30)).unwrap(),
            "Matot-Masei"
        );
    }

    #[test]
    fn nitzavim_vayelech_follows_next_rosh_hashana_weekday() {
        // next RH on Saturday: combined
        assert_eq!(
            reading_on(5783, false, (2023, 9, 9)).unwrap(),
            "Nitzavim-Vayelech"
        );
        // next RH on Tuesday: split
        assert_eq!(reading_on(5785, false, (2025, 9, 20)).unwrap(), "Nitzavim");
    }

    #[test]
    fn every_year_expands_to_the_canonical_cycle() {
        for year in 5700..5800 {
            for il in [false, true] {
                let sedra = Sedra::new(year, il);
                let mut expanded = Vec::new();
                let mut seen_bereshit = false;
                for (_, reading) in sedra.saturdays() {
                    match reading {
                        Some(Reading::Single(0)) => seen_bereshit = true,
                        _ => {}
                    }
                    if !seen_bereshit {
                        continue;
                    }
                    match reading {
                        Some(Reading::Single(p)) => expanded.push(p),
                        Some(Reading::Double(p)) => expanded.extend([p, p + 1]),
                        None => {}
                    }
                }
                let last = *expanded.last().unwrap();
                assert!(last == 50 || last == 51, "year {year} il {il}");
                let want: Vec<u8> = (0..=last).collect();
                assert_eq!(expanded, want, "year {year} il {il}");
            }
        }
    }

    #[test]
    fn saturday_count_matches_table_length() {
        for year in 5780..5790 {
            let sedra = Sedra::new(year, false);
            let rh = HDate::must(year, HMonth::Tishrei, 1).abs();
            let len = hdate::days_in_year(year);
            let mut saturdays = 0;
            for offset in 0..len {
                if (rh + offset).rem_euclid(7) == 6 {
                    saturdays += 1;
                }
            }
            assert_eq!(sedra.saturdays().count(), saturdays, "year {year}");
        }
    }
}
