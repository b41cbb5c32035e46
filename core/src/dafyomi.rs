// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Daf Yomi: one Talmud folio per day since 11 September 1923.

use std::fmt;

use crate::error::CalError;
use crate::gematriya::gematriya;
use crate::greg;
use crate::hdate::HDate;
use crate::locale::{self, Locale};

/// Tractates of the Babylonian Talmud with their final folio numbers.
/// A tractate of n blatt takes n-1 days; the first daf is 2.
#[rustfmt::skip]
static SHAS: &[(&str, i64)] = &[
    ("Berachot", 64), ("Shabbat", 157), ("Eruvin", 105), ("Pesachim", 121),
    ("Shekalim", 22), ("Yoma", 88), ("Sukkah", 56), ("Beitzah", 40),
    ("Rosh Hashana", 35), ("Taanit", 31), ("Megillah", 32), ("Moed Katan", 29),
    ("Chagigah", 27), ("Yevamot", 122), ("Ketubot", 112), ("Nedarim", 91),
    ("Nazir", 66), ("Sotah", 49), ("Gitin", 90), ("Kiddushin", 82),
    ("Baba Kamma", 119), ("Baba Metzia", 119), ("Baba Batra", 176),
    ("Sanhedrin", 113), ("Makkot", 24), ("Shevuot", 49), ("Avodah Zarah", 76),
    ("Horayot", 14), ("Zevachim", 120), ("Menachot", 110), ("Chullin", 142),
    ("Bechorot", 61), ("Arachin", 34), ("Temurah", 34), ("Keritot", 28),
    ("Meilah", 22), ("Kinnim", 4), ("Tamid", 10), ("Midot", 4), ("Niddah", 73),
];

/// Cycle 1 began 1923-09-11; cycle 8 began 1975-06-24, when Shekalim grew
/// from 13 to 22 dafs and the cycle from 2702 to 2711 days.
const CYCLE1_START: (i32, u32, u32) = (1923, 9, 11);
const CYCLE8_START: (i32, u32, u32) = (1975, 6, 24);
const OLD_CYCLE_LEN: i64 = 2702;
const CYCLE_LEN: i64 = 2711;
const OLD_SHEKALIM: i64 = 13;

/// A single Talmud folio reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Daf {
    pub name: &'static str,
    pub blatt: i64,
}

impl Daf {
    #[must_use]
    pub fn render(&self, locale: Locale) -> String {
        let name = locale::lookup(self.name, locale);
        if locale == Locale::He {
            format!("{} {}", name, gematriya(self.blatt as u32))
        } else {
            format!("{} {}", name, self.blatt)
        }
    }
}

impl fmt::Display for Daf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.blatt)
    }
}

/// The daf studied on the given date, or `OutOfRange` before the first cycle.
pub fn lookup(hd: HDate) -> Result<Daf, CalError> {
    let abs = hd.abs();
    let os = greg::to_abs(CYCLE1_START.0, CYCLE1_START.1, CYCLE1_START.2);
    let ns = greg::to_abs(CYCLE8_START.0, CYCLE8_START.1, CYCLE8_START.2);
    if abs < os {
        return Err(CalError::OutOfRange(format!(
            "Daf Yomi began {}-{:02}-{:02}",
            CYCLE1_START.0, CYCLE1_START.1, CYCLE1_START.2
        )));
    }
    let (cycle, mut day) = if abs >= ns {
        (8 + (abs - ns) / CYCLE_LEN, (abs - ns) % CYCLE_LEN)
    } else {
        (1 + (abs - os) / OLD_CYCLE_LEN, (abs - os) % OLD_CYCLE_LEN)
    };
    for (i, &(name, blatt)) in SHAS.iter().enumerate() {
        let blatt = if cycle <= 7 && i == 4 { OLD_SHEKALIM } else { blatt };
        if day < blatt - 1 {
            return Ok(Daf { name, blatt: day + 2 });
        }
        day -= blatt - 1;
    }
    unreachable!("daf cycle day exceeded cycle length");
}
