// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The 49-day Omer count from 16 Nisan.

use crate::locale::Locale;

/// One counted day of the Omer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OmerCount {
    day: u8,
    week: u8,
    day_within_week: u8,
}

const SEFIROT: [&str; 8] = [
    "",
    "Lovingkindness",
    "Might",
    "Beauty",
    "Eternity",
    "Splendor",
    "Foundation",
    "Majesty",
];

const SEFIROT_TRANSLIT: [&str; 8] = [
    "",
    "Chesed",
    "Gevurah",
    "Tiferet",
    "Netzach",
    "Hod",
    "Yesod",
    "Malkhut",
];

impl OmerCount {
    /// `day` must be 1..=49; anything else is an internal logic error.
    #[must_use]
    pub fn new(day: u8) -> OmerCount {
        assert!((1..=49).contains(&day), "invalid omer day {day}");
        let week = (day - 1) / 7 + 1;
        let mut dww = day % 7;
        if dww == 0 {
            dww = 7;
        }
        OmerCount { day, week, day_within_week: dww }
    }

    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Completed weeks.
    #[must_use]
    pub fn weeks(&self) -> u8 {
        if self.day_within_week == 7 { self.week } else { self.week - 1 }
    }

    #[must_use]
    pub fn render(&self, locale: Locale) -> String {
        format!("{} {}", self.day, crate::locale::lookup("day of the Omer", locale))
    }

    /// "Today is 33 days, which is 4 weeks and 5 days of the Omer".
    #[must_use]
    pub fn today_is(&self) -> String {
        let days_word = if self.day == 1 { "day" } else { "days" };
        let mut s = format!("Today is {} {}", self.day, days_word);
        if self.week > 1 || self.day == 7 {
            let weeks = self.weeks();
            let weeks_word = if weeks == 1 { "week" } else { "weeks" };
            s.push_str(&format!(", which is {weeks} {weeks_word}"));
            if self.day_within_week != 7 {
                let day_word = if self.day_within_week == 1 { "day" } else { "days" };
                s.push_str(&format!(" and {} {}", self.day_within_week, day_word));
            }
        }
        s.push_str(" of the Omer");
        s
    }

    /// The sefira pairing for the week and day, e.g. "Splendor within Might".
    #[must_use]
    pub fn sefira(&self, locale: Locale) -> String {
        let week = usize::from(self.week);
        let dww = usize::from(self.day_within_week);
        match locale {
            Locale::Translit => {
                let prefix = if self.week == 2 || self.week == 6 { "shebi" } else { "sheb'" };
                format!("{} {}{}", SEFIROT_TRANSLIT[dww], prefix, SEFIROT_TRANSLIT[week])
            }
            _ => format!("{} within {}", SEFIROT[dww], SEFIROT[week]),
        }
    }

    /// Circled-number code point for the day, as the original emits.
    #[must_use]
    pub fn emoji(&self) -> char {
        let n = u32::from(self.day);
        let cp = if n <= 20 {
            9312 + n - 1
        } else if n <= 35 {
            12881 + n - 21
        } else {
            12977 + n - 36
        };
        char::from_u32(cp).expect("valid circled number")
    }
}
