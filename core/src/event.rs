// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar events: a date, a flag set and a typed payload.
//!
//! The original models this as an interface with many concrete types; here
//! it is one value type with a payload union, and rendering is a match.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use chrono::DateTime;
use chrono_tz::Tz;

use crate::dafyomi::Daf;
use crate::gematriya::gematriya;
use crate::hdate::{HDate, HMonth};
use crate::locale::{self, Locale};
use crate::mishnayomi::MishnaPair;
use crate::molad::Molad;
use crate::nachyomi::NachChapter;
use crate::omer::OmerCount;
use crate::sedra::Reading;
use crate::zmanim::format_time;

/// Bitmask over event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventFlags(pub u32);

impl EventFlags {
    pub const NONE: EventFlags = EventFlags(0);
    /// Festival day with melacha restrictions.
    pub const CHAG: EventFlags = EventFlags(1 << 0);
    pub const LIGHT_CANDLES: EventFlags = EventFlags(1 << 1);
    pub const YOM_TOV_ENDS: EventFlags = EventFlags(1 << 2);
    /// Chol haMoed.
    pub const CH_M: EventFlags = EventFlags(1 << 3);
    /// Eve of a festival.
    pub const EREV: EventFlags = EventFlags(1 << 4);
    pub const ROSH_CHODESH: EventFlags = EventFlags(1 << 5);
    pub const MINOR_HOLIDAY: EventFlags = EventFlags(1 << 6);
    pub const MODERN_HOLIDAY: EventFlags = EventFlags(1 << 7);
    pub const SPECIAL_SHABBAT: EventFlags = EventFlags(1 << 8);
    pub const PARSHA_HASHAVUA: EventFlags = EventFlags(1 << 9);
    pub const DAF_YOMI: EventFlags = EventFlags(1 << 10);
    pub const MISHNA_YOMI: EventFlags = EventFlags(1 << 11);
    pub const NACH_YOMI: EventFlags = EventFlags(1 << 12);
    pub const OMER_COUNT: EventFlags = EventFlags(1 << 13);
    pub const SHABBAT_MEVARCHIM: EventFlags = EventFlags(1 << 14);
    pub const MOLAD: EventFlags = EventFlags(1 << 15);
    pub const USER_EVENT: EventFlags = EventFlags(1 << 16);
    pub const HEBREW_DATE: EventFlags = EventFlags(1 << 17);
    pub const CANDLES: EventFlags = EventFlags(1 << 18);
    pub const HAVDALAH: EventFlags = EventFlags(1 << 19);
    /// Attribute bit carried by every fast alongside its category bit; it
    /// never participates in option masks.
    pub const FAST_DAY: EventFlags = EventFlags(1 << 20);
    pub const MAJOR_FAST: EventFlags = EventFlags(1 << 21);
    pub const MINOR_FAST: EventFlags = EventFlags(1 << 22);
    pub const YOM_KIPPUR_KATAN: EventFlags = EventFlags(1 << 23);
    pub const ZMANIM: EventFlags = EventFlags(1 << 24);

    #[must_use]
    pub fn contains(self, other: EventFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub fn intersects(self, other: EventFlags) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for EventFlags {
    type Output = EventFlags;

    fn bitor(self, rhs: EventFlags) -> EventFlags {
        EventFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for EventFlags {
    fn bitor_assign(&mut self, rhs: EventFlags) {
        self.0 |= rhs.0;
    }
}

/// Event-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum EventDetail {
    /// A named holiday or fast from the rule table.
    Holiday { name: String, emoji: Option<&'static str> },
    /// First day(s) of a month.
    RoshChodesh { month: HMonth },
    /// Saturday before a new month, optionally carrying the molad.
    Mevarchim { month: HMonth, molad: Option<Molad> },
    /// Weekly Torah portion.
    Parsha { reading: Reading },
    Omer(OmerCount),
    DafYomi(Daf),
    MishnaYomi(MishnaPair),
    NachYomi(NachChapter),
    /// The Hebrew date itself, for `AddHebrewDates`.
    HebrewDate,
    Candles { time: DateTime<Tz>, hour24: bool },
    Havdalah { time: DateTime<Tz>, mins: Option<u32>, hour24: bool },
    /// A named halachic time of day.
    Zman { name: &'static str, time: DateTime<Tz>, hour24: bool },
    User { description: String },
    Yahrzeit { description: String },
}

/// One dated calendar entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub date: HDate,
    pub flags: EventFlags,
    pub detail: EventDetail,
}

impl Event {
    #[must_use]
    pub fn new(date: HDate, flags: EventFlags, detail: EventDetail) -> Event {
        Event { date, flags, detail }
    }

    /// Language-independent identity, used for de-duplication and as the
    /// translation key.
    #[must_use]
    pub fn basename(&self) -> String {
        match &self.detail {
            EventDetail::Holiday { name, .. } => {
                // "Chanukah: 3 Candles" identifies as "Chanukah"
                match name.split_once(':') {
                    Some((base, _)) => base.to_string(),
                    None => name.clone(),
                }
            }
            EventDetail::RoshChodesh { month } => {
                format!("Rosh Chodesh {}", month.name(self.date.year()))
            }
            EventDetail::Mevarchim { month, .. } => {
                format!("Shabbat Mevarchim Chodesh {}", month.name(self.date.year()))
            }
            EventDetail::Parsha { reading } => reading.name(),
            EventDetail::Omer(o) => format!("{} day of the Omer", o.day()),
            EventDetail::DafYomi(daf) => daf.to_string(),
            EventDetail::MishnaYomi(pair) => pair.to_string(),
            EventDetail::NachYomi(ch) => format!("{} {}", ch.book, ch.chapter),
            EventDetail::HebrewDate => self.date.to_string(),
            EventDetail::Candles { .. } => "Candle lighting".to_string(),
            EventDetail::Havdalah { .. } => "Havdalah".to_string(),
            EventDetail::Zman { name, .. } => (*name).to_string(),
            EventDetail::User { description } | EventDetail::Yahrzeit { description } => {
                description.clone()
            }
        }
    }

    /// Localized display string.
    #[must_use]
    pub fn render(&self, locale: Locale) -> String {
        match &self.detail {
            EventDetail::Holiday { name, .. } => render_holiday(name, locale),
            EventDetail::RoshChodesh { month } => format!(
                "{} {}",
                locale::lookup("Rosh Chodesh", locale),
                locale::lookup(month.name(self.date.year()), locale)
            ),
            EventDetail::Mevarchim { month, molad } => {
                let mut s = format!(
                    "{} {}",
                    locale::lookup("Shabbat Mevarchim Chodesh", locale),
                    locale::lookup(month.name(self.date.year()), locale)
                );
                if let Some(m) = molad {
                    s.push_str(&format!(
                        ": {}, {} minutes and {} chalakim after {}:00",
                        weekday_name(m.dow),
                        m.minutes,
                        m.chalakim,
                        m.hours
                    ));
                }
                s
            }
            EventDetail::Parsha { reading } => reading.render(locale),
            EventDetail::Omer(o) => o.render(locale),
            EventDetail::DafYomi(daf) => daf.render(locale),
            EventDetail::MishnaYomi(pair) => pair.render(locale),
            EventDetail::NachYomi(ch) => ch.render(locale),
            EventDetail::HebrewDate => render_hdate(&self.date, locale),
            EventDetail::Candles { time, hour24 } => format!(
                "{}: {}",
                locale::lookup("Candle lighting", locale),
                format_time(time, *hour24)
            ),
            EventDetail::Havdalah { time, mins, hour24 } => {
                let label = locale::lookup("Havdalah", locale);
                match mins {
                    Some(m) => {
                        format!("{} ({} min): {}", label, m, format_time(time, *hour24))
                    }
                    None => format!("{}: {}", label, format_time(time, *hour24)),
                }
            }
            EventDetail::Zman { name, time, hour24 } => {
                format!("{}: {}", name, format_time(time, *hour24))
            }
            EventDetail::User { description } | EventDetail::Yahrzeit { description } => {
                description.clone()
            }
        }
    }

    #[must_use]
    pub fn emoji(&self) -> Option<String> {
        match &self.detail {
            EventDetail::Holiday { emoji, .. } => emoji.map(str::to_string),
            EventDetail::Omer(o) => Some(o.emoji().to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Locale::En))
    }
}

fn render_holiday(name: &str, locale: Locale) -> String {
    if let Some(s) = locale::lookup_opt(name, locale) {
        return s.to_string();
    }
    // composite names fall back piecewise: "Chanukah: 3 Candles"
    if let Some((base, rest)) = name.split_once(':') {
        return format!("{}:{}", locale::lookup(base, locale), rest);
    }
    name.to_string()
}

fn render_hdate(hd: &HDate, locale: Locale) -> String {
    match locale {
        Locale::He => format!(
            "{} {} {}",
            gematriya(u32::from(hd.day())),
            hd.month_name(locale),
            gematriya(hd.year() as u32)
        ),
        _ => format!(
            "{} of {}, {}",
            ordinal(hd.day()),
            hd.month_name(locale),
            hd.year()
        ),
    }
}

fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn weekday_name(dow: chrono::Weekday) -> &'static str {
    match dow {
        chrono::Weekday::Sun => "Sunday",
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
    }
}
