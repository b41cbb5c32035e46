// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end scenarios pinned to real calendar dates.

use luach_core::hdate::{HDate, HMonth};
use luach_core::zmanim::Zmanim;
use luach_core::{
    CalOptions, Event, EventDetail, EventFlags, Locale, dafyomi, hebrew_calendar, lookup_city,
    mishnayomi,
};

fn holidays_5782() -> Vec<Event> {
    let opts = CalOptions {
        year: Some(5782),
        is_hebrew_year: true,
        ..CalOptions::default()
    };
    hebrew_calendar(&opts).unwrap()
}

#[test]
fn kislev_5756_conversion_and_mishna() {
    let hd = HDate::from_gregorian(1995, 12, 17);
    assert_eq!(hd.year(), 5756);
    assert_eq!(hd.month(), HMonth::Kislev);
    assert_eq!(hd.day(), 24);
    // Chanukah that year began the following evening
    assert_eq!(HDate::new(5756, HMonth::Kislev, 25).unwrap().greg(), (1995, 12, 18));

    let pair = mishnayomi::lookup(hd).unwrap();
    assert_eq!(pair.to_string(), "Bava Kamma 5:7-6:1");
}

#[test]
fn chanukah_5782_night_one_is_nov_28() {
    let events = holidays_5782();
    let nights: Vec<&Event> = events.iter().filter(|e| e.basename() == "Chanukah").collect();
    assert_eq!(nights.len(), 8);
    assert_eq!(nights[0].date.greg(), (2021, 11, 28));
    assert_eq!(nights[0].render(Locale::En), "Chanukah: 1 Candle");
    assert_eq!(nights[7].render(Locale::En), "Chanukah: 8 Candles");
}

#[test]
fn erev_pesach_5782_is_a_friday_with_candles() {
    let events = holidays_5782();
    let erev = events
        .iter()
        .find(|e| e.basename() == "Erev Pesach")
        .unwrap();
    assert_eq!(erev.date.greg(), (2022, 4, 15));
    assert_eq!(erev.date.weekday(), chrono::Weekday::Fri);
    assert!(erev.flags.contains(EventFlags::LIGHT_CANDLES));
}

#[test]
fn mishna_yomi_epoch_and_wraparound() {
    let first = mishnayomi::lookup(HDate::from_gregorian(1947, 5, 20)).unwrap();
    assert_eq!(first.to_string(), "Berakhot 1:1-2");
    let terumot = mishnayomi::lookup(HDate::from_gregorian(2022, 8, 1)).unwrap();
    assert_eq!(terumot.to_string(), "Terumot 11:3-4");
}

#[test]
fn daf_yomi_cycles_start_with_berachot() {
    for (y, m, d) in [(1923, 9, 11), (1975, 6, 24), (2020, 1, 5)] {
        let daf = dafyomi::lookup(HDate::from_gregorian(y, m, d)).unwrap();
        assert_eq!(daf.to_string(), "Berachot 2");
    }
}

#[test]
fn new_york_solstice_zmanim() {
    let nyc = lookup_city("New York").unwrap();
    let z = Zmanim::new(&nyc, chrono::NaiveDate::from_ymd_opt(2022, 6, 21).unwrap());
    let fmt = |t: chrono::DateTime<chrono_tz::Tz>| luach_core::zmanim::format_time(&t, true);
    assert_eq!(fmt(z.sunrise().unwrap()), "05:26");
    assert_eq!(fmt(z.sunset().unwrap()), "20:31");
    assert_eq!(fmt(z.chatzot().unwrap()), "12:58");
}

#[test]
fn december_candles_and_havdalah_in_new_york() {
    let opts = CalOptions {
        start: Some(HDate::from_gregorian(2022, 12, 23)),
        end: Some(HDate::from_gregorian(2022, 12, 24)),
        location: Some(lookup_city("New York").unwrap()),
        candle_lighting: true,
        hour24: true,
        ..CalOptions::default()
    };
    let events = hebrew_calendar(&opts).unwrap();

    let candles = events
        .iter()
        .find(|e| e.flags.intersects(EventFlags::CANDLES))
        .unwrap();
    assert_eq!(candles.date.greg(), (2022, 12, 23));
    assert_eq!(candles.render(Locale::En), "Candle lighting: 16:15");

    let havdalah = events
        .iter()
        .find(|e| e.flags.intersects(EventFlags::HAVDALAH))
        .unwrap();
    assert_eq!(havdalah.date.greg(), (2022, 12, 24));
    assert_eq!(havdalah.render(Locale::En), "Havdalah (72 min): 17:46");
}

#[test]
fn sedra_5783_from_bereshit_to_full_coverage() {
    let opts = CalOptions {
        year: Some(5783),
        is_hebrew_year: true,
        sedrot: true,
        no_holidays: true,
        ..CalOptions::default()
    };
    let events = hebrew_calendar(&opts).unwrap();

    let bereshit = events
        .iter()
        .find(|e| e.basename() == "Bereshit")
        .unwrap();
    assert_eq!(bereshit.date.greg(), (2022, 10, 22));
    assert_eq!(bereshit.render(Locale::En), "Parashat Bereshit");

    let combined = events
        .iter()
        .find(|e| e.basename() == "Vayakhel-Pekudei")
        .unwrap();
    assert_eq!(combined.date.greg(), (2023, 3, 18));

    // expanding every reading from Bereshit onward covers the cycle once
    let mut names: Vec<String> = Vec::new();
    let mut started = false;
    for e in &events {
        let name = e.basename();
        if name == "Bereshit" {
            started = true;
        }
        if started {
            for part in name.split('-') {
                names.push(part.to_string());
            }
        }
    }
    assert_eq!(names.len(), 52); // Bereshit through Nitzavim-Vayelech
    assert_eq!(names.first().unwrap(), "Bereshit");
    assert_eq!(names.last().unwrap(), "Vayelech");
    let unique: std::collections::HashSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn molad_renders_on_shabbat_mevarchim() {
    let opts = CalOptions {
        year: Some(5783),
        is_hebrew_year: true,
        molad: true,
        ..CalOptions::default()
    };
    let events = hebrew_calendar(&opts).unwrap();
    let mevarchim = events
        .iter()
        .find(|e| e.flags.intersects(EventFlags::SHABBAT_MEVARCHIM))
        .unwrap();
    match &mevarchim.detail {
        EventDetail::Mevarchim { molad, month } => {
            assert!(molad.is_some());
            assert_eq!(*month, HMonth::Cheshvan);
        }
        other => panic!("unexpected detail {other:?}"),
    }
    assert!(mevarchim.render(Locale::En).contains("chalakim after"));
}

#[test]
fn israel_and_diaspora_disagree_on_pesach_viii() {
    let diaspora = CalOptions {
        year: Some(5783),
        is_hebrew_year: true,
        ..CalOptions::default()
    };
    let il = CalOptions { il: true, ..diaspora.clone() };

    let d_events = hebrew_calendar(&diaspora).unwrap();
    let il_events = hebrew_calendar(&il).unwrap();
    assert!(d_events.iter().any(|e| e.basename() == "Pesach VIII"));
    assert!(!il_events.iter().any(|e| e.basename() == "Pesach VIII"));
}

#[test]
fn yahrzeit_from_gregorian_death_date() {
    // a death on 1995-12-17 (24 Kislev 5756) observes on 24 Kislev
    let opts = CalOptions {
        year: Some(5783),
        is_hebrew_year: true,
        no_holidays: true,
        yahrzeits: vec![luach_core::Yahrzeit {
            year: 1995,
            month: 12,
            day: 17,
            description: "Grandfather's yahrzeit".into(),
        }],
        ..CalOptions::default()
    };
    let events = hebrew_calendar(&opts).unwrap();
    assert_eq!(events.len(), 1);
    let e = &events[0];
    assert_eq!((e.date.month(), e.date.day()), (HMonth::Kislev, 24));
    assert!(e.flags.intersects(EventFlags::USER_EVENT));
}
