// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The event-stream generator: merges every enabled producer over a date
//! range, synthesizes candle-lighting and Havdalah, sorts and de-duplicates.

use std::collections::{HashMap, HashSet};

use chrono::DateTime;
use chrono_tz::Tz;

use crate::error::CalError;
use crate::event::{Event, EventDetail, EventFlags};
use crate::greg;
use crate::hdate::{self, HDate, HMonth};
use crate::holidays;
use crate::location::Location;
use crate::sedra::Sedra;
use crate::yahrzeit::{self, UserEvent, Yahrzeit};
use crate::zmanim::Zmanim;
use crate::{dafyomi, mishnayomi, nachyomi};
use crate::omer::OmerCount;

const FRI: i64 = 5;
const SAT: i64 = 6;

/// Everything the generator recognizes. All calendar entities downstream of
/// this record are pure values; no producer reads ambient state.
#[derive(Debug, Clone)]
pub struct CalOptions {
    pub location: Option<Location>,

    /// Calendar year to generate when no explicit range is given.
    pub year: Option<i32>,
    /// `year` counts Hebrew years rather than Gregorian.
    pub is_hebrew_year: bool,
    /// Inclusive explicit range; both ends or neither.
    pub start: Option<HDate>,
    pub end: Option<HDate>,
    /// Whole-year calendars only.
    pub num_years: u32,

    /// Israeli holiday and sedra scheme.
    pub il: bool,
    pub no_holidays: bool,
    pub no_rosh_chodesh: bool,
    pub no_modern: bool,
    pub no_minor_fast: bool,
    pub no_special_shabbat: bool,

    pub omer: bool,
    pub sedrot: bool,
    pub daily_sedra: bool,
    pub daf_yomi: bool,
    pub mishna_yomi: bool,
    pub nach_yomi: bool,
    pub yom_kippur_katan: bool,
    /// Attach the molad to Shabbat Mevarchim.
    pub molad: bool,

    pub candle_lighting: bool,
    /// Minutes before sunset for candle-lighting (18 unless overridden).
    pub candle_lighting_mins: u32,
    /// Minutes after sunset for Havdalah; mutually exclusive with degrees.
    pub havdalah_mins: Option<u32>,
    /// Solar depression angle defining Havdalah.
    pub havdalah_deg: Option<f64>,

    pub sunrise_sunset: bool,
    pub daily_zmanim: bool,
    pub add_hebrew_dates: bool,
    pub add_hebrew_dates_for_events: bool,
    pub hour24: bool,
    /// Weekly view: daily items only on the range's starting weekday.
    pub weekly_abbreviated: bool,

    pub user_events: Vec<UserEvent>,
    pub yahrzeits: Vec<Yahrzeit>,
}

impl Default for CalOptions {
    fn default() -> CalOptions {
        CalOptions {
            location: None,
            year: None,
            is_hebrew_year: false,
            start: None,
            end: None,
            num_years: 1,
            il: false,
            no_holidays: false,
            no_rosh_chodesh: false,
            no_modern: false,
            no_minor_fast: false,
            no_special_shabbat: false,
            omer: false,
            sedrot: false,
            daily_sedra: false,
            daf_yomi: false,
            mishna_yomi: false,
            nach_yomi: false,
            yom_kippur_katan: false,
            molad: false,
            candle_lighting: false,
            candle_lighting_mins: 18,
            havdalah_mins: None,
            havdalah_deg: None,
            sunrise_sunset: false,
            daily_zmanim: false,
            add_hebrew_dates: false,
            add_hebrew_dates_for_events: false,
            hour24: false,
            weekly_abbreviated: false,
            user_events: Vec::new(),
            yahrzeits: Vec::new(),
        }
    }
}

/// Display ordering inside one day.
fn rank(detail: &EventDetail) -> u8 {
    match detail {
        EventDetail::HebrewDate => 0,
        EventDetail::Zman { .. } => 1,
        EventDetail::Holiday { .. } | EventDetail::RoshChodesh { .. } => 2,
        EventDetail::Mevarchim { .. } => 3,
        EventDetail::User { .. } | EventDetail::Yahrzeit { .. } => 4,
        EventDetail::Parsha { .. } => 5,
        EventDetail::Omer(_) => 6,
        EventDetail::DafYomi(_) => 7,
        EventDetail::MishnaYomi(_) => 8,
        EventDetail::NachYomi(_) => 9,
        EventDetail::Candles { .. } | EventDetail::Havdalah { .. } => 10,
    }
}

/// Generates the sorted, de-duplicated event stream for the options.
pub fn hebrew_calendar(opts: &CalOptions) -> Result<Vec<Event>, CalError> {
    validate(opts)?;
    let (start_abs, end_abs) = resolve_range(opts)?;
    let mask = flag_mask(opts);

    let start_year = HDate::from_abs(start_abs).year();
    let end_year = HDate::from_abs(end_abs).year();
    let in_range = |abs: i64| abs >= start_abs && abs <= end_abs;

    let mut events: Vec<Event> = Vec::new();

    for year in start_year..=end_year {
        for ev in holidays::holidays_for_year(year, opts.il) {
            if ev.flags.intersects(mask) && in_range(ev.date.abs()) {
                events.push(ev);
            }
        }
        if mask.intersects(EventFlags::SHABBAT_MEVARCHIM) {
            for ev in holidays::shabbat_mevarchim(year, opts.molad) {
                if in_range(ev.date.abs()) {
                    events.push(ev);
                }
            }
        }
        if opts.yom_kippur_katan {
            for ev in holidays::yom_kippur_katan(year) {
                if in_range(ev.date.abs()) {
                    events.push(ev);
                }
            }
        }
        if opts.sedrot {
            for (abs, reading) in Sedra::new(year, opts.il).saturdays() {
                if let Some(reading) = reading {
                    if in_range(abs) {
                        events.push(Event::new(
                            HDate::from_abs(abs),
                            EventFlags::PARSHA_HASHAVUA,
                            EventDetail::Parsha { reading },
                        ));
                    }
                }
            }
        }
        if opts.omer {
            let first = HDate::must(year, HMonth::Nisan, 16).abs();
            for day in 1..=49u8 {
                let abs = first + i64::from(day) - 1;
                if in_range(abs) {
                    events.push(Event::new(
                        HDate::from_abs(abs),
                        EventFlags::OMER_COUNT,
                        EventDetail::Omer(OmerCount::new(day)),
                    ));
                }
            }
        }
        for ev in &opts.user_events {
            let date = yahrzeit::user_event_date(ev, year);
            if in_range(date.abs()) {
                events.push(Event::new(
                    date,
                    EventFlags::USER_EVENT,
                    EventDetail::User { description: ev.description.clone() },
                ));
            }
        }
        for y in &opts.yahrzeits {
            let death = HDate::from_gregorian(y.year, y.month, y.day);
            if let Some(date) = yahrzeit::yahrzeit_date(death, year) {
                if in_range(date.abs()) {
                    events.push(Event::new(
                        date,
                        EventFlags::USER_EVENT,
                        EventDetail::Yahrzeit { description: y.description.clone() },
                    ));
                }
            }
        }
    }

    daily_events(opts, start_abs, end_abs, &mut events)?;

    if opts.candle_lighting {
        candle_events(opts, start_abs, end_abs, &mut events);
    }

    if opts.add_hebrew_dates || opts.add_hebrew_dates_for_events {
        let with_events: HashSet<i64> = events.iter().map(|e| e.date.abs()).collect();
        for abs in start_abs..=end_abs {
            if opts.add_hebrew_dates || with_events.contains(&abs) {
                events.push(Event::new(
                    HDate::from_abs(abs),
                    EventFlags::HEBREW_DATE,
                    EventDetail::HebrewDate,
                ));
            }
        }
    }

    events.sort_by_key(|e| (e.date.abs(), rank(&e.detail)));
    let mut seen = HashSet::new();
    events.retain(|e| seen.insert((e.date.abs(), e.basename())));

    log::debug!(
        "generated {} events over {} days",
        events.len(),
        end_abs - start_abs + 1
    );
    Ok(events)
}

fn validate(opts: &CalOptions) -> Result<(), CalError> {
    if opts.start.is_some() != opts.end.is_some() {
        return Err(CalError::IncompatibleOptions(
            "start and end must be given together".into(),
        ));
    }
    if let (Some(s), Some(e)) = (&opts.start, &opts.end) {
        if s.abs() > e.abs() {
            return Err(CalError::IncompatibleOptions("start is after end".into()));
        }
    }
    if opts.start.is_none() && opts.year.is_none() {
        return Err(CalError::IncompatibleOptions(
            "either a year or an explicit range is required".into(),
        ));
    }
    if opts.num_years == 0 {
        return Err(CalError::IncompatibleOptions("years must be at least 1".into()));
    }
    if opts.num_years > 1 && opts.start.is_some() {
        return Err(CalError::IncompatibleOptions(
            "multi-year option works only with entire-year calendars".into(),
        ));
    }
    if opts.havdalah_mins.is_some() && opts.havdalah_deg.is_some() {
        return Err(CalError::IncompatibleOptions(
            "havdalah minutes and degrees are mutually exclusive".into(),
        ));
    }
    if (opts.candle_lighting || opts.sunrise_sunset || opts.daily_zmanim)
        && opts.location.is_none()
    {
        return Err(CalError::IncompatibleOptions(
            "solar times require a location".into(),
        ));
    }
    Ok(())
}

fn resolve_range(opts: &CalOptions) -> Result<(i64, i64), CalError> {
    if let (Some(s), Some(e)) = (&opts.start, &opts.end) {
        return Ok((s.abs(), e.abs()));
    }
    let year = opts.year.expect("validated");
    if opts.is_hebrew_year {
        if year < 1 {
            return Err(CalError::OutOfRange(format!("Hebrew year {year}")));
        }
        let start = HDate::new(year, HMonth::Tishrei, 1)?.abs();
        let end = HDate::new(year + opts.num_years as i32, HMonth::Tishrei, 1)?.abs() - 1;
        Ok((start, end))
    } else {
        if year < 1 {
            return Err(CalError::OutOfRange(format!("Gregorian year {year}")));
        }
        Ok((
            greg::to_abs(year, 1, 1),
            greg::to_abs(year + opts.num_years as i32 - 1, 12, 31),
        ))
    }
}

fn flag_mask(opts: &CalOptions) -> EventFlags {
    use EventFlags as F;

    let mut mask = F::NONE;
    if !opts.no_holidays {
        mask |= F::CHAG
            | F::LIGHT_CANDLES
            | F::YOM_TOV_ENDS
            | F::CH_M
            | F::EREV
            | F::MINOR_HOLIDAY
            | F::MODERN_HOLIDAY
            | F::SPECIAL_SHABBAT
            | F::MAJOR_FAST
            | F::MINOR_FAST
            | F::ROSH_CHODESH
            | F::SHABBAT_MEVARCHIM;
    }
    if opts.no_rosh_chodesh {
        mask.0 &= !(F::ROSH_CHODESH.0 | F::SHABBAT_MEVARCHIM.0);
    }
    if opts.no_modern {
        mask.0 &= !F::MODERN_HOLIDAY.0;
    }
    if opts.no_minor_fast {
        mask.0 &= !F::MINOR_FAST.0;
    }
    if opts.no_special_shabbat {
        mask.0 &= !F::SPECIAL_SHABBAT.0;
    }
    mask
}

/// Per-day producers: learning cycles, daily sedra, zmanim.
fn daily_events(
    opts: &CalOptions,
    start_abs: i64,
    end_abs: i64,
    events: &mut Vec<Event>,
) -> Result<(), CalError> {
    let any_daily = opts.daf_yomi
        || opts.mishna_yomi
        || opts.nach_yomi
        || opts.daily_sedra
        || opts.sunrise_sunset
        || opts.daily_zmanim;
    if !any_daily {
        return Ok(());
    }

    let start_dow = start_abs.rem_euclid(7);
    let mut sedra_cache: HashMap<i32, Sedra> = HashMap::new();

    for abs in start_abs..=end_abs {
        // weekly view shows recurring dailies once, on the opening weekday
        if opts.weekly_abbreviated && abs.rem_euclid(7) != start_dow {
            continue;
        }
        let hd = HDate::from_abs(abs);
        if opts.daf_yomi {
            let daf = dafyomi::lookup(hd)?;
            events.push(Event::new(hd, EventFlags::DAF_YOMI, EventDetail::DafYomi(daf)));
        }
        if opts.mishna_yomi {
            let pair = mishnayomi::lookup(hd)?;
            events.push(Event::new(hd, EventFlags::MISHNA_YOMI, EventDetail::MishnaYomi(pair)));
        }
        if opts.nach_yomi {
            let ch = nachyomi::lookup(hd)?;
            events.push(Event::new(hd, EventFlags::NACH_YOMI, EventDetail::NachYomi(ch)));
        }
        if opts.daily_sedra {
            let sedra = sedra_cache
                .entry(hd.year())
                .or_insert_with(|| Sedra::new(hd.year(), opts.il));
            if let Some(reading) = sedra.lookup(abs) {
                events.push(Event::new(
                    hd,
                    EventFlags::PARSHA_HASHAVUA,
                    EventDetail::Parsha { reading },
                ));
            }
        }
        if opts.sunrise_sunset || opts.daily_zmanim {
            zmanim_events(opts, hd, events);
        }
    }
    Ok(())
}

fn zmanim_events(opts: &CalOptions, hd: HDate, events: &mut Vec<Event>) {
    let location = opts.location.as_ref().expect("validated");
    let z = Zmanim::new(location, hd.date());
    let mut push = |name: &'static str, time: Option<DateTime<Tz>>| {
        if let Some(time) = time {
            events.push(Event::new(
                hd,
                EventFlags::ZMANIM,
                EventDetail::Zman { name, time, hour24: opts.hour24 },
            ));
        }
    };

    if opts.daily_zmanim {
        push("Alot HaShachar", z.alot_hashachar());
        push("Misheyakir", z.misheyakir());
        push("Misheyakir Machmir", z.misheyakir_machmir());
        push("Sunrise", z.sunrise());
        push("Sof Zman Shma (MGA)", z.sof_zman_shma_mga());
        push("Sof Zman Shma (GRA)", z.sof_zman_shma());
        push("Sof Zman Tfilla (MGA)", z.sof_zman_tfilla_mga());
        push("Sof Zman Tfilla (GRA)", z.sof_zman_tfilla());
        push("Chatzot HaYom", z.chatzot());
        push("Mincha Gedola", z.mincha_gedola());
        push("Mincha Ketana", z.mincha_ketana());
        push("Plag HaMincha", z.plag_hamincha());
        push("Sunset", z.sunset());
        push("Tzeit HaKochavim", z.tzeit(0.0));
    } else {
        push("Sunrise", z.sunrise());
        push("Sunset", z.sunset());
    }
}

/// Candle-lighting and Havdalah synthesis from the day's aggregate flags.
fn candle_events(opts: &CalOptions, start_abs: i64, end_abs: i64, events: &mut Vec<Event>) {
    let location = opts.location.as_ref().expect("validated");

    let mut day_flags: HashMap<i64, EventFlags> = HashMap::new();
    for e in events.iter() {
        *day_flags.entry(e.date.abs()).or_default() |= e.flags;
    }

    let havdalah_mins = match (opts.havdalah_mins, opts.havdalah_deg) {
        (Some(m), _) => Some(m),
        (None, Some(_)) => None,
        (None, None) => Some(72),
    };

    for abs in start_abs..=end_abs {
        let flags = day_flags.get(&abs).copied().unwrap_or_default();
        let dow = abs.rem_euclid(7);
        let hd = HDate::from_abs(abs);
        let z = Zmanim::new(location, hd.date());

        let nightfall = |z: &Zmanim| match (havdalah_mins, opts.havdalah_deg) {
            (Some(m), _) => z.sunset_offset(i64::from(m), true),
            (None, Some(deg)) => z.tzeit(deg),
            (None, None) => unreachable!(),
        };

        if flags.intersects(EventFlags::LIGHT_CANDLES) || dow == FRI {
            // a festival night after Shabbat or after a first festival day
            // lights from an existing flame once the day has ended; Friday
            // always lights before sunset
            let after_dark = dow != FRI && (dow == SAT || flags.intersects(EventFlags::CHAG));
            let time = if after_dark {
                nightfall(&z)
            } else {
                z.sunset_offset(-i64::from(opts.candle_lighting_mins), true)
            };
            if let Some(time) = time {
                events.push(Event::new(
                    hd,
                    EventFlags::CANDLES | EventFlags::LIGHT_CANDLES,
                    EventDetail::Candles { time, hour24: opts.hour24 },
                ));
            }
        } else if flags.intersects(EventFlags::YOM_TOV_ENDS) || dow == SAT {
            if let Some(time) = nightfall(&z) {
                events.push(Event::new(
                    hd,
                    EventFlags::HAVDALAH | EventFlags::YOM_TOV_ENDS,
                    EventDetail::Havdalah { time, mins: havdalah_mins, hour24: opts.hour24 },
                ));
            }
        }
    }
}
