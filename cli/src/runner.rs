// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Glue between the parsed command line, the config file and the core
//! generator.

use std::error::Error;
use std::io::{self, Write};

use chrono::Datelike;
use luach_core::{
    CalError, CalOptions, HDate, HMonth, Locale, Location, hebrew_calendar, lookup_city,
};

use crate::cli::{APP_NAME, Action, RunArgs, build_cli, from_matches};
use crate::config::Config;
use crate::format::format_line;
use crate::infile::{parse_user_events, parse_yahrzeits};

const CITY_ENV: &str = "LUACH_CITY";
const DEFAULT_CITY: &str = "New York";

/// Entry point behind `main`; returns the process outcome.
pub fn run() -> Result<(), Box<dyn Error>> {
    let matches = build_cli().get_matches();
    match from_matches(&matches) {
        Action::Cities => {
            let mut out = io::stdout().lock();
            for &(name, _, lat, lon, tzid) in luach_core::CITIES {
                writeln!(out, "{name} ({lat:.5} lat, {lon:.5} long, {tzid})")?;
            }
            Ok(())
        }
        Action::Completion(shell) => {
            clap_complete::generate(shell, &mut build_cli(), APP_NAME, &mut io::stdout());
            Ok(())
        }
        Action::Run(args) => run_calendar(*args),
    }
}

fn run_calendar(args: RunArgs) -> Result<(), Box<dyn Error>> {
    let config = Config::load(args.config.clone())?;

    let lang = match args.lang.as_deref().or(config.lang.as_deref()) {
        None => Locale::En,
        Some(name) => match Locale::parse(name) {
            Ok(locale) => locale,
            Err(e) => {
                // match the original's forgiving behavior
                eprintln!("{e}; using default");
                Locale::En
            }
        },
    };

    let mut opts = cal_options(&args, &config)?;

    if let Some(path) = &args.infile {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        opts.user_events = parse_user_events(&text)?;
    }
    if let Some(path) = &args.yahrzeit_file {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        opts.yahrzeits = parse_yahrzeits(&text)?;
    }

    let events = hebrew_calendar(&opts)?;
    let mut out = io::stdout().lock();
    for event in &events {
        writeln!(out, "{}", format_line(event, &args.output, lang))?;
    }
    Ok(())
}

fn cal_options(args: &RunArgs, config: &Config) -> Result<CalOptions, Box<dyn Error>> {
    let mut opts = CalOptions {
        il: args.il,
        no_holidays: args.no_holidays,
        no_rosh_chodesh: args.no_rosh_chodesh,
        no_modern: args.no_modern,
        no_minor_fast: args.no_minor_fast,
        no_special_shabbat: args.no_special_shabbat,
        omer: args.omer,
        sedrot: args.sedrot,
        daily_sedra: args.daily_sedra,
        daf_yomi: args.daf_yomi,
        mishna_yomi: args.mishna_yomi,
        nach_yomi: args.nach_yomi,
        yom_kippur_katan: args.yom_kippur_katan,
        molad: args.molad,
        sunrise_sunset: args.sunrise_sunset,
        daily_zmanim: args.daily_zmanim,
        add_hebrew_dates: args.add_hebrew_dates,
        add_hebrew_dates_for_events: args.add_hebrew_dates_for_events,
        hour24: args.hour24,
        weekly_abbreviated: args.weekly_abbreviated,
        is_hebrew_year: args.is_hebrew_year,
        num_years: args.num_years,
        candle_lighting: args.candle_lighting,
        candle_lighting_mins: args.candle_mins.or(config.candle_mins).unwrap_or(18),
        havdalah_deg: args.havdalah_deg,
        havdalah_mins: if args.havdalah_deg.is_some() {
            None
        } else {
            args.havdalah_mins.or(config.havdalah_mins)
        },
        ..CalOptions::default()
    };

    resolve_location(args, config, &mut opts)?;
    resolve_range(args, &mut opts)?;
    Ok(opts)
}

fn resolve_location(
    args: &RunArgs,
    config: &Config,
    opts: &mut CalOptions,
) -> Result<(), Box<dyn Error>> {
    if let Some(city) = &args.city {
        opts.location = Some(lookup_city(city).map_err(|_| {
            format!("unknown city: {city}. Use a nearby city or geographic coordinates.")
        })?);
        opts.candle_lighting = true;
    } else if let Ok(city) = std::env::var(CITY_ENV) {
        if let Ok(loc) = lookup_city(&city) {
            opts.location = Some(loc);
        }
    } else if let Some(city) = &config.city {
        opts.location = Some(lookup_city(city)?);
    }

    match (&args.latitude, &args.longitude) {
        (Some(lat), Some(lon)) => {
            let Some(tzid) = &args.tzid else {
                return Err("latitude and longitude requires -z/--timezone".into());
            };
            let latitude = parse_coordinate(lat, 90, "latitude")?;
            // the traditional convention: positive longitude degrees are west
            let longitude = -parse_coordinate(lon, 180, "longitude")?;
            opts.location = Some(Location::new("User Defined City", "", latitude, longitude, tzid)?);
            opts.candle_lighting = true;
        }
        (None, None) => {}
        _ => return Err("latitude and longitude must be given together".into()),
    }

    if opts.location.is_none()
        && (opts.candle_lighting || opts.sunrise_sunset || opts.daily_zmanim)
    {
        opts.location = Some(lookup_city(DEFAULT_CITY).expect("default city exists"));
    }
    Ok(())
}

/// "degrees,minutes" with the sign on the degrees.
fn parse_coordinate(s: &str, max_deg: i32, what: &str) -> Result<f64, CalError> {
    let err = || CalError::InvalidCoordinate(format!("unable to read {what} argument: {s}"));
    let (deg, min) = s.split_once(',').ok_or_else(err)?;
    let deg: i32 = deg.trim().parse().map_err(|_| err())?;
    let min: i32 = min.trim().parse().map_err(|_| err())?;
    if deg.abs() > max_deg || !(0..=60).contains(&min) {
        return Err(CalError::InvalidCoordinate(format!(
            "{what} argument out of range: {s}"
        )));
    }
    let fraction = f64::from(min) / 60.0;
    Ok(if deg < 0 {
        f64::from(deg) - fraction
    } else {
        f64::from(deg) + fraction
    })
}

fn resolve_range(args: &RunArgs, opts: &mut CalOptions) -> Result<(), Box<dyn Error>> {
    let today = chrono::Local::now().date_naive();

    if args.today {
        let hd = HDate::from_date(today);
        opts.add_hebrew_dates = true;
        opts.omer = true;
        opts.is_hebrew_year = false;
        opts.start = Some(hd);
        opts.end = Some(hd);
        return Ok(());
    }

    let (month_arg, day_arg, year_arg) = match args.positional.len() {
        0 => (None, None, None),
        1 => (None, None, Some(args.positional[0].as_str())),
        2 => (Some(args.positional[0].as_str()), None, Some(args.positional[1].as_str())),
        _ => (
            Some(args.positional[0].as_str()),
            Some(args.positional[1].as_str()),
            Some(args.positional[2].as_str()),
        ),
    };

    let year = match year_arg {
        None => {
            if opts.is_hebrew_year {
                HDate::from_date(today).year()
            } else {
                today.year()
            }
        }
        Some(s) => s
            .parse::<i32>()
            .map_err(|_| format!("unrecognized command '{s}'"))?,
    };
    if year < 1 || (opts.is_hebrew_year && year < 3761) {
        return Err(format!("sorry, {APP_NAME} can only handle dates in the common era").into());
    }

    let day_arg = match day_arg {
        None => None,
        Some(s) => Some(s.parse::<u32>().map_err(|_| format!("invalid day '{s}'"))?),
    };

    let Some(month_arg) = month_arg else {
        opts.year = Some(year);
        return Ok(());
    };

    // a numeric month is Gregorian; a name selects a Hebrew month and
    // switches the whole range to Hebrew years
    match month_arg.parse::<u32>() {
        Ok(gm) => {
            if opts.is_hebrew_year {
                return Err("don't use numbers to specify Hebrew months".into());
            }
            if !(1..=12).contains(&gm) {
                return Err(format!("invalid month '{month_arg}'").into());
            }
            let (start, end) = match day_arg {
                Some(day) => {
                    let hd = greg_date(year, gm, day)?;
                    opts.add_hebrew_dates = true;
                    (hd, hd)
                }
                None => (
                    HDate::from_gregorian(year, gm, 1),
                    HDate::from_gregorian(year, gm, luach_core::greg::days_in_month(gm, year) as u32),
                ),
            };
            opts.start = Some(start);
            opts.end = Some(end);
        }
        Err(_) => {
            let hm = HMonth::from_name(month_arg)?;
            opts.is_hebrew_year = true;
            if year < 3761 {
                return Err(
                    format!("sorry, {APP_NAME} can only handle dates in the common era").into(),
                );
            }
            let (start, end) = match day_arg {
                Some(day) => {
                    let hd = HDate::new(year, hm, u8::try_from(day).map_err(|_| "invalid day")?)?;
                    opts.add_hebrew_dates = true;
                    (hd, hd)
                }
                None => {
                    let first = HDate::new(year, hm, 1)?;
                    let len = luach_core::hdate::days_in_month(first.month(), year);
                    (first, HDate::new(year, first.month(), len)?)
                }
            };
            opts.start = Some(start);
            opts.end = Some(end);
        }
    }
    Ok(())
}

fn greg_date(year: i32, month: u32, day: u32) -> Result<HDate, Box<dyn Error>> {
    if day == 0 || i64::from(day) > luach_core::greg::days_in_month(month, year) {
        return Err(format!("invalid Gregorian date {month}/{day}/{year}").into());
    }
    Ok(HDate::from_gregorian(year, month, day))
}
