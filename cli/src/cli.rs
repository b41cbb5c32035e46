// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, crate_version, value_parser};

use crate::format::{DateFormat, OutputOptions};

pub const APP_NAME: &str = "luach";

/// Everything read off the command line, before config-file merging.
#[derive(Debug)]
pub enum Action {
    /// Print the built-in city table.
    Cities,
    /// Emit shell completions.
    Completion(clap_complete::Shell),
    Run(Box<RunArgs>),
}

#[derive(Debug, Default)]
pub struct RunArgs {
    pub config: Option<PathBuf>,
    pub lang: Option<String>,
    pub output: OutputOptions,

    pub today: bool,
    pub today_brief: bool,
    pub positional: Vec<String>,
    pub num_years: u32,

    pub city: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub tzid: Option<String>,

    pub candle_lighting: bool,
    pub candle_mins: Option<u32>,
    pub havdalah_mins: Option<u32>,
    pub havdalah_deg: Option<f64>,

    pub is_hebrew_year: bool,
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
    pub molad: bool,
    pub sunrise_sunset: bool,
    pub daily_zmanim: bool,
    pub add_hebrew_dates: bool,
    pub add_hebrew_dates_for_events: bool,
    pub hour24: bool,
    pub weekly_abbreviated: bool,

    pub infile: Option<PathBuf>,
    pub yahrzeit_file: Option<PathBuf>,
}

pub fn build_cli() -> Command {
    fn flag(name: &'static str, help: &'static str) -> Arg {
        Arg::new(name).long(name).action(ArgAction::SetTrue).help(help)
    }
    fn value(name: &'static str, value_name: &'static str, help: &'static str) -> Arg {
        Arg::new(name).long(name).value_name(value_name).help(help)
    }

    Command::new(APP_NAME)
        .about("A Hebrew calendar generator: holidays, sedrot, zmanim and more")
        .version(crate_version!())
        // -h belongs to --no-holidays, as it always has
        .disable_help_flag(true)
        .arg(Arg::new("help").long("help").action(ArgAction::Help).help("Print help"))
        .arg(
            value("config", "FILE", "Path to the configuration file")
                .long_help(
                    "Path to the configuration file. Defaults to \
                     $XDG_CONFIG_HOME/luach/config.toml; overridable with the \
                     LUACH_CONFIG environment variable.",
                )
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(flag("ashkenazi", "Use Ashkenazi Hebrew transliterations").short('a'))
        .arg(flag("hebrew", "Use Hebrew titles").short('8'))
        .arg(
            value("lang", "LANG", "Output language (en, he, ashkenazi, translit)")
                .conflicts_with_all(["ashkenazi", "hebrew"]),
        )
        .arg(flag("euro-dates", "Output 'European' dates -- DD.MM.YYYY").short('e'))
        .arg(flag("iso-8601", "Output ISO 8601 dates -- YYYY-MM-DD").short('g'))
        .arg(flag("tabs", "Tab delineated format").short('r'))
        .arg(flag("weekday", "Add day of the week").short('w'))
        .arg(flag("year-abbrev", "Print only last two digits of year").short('y'))
        .arg(flag("24hour", "Output 24-hour times (e.g. 18:37 instead of 6:37)").short('E'))
        .arg(flag("today", "Only output for today's date").short('t'))
        .arg(flag("today-brief", "Print today's pertinent information").short('T'))
        .arg(
            value("city", "CITY", "City for candle-lighting")
                .short('C')
                .long_help("City for candle-lighting; see `luach cities` for the list."),
        )
        .arg(
            value("latitude", "LATITUDE", "Set the latitude for solar calculations")
                .short('l')
                .long_help("Latitude as degrees,minutes; negative degrees are south."),
        )
        .arg(
            value("longitude", "LONGITUDE", "Set the longitude for solar calculations")
                .short('L')
                .long_help("Longitude as degrees,minutes; positive degrees are west."),
        )
        .arg(value("timezone", "TIMEZONE", "Use specified timezone, overriding the -C switch").short('z'))
        .arg(flag("candlelighting", "Print candle-lighting times").short('c'))
        .arg(
            value("candle-mins", "MINUTES", "Set candle-lighting to occur this many minutes before sundown")
                .short('b')
                .value_parser(value_parser!(u32)),
        )
        .arg(
            value("havdalah-mins", "MINUTES", "Set Havdalah to occur this many minutes after sundown")
                .short('m')
                .value_parser(value_parser!(u32)),
        )
        .arg(
            value("havdalah-deg", "DEGREES", "Set Havdalah to occur when the sun is this many degrees below the horizon")
                .value_parser(value_parser!(f64)),
        )
        .arg(flag("sunrise-and-sunset", "Output sunrise and sunset times every day").short('O'))
        .arg(flag("zmanim", "Output zemanim every day").short('Z'))
        .arg(flag("molad", "Print the molad on Shabbat Mevorchim").short('M'))
        .arg(flag("abbrev", "Weekly view: Omer, daf yomi and zemanim shown once a week").short('W'))
        .arg(flag("add-hebrew-dates", "Print the Hebrew date for the entire date range").short('d'))
        .arg(flag("add-hebrew-dates-for-events", "Print the Hebrew date for dates with some event").short('D'))
        .arg(flag("hebrew-date", "Use Hebrew date ranges - only needed e.g. luach -H 5783").short('H'))
        .arg(flag("daf-yomi", "Output the Daf Yomi for the entire date range").short('F'))
        .arg(flag("mishna-yomi", "Output the Mishna Yomi for the entire date range"))
        .arg(flag("nach-yomi", "Output the Nach Yomi for the entire date range"))
        .arg(flag("no-holidays", "Suppress default holidays").short('h'))
        .arg(flag("no-rosh-chodesh", "Suppress Rosh Chodesh").short('x'))
        .arg(flag("israeli", "Israeli holiday and sedra schedule").short('i'))
        .arg(flag("no-modern", "Suppress modern holidays"))
        .arg(flag("no-minor-fast", "Suppress minor fasts"))
        .arg(flag("no-special-shabbat", "Suppress special Shabbatot"))
        .arg(flag("yom-kippur-katan", "Add Yom Kippur Katan on erev Rosh Chodesh"))
        .arg(flag("omer", "Add days of the Omer").short('o'))
        .arg(flag("sedrot", "Add the weekly sedra to the output on Saturdays").short('s'))
        .arg(flag("daily-sedra", "Add the weekly sedra to the output every day").short('S'))
        .arg(
            value("years", "N", "Generate events for N years (default 1)")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            value("infile", "FILENAME", "Read extra events from file")
                .short('I')
                .long_help(
                    "Read extra events from file, one per line in the format\n    \
                     MMMM DD Description\nwhere MMMM is a Hebrew month name and DD a \
                     day from 1 to 30. These events are printed regardless of the -h \
                     suppress-holidays switch.",
                )
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            value("yahrtzeit", "FILENAME", "Read a table of yahrtzeit dates from file")
                .short('Y')
                .long_help(
                    "Read a table of yahrtzeit dates from file, one per line in the \
                     format\n    MM DD YYYY Description\nwhere MM DD YYYY is the \
                     Gregorian date of death. These events are printed regardless of \
                     the -h suppress-holidays switch.",
                )
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            value("completion", "SHELL", "Generate shell completion script")
                .hide(true)
                .value_parser(value_parser!(clap_complete::Shell)),
        )
        .arg(
            Arg::new("args")
                .help("[[ month [ day ]] year] or the word 'cities'")
                .num_args(0..=3),
        )
}

/// Builds the parsed action from clap's matches.
pub fn from_matches(matches: &ArgMatches) -> Action {
    if let Some(shell) = matches.get_one::<clap_complete::Shell>("completion") {
        return Action::Completion(*shell);
    }

    let positional: Vec<String> = matches
        .get_many::<String>("args")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    if positional.first().map(String::as_str) == Some("cities") {
        return Action::Cities;
    }

    let lang = if matches.get_flag("ashkenazi") {
        Some("ashkenazi".to_string())
    } else if matches.get_flag("hebrew") {
        Some("he".to_string())
    } else {
        matches.get_one::<String>("lang").cloned()
    };

    let format = if matches.get_flag("iso-8601") {
        DateFormat::Iso
    } else if matches.get_flag("euro-dates") {
        DateFormat::European
    } else {
        DateFormat::American
    };

    let today_brief = matches.get_flag("today-brief");
    let output = OutputOptions {
        format,
        tabs: matches.get_flag("tabs"),
        weekday: matches.get_flag("weekday"),
        year_abbrev: matches.get_flag("year-abbrev"),
        no_greg: today_brief,
    };

    Action::Run(Box::new(RunArgs {
        config: matches.get_one::<PathBuf>("config").cloned(),
        lang,
        output,
        today: matches.get_flag("today") || today_brief,
        today_brief,
        positional,
        num_years: matches.get_one::<u32>("years").copied().unwrap_or(1),
        city: matches.get_one::<String>("city").cloned(),
        latitude: matches.get_one::<String>("latitude").cloned(),
        longitude: matches.get_one::<String>("longitude").cloned(),
        tzid: matches.get_one::<String>("timezone").cloned(),
        candle_lighting: matches.get_flag("candlelighting"),
        candle_mins: matches.get_one::<u32>("candle-mins").copied(),
        havdalah_mins: matches.get_one::<u32>("havdalah-mins").copied(),
        havdalah_deg: matches.get_one::<f64>("havdalah-deg").copied(),
        is_hebrew_year: matches.get_flag("hebrew-date"),
        il: matches.get_flag("israeli"),
        no_holidays: matches.get_flag("no-holidays"),
        no_rosh_chodesh: matches.get_flag("no-rosh-chodesh"),
        no_modern: matches.get_flag("no-modern"),
        no_minor_fast: matches.get_flag("no-minor-fast"),
        no_special_shabbat: matches.get_flag("no-special-shabbat"),
        omer: matches.get_flag("omer"),
        sedrot: matches.get_flag("sedrot"),
        daily_sedra: matches.get_flag("daily-sedra"),
        daf_yomi: matches.get_flag("daf-yomi"),
        mishna_yomi: matches.get_flag("mishna-yomi"),
        nach_yomi: matches.get_flag("nach-yomi"),
        yom_kippur_katan: matches.get_flag("yom-kippur-katan"),
        molad: matches.get_flag("molad"),
        sunrise_sunset: matches.get_flag("sunrise-and-sunset"),
        daily_zmanim: matches.get_flag("zmanim"),
        add_hebrew_dates: matches.get_flag("add-hebrew-dates"),
        add_hebrew_dates_for_events: matches.get_flag("add-hebrew-dates-for-events"),
        hour24: matches.get_flag("24hour"),
        weekly_abbreviated: matches.get_flag("abbrev"),
        infile: matches.get_one::<PathBuf>("infile").cloned(),
        yahrzeit_file: matches.get_one::<PathBuf>("yahrtzeit").cloned(),
    }))
}
