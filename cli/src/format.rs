// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Output-line formatting: Gregorian date prefix plus the rendered event.

use luach_core::{Event, Locale};

/// Gregorian date layout for the line prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// mm/dd/yyyy
    #[default]
    American,
    /// dd.mm.yyyy
    European,
    /// yyyy-mm-dd
    Iso,
}

/// How each output line is assembled.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub format: DateFormat,
    /// Tab between date and description instead of a space.
    pub tabs: bool,
    /// Prefix the three-letter weekday.
    pub weekday: bool,
    /// Two-digit years (American and European formats only).
    pub year_abbrev: bool,
    /// Drop the Gregorian date entirely (today-brief mode).
    pub no_greg: bool,
}

/// One line of calendar output.
#[must_use]
pub fn format_line(event: &Event, opts: &OutputOptions, lang: Locale) -> String {
    let mut line = String::new();
    if !opts.no_greg {
        let (year, month, day) = event.date.greg();
        match opts.format {
            DateFormat::Iso => {
                line.push_str(&format!("{year:04}-{month:02}-{day:02}"));
            }
            DateFormat::European => {
                line.push_str(&format!("{day}.{month}."));
                push_year(&mut line, year, opts.year_abbrev);
            }
            DateFormat::American => {
                line.push_str(&format!("{month}/{day}/"));
                push_year(&mut line, year, opts.year_abbrev);
            }
        }
        line.push(if opts.tabs { '\t' } else { ' ' });
    }
    if opts.weekday {
        let name = match event.date.weekday() {
            chrono::Weekday::Sun => "Sun",
            chrono::Weekday::Mon => "Mon",
            chrono::Weekday::Tue => "Tue",
            chrono::Weekday::Wed => "Wed",
            chrono::Weekday::Thu => "Thu",
            chrono::Weekday::Fri => "Fri",
            chrono::Weekday::Sat => "Sat",
        };
        line.push_str(name);
        line.push_str(", ");
    }
    line.push_str(&event.render(lang));
    line
}

fn push_year(line: &mut String, year: i32, abbrev: bool) {
    if abbrev {
        line.push_str(&format!("{:02}", year.rem_euclid(100)));
    } else {
        line.push_str(&year.to_string());
    }
}
