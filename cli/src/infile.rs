// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Parsers for the two line-oriented input files: extra Hebrew-date events
//! and yahrzeit tables.

use luach_core::{CalError, HMonth, UserEvent, Yahrzeit};

/// `<HebrewMonthName> <Day> <Description>` per line; `#` comments and blank
/// lines ignored.
pub fn parse_user_events(input: &str) -> Result<Vec<UserEvent>, CalError> {
    let mut events = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let lineno = idx + 1;
        let mut parts = line.split_whitespace();
        let month = parts.next().unwrap_or_default();
        let day = parts.next().ok_or_else(|| CalError::Parse {
            line: lineno,
            msg: "expected <month> <day> <description>".into(),
        })?;
        let description = parts.collect::<Vec<_>>().join(" ");
        if description.is_empty() {
            return Err(CalError::Parse {
                line: lineno,
                msg: "missing description".into(),
            });
        }

        let month = HMonth::from_name(month).map_err(|e| CalError::Parse {
            line: lineno,
            msg: e.to_string(),
        })?;
        let day: u8 = day.parse().map_err(|_| CalError::Parse {
            line: lineno,
            msg: format!("invalid day: {day}"),
        })?;
        if day == 0 || day > 30 {
            return Err(CalError::Parse {
                line: lineno,
                msg: format!("day {day} out of range 1-30"),
            });
        }
        events.push(UserEvent { month, day, description });
    }
    Ok(events)
}

/// `<MM> <DD> <YYYY> <Description>` per line, the Gregorian death date.
pub fn parse_yahrzeits(input: &str) -> Result<Vec<Yahrzeit>, CalError> {
    let mut yahrzeits = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let lineno = idx + 1;
        let mut parts = line.split_whitespace();
        let fields: Vec<&str> = [parts.next(), parts.next(), parts.next()]
            .into_iter()
            .flatten()
            .collect();
        if fields.len() < 3 {
            return Err(CalError::Parse {
                line: lineno,
                msg: "expected <month> <day> <year> <description>".into(),
            });
        }
        let description = parts.collect::<Vec<_>>().join(" ");
        if description.is_empty() {
            return Err(CalError::Parse {
                line: lineno,
                msg: "missing description".into(),
            });
        }

        let parse_num = |s: &str, what: &str| -> Result<u32, CalError> {
            s.parse().map_err(|_| CalError::Parse {
                line: lineno,
                msg: format!("invalid {what}: {s}"),
            })
        };
        let month = parse_num(fields[0], "month")?;
        let day = parse_num(fields[1], "day")?;
        let year = parse_num(fields[2], "year")? as i32;
        if !(1..=12).contains(&month) || day == 0 || day > 31 || year < 1 {
            return Err(CalError::Parse {
                line: lineno,
                msg: format!("invalid Gregorian date {month}/{day}/{year}"),
            });
        }
        yahrzeits.push(Yahrzeit { year, month, day, description });
    }
    Ok(yahrzeits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_events_with_comments() {
        let input = "\
# family dates
Kislev 19 Yud Tes Kislev
Adar2 14 Purim seudah

Nisan 27 Grandmother's birthday
";
        let events = parse_user_events(input).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].month, HMonth::Kislev);
        assert_eq!(events[0].day, 19);
        assert_eq!(events[0].description, "Yud Tes Kislev");
        assert_eq!(events[1].month, HMonth::Adar2);
    }

    #[test]
    fn reports_line_number_for_bad_month() {
        let input = "Kislev 19 ok\nFrimaire 3 nope\n";
        match parse_user_events(input) {
            Err(CalError::Parse { line, msg }) => {
                assert_eq!(line, 2);
                assert!(msg.contains("Frimaire"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_user_event_without_description() {
        assert!(parse_user_events("Kislev 19\n").is_err());
        assert!(parse_user_events("Kislev\n").is_err());
    }

    #[test]
    fn parses_yahrzeit_lines() {
        let input = "12 17 1995 Grandfather\n6 4 2010 Aunt Sarah\n";
        let list = parse_yahrzeits(input).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].month, 12);
        assert_eq!(list[0].day, 17);
        assert_eq!(list[0].year, 1995);
        assert_eq!(list[1].description, "Aunt Sarah");
    }

    #[test]
    fn rejects_impossible_gregorian_dates() {
        match parse_yahrzeits("13 1 1990 x\n") {
            Err(CalError::Parse { line: 1, .. }) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(parse_yahrzeits("2 30 1990\n").is_err());
    }
}
