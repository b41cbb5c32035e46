// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Errors surfaced by the calendar core.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum CalError {
    /// Date outside the supported domain: before an epoch, a day beyond the
    /// month length, or a solar altitude with no solution requested as a hard
    /// value.
    OutOfRange(String),

    /// Malformed line in a user-event or yahrzeit file.
    Parse { line: usize, msg: String },

    /// Hebrew month name that matches nothing.
    UnknownMonth(String),

    /// City missing from the built-in table.
    UnknownCity(String),

    /// Locale missing from the translation tables.
    UnknownLocale(String),

    /// Latitude or longitude outside its legal interval.
    InvalidCoordinate(String),

    /// Timezone identifier the host tzdb cannot resolve.
    TimezoneLoadFailed(String),

    /// Options that contradict each other.
    IncompatibleOptions(String),
}

impl fmt::Display for CalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(msg) => write!(f, "out of range: {msg}"),
            Self::Parse { line, msg } => write!(f, "parse error on line {line}: {msg}"),
            Self::UnknownMonth(name) => write!(f, "unknown Hebrew month: {name}"),
            Self::UnknownCity(name) => write!(f, "unknown city: {name}"),
            Self::UnknownLocale(name) => write!(f, "unknown locale: {name}"),
            Self::InvalidCoordinate(msg) => write!(f, "invalid coordinate: {msg}"),
            Self::TimezoneLoadFailed(tzid) => write!(f, "cannot load timezone: {tzid}"),
            Self::IncompatibleOptions(msg) => write!(f, "incompatible options: {msg}"),
        }
    }
}

impl std::error::Error for CalError {}
