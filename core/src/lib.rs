// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Hebrew calendar computation: fixed-date arithmetic, the holiday rule
//! table, weekly Torah readings, daily learning cycles, solar times and the
//! event-stream generator that ties them together.

#![warn(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro
)]

mod calendar;
mod error;
mod event;
mod gematriya;
mod holidays;
mod molad;
mod yahrzeit;

pub mod dafyomi;
pub mod greg;
pub mod hdate;
pub mod locale;
pub mod location;
pub mod mishnayomi;
pub mod nachyomi;
pub mod omer;
pub mod sedra;
pub mod sun;
pub mod zmanim;

pub use crate::{
    calendar::{CalOptions, hebrew_calendar},
    error::CalError,
    event::{Event, EventDetail, EventFlags},
    gematriya::gematriya,
    hdate::{HDate, HMonth},
    holidays::{holidays_for_year, shabbat_mevarchim, yom_kippur_katan},
    locale::Locale,
    location::{CITIES, Location, lookup_city},
    molad::Molad,
    yahrzeit::{UserEvent, Yahrzeit, user_event_date, yahrzeit_date},
};
