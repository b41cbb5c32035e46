// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for the luach calendar core.

#![warn(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro
)]

mod cli;
mod config;
mod format;
mod infile;
mod runner;

pub use crate::cli::{APP_NAME, Action, RunArgs, build_cli, from_matches};
pub use crate::config::Config;
pub use crate::format::{DateFormat, OutputOptions, format_line};
pub use crate::infile::{parse_user_events, parse_yahrzeits};
pub use crate::runner::run;
