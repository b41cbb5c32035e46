// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::process;

fn main() {
    env_logger::init();
    if let Err(e) = luach_cli::run() {
        eprintln!("{}: {e}", luach_cli::APP_NAME);
        process::exit(1);
    }
}
