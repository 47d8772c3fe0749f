// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

#![allow(unused_crate_dependencies)]

use cli_utils::logging;
use cli_utils::BoxResult;
use rdfvocab_vocabgen::{cli, generate};
use tracing::metadata::LevelFilter;

fn main() -> BoxResult<()> {
    let log_reload_handle = logging::setup(clap::crate_name!())?;

    let cli::Args {
        quiet,
        verbose,
        config,
    } = cli::parse();

    let log_level = match (verbose, quiet) {
        (true, _) => LevelFilter::DEBUG,
        (false, true) => LevelFilter::WARN,
        (false, false) => LevelFilter::INFO,
    };
    logging::set_log_level_tracing(&log_reload_handle, log_level)?;

    tracing::debug!(
        "Generating {} vocabulary module(s) into '{}'",
        config.ontologies.len(),
        config.out_dir.display()
    );
    generate(&config)?;

    Ok(())
}
