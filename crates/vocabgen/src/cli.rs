// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command, ValueHint};
use const_format::formatcp;

use crate::config::{Config, TermOrder};

pub const A_S_VERSION: char = 'V';
pub const A_L_VERSION: &str = "version";
pub const A_S_QUIET: char = 'q';
pub const A_L_QUIET: &str = "quiet";
pub const A_S_VERBOSE: char = 'v';
pub const A_L_VERBOSE: &str = "verbose";
pub const A_S_FORCE: char = 'f';
pub const A_L_FORCE: &str = "force";
pub const A_S_HEADER: char = 'H';
pub const A_L_HEADER: &str = "header";
pub const A_S_OUT_DIR: char = 'O';
pub const A_L_OUT_DIR: &str = "output-directory";
pub const A_S_TERM_ORDER: char = 'o';
pub const A_L_TERM_ORDER: &str = "term-order";
pub const A_S_NAMESPACE_TERM: char = 'n';
pub const A_L_NAMESPACE_TERM: &str = "namespace-term";
pub const A_S_REGISTER_IN: char = 'r';
pub const A_L_REGISTER_IN: &str = "register-in";
pub const A_ONTOLOGIES: &str = "ontologies";

fn arg_version() -> Arg {
    Arg::new(A_L_VERSION)
        .help(formatcp!(
            "Print version information and exit. \
May be combined with -{A_S_QUIET},--{A_L_QUIET}, \
to only output the version string."
        ))
        .short(A_S_VERSION)
        .long(A_L_VERSION)
        .action(ArgAction::SetTrue)
}

fn arg_quiet() -> Arg {
    Arg::new(A_L_QUIET)
        .help("Only log warnings and errors")
        .action(ArgAction::SetTrue)
        .short(A_S_QUIET)
        .long(A_L_QUIET)
        .conflicts_with(A_L_VERBOSE)
}

fn arg_verbose() -> Arg {
    Arg::new(A_L_VERBOSE)
        .help("Also log debug messages")
        .short(A_S_VERBOSE)
        .long(A_L_VERBOSE)
        .action(ArgAction::SetTrue)
}

fn arg_force() -> Arg {
    Arg::new(A_L_FORCE)
        .help("Overwrite already existing vocabulary modules")
        .short(A_S_FORCE)
        .long(A_L_FORCE)
        .action(ArgAction::SetTrue)
}

fn arg_header() -> Arg {
    Arg::new(A_L_HEADER)
        .help("Text to put on top of each generated module, e.g. a license header")
        .short(A_S_HEADER)
        .long(A_L_HEADER)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Other)
        .value_name("TEXT")
}

fn arg_out_dir() -> Arg {
    Arg::new(A_L_OUT_DIR)
        .help("Directory to write the vocabulary modules to, one <prefix>.rs per ontology")
        .short(A_S_OUT_DIR)
        .long(A_L_OUT_DIR)
        .action(ArgAction::Set)
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::DirPath)
        .value_name("OUT_DIR")
        .required_unless_present(A_L_VERSION)
}

fn arg_term_order() -> Arg {
    Arg::new(A_L_TERM_ORDER)
        .help("Order of the terms in each module; dictionary codes follow it")
        .long_help(
            "Order of the terms in each module. \
Dictionary coders number the terms in this order, \
so use 'source' to reproduce the numbering of an existing term list: \
'name' sorts by local name, case-insensitively; \
'source' keeps the order in which the terms appear in the ontology file.",
        )
        .short(A_S_TERM_ORDER)
        .long(A_L_TERM_ORDER)
        .action(ArgAction::Set)
        .value_parser(TermOrder::NAMES)
        .default_value(TermOrder::NAMES[0])
        .value_name("ORDER")
}

fn arg_namespace_term() -> Arg {
    Arg::new(A_L_NAMESPACE_TERM)
        .help("Make the namespace IRI itself the first term of each vocabulary")
        .short(A_S_NAMESPACE_TERM)
        .long(A_L_NAMESPACE_TERM)
        .action(ArgAction::SetTrue)
}

fn arg_register_in() -> Arg {
    Arg::new(A_L_REGISTER_IN)
        .help("Declare each generated module in this Rust file, usually the vocab crates lib.rs")
        .short(A_S_REGISTER_IN)
        .long(A_L_REGISTER_IN)
        .action(ArgAction::Set)
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
        .value_name("LIB_RS")
}

fn arg_ontologies() -> Arg {
    Arg::new(A_ONTOLOGIES)
        .help("The ontology files; Turtle, unless the file extension says otherwise")
        .action(ArgAction::Set)
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
        .value_name("ONTOLOGY_FILE")
        .required_unless_present(A_L_VERSION)
        .num_args(1..)
}

#[must_use]
pub fn args_matcher() -> Command {
    command!()
        .about(clap::crate_description!())
        .bin_name(clap::crate_name!())
        .help_expected(true)
        .disable_version_flag(true)
        .arg(arg_version())
        .arg(arg_quiet())
        .arg(arg_verbose())
        .arg(arg_force())
        .arg(arg_header())
        .arg(arg_out_dir())
        .arg(arg_term_order())
        .arg(arg_namespace_term())
        .arg(arg_register_in())
        .arg(arg_ontologies())
}

#[allow(clippy::print_stdout)]
fn print_version_and_exit(quiet: bool) {
    if !quiet {
        print!("{} ", clap::crate_name!());
    }
    println!("{}", crate::VERSION);
    std::process::exit(0);
}

#[derive(Clone, Debug)]
pub struct Args {
    pub quiet: bool,
    pub verbose: bool,
    pub config: Config,
}

fn missing(arg: &str) -> clap::Error {
    args_matcher().error(
        ErrorKind::MissingRequiredArgument,
        format!("The argument '{arg}' is required"),
    )
}

/// Builds the generator configuration from parsed arguments.
///
/// # Errors
///
/// If the output directory or the ontology files are missing,
/// or the term order is unknown.
pub fn config_from(args: &ArgMatches) -> Result<Config, clap::Error> {
    let out_dir = args
        .get_one::<PathBuf>(A_L_OUT_DIR)
        .cloned()
        .ok_or_else(|| missing(A_L_OUT_DIR))?;
    let ontologies: Vec<PathBuf> = args
        .get_many::<PathBuf>(A_ONTOLOGIES)
        .ok_or_else(|| missing(A_ONTOLOGIES))?
        .cloned()
        .collect();
    let term_order = args
        .get_one::<String>(A_L_TERM_ORDER)
        .map(|order| order.parse::<TermOrder>())
        .transpose()
        .map_err(|err| args_matcher().error(ErrorKind::InvalidValue, err))?
        .unwrap_or_default();

    Ok(Config {
        ontologies,
        out_dir,
        header: args.get_one::<String>(A_L_HEADER).cloned(),
        force: args.get_flag(A_L_FORCE),
        term_order,
        namespace_term: args.get_flag(A_L_NAMESPACE_TERM),
        register_in: args.get_one::<PathBuf>(A_L_REGISTER_IN).cloned(),
    })
}

/// Parses the command line arguments.
/// Exits the process after printing the version,
/// or with a usage message if the arguments are invalid.
#[must_use]
pub fn parse() -> Args {
    let args = args_matcher().get_matches();

    let quiet = args.get_flag(A_L_QUIET);
    if args.get_flag(A_L_VERSION) {
        print_version_and_exit(quiet);
    }

    let config = config_from(&args).unwrap_or_else(|err| err.exit());

    Args {
        quiet,
        verbose: args.get_flag(A_L_VERBOSE),
        config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Result<Config, clap::Error> {
        let matches = args_matcher().try_get_matches_from(
            std::iter::once(clap::crate_name!()).chain(args.iter().copied()),
        )?;
        config_from(&matches)
    }

    #[test]
    fn command_is_consistent() {
        args_matcher().debug_assert();
    }

    #[test]
    fn defaults() {
        let config = config(&["-O", "out", "mo.ttl", "foaf.ttl"]).unwrap();
        assert_eq!(config.out_dir, PathBuf::from("out"));
        assert_eq!(
            config.ontologies,
            [PathBuf::from("mo.ttl"), PathBuf::from("foaf.ttl")]
        );
        assert_eq!(config.term_order, TermOrder::Name);
        assert!(!config.namespace_term);
        assert!(!config.force);
        assert!(config.header.is_none());
        assert!(config.register_in.is_none());
    }

    #[test]
    fn dictionary_compatible_generation() {
        let config = config(&[
            "--output-directory",
            "crates/vocab/src",
            "--term-order",
            "source",
            "--namespace-term",
            "--register-in",
            "crates/vocab/src/lib.rs",
            "-f",
            "mo.ttl",
        ])
        .unwrap();
        assert_eq!(config.term_order, TermOrder::Source);
        assert!(config.namespace_term);
        assert!(config.force);
        assert_eq!(
            config.register_in,
            Some(PathBuf::from("crates/vocab/src/lib.rs"))
        );
    }

    #[test]
    fn invalid_arguments() {
        let err = config(&["mo.ttl"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        let err = config(&["-O", "out", "-o", "random", "mo.ttl"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }
}
